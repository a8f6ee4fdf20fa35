//! The page window itself. See [`PageWindow`].

use crate::internal::{page_bounds, total_pages, ViewPages};
use crate::{PageSource, SourceItem, WindowConfig, WindowError};
use std::num::NonZeroUsize;
use std::ops::{Range, RangeInclusive};

#[doc = include_str!("../doc/PageWindow")]
#[derive(Debug, Clone)]
pub struct PageWindow<S> {
    source: S,
    items_per_page: NonZeroUsize,
    window_width: NonZeroUsize,
    view_pages: ViewPages,
}

impl<S: PageSource> PageWindow<S> {
    /// Creates a window over `source` showing pages `1..=config.window_width`.
    pub fn new(source: S, config: WindowConfig) -> Result<Self, WindowError> {
        let (items_per_page, window_width) = config.validate()?;

        Ok(Self {
            source,
            items_per_page,
            window_width,
            view_pages: ViewPages::new(window_width),
        })
    }

    #[doc = include_str!("../doc/PageWindow__data")]
    pub fn data(&self) -> &[SourceItem<S>] {
        &self.source.items()[self.visible_range()]
    }

    /// Source indices covered by [`PageWindow::data`].
    pub fn visible_range(&self) -> Range<usize> {
        self.view_pages
            .bounds(self.items_per_page, self.source.items().len())
    }

    /// Page numbers together with their items, in window order. Pages past the end of the source
    /// yield empty slices.
    pub fn visible_pages(&self) -> impl '_ + Iterator<Item = (usize, &[SourceItem<S>])> {
        self.view_pages.range().map(move |page| (page, self.page(page)))
    }

    /// Items of a single 1-based `page`. Empty for page `0` and for pages past the end.
    pub fn page(&self, page: usize) -> &[SourceItem<S>] {
        let items = self.source.items();
        &items[page_bounds(page, self.items_per_page, items.len())]
    }

    /// `ceil(len / items_per_page)`, recomputed on every call.
    pub fn total_pages(&self) -> usize {
        total_pages(self.source.items().len(), self.items_per_page)
    }

    pub fn can_go_next(&self) -> bool {
        self.view_pages.can_shift_forward(self.total_pages())
    }

    pub fn can_go_back(&self) -> bool {
        self.view_pages.can_shift_backward()
    }

    #[doc = include_str!("../doc/PageWindow__go_next")]
    #[doc(alias = "advance")]
    pub fn go_next(&mut self) {
        if !self.can_go_next() {
            tracing::trace!(
                last_page = self.view_pages.last(),
                total_pages = self.total_pages(),
                "page window is already at the last page"
            );
            return;
        }

        self.view_pages.shift_forward();
        self.trace_moved();
    }

    #[doc = include_str!("../doc/PageWindow__go_back")]
    #[doc(alias = "retreat")]
    pub fn go_back(&mut self) {
        if !self.can_go_back() {
            tracing::trace!("page window is already at the first page");
            return;
        }

        self.view_pages.shift_backward();
        self.trace_moved();
    }

    /// Restores the initial window `1..=window_width`, unconditionally.
    pub fn reset(&mut self) {
        self.view_pages = ViewPages::new(self.window_width);
        self.trace_moved();
    }

    /// Iterates over successive [`PageWindow::data`] slices starting from the current window
    /// and moving forward one page at a time, the way [`PageWindow::go_next`] would. The window
    /// itself is left untouched.
    pub fn windows(&self) -> Windows<'_, S> {
        Windows {
            window: self,
            view_pages: Some(self.view_pages),
        }
    }

    /// Replaces the source collection. The current window is kept as is, derived values follow
    /// the new source.
    pub fn set_source(&mut self, source: S) {
        self.source = source;
    }

    /// Applies a new configuration. The page size takes effect immediately, a new window width
    /// is applied on the next [`PageWindow::reset`].
    pub fn reconfigure(&mut self, config: WindowConfig) -> Result<(), WindowError> {
        let (items_per_page, window_width) = config.validate()?;

        if window_width != self.view_pages.width() {
            tracing::debug!(
                current = self.view_pages.width().get(),
                next = window_width.get(),
                "window width change is deferred until reset"
            );
        }

        self.items_per_page = items_per_page;
        self.window_width = window_width;
        Ok(())
    }

    fn trace_moved(&self) {
        tracing::trace!(
            first_page = self.view_pages.first(),
            last_page = self.view_pages.last(),
            "page window moved"
        );
    }
}

impl<S> PageWindow<S> {
    /// Page numbers currently in the window.
    pub fn view_pages(&self) -> RangeInclusive<usize> {
        self.view_pages.range()
    }

    pub fn first_page(&self) -> usize {
        self.view_pages.first()
    }

    pub fn last_page(&self) -> usize {
        self.view_pages.last()
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// Width the window is reset to. It may differ from the length of
    /// [`PageWindow::view_pages`] after [`PageWindow::reconfigure`] until the next reset.
    pub fn window_width(&self) -> usize {
        self.window_width.get()
    }

    pub fn config(&self) -> WindowConfig {
        WindowConfig::new(self.items_per_page(), self.window_width())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: PageSource + Default> Default for PageWindow<S> {
    fn default() -> Self {
        let (items_per_page, window_width) = default_sizes();

        Self {
            source: S::default(),
            items_per_page,
            window_width,
            view_pages: ViewPages::new(window_width),
        }
    }
}

fn default_sizes() -> (NonZeroUsize, NonZeroUsize) {
    const ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(crate::DEFAULT_ITEMS_PER_PAGE) {
        Some(n) => n,
        None => panic!("default page size is positive"),
    };
    const WINDOW_WIDTH: NonZeroUsize = match NonZeroUsize::new(crate::DEFAULT_WINDOW_WIDTH) {
        Some(n) => n,
        None => panic!("default window width is positive"),
    };

    (ITEMS_PER_PAGE, WINDOW_WIDTH)
}

/// Iterator returned by [`PageWindow::windows`].
#[derive(Debug)]
pub struct Windows<'w, S> {
    window: &'w PageWindow<S>,
    view_pages: Option<ViewPages>,
}

impl<'w, S: PageSource> Iterator for Windows<'w, S> {
    type Item = &'w [SourceItem<S>];

    fn next(&mut self) -> Option<Self::Item> {
        let mut view_pages = self.view_pages.take()?;
        let items = self.window.source.items();
        let visible = &items[view_pages.bounds(self.window.items_per_page, items.len())];

        if view_pages.can_shift_forward(self.window.total_pages()) {
            view_pages.shift_forward();
            self.view_pages = Some(view_pages);
        }

        Some(visible)
    }
}

impl<S: PageSource> std::iter::FusedIterator for Windows<'_, S> {}
