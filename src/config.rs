use crate::WindowError;
use std::num::NonZeroUsize;

/// Page size used by [`WindowConfig::default`].
pub const DEFAULT_ITEMS_PER_PAGE: usize = 30;

/// Window width used by [`WindowConfig::default`].
pub const DEFAULT_WINDOW_WIDTH: usize = 2;

/// Sizes a [`PageWindow`](crate::PageWindow) is built with.
///
/// Both sizes must be positive, [`WindowConfig::validate`] rejects zeros with
/// [`WindowError::InvalidConfiguration`].
///
/// With the `serde` feature enabled missing fields take their defaults and the camelCase names
/// `itemsPerPage` and `storeAmountOfPages` are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowConfig {
    /// Amount of items on a single page.
    #[cfg_attr(feature = "serde", serde(alias = "itemsPerPage"))]
    pub items_per_page: usize,
    /// Amount of pages that are materialized simultaneously.
    #[cfg_attr(feature = "serde", serde(alias = "storeAmountOfPages"))]
    pub window_width: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl WindowConfig {
    pub fn new(items_per_page: usize, window_width: usize) -> Self {
        Self {
            items_per_page,
            window_width,
        }
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn window_width(mut self, window_width: usize) -> Self {
        self.window_width = window_width;
        self
    }

    /// Checks that both sizes are positive and returns them as `(items_per_page, window_width)`.
    pub fn validate(&self) -> Result<(NonZeroUsize, NonZeroUsize), WindowError> {
        let items_per_page = positive("items_per_page", self.items_per_page)?;
        let window_width = positive("window_width", self.window_width)?;
        Ok((items_per_page, window_width))
    }
}

fn positive(option: &'static str, value: usize) -> Result<NonZeroUsize, WindowError> {
    NonZeroUsize::new(value).ok_or_else(|| {
        tracing::debug!(option, value, "rejected page window configuration");
        WindowError::InvalidConfiguration { option, value }
    })
}
