use std::num::NonZeroUsize;
use std::ops::{Range, RangeInclusive};

/// A contiguous run of 1-based page numbers `[first, first + width)`.
///
/// Storing only the first page and the width keeps the run contiguous and of a fixed length no
/// matter how it is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPages {
    first: NonZeroUsize,
    width: NonZeroUsize,
}

impl ViewPages {
    /// `[1, 2, ..., width]`
    pub fn new(width: NonZeroUsize) -> Self {
        Self {
            first: NonZeroUsize::MIN,
            width,
        }
    }

    pub fn first(&self) -> usize {
        self.first.get()
    }

    pub fn last(&self) -> usize {
        // `first - 1` never overflows and the window only moves forward while `last` is below
        // the total amount of pages, so the sum stays in range.
        self.first.get() - 1 + self.width.get()
    }

    pub fn width(&self) -> NonZeroUsize {
        self.width
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.first()..=self.last()
    }

    pub fn can_shift_forward(&self, total_pages: usize) -> bool {
        self.last() < total_pages
    }

    pub fn can_shift_backward(&self) -> bool {
        self.first() > 1
    }

    pub fn shift_forward(&mut self) {
        self.first = self.first.saturating_add(1);
    }

    pub fn shift_backward(&mut self) {
        if let Some(first) = NonZeroUsize::new(self.first.get() - 1) {
            self.first = first;
        }
    }

    /// Source indices covered by the whole run, clamped to `len`.
    pub fn bounds(&self, items_per_page: NonZeroUsize, len: usize) -> Range<usize> {
        let start = page_bounds(self.first(), items_per_page, len).start;
        let end = self
            .last()
            .saturating_mul(items_per_page.get())
            .min(len);

        start..end
    }
}

/// `ceil(len / items_per_page)`, zero for an empty collection.
pub fn total_pages(len: usize, items_per_page: NonZeroUsize) -> usize {
    len.div_ceil(items_per_page.get())
}

/// Source indices of a single 1-based `page`, clamped to `len`. Page `0` and pages past the end
/// are empty.
pub fn page_bounds(page: usize, items_per_page: NonZeroUsize, len: usize) -> Range<usize> {
    let Some(index) = page.checked_sub(1) else {
        return 0..0;
    };

    let start = index.saturating_mul(items_per_page.get()).min(len);
    let end = start.saturating_add(items_per_page.get()).min(len);
    start..end
}
