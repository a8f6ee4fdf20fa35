//! Window state and page arithmetic shared by [`PageWindow`](crate::PageWindow) and its
//! iterators.
//!
//! Nothing here validates sizes, callers pass `NonZeroUsize` values produced by
//! [`WindowConfig::validate`](crate::WindowConfig::validate).

pub mod view_pages;

pub use view_pages::{page_bounds, total_pages, ViewPages};
