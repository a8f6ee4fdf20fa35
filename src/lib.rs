#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("doc/Main.md")]

pub mod config;
pub mod error;
pub mod source;
pub mod window;

#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub mod stream;

#[doc = include_str!("doc/prelude")]
pub mod prelude {
    pub use crate::{PageSource, PageWindow, WindowConfig, WindowError};
}

pub use crate::config::{WindowConfig, DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_WIDTH};
pub use crate::error::WindowError;
pub use crate::source::{PageSource, SourceItem};
pub use crate::window::{PageWindow, Windows};

mod internal;

#[cfg(test)]
mod test_utils;
