use std::fmt;

/// The only error a page window can produce. Navigation never fails, only configuration does.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// One of the [`WindowConfig`](crate::WindowConfig) sizes is zero.
    InvalidConfiguration { option: &'static str, value: usize },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::InvalidConfiguration { option, value } => {
                write!(f, "Invalid configuration: `{option}` must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for WindowError {}
