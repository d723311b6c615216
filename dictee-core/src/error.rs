//! Core error types
//!
//! The comparison itself cannot fail; errors only come from rejecting
//! alignment options that would break the search bounds.

use thiserror::Error;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Mistake threshold is not a finite value in `[0, 1]`
    #[error("mistake threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Window too small to hold a duble
    #[error("window size must be at least 2, got {0}")]
    WindowTooSmall(usize),

    /// Lookahead bound of zero would disable realignment entirely
    #[error("max search must be greater than 0")]
    ZeroMaxSearch,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CoreError::InvalidThreshold(1.5).to_string(),
            "mistake threshold must be within [0, 1], got 1.5"
        );
        assert_eq!(
            CoreError::WindowTooSmall(1).to_string(),
            "window size must be at least 2, got 1"
        );
        assert_eq!(
            CoreError::ZeroMaxSearch.to_string(),
            "max search must be greater than 0"
        );
    }
}
