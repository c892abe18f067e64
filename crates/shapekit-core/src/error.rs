//! Error handling for ShapeKit
//!
//! Errors raised by the core value types. Higher layers (document
//! persistence, settings) define their own error enums and convert from
//! this one where a core value is parsed.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ShapeKit core values
#[derive(Error, Debug)]
pub enum Error {
    /// A color string is not of the form `#rrggbb`
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },
}

impl Error {
    /// Check if this is a color parsing error
    pub fn is_color_error(&self) -> bool {
        matches!(self, Error::InvalidColor { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
