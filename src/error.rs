//! Error types for the Polysift library.
//!
//! All errors are represented by the [`PolysiftError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use polysift::error::{PolysiftError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolysiftError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Polysift operations.
///
/// This enum represents all possible errors that can occur in the Polysift
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum PolysiftError {
    /// I/O errors (file operations, directory listing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Synonym graph errors (loading, expansion)
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Document parse errors (malformed HTML, empty input, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Corpus filtering errors
    #[error("Filter error: {0}")]
    Filter(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PolysiftError.
pub type Result<T> = std::result::Result<T, PolysiftError>;

impl PolysiftError {
    /// Create a new synonym error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Synonym(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Parse(msg.into())
    }

    /// Create a new filter error.
    pub fn filter<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Filter(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PolysiftError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PolysiftError::synonym("Test synonym error");
        assert_eq!(error.to_string(), "Synonym error: Test synonym error");

        let error = PolysiftError::parse("Test parse error");
        assert_eq!(error.to_string(), "Parse error: Test parse error");

        let error = PolysiftError::filter("Test filter error");
        assert_eq!(error.to_string(), "Filter error: Test filter error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let polysift_error = PolysiftError::from(io_error);

        match polysift_error {
            PolysiftError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
