//! Error types for fluidsheet library.
//!
//! The clone and parse pipeline itself never fails. These errors belong to
//! the surfaces around it: reading CSS files, loading stored clones and
//! rendering output.

use std::io;
use thiserror::Error;

/// Result type alias for fluidsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around stylesheet processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored document clone could not be decoded.
    #[error("Invalid document clone: {0}")]
    InvalidClone(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The configured baseline width is unusable.
    #[error("Invalid baseline width: {0}px")]
    InvalidBaseline(u32),
}
