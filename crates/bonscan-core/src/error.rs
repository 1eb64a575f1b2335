//! Error types for the bonscan-core library.

use thiserror::Error;

/// Main error type for the bonscan library.
///
/// The extraction engine itself is total and reports missing fields as
/// `None`, never as errors; this type covers the surfaces around it.
#[derive(Error, Debug)]
pub enum BonscanError {
    /// A category label that is not one of the five known categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration file could not be read or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bonscan library.
pub type Result<T> = std::result::Result<T, BonscanError>;
