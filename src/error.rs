//! Error types for the TableFilter crate.

use std::fmt;

/// The result type used throughout TableFilter.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for filter index operations.
///
/// Corruption on the query path is never surfaced through this type: the
/// reader resolves it to "maybe present" instead. `Error` covers the
/// remaining fallible surfaces, such as option validation and internal
/// footer parsing.
#[derive(Debug)]
pub enum Error {
    /// Data corruption was detected.
    Corruption(String),

    /// An invalid argument was provided.
    InvalidArgument(String),
}

impl Error {
    /// Creates a new corruption error.
    pub fn corruption(msg: impl Into<String>) -> Self {
        Error::Corruption(msg.into())
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Corruption(msg) => write!(f, "Data corruption: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
