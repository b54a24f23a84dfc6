//! Error handling module for the arrayecho pipeline

use std::fmt;
use std::io;

/// Common error type used throughout the arrayecho pipeline
///
/// Every error is terminal for the single linear pipeline: nothing is
/// recovered or retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Size token missing, non-numeric, or not strictly positive
    InvalidSize(String),
    /// Input stream ended before the requested number of elements
    InsufficientInput {
        /// Number of elements the validated size asked for
        expected: usize,
        /// Number of elements actually read before the stream ended
        got: usize,
    },
    /// A token was present but does not parse as a 64-bit integer
    MalformedToken(String),
    /// Backing storage for the requested length could not be reserved
    OutOfMemory(u64),
    /// I/O error on the underlying stream
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize(msg) => write!(f, "invalid size: {}", msg),
            Error::InsufficientInput { expected, got } => {
                write!(f, "input ended after {} of {} elements", got, expected)
            }
            Error::MalformedToken(token) => write!(f, "not an integer: {:?}", token),
            Error::OutOfMemory(len) => {
                write!(f, "cannot reserve storage for {} elements", len)
            }
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;
