//! Error types for mention_input.
//!
//! The caret and markup algorithms are total and never fail; errors only
//! arise at the configuration and output edges.

use std::fmt;
use std::io;

/// Result type alias for mention_input operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mention_input operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    Io(io::Error),
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// A known name that cannot be written as a token.
    InvalidName { name: String, reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidName { name, reason } => {
                write!(f, "invalid name {name:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
