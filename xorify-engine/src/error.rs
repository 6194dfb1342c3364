//! Engine error types

use std::fmt;
use std::io;
use thiserror::Error;

/// One of the two input streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first input (`A`)
    First,
    /// The second input (`B`)
    Second,
}

impl Side {
    /// The other input
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first input"),
            Side::Second => write!(f, "second input"),
        }
    }
}

/// Failures raised while streaming
///
/// End-of-data is never an error; these only carry genuine I/O failures.
#[derive(Error, Debug)]
pub enum XorError {
    /// Reading one of the inputs failed
    #[error("read error on {side}: {source}")]
    Read {
        /// The input that failed
        side: Side,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output failed; the output is incomplete
    #[error("write error on output: {source}")]
    Write {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl XorError {
    /// The input that failed, if this is a read failure
    pub fn side(&self) -> Option<Side> {
        match self {
            XorError::Read { side, .. } => Some(*side),
            XorError::Write { .. } => None,
        }
    }

    /// Kind of the underlying I/O error
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            XorError::Read { source, .. } | XorError::Write { source } => source.kind(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, XorError>;
