//! Error handling for the CLI application

use std::fmt;
use std::io;
use xorify_engine::XorError;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Wrong number of positional arguments
    Argument(String),
    /// An input or output resource could not be opened
    Open {
        /// Name of the resource as given on the command line
        resource: String,
        /// Underlying system error
        source: io::Error,
    },
    /// Configuration error
    Config(String),
    /// Read or write failure while streaming
    Processing(XorError),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Argument(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Argument(msg) => write!(f, "{msg}"),
            CliError::Open { resource, source } => write!(f, "{resource}: {source}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Processing(err) => write!(f, "Processing error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Open { source, .. } => Some(source),
            CliError::Processing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<XorError> for CliError {
    fn from(err: XorError) -> Self {
        CliError::Processing(err)
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
