//! Output targets

use crate::error::CliError;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the XOR stream goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A named file, created or truncated
    File(PathBuf),
    /// Standard output
    Stdout,
}

impl OutputTarget {
    /// Name used in diagnostics
    pub fn display_name(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "<stdout>".to_string(),
        }
    }

    /// Open the target for writing
    ///
    /// The handle is unbuffered: the engine writes whole chunks, and nothing
    /// it wrote can reach the output after it has failed.
    pub fn open(&self) -> Result<Box<dyn Write>, CliError> {
        match self {
            OutputTarget::File(path) => {
                let file = File::create(path).map_err(|source| CliError::Open {
                    resource: self.display_name(),
                    source,
                })?;
                log::info!("{}: Successfully opened for writing.", path.display());
                Ok(Box::new(file))
            }
            OutputTarget::Stdout => {
                log::info!("OUT_FILE not provided, using stdout.");
                Ok(Box::new(io::stdout().lock()))
            }
        }
    }
}
