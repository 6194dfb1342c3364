//! Input sources

use crate::error::CliError;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

/// Where an input stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A named file
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Name used in diagnostics
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Open the source for reading
    ///
    /// The handle closes when dropped.
    pub fn open(&self) -> Result<Box<dyn Read>, CliError> {
        match self {
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| CliError::Open {
                    resource: self.display_name(),
                    source,
                })?;
                log::info!("{}: Successfully opened for reading.", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Stdin => {
                log::info!("IN_FILE_1 not provided, using stdin.");
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_reads_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.bin");
        fs::write(&path, [0x00u8, 0xFF, 0x10]).unwrap();

        let mut reader = InputSource::File(path).open().unwrap();
        let mut content = Vec::new();
        reader.read_to_end(&mut content).unwrap();
        assert_eq!(content, vec![0x00u8, 0xFF, 0x10]);
    }

    #[test]
    fn test_open_nonexistent_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/a.bin"));
        let err = source.open().err().unwrap();
        match err {
            CliError::Open { resource, source } => {
                assert_eq!(resource, "/nonexistent/a.bin");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(InputSource::Stdin.display_name(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("dir/b.bin")).display_name(),
            "dir/b.bin"
        );
    }
}
