//! Command-line arguments

use crate::config::{chunk_bytes, XorifyConfig, MAX_CHUNK_KB};
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::OutputTarget;
use clap::Parser;
use std::path::PathBuf;
use xorify_engine::{EngineConfig, LengthPolicy};

const ABOUT: &str = "Calculate the bitwise XOR of IN_FILE_0 and IN_FILE_1. \
If IN_FILE_1 is omitted, stdin is used instead.";

const AFTER_HELP: &str = "Principal use of this program is to highlight differences in binary files: \
identical bytes come out as 0x00.";

/// Arguments for the xorify command
#[derive(Debug, Parser)]
#[command(
    name = "xorify",
    version,
    about = ABOUT,
    after_help = AFTER_HELP,
    override_usage = "xorify [OPTIONS] <IN_FILE_0> [IN_FILE_1]"
)]
pub struct Cli {
    /// Input files: IN_FILE_0 and, optionally, IN_FILE_1
    #[arg(value_name = "IN_FILE")]
    pub files: Vec<PathBuf>,

    /// Output file name (if omitted, stdout is used)
    #[arg(short, long, value_name = "OUT_FILE")]
    pub output: Option<PathBuf>,

    /// Produce verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Zero-pad the shorter input instead of stopping at its end
    #[arg(long)]
    pub pad: bool,

    /// Chunk size read from each input per iteration, in KiB
    #[arg(
        long,
        value_name = "KB",
        env = "XORIFY_CHUNK_KB",
        value_parser = clap::value_parser!(u32).range(1..=MAX_CHUNK_KB as i64)
    )]
    pub chunk_kb: Option<u32>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Fully resolved invocation, ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// First input
    pub first: InputSource,
    /// Second input
    pub second: InputSource,
    /// Output destination
    pub output: OutputTarget,
    /// Engine settings
    pub engine: EngineConfig,
    /// Verbosity count
    pub verbosity: u8,
}

impl Cli {
    /// Check positional arguments and merge configuration
    ///
    /// Nothing is opened here; argument errors are reported before any
    /// resource is touched.
    pub fn resolve(&self) -> Result<Invocation, CliError> {
        let (first, second) = match self.files.as_slice() {
            [] => {
                return Err(CliError::Argument(
                    "Mandatory argument IN_FILE_0 is missing.".to_string(),
                ))
            }
            [first] => (InputSource::File(first.clone()), InputSource::Stdin),
            [first, second] => (
                InputSource::File(first.clone()),
                InputSource::File(second.clone()),
            ),
            _ => {
                return Err(CliError::Argument(
                    "Too many command line arguments. Only IN_FILE_0 and IN_FILE_1 are supported."
                        .to_string(),
                ))
            }
        };

        let output = match &self.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        };

        Ok(Invocation {
            first,
            second,
            output,
            engine: self.engine_config()?,
            verbosity: self.verbose,
        })
    }

    /// Engine settings: flags override the config file, which overrides defaults
    fn engine_config(&self) -> Result<EngineConfig, CliError> {
        let mut engine = match &self.config {
            Some(path) => XorifyConfig::load(path)
                .map_err(|e| CliError::Config(format!("{e:#}")))?
                .engine_config(),
            None => EngineConfig::default(),
        };

        if let Some(chunk_kb) = self.chunk_kb {
            engine = engine.with_chunk_size(chunk_bytes(chunk_kb));
        }
        if self.pad {
            engine = engine.with_length_policy(LengthPolicy::ZeroPad);
        }
        Ok(engine)
    }
}

impl Invocation {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level(self.verbosity)),
        )
        .format_timestamp(None)
        .init();
    }
}

/// Log filter for a verbosity count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
