//! xorify CLI library
//!
//! This library provides the command-line interface for the xorify
//! streaming XOR engine: argument and configuration handling, opening the
//! input and output streams, and mapping failures to exit statuses.

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod run;

pub use args::{Cli, Invocation};
pub use error::{CliError, CliResult};
pub use run::run;
