//! Execute a resolved invocation

use crate::args::Invocation;
use crate::error::CliError;
use xorify_engine::{xor_streams_with, Side, XorSummary};

/// Open all streams and XOR them
///
/// Inputs are opened before the output, so a missing input never creates or
/// truncates the output file. Every handle is closed on return, on success
/// and on error alike.
pub fn run(invocation: &Invocation) -> Result<XorSummary, CliError> {
    let first = invocation.first.open()?;
    let second = invocation.second.open()?;
    let output = invocation.output.open()?;

    log::debug!("engine config: {:?}", invocation.engine);
    let summary = xor_streams_with(first, second, output, &invocation.engine)?;

    log::info!(
        "{} bytes written to {}; {} ended first",
        summary.bytes_written,
        invocation.output.display_name(),
        match summary.exhausted {
            Side::First => invocation.first.display_name(),
            Side::Second => invocation.second.display_name(),
        }
    );
    Ok(summary)
}
