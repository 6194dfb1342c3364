//! xorify: bitwise XOR of two files

use clap::Parser;
use std::process::ExitCode;
use xorify_cli::{run, Cli, CliError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = cli.resolve().and_then(|invocation| {
        invocation.init_logging();
        log::debug!("Invocation: {:?}", invocation);
        run(&invocation)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError) {
    match err {
        CliError::Argument(_) => {
            eprintln!("xorify: {err}");
            eprintln!("Try 'xorify --help' for more information.");
        }
        CliError::Open { .. } => eprintln!("{err}"),
        _ => eprintln!("xorify: {err}"),
    }
}
