//! # Seda CLI
//!
//! This is the binary entry point for the `seda` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting a failed command as a single line on stdout and exiting with
//!   status 1. Usage errors are reported by `clap` itself (status 2).
//!
//! The core application logic lives in the `seda` library crate, so the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let output = cli.output_config();

    match cli.execute(&output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", output.error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
