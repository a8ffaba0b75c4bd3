//! Storesmith: release automation toolkit for App Store metadata and icon sets.
//!
//! This is the main entry point for the `storesmith` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod apps;
mod cli;
mod commands;
mod emoji;
mod error;
mod exit_codes;
mod fs;
mod gather;
mod git;
mod icons;
mod llm;
mod output;
mod prompt;
mod version;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
