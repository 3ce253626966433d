//! Stackenv: schema-driven editor and validator for sectioned `.env` files.
//!
//! This is the main entry point for the `stackenv` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod catalog;
mod cli;
mod codec;
mod commands;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod field;
pub mod fs;
pub mod registry;
pub mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    init_logging(cli.verbose);

    match commands::dispatch(cli.config.as_deref(), cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Warnings by default, `-v` for info, `-vv` for debug. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
