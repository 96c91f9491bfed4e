//! CLI module for rollbook
//!
//! Provides command-line interface for:
//! - init: Create the records database schema
//! - serve: Initialize the schema and serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{init, serve};
pub use errors::{CliError, CliResult};

use crate::observability::Logger;

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let result = match cli.command {
        Command::Init { config } => init(&config.into_config()),
        Command::Serve { config } => serve(config.into_config()),
    };

    if let Err(e) = &result {
        Logger::fatal("BOOT_FAILED", &[("error", &e.to_string())]);
    }

    result
}
