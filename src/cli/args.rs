//! CLI argument definitions using clap
//!
//! Commands:
//! - rollbook init [--database-file <path>]
//! - rollbook serve [--database-file <path>] [--host <host>] [--port <port>]
//!
//! Settings fall back to environment variables (`DATABASE_FILE`, `PORT`)
//! when the flag is absent, then to built-in defaults.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ServiceConfig, DEFAULT_DATABASE_FILE, DEFAULT_HOST, DEFAULT_PORT};

/// rollbook - A minimal, self-hostable student records service
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the records database schema and exit
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Initialize the schema and serve the HTTP API
    Serve {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Configuration flags shared by all commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the SQLite database file
    #[arg(long, env = "DATABASE_FILE", default_value = DEFAULT_DATABASE_FILE)]
    pub database_file: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ConfigArgs {
    /// Resolve the flags into the service configuration
    pub fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            database_file: self.database_file,
            host: self.host,
            port: self.port,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
