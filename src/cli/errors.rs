//! CLI-specific error types
//!
//! All CLI errors are fatal; `main` prints them and exits non-zero.
//! Nothing is retried.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Schema initialization failed during boot
    #[error("Failed to initialize database schema: {0}")]
    SchemaInit(#[source] StoreError),

    /// Async runtime could not be created
    #[error("Failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// HTTP server failed to bind or serve
    #[error("HTTP server failed: {0}")]
    Server(#[source] std::io::Error),
}
