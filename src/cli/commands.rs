//! CLI command implementations
//!
//! Both commands resolve configuration first, then initialize the schema;
//! `serve` goes on to bind the HTTP server. The service never accepts
//! traffic before the schema exists.

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::store::RecordStore;

use super::errors::{CliError, CliResult};

/// Create the records database schema and exit.
///
/// Idempotent: running against an existing database file is a no-op.
pub fn init(config: &ServiceConfig) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(init_schema(config))?;
    Ok(())
}

/// Initialize the schema, then serve the HTTP API until interrupted.
pub fn serve(config: ServiceConfig) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;

    rt.block_on(async {
        init_schema(&config).await?;

        let server = HttpServer::new(config);
        server.start().await.map_err(CliError::Server)
    })
}

/// Create the table if absent; fatal on failure.
async fn init_schema(config: &ServiceConfig) -> CliResult<()> {
    let store = RecordStore::new(config.database_file.clone());
    store
        .init_schema()
        .await
        .map_err(CliError::SchemaInit)?;

    Logger::info(
        "SCHEMA_READY",
        &[(
            "database_file",
            &config.database_file.display().to_string(),
        )],
    );
    Ok(())
}
