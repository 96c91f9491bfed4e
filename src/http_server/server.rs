//! # HTTP Server
//!
//! Binds the record routes behind a permissive CORS layer and serves them
//! on the configured address.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::Logger;
use crate::store::RecordStore;

use super::record_routes::{record_routes, RecordState};

/// HTTP server for the records API
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server for the given configuration
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &ServiceConfig) -> Router {
        let record_state = Arc::new(RecordState::new(RecordStore::new(
            config.database_file.clone(),
        )));

        // Any origin may call the API
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(record_routes(record_state))
            .layer(cors)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid listen address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVER_LISTENING", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(ServiceConfig::default());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_port() {
        let server = HttpServer::new(ServiceConfig::with_port(9000));
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }
}
