//! Service Configuration
//!
//! Configuration for the records service: database file, bind host, and
//! port. Resolved once at startup (CLI flags with environment fallback)
//! and passed down explicitly; nothing reads the environment after boot.

use std::path::PathBuf;

/// Default SQLite database file
pub const DEFAULT_DATABASE_FILE: &str = "student_records.db";

/// Default host to bind to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port to listen on
pub const DEFAULT_PORT: u16 = 8000;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Path to the SQLite database file
    pub database_file: PathBuf,

    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Create a config with the specified database file
    pub fn with_database_file(database_file: impl Into<PathBuf>) -> Self {
        Self {
            database_file: database_file.into(),
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.database_file, PathBuf::from("student_records.db"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_with_database_file() {
        let config = ServiceConfig::with_database_file("/tmp/records.db");
        assert_eq!(config.database_file, PathBuf::from("/tmp/records.db"));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
