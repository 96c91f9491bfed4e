//! # HTTP Server Module
//!
//! Axum server exposing the record insertion endpoint.
//!
//! # Endpoints
//!
//! - `POST /add_record` - Insert a student record
//!
//! No other routes exist. The router is wrapped in a permissive CORS
//! layer so any origin may call the API.

pub mod record_routes;
pub mod server;

pub use server::HttpServer;
