//! Observability subsystem for rollbook
//!
//! Provides structured JSON logging:
//! - One log line = one event
//! - Explicit severity levels
//! - Deterministic key ordering
//! - Synchronous, no buffering
//!
//! INFO and WARN events go to stdout; ERROR and FATAL go to stderr.

mod logger;

pub use logger::{Logger, Severity};
