//! Structured JSON logger for rollbook
//!
//! Logs are synchronous and unbuffered. Each event renders to a single
//! JSON object with `event` and `severity` first, followed by the caller's
//! fields in alphabetical order.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that outputs one JSON line per event
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        if severity >= Severity::Error {
            Self::write_line(&mut io::stderr(), &line);
        } else {
            Self::write_line(&mut io::stdout(), &line);
        }
    }

    /// Render an event to its JSON line
    ///
    /// `serde_json::Map` preserves insertion order, so sorting the caller's
    /// fields before insertion keeps the output deterministic.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        let mut sorted_fields: Vec<_> = fields.to_vec();
        sorted_fields.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted_fields {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }

        Value::Object(map).to_string()
    }

    /// Write one line atomically and flush
    fn write_line<W: Write>(writer: &mut W, line: &str) {
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}
