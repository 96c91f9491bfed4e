//! # Record Store
//!
//! SQLite-backed storage for student records.
//!
//! The store owns only the database file path. Every operation opens its
//! own short-lived connection, performs one statement, and closes the
//! connection; uniqueness of the roll number is enforced by the table's
//! primary key.

mod errors;
mod records;

pub use errors::{StoreError, StoreResult};
pub use records::{RecordStore, StudentRecord};
