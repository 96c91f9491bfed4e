//! # Store Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert violated the roll-number primary key
    #[error("Roll number already exists.")]
    DuplicateKey,

    /// Any other storage failure (unclassified)
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::DuplicateKey => 400,
            StoreError::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = StoreError::DuplicateKey;
        assert_eq!(err.to_string(), "Roll number already exists.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::DuplicateKey.status_code(), 400);
        assert_eq!(
            StoreError::Storage(sqlx::Error::RowNotFound).status_code(),
            500
        );
    }
}
