//! Record HTTP Routes
//!
//! Endpoint for inserting student records.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::observability::Logger;
use crate::store::{RecordStore, StoreError, StudentRecord};

// ==================
// Shared State
// ==================

/// Record state shared across handlers
///
/// Holds only the store (an immutable database file path); no mutable
/// state is shared between requests.
pub struct RecordState {
    pub store: RecordStore,
}

impl RecordState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

/// Body of `POST /add_record`
///
/// Both fields are required; a missing or type-mismatched field is
/// rejected by the extractor with 422 before reaching the store.
#[derive(Debug, Deserialize)]
pub struct AddRecordRequest {
    pub roll_number: i64,
    pub name: String,
}

/// Success acknowledgment
#[derive(Debug, Serialize)]
pub struct AddRecordResponse {
    pub status: String,
    pub message: String,
}

impl AddRecordResponse {
    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Record added.".to_string(),
        }
    }
}

/// Error body for rejected inserts
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ==================
// Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<RecordState>) -> Router {
    Router::new()
        .route("/add_record", post(add_record_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Insert a student record
async fn add_record_handler(
    State(state): State<Arc<RecordState>>,
    Json(request): Json<AddRecordRequest>,
) -> Result<Json<AddRecordResponse>, (StatusCode, Json<ErrorResponse>)> {
    let record = StudentRecord {
        roll_number: request.roll_number,
        name: request.name,
    };

    match state.store.insert_record(&record).await {
        Ok(()) => {
            Logger::info(
                "RECORD_ADDED",
                &[("roll_number", &record.roll_number.to_string())],
            );
            Ok(Json(AddRecordResponse::success()))
        }
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let detail = match &e {
                StoreError::DuplicateKey => e.to_string(),
                // Do not leak driver details to the caller
                StoreError::Storage(_) => "Internal server error".to_string(),
            };

            match &e {
                StoreError::DuplicateKey => Logger::warn(
                    "RECORD_REJECTED",
                    &[("roll_number", &record.roll_number.to_string())],
                ),
                StoreError::Storage(_) => {
                    Logger::error("STORE_FAILED", &[("error", &e.to_string())])
                }
            }

            Err((status, Json(ErrorResponse { detail })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_state() -> (TempDir, Arc<RecordState>) {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new(tmp.path().join("records.db"));
        store.init_schema().await.unwrap();
        (tmp, Arc::new(RecordState::new(store)))
    }

    #[tokio::test]
    async fn test_add_record_success() {
        let (_tmp, state) = test_state().await;

        let request = AddRecordRequest {
            roll_number: 1,
            name: "Ada".to_string(),
        };
        let response = add_record_handler(State(state), Json(request))
            .await
            .expect("insert should succeed");

        assert_eq!(response.0.status, "success");
        assert_eq!(response.0.message, "Record added.");
    }

    #[tokio::test]
    async fn test_add_record_duplicate() {
        let (_tmp, state) = test_state().await;

        let first = AddRecordRequest {
            roll_number: 1,
            name: "Ada".to_string(),
        };
        add_record_handler(State(state.clone()), Json(first))
            .await
            .expect("first insert should succeed");

        let second = AddRecordRequest {
            roll_number: 1,
            name: "Charles".to_string(),
        };
        let (status, body) = add_record_handler(State(state), Json(second))
            .await
            .expect_err("duplicate insert should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.detail, "Roll number already exists.");
    }

    #[tokio::test]
    async fn test_add_record_empty_name() {
        let (_tmp, state) = test_state().await;

        // Empty string is valid text
        let request = AddRecordRequest {
            roll_number: 2,
            name: String::new(),
        };
        let response = add_record_handler(State(state.clone()), Json(request))
            .await
            .expect("empty name should be accepted");
        assert_eq!(response.0.status, "success");

        let stored = state.store.get_record(2).await.unwrap().unwrap();
        assert_eq!(stored.name, "");
    }

    #[test]
    fn test_success_response_serialization() {
        let json = serde_json::to_value(AddRecordResponse::success()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "message": "Record added."})
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_value(ErrorResponse {
            detail: "Roll number already exists.".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"detail": "Roll number already exists."})
        );
    }
}
