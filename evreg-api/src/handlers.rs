use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::models::RegistrationRequest;
use crate::state::AppState;

/// Liveness banner at the root path.
pub async fn home() -> &'static str {
    "Event Registration API Running!"
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// `POST /api/register`: validate the submission and hand it to the
/// configured storage backend. Validation problems come back as 400 with a
/// fixed message; backend failures are logged in full and surface as a
/// generic 500.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationRequest>,
) -> (StatusCode, Json<Value>) {
    let mut registration = match payload.into_registration() {
        Ok(registration) => registration,
        Err(e) => {
            info!("Rejected registration: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "All required fields must be filled."})),
            );
        }
    };

    match state.storage.create_registration(&mut registration).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({"message": "Registration successful!"})),
        ),
        Err(e) => {
            error!("Failed to persist registration: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to register user."})),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use evreg_core::common::error::Result;
    use evreg_core::domain::Registration;
    use evreg_core::storage::Storage;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Captures every record the handler hands to the sink.
    #[derive(Default)]
    struct RecordingStorage {
        written: Mutex<Vec<Registration>>,
    }

    #[async_trait]
    impl Storage for RecordingStorage {
        async fn create_registration(&self, registration: &mut Registration) -> Result<()> {
            self.written.lock().unwrap().push(registration.clone());
            Ok(())
        }
    }

    /// Fails every write, standing in for a lost backend connection.
    struct FailingStorage;

    #[async_trait]
    impl Storage for FailingStorage {
        async fn create_registration(&self, _registration: &mut Registration) -> Result<()> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into())
        }
    }

    fn request(value: serde_json::Value) -> RegistrationRequest {
        serde_json::from_value(value).unwrap()
    }

    fn valid_payload() -> serde_json::Value {
        json!({
            "fullName": "Jane Doe",
            "mobileNumber": "5551234",
            "emailId": "jane@x.com",
            "address": "1 Main St",
        })
    }

    #[tokio::test]
    async fn valid_submission_returns_created_and_writes_once() {
        let recording = Arc::new(RecordingStorage::default());
        let state = AppState {
            storage: recording.clone(),
        };

        let (status, Json(body)) = register(State(state), Json(request(valid_payload()))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Registration successful!");

        let written = recording.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].full_name, "Jane Doe");
        assert_eq!(written[0].mobile_number, "5551234");
        assert_eq!(written[0].email_id, "jane@x.com");
        assert_eq!(written[0].address, "1 Main St");
        assert_eq!(written[0].referred_by, None);
        assert!(!written[0].has_interest);
    }

    #[tokio::test]
    async fn missing_required_fields_return_bad_request_without_writing() {
        for field in ["fullName", "mobileNumber", "emailId", "address"] {
            let recording = Arc::new(RecordingStorage::default());
            let state = AppState {
                storage: recording.clone(),
            };

            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);

            let (status, Json(body)) = register(State(state), Json(request(payload))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(body["error"], "All required fields must be filled.");
            assert!(recording.written.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn empty_required_field_returns_bad_request() {
        let recording = Arc::new(RecordingStorage::default());
        let state = AppState {
            storage: recording.clone(),
        };

        let mut payload = valid_payload();
        payload["address"] = json!("");

        let (status, _) = register(State(state), Json(request(payload))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(recording.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_surfaces_as_generic_internal_error() {
        let state = AppState {
            storage: Arc::new(FailingStorage),
        };

        let (status, Json(body)) = register(State(state), Json(request(valid_payload()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to register user.");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn optional_fields_pass_through_to_the_sink() {
        let recording = Arc::new(RecordingStorage::default());
        let state = AppState {
            storage: recording.clone(),
        };

        let mut payload = valid_payload();
        payload["referredBy"] = json!("Sam Lee");
        payload["hasInterest"] = json!(true);

        let (status, _) = register(State(state), Json(request(payload))).await;

        assert_eq!(status, StatusCode::CREATED);
        let written = recording.written.lock().unwrap();
        assert_eq!(written[0].referred_by.as_deref(), Some("Sam Lee"));
        assert!(written[0].has_interest);
    }
}
