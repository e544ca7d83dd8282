use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::genes::GeneError;
use thiserror::Error;
use tracing::error;

/// Error response carrying a `{ "message": ... }` body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<GeneError> for JsonApiError {
    fn from(e: GeneError) -> Self {
        if e.is_business_rule() {
            return Self::new(StatusCode::BAD_REQUEST, e.to_string());
        }
        // store detail stays in the logs
        error!(code = e.code(), error = %e, "gene store failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(_: JsonRejection) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage init failed: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_map_to_bad_request_with_message() {
        let e = JsonApiError::from(GeneError::GeneNameAlreadyExists);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Gene with this name already exists.");

        let e = JsonApiError::from(GeneError::TranscriptAlreadyExists);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Transcript already exists for this NM number.");
    }

    #[test]
    fn store_errors_are_internal_and_opaque() {
        let e = JsonApiError::from(GeneError::Store("password authentication failed".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Internal Server Error");
    }
}
