//! Error types and HTTP error response handling.
//!
//! This module defines all request-level errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{models::record::RecordRequestError, store::SinkError};

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
/// Every request fails on its own; nothing here is fatal to the server.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `X-API-Key` header is missing, empty, or does not match the configured secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Request body could not be decoded as a JSON object.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Body decoded but the `text` field is missing or not a string.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error(transparent)]
    InvalidRequest(#[from] RecordRequestError),

    /// Record sink failed to write the record.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedBody(_) | AppError::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 401 Unauthorized
/// - `InvalidRequest` → 400 Bad Request
/// - `MalformedBody` → 500 Internal Server Error
/// - `Sink` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let (code, message) = match &self {
            AppError::InvalidApiKey => ("invalid_api_key", self.to_string()),
            AppError::InvalidRequest(_) => ("invalid_request", self.to_string()),
            AppError::MalformedBody(_) => ("malformed_body", self.to_string()),
            AppError::Sink(_) => (
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_api_key_is_unauthorized() {
        let response = AppError::InvalidApiKey.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"]["code"],
            "invalid_api_key"
        );
    }

    #[tokio::test]
    async fn invalid_request_is_bad_request_with_reason() {
        let response = AppError::from(RecordRequestError::MissingText).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "invalid_request");
        assert_eq!(body["error"]["message"], "Missing required field 'text'");
    }

    #[tokio::test]
    async fn sink_failure_hides_details() {
        let error = AppError::from(SinkError::Write("ResourceNotFoundException".to_string()));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "internal_error");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn malformed_body_is_internal_error() {
        let decode_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::from(decode_error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "malformed_body");
    }
}
