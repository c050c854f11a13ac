//! Text record HTTP handler.
//!
//! - POST /record - Store a hashed, truncated copy of the submitted text

use crate::{error::AppError, services::record_service, state::AppState};
use axum::{Json, body::Bytes, extract::State};

/// Store a text record.
///
/// # Authentication
///
/// Requires the shared secret in the `X-API-Key` header.
///
/// # Request Body
///
/// ```json
/// {
///   "text": "hello"
/// }
/// ```
///
/// The body is read as raw bytes, so the `Content-Type` header is not checked.
///
/// # Response
///
/// - **Success (200 OK)**: `null`
/// - **Error (400)**: `text` missing or not a string
/// - **Error (401)**: Invalid API key
/// - **Error (500)**: Body is not a JSON object, or the store write failed
pub async fn create_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<()>, AppError> {
    let request = record_service::parse_request(&body)?;

    record_service::write_record(state.sink.as_ref(), request).await?;

    Ok(Json(()))
}
