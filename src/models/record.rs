//! Text record model and request validation.
//!
//! This module defines:
//! - `TextRecord`: the item written to the record sink
//! - `RecordRequest`: the validated body of `POST /record`
//! - `content_digest` / `truncate_text`: the two derivations applied to incoming text

use md5::{Digest, Md5};
use serde_json::{Map, Value};

/// Maximum number of characters stored for a record's text.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Suffix appended to text cut off at `MAX_TEXT_CHARS`.
pub const TRUNCATION_MARKER: &str = "...";

/// A single text record as persisted by the record sink.
///
/// # Storage Shape
///
/// - `timestamp`: number, seconds since the Unix epoch
/// - `hash`: string, MD5 digest of the untruncated text (32 hex characters)
/// - `text`: string, at most 1003 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// Write time, set by the server
    pub timestamp: i64,

    /// Content fingerprint of the original input
    ///
    /// Two identical inputs produce the same hash but are still stored as two records.
    pub hash: String,

    /// Input text, possibly truncated
    pub text: String,
}

impl TextRecord {
    /// Build a record from raw input text.
    ///
    /// The digest is computed before truncation, so it always identifies the full input.
    pub fn new(text: &str, timestamp: i64) -> Self {
        Self {
            timestamp,
            hash: content_digest(text),
            text: truncate_text(text),
        }
    }
}

/// Compute the lowercase hex MD5 digest of `text`.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());

    hex::encode(hasher.finalize())
}

/// Cap `text` at `MAX_TEXT_CHARS` characters, appending `TRUNCATION_MARKER` when cut.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_text(text: &str) -> String {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

/// Validated body of `POST /record`.
///
/// # JSON Example
///
/// ```json
/// {
///   "text": "hello"
/// }
/// ```
///
/// Any other fields in the object are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRequest {
    pub text: String,
}

/// Reasons a decoded body is not a usable record request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordRequestError {
    #[error("Missing required field 'text'")]
    MissingText,

    #[error("Field 'text' must be a string")]
    TextNotString,
}

impl TryFrom<Map<String, Value>> for RecordRequest {
    type Error = RecordRequestError;

    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        match body.remove("text") {
            Some(Value::String(text)) => Ok(Self { text }),
            Some(_) => Err(RecordRequestError::TextNotString),
            None => Err(RecordRequestError::MissingText),
        }
    }
}
