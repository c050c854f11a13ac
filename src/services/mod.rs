//! Business logic behind the HTTP handlers.

/// Decoding, hashing, truncation and persistence of text records
pub mod record_service;
