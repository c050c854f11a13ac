//! Data models for the records this service writes.

/// Text record model and request validation
pub mod record;
