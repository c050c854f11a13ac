//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data
//! 2. Delegates to the service layer
//! 3. Returns a JSON response

/// Service liveness endpoint
pub mod health;
/// Text record endpoint
pub mod records;
