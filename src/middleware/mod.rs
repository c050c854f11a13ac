//! HTTP middleware components.
//!
//! Middleware run before route handlers and may short-circuit a request
//! (for example, rejecting an unauthorized caller).

/// Shared-secret API key authentication
pub mod auth;
