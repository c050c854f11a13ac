//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the key from the `X-API-Key` header
//! 2. Compare it against the configured shared secret
//! 3. Reject mismatches with HTTP 401 before the handler runs

use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// SHA-256 digest of the configured secret, computed once at startup.
///
/// Comparison always runs over the full digest, wherever the first mismatch is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyDigest([u8; 32]);

impl ApiKeyDigest {
    pub fn new(key: &str) -> Self {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(key.as_bytes()));
        Self(digest)
    }

    /// Whether `presented` equals the secret this digest was built from.
    pub fn matches(&self, presented: &str) -> bool {
        let presented = Sha256::digest(presented.as_bytes());

        self.0
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Read `X-API-Key` from the request headers
/// 2. Reject missing, non-UTF-8 or empty values
/// 3. Reject values that do not equal the configured secret
/// 4. Otherwise call the next handler
///
/// # Headers
///
/// ```text
/// X-API-Key: abc123xyz
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|key| !key.is_empty())
        .ok_or(AppError::InvalidApiKey)?;

    if !state.api_key.matches(api_key) {
        return Err(AppError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_only_identical_key() {
        let digest = ApiKeyDigest::new("s3cret");

        assert!(digest.matches("s3cret"));
        assert!(!digest.matches("s3cre"));
        assert!(!digest.matches("s3cret "));
        assert!(!digest.matches("S3CRET"));
        assert!(!digest.matches(""));
    }
}
