//! Shared state handed to every handler and middleware.

use crate::{config::Config, middleware::auth::ApiKeyDigest, store::SharedSink};

/// Read-only application state.
///
/// Built once before the server starts; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Digest of the configured shared secret
    pub api_key: ApiKeyDigest,

    /// Destination for text records
    pub sink: SharedSink,
}

impl AppState {
    pub fn new(config: &Config, sink: SharedSink) -> Self {
        Self {
            api_key: ApiKeyDigest::new(&config.api_key),
            sink,
        }
    }
}
