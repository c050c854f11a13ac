//! HTTP router assembly.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// # Routes
///
/// - `GET /health` - public
/// - `POST /record` - requires `X-API-Key`
pub fn build_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        .route("/record", post(handlers::records::create_record))
        // Runs before the handler, so rejected requests never reach the sink
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
