use axum::{
    http::{header, HeaderValue},
    middleware as axum_mw,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers;
use crate::middleware::timing;
use crate::AppState;

/// Builds the full Axum `Router`. Paths other than the three below fall
/// through to axum's default 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Sampling ────────────────────────────────────────────
        .route("/", get(handlers::record::record))
        // ── Dashboard ───────────────────────────────────────────
        .route("/statz", get(handlers::statz::dashboard))
        .route(
            "/statz/scatter.png",
            get(handlers::statz::scatter).layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // ── Provide shared state to all routes above ────────────
        .with_state(state)
        // ── Global middleware ───────────────────────────────────
        .layer(axum_mw::from_fn(timing::timing_middleware))
}
