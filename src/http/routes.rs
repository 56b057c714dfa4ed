//! Axum router configuration

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::metrics::metrics_handler;
use crate::state::AppState;

use super::handlers::{
    convert_subtitles, debug_stats, health_check, method_not_allowed, version_check,
};
use super::middleware::{request_logger, REQUEST_ID_HEADER};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.limits.max_request_size_bytes();
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        // Conversion endpoint; other methods get a JSON 405
        .route(
            "/api/convert",
            post(convert_subtitles).fallback(method_not_allowed),
        )
        // Health and version endpoints
        .route("/health", get(health_check))
        .route("/version", get(version_check))
        // Observability
        .route("/metrics", get(metrics_handler))
        .route("/debug/stats", get(debug_stats))
        // Middleware
        .layer(middleware::from_fn_with_state(state.clone(), request_logger))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http());

    let router = if cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
            .expose_headers([header::CONTENT_DISPOSITION, REQUEST_ID_HEADER.clone()])
            .max_age(Duration::from_secs(3600));
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}
