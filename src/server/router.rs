use crate::config::AppConfig;
use crate::server::handlers::{detect_plant_handler, server_status_handler};
use crate::server::types::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::{Router, routing::get, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout =
        TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.request_timeout);
    let request_body_limit = RequestBodyLimitLayer::new(config.request_body_limit);

    Router::new()
        .route("/", get(server_status_handler))
        .route("/detect", post(detect_plant_handler))
        // RequestBodyLimitLayer governs size, not axum's 2MB extractor default
        .layer(DefaultBodyLimit::disable())
        .layer(timeout)
        .layer(cors)
        .layer(request_body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
