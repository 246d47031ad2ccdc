// src/routes/mod.rs
pub mod recognize;

use crate::{config::Config, state::SharedState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    routing::{get, post},
};
use recognize::{preflight_handler, recognize_handler};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(config: &Config) -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/recognize", post(recognize_handler).options(preflight_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}
