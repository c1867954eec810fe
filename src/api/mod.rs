//! HTTP API server

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/properties", get(handlers::get_properties))
        .layer(cors())
        .with_state(state)
}

/// Any origin may read responses; credentials are not supported.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}
