//! Router construction.
//!
//! # Route Structure
//!
//! ```text
//! /health                  - Health check (public)
//! /api/v1/albums           - GET list, POST create (API key)
//! /api/v1/albums/{id}      - GET album (API key)
//! ```

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{albums, health},
    middleware,
    state::AppState,
};

/// Build the application router around `state`.
pub fn create_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        .route(
            "/api/v1/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route("/api/v1/albums/{id}", get(albums::get_album))
        // route_layer keeps unmatched paths at 404 instead of 401
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
