//! Health check endpoint for service monitoring.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Number of albums currently in the catalog
    pub albums: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler. Public, no API key required.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "albums": 3,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        albums: state.store.len().await,
        timestamp: Utc::now(),
    })
}
