//! Album catalog HTTP handlers.
//!
//! This module implements the album API endpoints:
//! - GET /api/v1/albums - List every album
//! - GET /api/v1/albums/{id} - Get album by ID
//! - POST /api/v1/albums - Add an album (admin only)
//!
//! Successful responses are pretty-printed JSON; error responses go through
//! `AppError` and are compact.

use axum::{
    Extension,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    error::AppError, middleware::auth::AuthContext, models::album::Album, state::AppState,
};

/// JSON response body rendered with indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// List all albums.
///
/// # Endpoint
///
/// `GET /api/v1/albums`
///
/// # Authentication
///
/// Any valid API key.
///
/// # Response
///
/// - **Success (200 OK)**: Array of albums in insertion order
/// - **Error (401)**: Invalid API key
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    PrettyJson(state.store.list().await)
}

/// Get a specific album by ID.
///
/// # URL Parameters
///
/// - `id` - Album ID, matched exactly
///
/// # Response
///
/// - **Success (200 OK)**: The album
/// - **Error (404)**: No album with this ID
/// - **Error (401)**: Invalid API key
pub async fn get_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<PrettyJson<Album>, AppError> {
    let album = state.store.find_by_id(&album_id).await?;

    Ok(PrettyJson(album))
}

/// Add an album to the catalog.
///
/// # Endpoint
///
/// `POST /api/v1/albums`
///
/// # Authentication
///
/// Requires the admin key.
///
/// # Request Body
///
/// ```json
/// {
///   "id": "4",
///   "title": "Kind of Blue",
///   "artist": "Miles Davis",
///   "price": 24.99
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The created album
/// - **Error (403)**: Key is valid but not admin
/// - **Error (400)**: Body is not an album, or the ID is taken
/// - **Error (401)**: Invalid API key
///
/// The role is checked before the body is looked at, so a read-only caller
/// gets 403 even for a malformed body. The body is decoded as JSON whatever
/// its `Content-Type`, and omitted fields take their zero values.
pub async fn create_album(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    body: Bytes,
) -> Result<(StatusCode, PrettyJson<Album>), AppError> {
    auth.require_admin()?;

    let album = serde_json::from_slice::<Album>(&body).inspect_err(|err| {
        tracing::warn!(reason = %err, "Rejected malformed album body");
    })?;

    let album = state.store.append(album).await?;
    tracing::info!(album_id = %album.id, "Album created");

    Ok((StatusCode::CREATED, PrettyJson(album)))
}
