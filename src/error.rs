//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::api_error::ApiError;

/// Application-wide error type.
///
/// Each variant maps to exactly one HTTP status code and one `ApiError` body.
///
/// # Error Categories
///
/// - **Authentication Errors**: Missing or unknown API key
/// - **Authorization Errors**: Valid key without the required role
/// - **Resource Errors**: Requested album not found
/// - **Validation Errors**: Duplicate album ID or unreadable request body
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key is missing or not recognized.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    Unauthorized,

    /// API key is valid but does not carry the admin role.
    ///
    /// Returns HTTP 403 Forbidden.
    #[error("Admin role required")]
    Forbidden,

    /// No album with the requested ID exists.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Album not found")]
    AlbumNotFound,

    /// An album with the submitted ID is already in the catalog.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Album ID already exists")]
    DuplicateAlbumId,

    /// Request body is not valid JSON or does not have the album shape.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains the parser's description of the problem.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    /// HTTP status and short error category for this variant.
    fn status_and_category(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            AppError::AlbumNotFound => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::DuplicateAlbumId | AppError::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
        }
    }
}

/// A body that fails to decode is reported as a client error.
///
/// This covers syntax errors and wrong field types alike.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": "Not Found",
///   "message": "Album not found"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `Forbidden` → 403 Forbidden
/// - `AlbumNotFound` → 404 Not Found
/// - `DuplicateAlbumId` → 400 Bad Request
/// - `MalformedBody` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, category) = self.status_and_category();

        let body = Json(ApiError::new(category, self.to_string()));

        (status, body).into_response()
    }
}
