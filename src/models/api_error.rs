//! Uniform JSON error envelope returned for every non-2xx response.

use serde::Serialize;

/// Error body sent to API clients.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Unauthorized",
///   "message": "Invalid API key"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Short error category (e.g. "Not Found")
    pub error: String,

    /// Human-readable detail
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
