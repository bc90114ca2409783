//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, auth context)
//! 2. Calls into the album store
//! 3. Returns HTTP response (JSON, status code)

/// Album catalog endpoints
pub mod albums;
/// Service health endpoint
pub mod health;
