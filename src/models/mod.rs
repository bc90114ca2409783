//! Data models exchanged over the API.
//!
//! This module contains the catalog record and the uniform error envelope.

/// Album catalog record
pub mod album;
/// JSON error envelope
pub mod api_error;
