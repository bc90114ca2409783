//! Album Catalog Service
//!
//! A REST API serving an in-memory catalog of music albums, guarded by
//! header-based API keys with a read-only and an admin role.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory album store behind an async `RwLock`
//! - **Authentication**: Static API keys in the `Authorization` header
//! - **Format**: JSON requests/responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use middleware::auth::{AuthContext, Authenticator, Role, StaticKeyAuthenticator};
pub use models::{album::Album, api_error::ApiError};
pub use routes::create_router;
pub use services::album_store::AlbumStore;
pub use state::AppState;
