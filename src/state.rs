//! Shared application state.

use std::sync::Arc;

use crate::{
    config::Config,
    middleware::auth::{Authenticator, StaticKeyAuthenticator},
    services::album_store::AlbumStore,
};

/// State injected into handlers and middleware via `axum::extract::State`.
///
/// Cloning is cheap: the store is a shared handle and the authenticator is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: AlbumStore,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(store: AlbumStore, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    /// Seeded catalog guarded by the configured static keys.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AlbumStore::with_seed_data(),
            Arc::new(StaticKeyAuthenticator::new(
                config.read_api_key.clone(),
                config.admin_api_key.clone(),
            )),
        )
    }
}
