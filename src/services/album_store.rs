//! Album store - the authoritative in-memory album catalog.
//!
//! This service handles:
//! - Listing albums in insertion order
//! - Lookup by album ID
//! - Appending new albums with ID uniqueness enforcement
//!
//! # Concurrency
//!
//! The catalog lives behind a `tokio::sync::RwLock`. Reads share the lock;
//! `append` holds the write lock across both the duplicate check and the
//! push, so concurrent creates with the same ID cannot both succeed.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::album::{Album, seed_albums},
};

/// Cloneable handle to the shared album catalog.
///
/// Clones point at the same underlying collection. The vector itself is
/// never handed out; callers only ever receive owned copies of albums.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    albums: Arc<RwLock<Vec<Album>>>,
}

impl AlbumStore {
    /// Create a store preloaded with `albums`, kept in the given order.
    ///
    /// The caller is responsible for passing albums with distinct IDs.
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
        }
    }

    /// Create a store preloaded with the default catalog.
    pub fn with_seed_data() -> Self {
        Self::new(seed_albums())
    }

    /// Snapshot of every album in insertion order.
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Find an album by ID.
    ///
    /// # Errors
    ///
    /// - `AlbumNotFound`: no album has this ID
    pub async fn find_by_id(&self, id: &str) -> Result<Album, AppError> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or(AppError::AlbumNotFound)
    }

    /// Append an album to the end of the catalog.
    ///
    /// # Process
    ///
    /// 1. Acquire the write lock
    /// 2. Reject the album if its ID is already present
    /// 3. Push it and return a copy
    ///
    /// # Errors
    ///
    /// - `DuplicateAlbumId`: an album with the same ID already exists
    pub async fn append(&self, album: Album) -> Result<Album, AppError> {
        let mut albums = self.albums.write().await;

        if albums.iter().any(|existing| existing.id == album.id) {
            return Err(AppError::DuplicateAlbumId);
        }

        albums.push(album.clone());
        tracing::debug!(album_id = %album.id, total = albums.len(), "Album appended");

        Ok(album)
    }

    /// Number of albums currently in the catalog.
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    /// Whether the catalog holds no albums.
    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}
