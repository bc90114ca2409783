//! Album data model.
//!
//! The same type is used as the request body for creating albums and as the
//! response body for every album endpoint.

use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "2",
///   "title": "Jeru",
///   "artist": "Gerry Mulligan",
///   "price": 17.99
/// }
/// ```
///
/// # Identity
///
/// `id` is chosen by the caller and treated as an opaque string. The store
/// guarantees no two albums share an id.
///
/// Fields missing from a request body decode to empty strings and a zero
/// price; only wrongly typed fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Caller-supplied unique identifier
    pub id: String,

    pub title: String,

    pub artist: String,

    /// Price in the catalog's currency
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Albums preloaded into the catalog at startup, in listing order.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
