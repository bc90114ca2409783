//! Business logic services.
//!
//! Services own application data and enforce its invariants, separated
//! from HTTP handlers.

pub mod album_store;
