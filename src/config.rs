//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.
//! Every field has a default, so the service starts with no environment at all.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `READ_API_KEY` (optional): key granting read-only access, defaults to `key1`
/// - `ADMIN_API_KEY` (optional): key granting admin access, defaults to `key2`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_read_api_key")]
    pub read_api_key: String,

    #[serde(default = "default_admin_api_key")]
    pub admin_api_key: String,
}

fn default_port() -> u16 {
    8080
}

fn default_read_api_key() -> String {
    "key1".to_string()
}

fn default_admin_api_key() -> String {
    "key2".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: default_port(),
            read_api_key: default_read_api_key(),
            admin_api_key: default_admin_api_key(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }
}
