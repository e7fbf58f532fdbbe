// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding the persisted records
    pub data_dir: PathBuf,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Maximum undo depth (0 = unlimited)
    pub history_limit: usize,
    /// Camera zoom used when focusing a pin
    pub focus_zoom: f64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            frontend_url: "http://localhost:5173".to_string(),
            history_limit: 100,
            focus_zoom: 14.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            history_limit: parse_var("HISTORY_LIMIT")?.unwrap_or(defaults.history_limit),
            focus_zoom: parse_var("FOCUS_ZOOM")?.unwrap_or(defaults.focus_zoom),
        })
    }
}

/// Parse an optional environment variable.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
