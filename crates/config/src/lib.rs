//! Server configuration.
//!
//! Defaults suit local development (catalog next to the binary, the usual
//! frontend dev origin allowed); every field can be overridden through the
//! environment, and the binary's flags override both.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path of the level catalog database.
    pub database_path: PathBuf,
    /// Origins allowed by CORS (the browser frontend).
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_path: PathBuf::from("level_data.db"),
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `SERVER_HOST`, `SERVER_PORT`,
    /// `LEVEL_DATABASE_PATH`, `CORS_ORIGINS` (comma-separated).
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("invalid SERVER_PORT: {port}"))?;
        }
        if let Ok(path) = std::env::var("LEVEL_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        Ok(config)
    }
}
