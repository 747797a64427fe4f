//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export STORAGE="file"
//! export DATA_DIR="data"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `STORAGE` - Storage backend: `file` or `memory` (default: `file`)
//! - `DATA_DIR` - Directory holding the `db.txt` manifest (default: `data`)
//! - `PUBLIC_HOST` - Host used in short URLs when a request has no `Host` header
//!   (default: `localhost:8080`)
//! - `MAX_CODE_ATTEMPTS` - Short code collision retries (default: 10, max: 1000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::services::DEFAULT_MAX_CODE_ATTEMPTS;

/// Where the manifest is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// JSON file `db.txt` inside the data directory.
    File,
    /// Process memory; lost on restart.
    Memory,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORAGE must be 'file' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage: StorageKind,
    pub data_dir: PathBuf,
    pub public_host: String,
    pub max_code_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            storage: StorageKind::File,
            data_dir: PathBuf::from("data"),
            public_host: "localhost:8080".to_string(),
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);

        let storage = match env::var("STORAGE") {
            Ok(v) => v.parse().context("Failed to parse STORAGE")?,
            Err(_) => defaults.storage,
        };

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let public_host = env::var("PUBLIC_HOST").unwrap_or(defaults.public_host);

        let max_code_attempts = match env::var("MAX_CODE_ATTEMPTS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("MAX_CODE_ATTEMPTS must be a number, got '{}'", v))?,
            Err(_) => defaults.max_code_attempts,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            storage,
            data_dir,
            public_host,
            max_code_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `max_code_attempts` is outside 1..=1000
    /// - `public_host` is empty or contains a scheme or path
    /// - `data_dir` is empty while file storage is selected
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 1000 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_code_attempts
            );
        }

        if self.public_host.is_empty() || self.public_host.contains('/') {
            anyhow::bail!(
                "PUBLIC_HOST must be a bare host (e.g. 'sho.rt:8080'), got '{}'",
                self.public_host
            );
        }

        if self.storage == StorageKind::File && self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("DATA_DIR must not be empty when STORAGE=file");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.storage {
            StorageKind::File => tracing::info!(
                "  Storage: file ({})",
                self.data_dir.join("db.txt").display()
            ),
            StorageKind::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        tracing::info!("  Public host: {}", self.public_host);
        tracing::info!("  Max code attempts: {}", self.max_code_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
