//! Runtime configuration for Bookshelf
//!
//! Configuration is layered: built-in defaults, then an optional
//! `bookshelf.toml` file, then environment variables. Binaries may apply a
//! final override (for example the CLI's `--api-url`).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

/// Default API base URL of the catalog backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bookshelf.toml";

/// Environment variable naming an alternative config file
pub const ENV_CONFIG_PATH: &str = "BOOKSHELF_CONFIG";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "BOOKSHELF_API_URL";

/// Environment variable setting a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "BOOKSHELF_TIMEOUT_SECS";

/// Client configuration shared by the desktop app and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL the five collections live under (no trailing slash)
    pub api_base_url: String,

    /// Optional per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the default file location and the environment.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load() -> CatalogResult<Self> {
        let path = env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env();
        config.normalize();
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml(&raw)?;
        config.normalize();
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(raw: &str) -> CatalogResult<Self> {
        toml::from_str(raw).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var(ENV_API_URL) {
            info!("{ENV_API_URL} set, using {url}");
            self.api_base_url = url;
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = Some(secs),
                Err(e) => warn!("Invalid {ENV_TIMEOUT_SECS} value '{raw}': {e}"),
            }
        }
    }

    /// Override the base URL (highest precedence)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalize();
        self
    }

    /// Request timeout as a `Duration`, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Strip surrounding whitespace and trailing slashes from the base URL
    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = trimmed.to_string();
    }
}

// ============================================================================
// Tests
// ============================================================================
