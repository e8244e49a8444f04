use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{
    default_base_url, default_max_response_bytes, default_true, normalize_base_url,
};

/// Settings that belong in the TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub startup: StartupSettings,
}

/// Where the prediction service lives and how to talk to it.
///
/// Config keys: `base_url`, `timeout_secs`, `max_response_bytes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Origin the `/api/*` endpoints are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall request timeout; unset leaves the HTTP client defaults in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Upper bound on response bodies read from the service.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Export destination preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Folder that receives exported results; defaults to the download folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Behavior at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupSettings {
    /// Query `/api/stats` in the background when the window opens.
    #[serde(default = "default_true")]
    pub health_probe: bool,
}

impl Default for StartupSettings {
    fn default() -> Self {
        Self { health_probe: true }
    }
}

impl AppSettings {
    /// Canonicalize values loaded from disk.
    pub(super) fn normalized(mut self) -> Self {
        self.service.base_url = normalize_base_url(&self.service.base_url);
        if self.service.max_response_bytes == 0 {
            self.service.max_response_bytes = default_max_response_bytes();
        }
        self
    }

    /// Settings pointing at a specific service origin, everything else default.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut settings = Self::default();
        settings.service.base_url = normalize_base_url(base_url);
        settings
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// The configured service URL is not an absolute http(s) URL.
    #[error("Invalid service base_url {url:?}: {reason}")]
    InvalidServiceUrl {
        /// Offending value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}
