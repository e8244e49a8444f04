use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;

use crate::app_dirs;

use super::types::{AppSettings, ConfigError};
use super::defaults::normalize_base_url;
use super::{CONFIG_FILE_NAME, map_app_dir_error};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, writing defaults on first launch.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let settings = AppSettings::default();
        save_settings_to_path(&settings, &path)?;
        tracing::info!("Wrote default config to {}", path.display());
        return Ok(settings);
    }
    load_settings_from(&path)
}

/// Parse and validate a TOML settings file. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = settings.normalized();
    validate_base_url(&settings.service.base_url)?;
    Ok(settings)
}

/// Write the TOML settings file via a sibling temp file and rename.
pub fn save_settings_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp_path = path.with_extension(format!("toml.tmp-{}", std::process::id()));
    std::fs::write(&tmp_path, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        ConfigError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl AppSettings {
    /// Point the service at `base_url`, applying the same checks as loading
    /// from disk. Other service settings are kept.
    pub fn set_service_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        let base_url = normalize_base_url(base_url);
        validate_base_url(&base_url)?;
        self.service.base_url = base_url;
        Ok(())
    }
}

fn validate_base_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidServiceUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
