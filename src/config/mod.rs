//! Persisted client settings stored as TOML in the app directory.

use crate::app_dirs;

mod defaults;
mod io;
mod types;


/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use io::{config_path, load_or_default, load_settings_from, save_settings_to_path};
pub use types::{AppSettings, ConfigError, ExportSettings, ServiceSettings, StartupSettings};

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
