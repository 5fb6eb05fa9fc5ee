//! Platform-aware configuration paths for recfilter

use crate::core::constants::{env_vars, APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::core::errors::ConfigError;
use std::env;
use std::path::PathBuf;

/// Configuration directory for the current platform.
///
/// `RECFILTER_CONFIG_DIR` takes precedence when set.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(custom_dir) = env::var(env_vars::CONFIG_DIR) {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Location of `config.toml` inside [`config_dir`]
pub fn default_config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
