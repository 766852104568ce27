//! YAML config file loading.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit path or `$HOME/.sumo-search-job-cli.yaml`).
//! - Parse the file and apply its values to a ConfigLoader instance.
//!
//! Invariants:
//! - The file is applied last and only fills values still unset by env vars
//!   or builder methods, so both take precedence over it.
//! - A missing default config file is not an error; a missing explicit path is.

use secrecy::SecretString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::CONFIG_FILE_NAME;
use crate::types::ConfigFile;

/// Returns the default path to the configuration file (`$HOME/.sumo-search-job-cli.yaml`).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = directories::BaseDirs::new().ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(dirs.home_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

/// Apply the config file (if any) to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (default_config_path()?, false),
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileNotFound { path });
        }
        debug!("No config file at {}", path.display());
        return Ok(());
    }

    debug!("Loading config file {}", path.display());
    let file = read_config_file(&path)?;

    if loader.access_id().is_none() {
        loader.set_access_id(file.access_id);
    }
    if !loader.has_access_key()
        && let Some(key) = file.access_key
    {
        loader.set_access_key(Some(SecretString::new(key.into())));
    }
    if loader.deployment().is_none() {
        loader.set_deployment(file.deployment);
    }
    if loader.host().is_none() {
        loader.set_host(file.host);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout_seconds.map(Duration::from_secs));
    }

    Ok(())
}
