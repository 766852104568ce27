//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SUMO_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(id) = env_var_or_none("SUMO_ACCESS_ID") {
        loader.set_access_id(Some(id));
    }
    if let Some(key) = env_var_or_none("SUMO_ACCESS_KEY") {
        loader.set_access_key(Some(SecretString::new(key.into())));
    }
    if let Some(deployment) = env_var_or_none("SUMO_DEPLOYMENT") {
        loader.set_deployment(Some(deployment));
    }
    if let Some(host) = env_var_or_none("SUMO_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(timeout) = env_var_or_none("SUMO_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "SUMO_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    // Only if not already set via CLI
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none("SUMO_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
