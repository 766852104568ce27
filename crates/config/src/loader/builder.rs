//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, the config file, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over config file values
//!   (`from_env()` is applied before `from_file()`, which only fills gaps).
//! - An explicit host overrides the deployment-derived API base URL.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig, Deployment};

/// Configuration loader that builds config from the environment and the config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    access_id: Option<String>,
    access_key: Option<SecretString>,
    deployment: Option<String>,
    host: Option<String>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is `true` or `1`. A missing `.env`
    /// file is not an error.
    ///
    /// SAFETY: Error messages never include raw .env line contents.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Fill unset values from the config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Set the access id.
    pub fn with_access_id(mut self, access_id: String) -> Self {
        self.access_id = Some(access_id);
        self
    }

    /// Set the access key.
    pub fn with_access_key(mut self, access_key: String) -> Self {
        self.access_key = Some(SecretString::new(access_key.into()));
        self
    }

    /// Set the deployment selector (validated in `build()`).
    pub fn with_deployment(mut self, deployment: String) -> Self {
        self.deployment = Some(deployment);
        self
    }

    /// Set an explicit API host, overriding the deployment default.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let deployment = match self.deployment.as_deref() {
            Some(raw) => raw
                .parse::<Deployment>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: "deployment".to_string(),
                    message: e.to_string(),
                })?,
            None => Deployment::default(),
        };

        let base_url = match self.host.as_deref() {
            Some(host) => validate_and_normalize_base_url(host)?,
            None => deployment.api_base_url(),
        };

        let (Some(access_id), Some(access_key)) = (self.access_id, self.access_key) else {
            return Err(ConfigError::MissingCredentials);
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                deployment,
                base_url,
                timeout,
            },
            auth: AuthConfig {
                access_id,
                access_key,
            },
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn access_id(&self) -> Option<&String> {
        self.access_id.as_ref()
    }

    pub(crate) fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub(crate) fn deployment(&self) -> Option<&String> {
        self.deployment.as_ref()
    }

    pub(crate) fn host(&self) -> Option<&String> {
        self.host.as_ref()
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_access_id(&mut self, access_id: Option<String>) {
        self.access_id = access_id;
    }

    pub(crate) fn set_access_key(&mut self, access_key: Option<SecretString>) {
        self.access_key = access_key;
    }

    pub(crate) fn set_deployment(&mut self, deployment: Option<String>) {
        self.deployment = deployment;
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes an API host URL.
///
/// - Trim surrounding whitespace
/// - Parse as an absolute http(s) URL with a host
/// - Strip the trailing slash
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        var: "host".into(),
        message,
    };

    let parsed = url::Url::parse(raw.trim()).map_err(|e| {
        invalid(format!(
            "must be an absolute http(s) URL (e.g. https://api.sumologic.com/api): {e}"
        ))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(invalid(format!("scheme must be http or https, got: {scheme}")));
    }

    if parsed.host_str().is_none() {
        return Err(invalid("host is required".into()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
