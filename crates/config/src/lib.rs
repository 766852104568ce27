//! Configuration management for the Sumo Logic search job CLI.
//!
//! This crate provides types and loaders for resolving the deployment,
//! credentials and HTTP settings from a YAML config file, environment
//! variables and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AuthConfig, Config, ConfigFile, ConnectionConfig, Deployment, UnknownDeployment};

