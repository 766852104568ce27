//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved runtime configuration (`Config`) and its parts.
//! - Define the on-disk YAML schema (`ConfigFile`).
//! - Map deployment/region selectors to Search Job API base URLs.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication (see client crate).
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;
mod file;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig, Deployment, UnknownDeployment};
pub use file::ConfigFile;
