//! Connection configuration and deployment selection.
//!
//! Responsibilities:
//! - Enumerate the known Sumo Logic deployments.
//! - Derive the Search Job API base URL for a deployment.
//!
//! Invariants:
//! - `us1` is the default deployment and uses the unprefixed `api.sumologic.com` host.
//! - Deployment names are matched case-insensitively and ignore surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::auth::AuthConfig;

/// A Sumo Logic deployment (region).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    #[default]
    Us1,
    Us2,
    Eu,
    Au,
    De,
    Jp,
    Ca,
    In,
    Fed,
    Kr,
    Ch,
}

impl Deployment {
    /// Every known deployment, in documentation order.
    pub const ALL: [Deployment; 11] = [
        Deployment::Us1,
        Deployment::Us2,
        Deployment::Eu,
        Deployment::Au,
        Deployment::De,
        Deployment::Jp,
        Deployment::Ca,
        Deployment::In,
        Deployment::Fed,
        Deployment::Kr,
        Deployment::Ch,
    ];

    /// The lowercase selector used in config files and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Deployment::Us1 => "us1",
            Deployment::Us2 => "us2",
            Deployment::Eu => "eu",
            Deployment::Au => "au",
            Deployment::De => "de",
            Deployment::Jp => "jp",
            Deployment::Ca => "ca",
            Deployment::In => "in",
            Deployment::Fed => "fed",
            Deployment::Kr => "kr",
            Deployment::Ch => "ch",
        }
    }

    /// Base URL of the REST API for this deployment (no trailing slash).
    pub fn api_base_url(&self) -> String {
        match self {
            Deployment::Us1 => "https://api.sumologic.com/api".to_string(),
            other => format!("https://api.{}.sumologic.com/api", other.as_str()),
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a deployment selector is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDeployment(pub String);

impl fmt::Display for UnknownDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Deployment::ALL.iter().map(Deployment::as_str).collect();
        write!(
            f,
            "unknown deployment '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownDeployment {}

impl FromStr for Deployment {
    type Err = UnknownDeployment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Deployment::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| UnknownDeployment(s.to_string()))
    }
}

/// Connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// The selected deployment.
    pub deployment: Deployment,
    /// Resolved API base URL (deployment default or explicit host override).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings.
    pub connection: ConnectionConfig,
    /// Credentials.
    pub auth: AuthConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us1_uses_unprefixed_host() {
        assert_eq!(
            Deployment::Us1.api_base_url(),
            "https://api.sumologic.com/api"
        );
    }

    #[test]
    fn test_regional_hosts_are_prefixed() {
        assert_eq!(
            Deployment::Eu.api_base_url(),
            "https://api.eu.sumologic.com/api"
        );
        assert_eq!(
            Deployment::Fed.api_base_url(),
            "https://api.fed.sumologic.com/api"
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" US2 ".parse::<Deployment>().unwrap(), Deployment::Us2);
        assert_eq!("jp".parse::<Deployment>().unwrap(), Deployment::Jp);
    }

    #[test]
    fn test_parse_unknown_lists_known_values() {
        let err = "mars".parse::<Deployment>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("mars"));
        assert!(msg.contains("us1"));
        assert!(msg.contains("ch"));
    }

    #[test]
    fn test_every_deployment_round_trips_through_display() {
        for d in Deployment::ALL {
            assert_eq!(d.to_string().parse::<Deployment>().unwrap(), d);
        }
    }
}
