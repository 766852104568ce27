//! On-disk YAML configuration schema.
//!
//! ```yaml
//! accessId: suXXXXXXXX
//! accessKey: xxxxxxxx
//! deployment: us2
//! host: https://api.us2.sumologic.com/api
//! timeoutSeconds: 60
//! ```

use serde::Deserialize;

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub access_id: Option<String>,
    pub access_key: Option<String>,
    pub deployment: Option<String>,
    pub host: Option<String>,
    pub timeout_seconds: Option<u64>,
}
