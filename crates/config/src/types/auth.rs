//! Credential types.

use secrecy::SecretString;

/// Access id / access key pair used for HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The access id (Basic auth user name).
    pub access_id: String,
    /// The access key (Basic auth password).
    pub access_key: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_debug_does_not_leak_access_key() {
        let auth = AuthConfig {
            access_id: "suABC".to_string(),
            access_key: SecretString::new("super-secret-key".to_string().into()),
        };

        let debug = format!("{:?}", auth);
        assert!(debug.contains("suABC"));
        assert!(!debug.contains("super-secret-key"));
        assert_eq!(auth.access_key.expose_secret(), "super-secret-key");
    }
}
