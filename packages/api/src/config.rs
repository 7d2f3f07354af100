//! # Client configuration (`notes.toml`)
//!
//! Tells the client where the two remote resources live. The web app embeds
//! the file at build time.
//!
//! ## Structure
//!
//! ```toml
//! [endpoints]
//! notes = "http://localhost/api/api.php"
//! credentials = "http://localhost/api/Login_Register.php"
//!
//! [http]
//! timeout_secs = 30   # native builds only, 0 disables
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level configuration stored in `notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub http: HttpConfig,
}

/// URLs of the remote resources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    /// The notes resource (GET/POST/PUT/DELETE).
    #[serde(default = "default_notes_url")]
    pub notes: String,
    /// The credentials resource (GET/POST).
    #[serde(default = "default_credentials_url")]
    pub credentials: String,
}

/// HTTP client settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. 0 disables the timeout.
    /// Ignored in the browser, where fetch manages its own timeouts.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_notes_url() -> String {
    "http://localhost/api/api.php".to_string()
}

fn default_credentials_url() -> String {
    "http://localhost/api/Login_Register.php".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            notes: default_notes_url(),
            credentials: default_credentials_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialise client configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notes.toml"
    }

    /// Builder method to set the notes resource URL.
    pub fn with_notes_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.notes = url.into();
        self
    }

    /// Builder method to set the credentials resource URL.
    pub fn with_credentials_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.credentials = url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoints.notes, "http://localhost/api/api.php");
        assert_eq!(
            config.endpoints.credentials,
            "http://localhost/api/Login_Register.php"
        );
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [endpoints]
            notes = "https://notes.example/api.php"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.notes, "https://notes.example/api.php");
        assert_eq!(
            config.endpoints.credentials,
            "http://localhost/api/Login_Register.php"
        );
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = ClientConfig::from_toml("[endpoints\nnotes = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_builder_and_toml_output() {
        let config = ClientConfig::default()
            .with_notes_url("http://127.0.0.1:9000/notes")
            .with_credentials_url("http://127.0.0.1:9000/users");

        let raw = config.to_toml().unwrap();
        assert!(raw.contains("http://127.0.0.1:9000/notes"));
        assert_eq!(ClientConfig::from_toml(&raw).unwrap(), config);
    }
}
