//! Configuration for the PayLane HTTP clients.
//!
//! [`ClientConfig`] carries everything a client needs besides the HTTP stack
//! itself. It is deserializable so callers can embed it in their own
//! configuration files; this crate reads no files and no environment
//! variables on its own.
//!
//! ```json
//! {
//!     "base_url": "https://direct.paylane.com/rest/",
//!     "credentials": { "username": "merchant", "password": "secret" },
//!     "timeout": 30
//! }
//! ```

use std::time::Duration;

use paylane::Credentials;
use paylane::constants::API_URI;
use serde::Deserialize;
use serde_with::{DurationSeconds, serde_as};

/// Configuration for [`Client`](crate::Client) and the blocking client.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API base URL. Operation paths are resolved relative to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Basic Auth credentials sent with every request.
    pub credentials: Credentials,

    /// Per-request timeout, in seconds when deserialized. `None` leaves the
    /// HTTP stack's default in place.
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    pub timeout: Option<Duration>,

    /// Optional `User-Agent` header value.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    API_URI.to_owned()
}

impl ClientConfig {
    /// Creates a config for the production API with the given credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::new(username, password))
    }

    /// Creates a config for the production API from existing credentials.
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self {
            base_url: default_base_url(),
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_to_production_api() {
        let config = ClientConfig::new("merchant", "secret");
        assert_eq!(config.base_url, "https://direct.paylane.com/rest/");
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("merchant", "secret")
            .with_base_url("http://localhost:8080/rest")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("shop/1.0");
        assert_eq!(config.base_url, "http://localhost:8080/rest");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent.as_deref(), Some("shop/1.0"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: ClientConfig = serde_json::from_value(json!({
            "credentials": {"username": "merchant", "password": "secret"}
        }))
        .unwrap();
        assert_eq!(config.base_url, API_URI);
        assert_eq!(config.credentials.username(), "merchant");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_deserialize_timeout_in_seconds() {
        let config: ClientConfig = serde_json::from_value(json!({
            "base_url": "https://sandbox.example/rest/",
            "credentials": {"username": "merchant", "password": "secret"},
            "timeout": 30,
            "user_agent": "shop/1.0"
        }))
        .unwrap();
        assert_eq!(config.base_url, "https://sandbox.example/rest/");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent.as_deref(), Some("shop/1.0"));
    }

    #[test]
    fn test_debug_hides_password() {
        let config = ClientConfig::new("merchant", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
