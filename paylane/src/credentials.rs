//! HTTP Basic Auth credentials for a PayLane merchant account.

use std::fmt;

use serde::Deserialize;

/// Username and password sent with every request as HTTP Basic Auth.
///
/// Deserializable so callers can keep credentials in their own configuration
/// files. The type is not `Serialize` and its `Debug` output never includes
/// the password.
///
/// # Example
///
/// ```rust
/// use paylane::Credentials;
///
/// let credentials = Credentials::new("merchant", "secret");
/// assert_eq!(credentials.username(), "merchant");
/// assert!(!format!("{credentials:?}").contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the API username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
