//! Values returned by the provider.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Profile JSON object, passed through as returned by the graph.
pub type Profile = serde_json::Map<String, serde_json::Value>;

/// Bearer credential issued by the token endpoint.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(SecretString::new(token))
    }

    /// Expose the token, e.g. to store it or hand it to the graph.
    pub fn secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.secret() == other.secret()
    }
}

impl Eq for AccessToken {}
