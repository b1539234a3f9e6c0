//! API key sources.
//!
//! The client asks its [`CredentialProvider`] for a key whenever the caller
//! did not pass `key` explicitly. A missing key is not an error here: the
//! request goes out without one and the API's rejection is reported.

use std::fmt;

/// Environment variable read by [`EnvCredentials::default`]
pub const API_KEY_ENV: &str = "SHODAN_API_KEY";

/// Supplies the fallback API key
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// The key to use, if one is configured
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Read from a specific variable
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|k| !k.is_empty())
    }
}

/// A fixed key
#[derive(Clone)]
pub struct StaticCredentials {
    key: String,
}

impl StaticCredentials {
    /// Use `key` for every request
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        Some(self.key.clone())
    }
}

/// Never supplies a key
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn api_key(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_key_is_returned_and_redacted() {
        let creds = StaticCredentials::new("s3cret");
        assert_eq!(creds.api_key().as_deref(), Some("s3cret"));
        assert!(!format!("{creds:?}").contains("s3cret"));
    }

    #[test]
    fn unset_variable_yields_nothing() {
        let creds = EnvCredentials::new("SHODAN_TOOLS_TEST_UNSET_VARIABLE");
        assert_eq!(creds.api_key(), None);
        assert_eq!(NoCredentials.api_key(), None);
    }
}
