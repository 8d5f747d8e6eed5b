//! Registration configuration

use std::time::Duration;

pub const API_URL_ENV: &str = "EML_API_URL";
pub const REGISTER_PATH_ENV: &str = "EML_REGISTER_PATH";
pub const TIMEOUT_SECS_ENV: &str = "EML_TIMEOUT_SECS";

/// Where and how to reach the registration API.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use eml_lib::RegistrationConfig;
///
/// let config = RegistrationConfig::default()
///     .with_api_url("https://api.example.com")
///     .with_timeout(Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Base URL of the API.
    ///
    /// Default: `http://localhost:3000`
    pub api_url: String,

    /// Path of the user registration endpoint, relative to `api_url`.
    ///
    /// Default: `/api/users`
    pub register_path: String,

    /// Request timeout. `None` waits indefinitely.
    ///
    /// Default: 30 seconds
    pub timeout: Option<Duration>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            register_path: "/api/users".to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl RegistrationConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults for
    /// missing or unparsable values. A timeout of `0` disables the timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.api_url = url;
        }
        if let Some(path) = lookup(REGISTER_PATH_ENV) {
            config.register_path = path;
        }
        if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Ignoring invalid {}: {:?}", TIMEOUT_SECS_ENV, raw),
            }
        }

        config
    }

    /// Sets the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the registration endpoint path.
    pub fn with_register_path(mut self, path: impl Into<String>) -> Self {
        self.register_path = path.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(RegistrationConfig::from_lookup(|_| None), RegistrationConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = RegistrationConfig::from_lookup(lookup_in(&[
            (API_URL_ENV, "https://api.eml.dev"),
            (REGISTER_PATH_ENV, "/users"),
            (TIMEOUT_SECS_ENV, "5"),
        ]));
        assert_eq!(config.api_url, "https://api.eml.dev");
        assert_eq!(config.register_path, "/users");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_timeout_zero_and_garbage() {
        let config = RegistrationConfig::from_lookup(lookup_in(&[(TIMEOUT_SECS_ENV, "0")]));
        assert_eq!(config.timeout, None);

        let config = RegistrationConfig::from_lookup(lookup_in(&[(TIMEOUT_SECS_ENV, "soon")]));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
