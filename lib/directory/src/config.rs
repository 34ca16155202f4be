//! Client configuration.
//!
//! Strongly-typed configuration for the directory client, loaded via the
//! `config` crate from `HORNET`-prefixed environment variables
//! (e.g. `HORNET__BASE_URL`, `HORNET__SESSION__DURATION_MINUTES`).

use serde::Deserialize;

/// Directory-client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Root URL of the directory service (e.g. "http://localhost:5432").
    pub base_url: String,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Client-side session-token lifetime in minutes.
    /// Matches the backend's 86400-second token expiration by default.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_duration_minutes() -> i64 {
    1440
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration_minutes(),
        }
    }
}

impl DirectoryConfig {
    /// Creates a configuration for the given service root with defaults for
    /// everything else.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: default_timeout_seconds(),
            session: SessionConfig::default(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("HORNET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the client-side token time-to-live.
    #[must_use]
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session.duration_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_minutes, 1440);
    }

    #[test]
    fn new_config_has_defaults() {
        let config = DirectoryConfig::new("http://localhost:5432");
        assert_eq!(config.base_url, "http://localhost:5432");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.session.duration_minutes, 1440);
    }

    #[test]
    fn token_ttl_from_minutes() {
        let config = DirectoryConfig::new("http://localhost:5432");
        assert_eq!(config.token_ttl(), chrono::Duration::hours(24));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{ "base_url": "https://directory.example.com" }"#;
        let config: DirectoryConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.base_url, "https://directory.example.com");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.session.duration_minutes, 1440);
    }
}
