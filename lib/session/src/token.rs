//! Credential types exchanged during the sign-in handshake.
//!
//! Two distinct credential kinds flow through the client:
//! - An identity assertion from the external identity provider, sent under
//!   the `Token` scheme to the registration and login endpoints only.
//! - A session token issued by the directory service, sent under the
//!   `Bearer` scheme on every authenticated call.
//!
//! The two schemes authenticate against different backend checks and are
//! never unified.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed authorization-scheme literals understood by the directory
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScheme {
    /// Identity assertion from the external provider (pre-session).
    Token,
    /// Session token issued by the directory service.
    Bearer,
}

impl AuthScheme {
    /// Returns the scheme literal as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "Token",
            Self::Bearer => "Bearer",
        }
    }

    /// Builds an `Authorization` header value from this scheme and a secret.
    #[must_use]
    pub fn header_value(self, secret: &str) -> String {
        format!("{} {}", self.as_str(), secret)
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque identity assertion from the external identity provider.
///
/// Assertions are short-lived: one is produced per sign-in event, consumed
/// by the registration/login handshake, and discarded. They are never
/// attached to ordinary API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAssertion(String);

impl IdentityAssertion {
    /// Wraps the assertion string received from the provider callback.
    #[must_use]
    pub fn new(assertion: impl Into<String>) -> Self {
        Self(assertion.into())
    }

    /// Returns the assertion as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the `Authorization` header value for the handshake endpoints.
    #[must_use]
    pub fn header_value(&self) -> String {
        AuthScheme::Token.header_value(&self.0)
    }
}

impl From<String> for IdentityAssertion {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IdentityAssertion {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A session token issued by the directory service.
///
/// The token itself carries no client-visible expiry, so the client records
/// when it was issued and applies a configured time-to-live. An expired
/// token is refused before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The opaque access-token string.
    secret: String,
    /// When the token was obtained.
    issued_at: DateTime<Utc>,
    /// When the client stops trusting the token. `None` disables expiry.
    expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    /// Creates a token issued now, valid for the given duration.
    #[must_use]
    pub fn new(secret: String, ttl: Option<Duration>) -> Self {
        let now = Utc::now();
        Self {
            secret,
            issued_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    /// Returns the opaque token string.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns when the token was obtained.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the client stops trusting the token, if expiry is
    /// enabled.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns true if the token is past its configured expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => false,
        }
    }

    /// Builds the `Authorization` header value for authenticated API calls.
    #[must_use]
    pub fn header_value(&self) -> String {
        AuthScheme::Bearer.header_value(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_literals() {
        assert_eq!(AuthScheme::Token.as_str(), "Token");
        assert_eq!(AuthScheme::Bearer.as_str(), "Bearer");
    }

    #[test]
    fn assertion_header_uses_token_scheme() {
        let assertion = IdentityAssertion::new("abc123");
        assert_eq!(assertion.header_value(), "Token abc123");
    }

    #[test]
    fn session_token_header_uses_bearer_scheme() {
        let token = SessionToken::new("xyz789".to_string(), None);
        assert_eq!(token.header_value(), "Bearer xyz789");
    }

    #[test]
    fn token_without_ttl_never_expires() {
        let token = SessionToken::new("t".to_string(), None);
        assert!(token.expires_at().is_none());
        assert!(!token.is_expired());
    }

    #[test]
    fn token_with_negative_ttl_is_expired() {
        let token = SessionToken::new("t".to_string(), Some(Duration::seconds(-1)));
        assert!(token.is_expired());
    }

    #[test]
    fn token_with_future_ttl_is_valid() {
        let token = SessionToken::new("t".to_string(), Some(Duration::hours(1)));
        assert!(!token.is_expired());
        assert!(token.expires_at().expect("expiry set") > token.issued_at());
    }

    #[test]
    fn assertion_from_str() {
        let assertion: IdentityAssertion = "abc123".into();
        assert_eq!(assertion.as_str(), "abc123");
    }

    #[test]
    fn session_token_serde_roundtrip() {
        let token = SessionToken::new("xyz789".to_string(), Some(Duration::hours(24)));
        let json = serde_json::to_string(&token).expect("serialize");
        let parsed: SessionToken = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, token);
    }
}
