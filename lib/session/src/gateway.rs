//! Transport seam for the sign-in handshake.
//!
//! The session manager drives registration and login through the
//! `IdentityGateway` trait; the HTTP implementation lives in the directory
//! client, and tests use an in-memory fake.

use crate::token::IdentityAssertion;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

/// The token grant returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    /// The access token to use as the session token.
    pub access_token: String,
}

/// Wire-level failures of the handshake endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never reached the backend (network, DNS, timeout).
    Transport { details: String },
    /// The backend answered with a non-success status.
    Rejected { status: u16, detail: String },
    /// The backend answered success but the grant could not be decoded.
    InvalidGrant { details: String },
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { details } => {
                write!(f, "transport failure: {details}")
            }
            Self::Rejected { status, detail } => {
                write!(f, "rejected with status {status}: {detail}")
            }
            Self::InvalidGrant { details } => {
                write!(f, "invalid token grant: {details}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

/// Backend endpoints consumed by the sign-in handshake.
///
/// Both operations carry the identity assertion under the `Token` scheme.
/// Registration is idempotent from the caller's point of view: an
/// "already registered" rejection is not distinguished from a fresh
/// registration by the pipeline.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Registers the external identity with the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level or the
    /// backend rejects it. The sign-in pipeline logs and ignores either
    /// outcome.
    async fn register(&self, assertion: &IdentityAssertion) -> Result<(), GatewayError>;

    /// Exchanges the identity assertion for a session-token grant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend refuses the
    /// exchange; the session then stays unauthenticated.
    async fn login(&self, assertion: &IdentityAssertion) -> Result<TokenGrant, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = GatewayError::Transport {
            details: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("transport failure"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn rejected_error_display() {
        let err = GatewayError::Rejected {
            status: 401,
            detail: "token is not authorized".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("not authorized"));
    }

    #[test]
    fn token_grant_deserializes() {
        let grant: TokenGrant =
            serde_json::from_str(r#"{"access_token":"xyz789"}"#).expect("deserialize");
        assert_eq!(grant.access_token, "xyz789");
    }

    #[test]
    fn token_grant_rejects_missing_field() {
        let result: Result<TokenGrant, _> = serde_json::from_str(r#"{"token":"xyz789"}"#);
        assert!(result.is_err());
    }
}
