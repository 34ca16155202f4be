//! Error types for the directory client.
//!
//! The taxonomy distinguishes failures that happen before any network I/O
//! (missing or expired session) from transport failures, server-reported
//! failures, and undecodable responses.

use chrono::{DateTime, Utc};
use copper_hornet_session::SessionError;
use std::fmt;

/// Errors from directory-client operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An authenticated call was attempted with no session token; refused
    /// before any request was sent.
    Unauthenticated,
    /// The session token passed its configured expiry; refused before any
    /// request was sent.
    SessionExpired { expired_at: DateTime<Utc> },
    /// A sign-in was attempted on an already-authenticated client.
    AlreadyAuthenticated,
    /// The login step of the sign-in handshake failed.
    LoginFailed { detail: String },
    /// The request never reached the backend (network, DNS, timeout).
    Transport { details: String },
    /// The backend answered with a non-success status.
    Api { status: u16, detail: String },
    /// The response body could not be decoded.
    Decode { details: String },
    /// The client could not be constructed from its configuration.
    Configuration { details: String },
}

impl DirectoryError {
    /// Returns true if the failure happened before any request was sent.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::SessionExpired { .. } | Self::AlreadyAuthenticated
        )
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => {
                write!(f, "not authenticated; sign in first")
            }
            Self::SessionExpired { expired_at } => {
                write!(f, "session expired at {expired_at}; sign in again")
            }
            Self::AlreadyAuthenticated => {
                write!(f, "client is already signed in")
            }
            Self::LoginFailed { detail } => {
                write!(f, "sign-in failed: {detail}")
            }
            Self::Transport { details } => {
                write!(f, "transport failure: {details}")
            }
            Self::Api { status, detail } => {
                write!(f, "directory service returned {status}: {detail}")
            }
            Self::Decode { details } => {
                write!(f, "failed to decode response: {details}")
            }
            Self::Configuration { details } => {
                write!(f, "invalid client configuration: {details}")
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

impl From<SessionError> for DirectoryError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unauthenticated => Self::Unauthenticated,
            SessionError::Expired { expired_at } => Self::SessionExpired { expired_at },
            SessionError::AlreadyAuthenticated => Self::AlreadyAuthenticated,
            SessionError::LoginFailed { source } => Self::LoginFailed {
                detail: source.to_string(),
            },
        }
    }
}
