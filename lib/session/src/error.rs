//! Error types for the session crate.
//!
//! `GatewayError` (in the gateway module) covers wire-level handshake
//! failures; `SessionError` covers lifecycle failures surfaced to callers
//! of the session manager.

use crate::gateway::GatewayError;
use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle failures of the session manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No login has succeeded; an authenticated call was refused before any
    /// network I/O.
    Unauthenticated,
    /// The session token passed its configured expiry.
    Expired { expired_at: DateTime<Utc> },
    /// The login step of the handshake failed; the session stays
    /// unauthenticated.
    LoginFailed { source: GatewayError },
    /// A sign-in was attempted on an already-authenticated session.
    AlreadyAuthenticated,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => {
                write!(f, "no session token; sign in first")
            }
            Self::Expired { expired_at } => {
                write!(f, "session token expired at {expired_at}")
            }
            Self::LoginFailed { source } => {
                write!(f, "login failed: {source}")
            }
            Self::AlreadyAuthenticated => {
                write!(f, "session is already authenticated")
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LoginFailed { source } => Some(source),
            _ => None,
        }
    }
}
