//! Sign-in state machine.
//!
//! The session moves `Unauthenticated` -> `Registering` -> `LoggingIn` ->
//! `Authenticated`, or falls back to `Unauthenticated` when login fails.
//! `Authenticated` is terminal for the session's lifetime; recovery from a
//! failed sign-in is a fresh attempt on an unauthenticated session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The phase of the sign-in handshake a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No sign-in has succeeded; authenticated calls are refused.
    Unauthenticated,
    /// The identity assertion is being registered with the backend.
    Registering,
    /// The assertion is being exchanged for a session token.
    LoggingIn,
    /// A session token is held; authenticated calls may proceed.
    Authenticated,
}

impl SessionState {
    /// Returns true if a transition from `self` to `next` is legal.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Unauthenticated, Self::Registering)
                | (Self::Registering, Self::LoggingIn)
                | (Self::LoggingIn, Self::Authenticated)
                | (Self::LoggingIn, Self::Unauthenticated)
        )
    }

    /// Returns true if a sign-in attempt is in flight.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::Registering | Self::LoggingIn)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Registering => "registering",
            Self::LoggingIn => "logging_in",
            Self::Authenticated => "authenticated",
        };
        f.write_str(s)
    }
}
