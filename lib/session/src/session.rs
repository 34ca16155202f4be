//! The session manager: owner of the session token.
//!
//! A `Session` is an explicitly owned object, passed by reference to
//! whatever issues authenticated requests. It has a single writer (the
//! login success path inside `sign_in`) and any number of readers via
//! `authorization_header`.

use crate::error::SessionError;
use crate::gateway::IdentityGateway;
use crate::state::SessionState;
use crate::token::{IdentityAssertion, SessionToken};
use chrono::Duration;
use tracing::{debug, instrument, warn};

/// Holds the session token and drives the sign-in handshake.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    token: Option<SessionToken>,
    /// Client-side time-to-live applied to freshly granted tokens.
    token_ttl: Option<Duration>,
}

impl Session {
    /// Creates an unauthenticated session.
    ///
    /// `token_ttl` is the client-side expiry applied to tokens obtained by
    /// `sign_in`; `None` disables expiry handling.
    #[must_use]
    pub fn new(token_ttl: Option<Duration>) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            token: None,
            token_ttl,
        }
    }

    /// Returns the current handshake state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the current session token, if one is held.
    #[must_use]
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Returns true if a sign-in has succeeded and the token is unexpired.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
            && self.token.as_ref().is_some_and(|t| !t.is_expired())
    }

    /// Builds the `Authorization` header value for an authenticated call.
    ///
    /// # Errors
    ///
    /// Fails with `Unauthenticated` when no token is held and `Expired`
    /// when the held token passed its configured expiry. Callers must treat
    /// either as "do not send the request".
    pub fn authorization_header(&self) -> Result<String, SessionError> {
        let token = self.token.as_ref().ok_or(SessionError::Unauthenticated)?;
        if token.is_expired() {
            return Err(SessionError::Expired {
                // Expired implies an expiry was configured.
                expired_at: token.expires_at().unwrap_or_else(chrono::Utc::now),
            });
        }
        Ok(token.header_value())
    }

    /// Runs the registration-then-login handshake.
    ///
    /// Registration is best-effort: its outcome is logged and the pipeline
    /// continues regardless, since "already registered" and "newly
    /// registered" are equivalent to the client. Login failure leaves the
    /// session unauthenticated and is surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyAuthenticated` without touching the gateway when a
    /// token is already held, and `LoginFailed` when the token exchange is
    /// refused.
    #[instrument(skip_all, fields(state = %self.state))]
    pub async fn sign_in<G>(
        &mut self,
        gateway: &G,
        assertion: IdentityAssertion,
    ) -> Result<(), SessionError>
    where
        G: IdentityGateway + ?Sized,
    {
        if self.state == SessionState::Authenticated {
            return Err(SessionError::AlreadyAuthenticated);
        }

        self.state = SessionState::Registering;
        match gateway.register(&assertion).await {
            Ok(()) => debug!("identity registered"),
            Err(e) => warn!(error = %e, "registration failed; continuing to login"),
        }

        self.state = SessionState::LoggingIn;
        match gateway.login(&assertion).await {
            Ok(grant) => {
                self.token = Some(SessionToken::new(grant.access_token, self.token_ttl));
                self.state = SessionState::Authenticated;
                debug!("session established");
                Ok(())
            }
            Err(source) => {
                self.token = None;
                self.state = SessionState::Unauthenticated;
                Err(SessionError::LoginFailed { source })
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}
