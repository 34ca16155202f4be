//! Session-authentication handshake and token lifecycle for copper-hornet.
//!
//! This crate provides:
//! - Credential types (`IdentityAssertion`, `SessionToken`, `AuthScheme`)
//! - The sign-in state machine (`SessionState`)
//! - The session manager (`Session`) driving the registration-then-login
//!   pipeline through the `IdentityGateway` transport trait
//!
//! # Handshake
//!
//! A sign-in event from the external identity provider yields an opaque
//! identity assertion. The assertion is registered with the backend
//! (best-effort; "already registered" is not an error to the client) and
//! then exchanged for a session token at the login endpoint. The session
//! token authorizes every subsequent API call under the `Bearer` scheme;
//! the assertion itself is only ever sent under the `Token` scheme and is
//! discarded after the handshake.
//!
//! # Example
//!
//! ```
//! use copper_hornet_session::{Session, SessionState};
//!
//! let session = Session::default();
//! assert_eq!(session.state(), SessionState::Unauthenticated);
//!
//! // No token yet: building an Authorization header fails before any
//! // request is issued.
//! assert!(session.authorization_header().is_err());
//! ```

pub mod error;
pub mod gateway;
pub mod session;
pub mod state;
pub mod token;

// Re-export main types at crate root
pub use error::SessionError;
pub use gateway::{GatewayError, IdentityGateway, TokenGrant};
pub use session::Session;
pub use state::SessionState;
pub use token::{AuthScheme, IdentityAssertion, SessionToken};
