//! HTTP client for the copper-hornet organization-management API.
//!
//! This crate provides:
//! - `DirectoryClient`: the authenticated API client, owner of the session
//! - Wire models (`User`, `Organization`, `Partner`, `Invitation`)
//! - The client error taxonomy (`DirectoryError`)
//! - Configuration (`DirectoryConfig`), loaded from the environment
//!
//! The sign-in handshake itself lives in `copper-hornet-session`; this
//! crate supplies the HTTP transport for it and everything downstream of
//! the session token.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use client::DirectoryClient;
pub use config::{DirectoryConfig, SessionConfig};
pub use error::DirectoryError;
pub use models::{
    Invitation, InvitationRequest, InvitationStatus, Organization, OrganizationName, Partner,
    PartnerType, ProfileUpdate, User,
};
