//! Core domain types and utilities for the copper-hornet client.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout the copper-hornet directory-service client.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{InvitationId, OrganizationId, ParseIdError, PartnerId, UserId};
