//! Wire models for the directory service.
//!
//! Field names and enum values follow the backend's serialization exactly;
//! identifiers are backend-assigned integers wrapped in the core ID types.

use copper_hornet_core::{InvitationId, OrganizationId, PartnerId, UserId};
use serde::{Deserialize, Serialize};

/// The authenticated user's account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user ID.
    pub id: UserId,
    /// Subject identifier from the external identity provider.
    pub google_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Deactivated accounts keep their record; signing up again reactivates.
    pub is_deleted: bool,
}

/// An organization the user belongs to or administers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
}

/// A partner's role within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    Admin,
    Member,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    #[serde(rename = "type")]
    pub kind: PartnerType,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub is_deleted: bool,
    pub user_id: UserId,
    pub organization_id: OrganizationId,
    /// Present when the membership was established through an invitation.
    pub invitation_id: Option<InvitationId>,
}

/// The lifecycle state of an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Cancelled,
}

/// An invitation to join an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: InvitationId,
    /// Unique code the invitee redeems to accept.
    pub code: String,
    pub email: String,
    pub status: InvitationStatus,
    pub organization_id: OrganizationId,
}

/// Request body for `PUT /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Request body for `POST /me/organizations` and `PUT /organizations/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationName {
    pub name: String,
}

/// Request body for `POST /organizations/{id}/invitations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 1,
            "google_id": "123456789",
            "firstname": "John",
            "lastname": "Doe",
            "email": "john@example.org",
            "is_deleted": false
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.id, UserId::from_raw(1));
        assert_eq!(user.google_id, "123456789");
        assert_eq!(user.firstname, "John");
        assert!(!user.is_deleted);
    }

    #[test]
    fn organization_deserializes() {
        let json = r#"{ "id": 1, "name": "My Organization" }"#;
        let org: Organization = serde_json::from_str(json).expect("deserialize");
        assert_eq!(org.id, OrganizationId::from_raw(1));
        assert_eq!(org.name, "My Organization");
    }

    #[test]
    fn partner_deserializes_with_type_field() {
        let json = r#"{
            "id": 3,
            "type": "admin",
            "firstname": "John",
            "lastname": "Doe",
            "email": "john@example.org",
            "is_deleted": false,
            "user_id": 1,
            "organization_id": 2,
            "invitation_id": null
        }"#;

        let partner: Partner = serde_json::from_str(json).expect("deserialize");
        assert_eq!(partner.kind, PartnerType::Admin);
        assert_eq!(partner.user_id, UserId::from_raw(1));
        assert_eq!(partner.organization_id, OrganizationId::from_raw(2));
        assert!(partner.invitation_id.is_none());
    }

    #[test]
    fn invitation_deserializes_with_status() {
        let json = r#"{
            "id": 1,
            "code": "12345678-1234-1234-1234-123456789012",
            "email": "john@example.org",
            "status": "pending",
            "organization_id": 1
        }"#;

        let invitation: Invitation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(invitation.status, InvitationStatus::Pending);
        assert_eq!(invitation.code, "12345678-1234-1234-1234-123456789012");
    }

    #[test]
    fn invitation_status_values() {
        for (value, status) in [
            ("\"pending\"", InvitationStatus::Pending),
            ("\"accepted\"", InvitationStatus::Accepted),
            ("\"cancelled\"", InvitationStatus::Cancelled),
        ] {
            let parsed: InvitationStatus = serde_json::from_str(value).expect("deserialize");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn profile_update_serializes_backend_fields() {
        let update = ProfileUpdate {
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            email: "john@example.org".to_string(),
        };

        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "firstname": "John",
                "lastname": "Doe",
                "email": "john@example.org"
            })
        );
    }
}
