//! HTTP client for the directory service.
//!
//! `DirectoryClient` owns the HTTP connection pool, the service root URL,
//! and the session. Every authenticated call builds its `Authorization`
//! header from the session before any I/O happens, so a missing or expired
//! token fails with a typed error instead of a malformed request.

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::models::{
    Invitation, InvitationRequest, Organization, OrganizationName, Partner, ProfileUpdate, User,
};
use async_trait::async_trait;
use copper_hornet_core::{InvitationId, OrganizationId};
use copper_hornet_session::{
    GatewayError, IdentityAssertion, IdentityGateway, Session, TokenGrant,
};
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use rootcause::Report;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Client for the organization-management API.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl DirectoryClient {
    /// Creates an unauthenticated client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &DirectoryConfig) -> Result<Self, Report<DirectoryError>> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| DirectoryError::Configuration {
                details: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Session::new(Some(config.token_ttl())),
        })
    }

    /// Returns the session owned by this client.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns true if a sign-in has succeeded and the token is unexpired.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Runs the registration-then-login handshake against the backend.
    ///
    /// Registration is best-effort and never aborts the pipeline; a refused
    /// login leaves the client unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `LoginFailed` when the token exchange is refused and
    /// `AlreadyAuthenticated` when the client already holds a token.
    #[instrument(skip_all)]
    pub async fn sign_in(
        &mut self,
        assertion: IdentityAssertion,
    ) -> Result<(), Report<DirectoryError>> {
        let bridge = IdentityBridge {
            http: &self.http,
            base_url: self.base_url.as_str(),
        };
        self.session
            .sign_in(&bridge, assertion)
            .await
            .map_err(DirectoryError::from)?;
        Ok(())
    }

    // --- profile ---

    /// Fetches the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User, Report<DirectoryError>> {
        self.execute(self.authed(Method::GET, "/me")?).await
    }

    /// Updates the authenticated user's profile.
    #[instrument(skip(self, update), fields(email = %update.email))]
    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<User, Report<DirectoryError>> {
        self.execute(self.authed(Method::PUT, "/me")?.json(update))
            .await
    }

    /// Deactivates the authenticated user's account.
    #[instrument(skip(self))]
    pub async fn delete_me(&self) -> Result<(), Report<DirectoryError>> {
        self.execute_no_content(self.authed(Method::DELETE, "/me")?)
            .await
    }

    // --- organizations ---

    /// Lists organizations the authenticated user belongs to.
    #[instrument(skip(self))]
    pub async fn organizations(&self) -> Result<Vec<Organization>, Report<DirectoryError>> {
        let orgs: Vec<Organization> = self
            .execute(self.authed(Method::GET, "/me/organizations")?)
            .await?;
        debug!(count = orgs.len(), "listed organizations");
        Ok(orgs)
    }

    /// Creates an organization with the authenticated user as its admin.
    #[instrument(skip(self))]
    pub async fn create_organization(
        &self,
        name: &str,
    ) -> Result<Organization, Report<DirectoryError>> {
        let body = OrganizationName {
            name: name.to_string(),
        };
        self.execute(self.authed(Method::POST, "/me/organizations")?.json(&body))
            .await
    }

    /// Fetches one organization.
    #[instrument(skip(self))]
    pub async fn organization(
        &self,
        id: OrganizationId,
    ) -> Result<Organization, Report<DirectoryError>> {
        self.execute(self.authed(Method::GET, &format!("/organizations/{id}"))?)
            .await
    }

    /// Renames an organization.
    #[instrument(skip(self))]
    pub async fn rename_organization(
        &self,
        id: OrganizationId,
        name: &str,
    ) -> Result<Organization, Report<DirectoryError>> {
        let body = OrganizationName {
            name: name.to_string(),
        };
        self.execute(
            self.authed(Method::PUT, &format!("/organizations/{id}"))?
                .json(&body),
        )
        .await
    }

    /// Removes an organization.
    #[instrument(skip(self))]
    pub async fn delete_organization(
        &self,
        id: OrganizationId,
    ) -> Result<(), Report<DirectoryError>> {
        self.execute_no_content(self.authed(Method::DELETE, &format!("/organizations/{id}"))?)
            .await
    }

    /// Lists an organization's members.
    #[instrument(skip(self))]
    pub async fn members(
        &self,
        id: OrganizationId,
    ) -> Result<Vec<Partner>, Report<DirectoryError>> {
        let members: Vec<Partner> = self
            .execute(self.authed(Method::GET, &format!("/organizations/{id}/members"))?)
            .await?;
        debug!(count = members.len(), "listed members");
        Ok(members)
    }

    // --- invitations ---

    /// Lists an organization's invitations.
    #[instrument(skip(self))]
    pub async fn invitations(
        &self,
        id: OrganizationId,
    ) -> Result<Vec<Invitation>, Report<DirectoryError>> {
        let invitations: Vec<Invitation> = self
            .execute(self.authed(Method::GET, &format!("/organizations/{id}/invitations"))?)
            .await?;
        debug!(count = invitations.len(), "listed invitations");
        Ok(invitations)
    }

    /// Sends an invitation to the given email address.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn invite(
        &self,
        id: OrganizationId,
        email: &str,
    ) -> Result<Invitation, Report<DirectoryError>> {
        let body = InvitationRequest {
            email: email.to_string(),
        };
        self.execute(
            self.authed(Method::POST, &format!("/organizations/{id}/invitations"))?
                .json(&body),
        )
        .await
    }

    /// Fetches one invitation.
    #[instrument(skip(self))]
    pub async fn invitation(
        &self,
        id: InvitationId,
    ) -> Result<Invitation, Report<DirectoryError>> {
        self.execute(self.authed(Method::GET, &format!("/invitations/{id}"))?)
            .await
    }

    /// Resends a pending invitation.
    #[instrument(skip(self))]
    pub async fn resend_invitation(
        &self,
        id: InvitationId,
    ) -> Result<Invitation, Report<DirectoryError>> {
        self.execute(self.authed(Method::GET, &format!("/invitations/{id}/resend"))?)
            .await
    }

    /// Accepts an invitation by its code, joining the organization.
    #[instrument(skip(self, code))]
    pub async fn accept_invitation(
        &self,
        code: &str,
    ) -> Result<Invitation, Report<DirectoryError>> {
        self.execute(self.authed(Method::GET, &format!("/invitations/{code}/accept"))?)
            .await
    }

    // --- request plumbing ---

    /// Builds an authenticated request, failing before any I/O when the
    /// session has no usable token.
    fn authed(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, DirectoryError> {
        let header = self
            .session
            .authorization_header()
            .map_err(DirectoryError::from)?;
        Ok(self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, header))
    }

    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<T, Report<DirectoryError>>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| DirectoryError::Transport {
            details: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                detail,
            }
            .into());
        }

        let value = response.json::<T>().await.map_err(|e| DirectoryError::Decode {
            details: e.to_string(),
        })?;
        Ok(value)
    }

    async fn execute_no_content(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), Report<DirectoryError>> {
        let response = request.send().await.map_err(|e| DirectoryError::Transport {
            details: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                detail,
            }
            .into());
        }

        Ok(())
    }
}

/// HTTP implementation of the sign-in handshake endpoints.
///
/// Both endpoints carry the identity assertion under the `Token` scheme;
/// the session token is never involved here.
struct IdentityBridge<'a> {
    http: &'a reqwest::Client,
    base_url: &'a str,
}

#[async_trait]
impl IdentityGateway for IdentityBridge<'_> {
    async fn register(&self, assertion: &IdentityAssertion) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .header(AUTHORIZATION, assertion.header_value())
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        debug!("identity registered with backend");
        Ok(())
    }

    async fn login(&self, assertion: &IdentityAssertion) -> Result<TokenGrant, GatewayError> {
        let response = self
            .http
            .get(format!("{}/login", self.base_url))
            .header(AUTHORIZATION, assertion.header_value())
            .send()
            .await
            .map_err(|e| GatewayError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<TokenGrant>()
            .await
            .map_err(|e| GatewayError::InvalidGrant {
                details: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copper_hornet_session::SessionState;

    fn test_client() -> DirectoryClient {
        DirectoryClient::new(&DirectoryConfig::new("http://localhost:5432"))
            .expect("client builds")
    }

    #[test]
    fn new_client_starts_unauthenticated() {
        let client = test_client();
        assert!(!client.is_authenticated());
        assert_eq!(client.session().state(), SessionState::Unauthenticated);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = DirectoryClient::new(&DirectoryConfig::new("http://localhost:5432/"))
            .expect("client builds");
        assert_eq!(client.base_url, "http://localhost:5432");
    }

    #[test]
    fn authed_request_is_refused_without_token() {
        let client = test_client();
        let err = client
            .authed(Method::GET, "/me")
            .expect_err("no token, no request");
        assert_eq!(err, DirectoryError::Unauthenticated);
        assert!(err.is_precondition());
    }

    #[tokio::test]
    async fn authenticated_call_fails_before_any_io() {
        // The base URL points nowhere; if the precondition check let the
        // request through, this would fail with a transport error instead.
        let client = test_client();
        let err = client.me().await.expect_err("refused before I/O");
        let err = format!("{err:?}");
        assert!(err.contains("authenticated"), "unexpected error: {err}");
    }
}
