// src/integrations/portal/credential_store.rs
//
// Remote credential store: login and account creation.
// The portal validates passwords and issues bearer tokens; this module only
// speaks its wire format and never stores anything.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{Role, User};
use crate::error::{AppError, AppResult};
use crate::integrations::portal::client::PortalClient;

/// What a successful login yields: the identity plus the issued credential.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginGrant {
    pub user: User,
    pub token: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exchange credentials for a bearer token and identity.
    /// Rejected credentials surface as `AppError::Authentication`.
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginGrant>;

    /// Create a new applicant account. Does not sign it in.
    /// A duplicate username/email surfaces as `AppError::Validation`.
    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<()>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user_id: i64,
    username: String,
    role: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

pub struct HttpCredentialStore {
    client: Arc<PortalClient>,
}

impl HttpCredentialStore {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CredentialStore for HttpCredentialStore {
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginGrant> {
        let response: LoginResponse = self
            .client
            .post_json("/api/login", &LoginRequest { username, password })
            .await?;

        let role = Role::parse(&response.role)
            .map_err(|_| AppError::Remote(format!("Portal returned unknown role: {}", response.role)))?;

        Ok(LoginGrant {
            user: User {
                id: response.user_id,
                username: response.username,
                role,
            },
            token: response.token,
        })
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<()> {
        // Body is a confirmation message; nothing in it matters to us.
        let _: serde_json::Value = self
            .client
            .post_json(
                "/api/register",
                &RegisterRequest {
                    username,
                    email,
                    password,
                },
            )
            .await?;

        Ok(())
    }
}
