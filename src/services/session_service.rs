// src/services/session_service.rs
//
// Session Manager - single authority over identity
//
// RULES:
// - The in-memory session is only ever mutated here
// - Durable storage is written/erased BEFORE the in-memory update, so an
//   interruption between the two favors the durable copy on next restore
// - Everything else reads the session as an immutable snapshot

use std::sync::{Arc, RwLock};

use crate::domain::{Role, Session, User};
use crate::error::{AppError, AppResult};
use crate::integrations::{CredentialStore, PortalClient};
use crate::repositories::{CredentialRepository, PersistedCredential};

/// One fixed sentence for every expected sign-in failure. Bad credentials
/// and transport faults must be indistinguishable to the caller.
const LOGIN_FAILED: &str = "Unable to sign in with the provided credentials";

const REGISTER_FAILED: &str = "Unable to create the account";

/// Result of a login attempt. Expected failures are data, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success(User),
    Failure { message: String },
}

/// Result of an account creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Success,
    Failure { message: String },
}

pub struct SessionManager {
    session: RwLock<Session>,
    credentials: Arc<dyn CredentialStore>,
    storage: Arc<dyn CredentialRepository>,
    transport: Arc<PortalClient>,
}

impl SessionManager {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        storage: Arc<dyn CredentialRepository>,
        transport: Arc<PortalClient>,
    ) -> Self {
        Self {
            session: RwLock::new(Session::anonymous()),
            credentials,
            storage,
            transport,
        }
    }

    /// Rebuild the session from durable storage.
    ///
    /// Runs during application bootstrap, before any view renders, so a
    /// signed-out user never sees a flash of protected content. A missing
    /// or unreadable stored credential resolves to "no session".
    pub fn restore(&self) -> AppResult<()> {
        match self.storage.load()? {
            Some(credential) => {
                self.transport.install_token(&credential.token);
                *self.session.write().unwrap() =
                    Session::authenticated(credential.user.clone(), credential.token);
                log::info!(
                    "Restored session for {} ({})",
                    credential.user.username,
                    credential.user.role
                );
            }
            None => {
                log::debug!("No persisted session to restore");
            }
        }
        Ok(())
    }

    /// Exchange credentials for a session.
    ///
    /// Expected failures (rejected credentials, unreachable portal) are
    /// normalized into `LoginOutcome::Failure` with the same message; only
    /// local faults such as a failed persistence write return `Err`.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let grant = match self.credentials.login(username, password).await {
            Ok(grant) => grant,
            Err(AppError::Authentication)
            | Err(AppError::Authorization)
            | Err(AppError::Validation(_))
            | Err(AppError::Remote(_)) => {
                log::info!("Login failed for {}", username);
                return Ok(LoginOutcome::Failure {
                    message: LOGIN_FAILED.to_string(),
                });
            }
            Err(other) => return Err(other),
        };

        // Durable copy first; only then the in-memory state and the token.
        self.storage.save(&PersistedCredential {
            user: grant.user.clone(),
            token: grant.token.clone(),
        })?;
        self.transport.install_token(&grant.token);
        *self.session.write().unwrap() =
            Session::authenticated(grant.user.clone(), grant.token);

        log::info!("Signed in {} ({})", grant.user.username, grant.user.role);
        Ok(LoginOutcome::Success(grant.user))
    }

    /// Create an applicant account. Never signs the new account in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<RegisterOutcome> {
        match self.credentials.register(username, email, password).await {
            Ok(()) => Ok(RegisterOutcome::Success),
            // The portal's rejection text ("User already exists!") is safe
            // to show inline next to the form.
            Err(AppError::Validation(message)) => Ok(RegisterOutcome::Failure { message }),
            Err(AppError::Authentication) | Err(AppError::Remote(_)) => {
                Ok(RegisterOutcome::Failure {
                    message: REGISTER_FAILED.to_string(),
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Clear the session everywhere: durable storage, the installed
    /// transport credential, and memory. Idempotent.
    pub fn logout(&self) -> AppResult<()> {
        self.storage.clear()?;
        self.transport.discard_token();
        self.session.write().unwrap().clear();

        log::info!("Signed out");
        Ok(())
    }

    /// Immutable snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().unwrap().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().unwrap().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().unwrap().role()
    }
}
