// src/repositories/credential_repository.rs
//
// Durable storage for the signed-in identity

use chrono::Utc;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Role, User};
use crate::error::{AppError, AppResult};

/// The `{user, token}` pair written on login and read back on startup.
/// Always persisted and erased as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedCredential {
    pub user: User,
    pub token: String,
}

/// Durable credential storage, surviving process restarts.
///
/// `clear` is idempotent: clearing an empty store is a no-op, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialRepository: Send + Sync {
    fn load(&self) -> AppResult<Option<PersistedCredential>>;
    fn save(&self, credential: &PersistedCredential) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct SqliteCredentialRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCredentialRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map the single session row. A role string this build doesn't know
    /// makes the whole row unusable, reported as a conversion failure so
    /// `load` can treat it as an absent credential.
    fn row_to_credential(row: &Row) -> Result<PersistedCredential, rusqlite::Error> {
        let user_id: i64 = row.get("user_id")?;
        let username: String = row.get("username")?;

        let role_str: String = row.get("role")?;
        let role = Role::parse(&role_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let token: String = row.get("token")?;

        Ok(PersistedCredential {
            user: User {
                id: user_id,
                username,
                role,
            },
            token,
        })
    }
}

impl CredentialRepository for SqliteCredentialRepository {
    fn load(&self) -> AppResult<Option<PersistedCredential>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT user_id, username, role, token FROM session WHERE id = 1",
        )?;

        match stmt.query_row([], Self::row_to_credential) {
            Ok(credential) => Ok(Some(credential)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(rusqlite::Error::ToSqlConversionFailure(e)) => {
                // Malformed stored identity: treat as signed out rather than
                // rendering protected content for an unverifiable role.
                log::warn!("Discarding unreadable stored credential: {}", e);
                Ok(None)
            }
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn save(&self, credential: &PersistedCredential) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO session (id, user_id, username, role, token, saved_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            params![
                credential.user.id,
                credential.user.username,
                credential.user.role.to_string(),
                credential.token,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        // Zero rows deleted is fine; clearing is idempotent.
        conn.execute("DELETE FROM session WHERE id = 1", [])?;

        Ok(())
    }
}
