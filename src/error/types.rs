// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, expired or rejected credential. Handled by redirecting to
    /// the login view, never rendered as a form error.
    #[error("Authentication required")]
    Authentication,

    /// Valid identity, insufficient role. Handled by a silent redirect to
    /// the role's home view; no user-visible error text.
    #[error("Access denied")]
    Authorization,

    /// Malformed input, shown inline near the offending field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network or server fault on a remote call.
    #[error("Portal error: {0}")]
    Remote(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote(err.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
