// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

pub mod application;
pub mod job;
pub mod resume;
pub mod session;
pub mod user;

// Application Domain
pub use application::{validate_application, Application, ApplicationStatus};

// Job Domain
pub use job::Job;

// Resume Domain
pub use resume::Resume;

// Session Domain
pub use session::Session;

// User Domain
pub use user::{Role, User};

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Match score {0} is outside 0..=100")]
    MatchScoreOutOfRange(f32),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown application status: {0}")]
    UnknownStatus(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
