// src/lib.rs
// JobHub - Client core for the JobHub hiring portal
//
// Architecture:
// - Domain-centric: entities and their invariants live in domain/
// - Remote-authoritative: the portal owns all job and application data;
//   the only local state is the persisted session
// - Explicit: no implicit behavior, no magic
// - Application Layer: UI boundary (DTOs, view state, wiring)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod config;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_application,
    // Application
    Application,
    ApplicationStatus,
    // Job
    Job,
    // Résumé
    Resume,
    Role,
    // Session
    Session,
    // User
    User,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    Access, AccessGate, ApplicationService, JobService, LoginOutcome, RegisterOutcome, Route,
    SessionManager,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ViewState};
pub use config::Config;
