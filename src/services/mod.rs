// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod access_gate;
pub mod application_service;
pub mod job_service;
pub mod session_service;

#[cfg(test)]
mod session_service_tests;

// Re-export all services and their types
pub use access_gate::{Access, AccessGate, Route};

pub use application_service::{ApplicationService, JobDetailsView};

pub use job_service::{AdminDashboardView, ApplyFormView, JobService};

pub use session_service::{LoginOutcome, RegisterOutcome, SessionManager};
