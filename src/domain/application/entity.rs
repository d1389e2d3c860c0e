use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A submitted application for a job posting.
/// Authoritative state lives on the portal; the client holds a mirror that
/// is only advanced after the portal acknowledges a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Portal-assigned identifier
    pub id: i64,

    /// The posting this application targets
    pub job_id: i64,

    /// The applicant account that submitted it
    pub applicant_id: i64,

    /// The résumé attached at submission time
    pub resume_id: i64,

    /// Submission timestamp
    pub application_date: DateTime<Utc>,

    /// Current review state
    pub status: ApplicationStatus,

    /// Compatibility number computed server-side at creation, 0..=100.
    /// Opaque and immutable from the client's perspective.
    pub match_score: f32,

    /// Denormalized for display: title of the targeted job
    pub job_title: String,

    /// Denormalized for display, present only on the admin listing
    pub applicant_name: Option<String>,

    /// Denormalized for display, present only on the admin listing
    pub applicant_email: Option<String>,
}

/// Review state of an application.
///
/// The portal currently allows an admin to move an application from any
/// state to any other state, reverting included. The graph is still kept
/// explicit here so tightening it later is a local edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Interviewed,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interviewed,
        ApplicationStatus::Rejected,
    ];

    /// Parse a status string from the wire.
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "pending" => Ok(ApplicationStatus::Pending),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "interviewed" => Ok(ApplicationStatus::Interviewed),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }

    /// States reachable from `self`: every state except itself.
    pub fn allowed_transitions(self) -> Vec<ApplicationStatus> {
        Self::ALL.iter().copied().filter(|s| *s != self).collect()
    }

    /// Whether `next` is a transition (self-edges are not transitions;
    /// setting the current status again is a portal-side no-op).
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        next != self
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Shortlisted => write!(f, "shortlisted"),
            ApplicationStatus::Interviewed => write!(f, "interviewed"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}
