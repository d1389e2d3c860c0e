// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Application, Job, Resume, User};
use crate::error::{AppError, AppResult};

// ============================================================================
// ENTITY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub posting_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub application_date: String,
    pub status: String,
    pub match_score: f32,
    pub applicant_name: Option<String>,
    pub applicant_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDto {
    pub id: i64,
    pub upload_date: String,
    pub file_path: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.to_string(),
        }
    }
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            posting_date: job.posting_date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<Application> for ApplicationDto {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            job_title: application.job_title,
            application_date: application.application_date.format("%Y-%m-%d").to_string(),
            status: application.status.to_string(),
            match_score: application.match_score,
            applicant_name: application.applicant_name,
            applicant_email: application.applicant_email,
        }
    }
}

impl From<Resume> for ResumeDto {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.id,
            upload_date: resume.upload_date.format("%Y-%m-%d").to_string(),
            file_path: resume.file_path,
        }
    }
}

// ============================================================================
// VIEW STATE
// ============================================================================

/// What a view renders for a load that may fail.
///
/// `NotFound` and `Denied` are distinct from `Failed` on purpose: an absent
/// record gets a dedicated page, a permission problem redirects, and only
/// genuine faults show the retry banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "payload", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    NotFound,
    Denied,
    Failed { message: String },
}

impl<T> ViewState<T> {
    /// Fold a load result into what the view should render.
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(AppError::NotFound) => ViewState::NotFound,
            Err(AppError::Authentication) | Err(AppError::Authorization) => ViewState::Denied,
            Err(other) => ViewState::Failed {
                message: other.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_user_dto_flattens_role() {
        let dto = UserDto::from(User {
            id: 3,
            username: "dana".to_string(),
            role: Role::Applicant,
        });

        assert_eq!(dto.role, "applicant");
    }

    #[test]
    fn test_job_dto_formats_date() {
        let dto = JobDto::from(Job {
            id: 7,
            title: "Backend Engineer".to_string(),
            description: "Rust, SQL".to_string(),
            posting_date: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        });

        assert_eq!(dto.posting_date, "2026-08-01");
    }

    #[test]
    fn test_view_state_folds_not_found_and_denied_separately() {
        assert_eq!(
            ViewState::<i64>::from_result(Err(AppError::NotFound)),
            ViewState::NotFound
        );
        assert_eq!(
            ViewState::<i64>::from_result(Err(AppError::Authentication)),
            ViewState::Denied
        );
        assert_eq!(
            ViewState::<i64>::from_result(Err(AppError::Authorization)),
            ViewState::Denied
        );
    }

    #[test]
    fn test_view_state_folds_faults_into_failed() {
        let state =
            ViewState::<i64>::from_result(Err(AppError::Remote("connection reset".to_string())));

        assert!(matches!(state, ViewState::Failed { .. }));
        assert!(!state.is_ready());
    }

    #[test]
    fn test_view_state_ready() {
        assert!(ViewState::from_result(Ok(41)).is_ready());
    }
}
