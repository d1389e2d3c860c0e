// src/integrations/portal/record_store.rs
//
// Remote application record store: jobs, applications, résumés, stats.
// Maps portal rows → domain entities (NO domain mutation); every call is a
// read-through or an acknowledged mutation, never a local source of truth.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{validate_application, Application, ApplicationStatus, Job, Resume};
use crate::error::{AppError, AppResult};
use crate::integrations::portal::client::PortalClient;

/// What the portal acknowledges on application creation. The score is
/// computed server-side and is opaque here.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationReceipt {
    pub status: ApplicationStatus,
    pub match_score: f32,
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PortalStats {
    pub total_users: u64,
    pub total_applicants: u64,
    pub total_jobs: u64,
    pub total_resumes: u64,
    pub total_applications: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Open postings, newest first.
    async fn list_jobs(&self) -> AppResult<Vec<Job>>;

    /// A single posting; absent ids surface as `AppError::NotFound`.
    async fn fetch_job(&self, job_id: i64) -> AppResult<Job>;

    /// The calling applicant's own applications.
    async fn list_my_applications(&self) -> AppResult<Vec<Application>>;

    /// Every application, admin only.
    async fn list_all_applications(&self) -> AppResult<Vec<Application>>;

    /// Submit an application; the portal assigns status and match score.
    async fn create_application(
        &self,
        job_id: i64,
        resume_id: i64,
    ) -> AppResult<ApplicationReceipt>;

    /// Move an application to `status`, admin only. Returns only after the
    /// portal acknowledges.
    async fn update_status(&self, application_id: i64, status: ApplicationStatus)
        -> AppResult<()>;

    /// The calling applicant's uploaded résumés, newest first.
    async fn list_resumes(&self) -> AppResult<Vec<Resume>>;

    /// Aggregate counts for the admin dashboard.
    async fn fetch_stats(&self) -> AppResult<PortalStats>;
}

// ============================================================================
// Wire rows
// ============================================================================

#[derive(Debug, Deserialize)]
struct JobRow {
    id: i64,
    title: String,
    description: String,
    posting_date: String,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    id: i64,
    job_id: i64,
    applicant_id: i64,
    resume_id: i64,
    application_date: String,
    status: String,
    match_score: f32,
    job_title: String,
    // Only the admin listing carries these
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResumeRow {
    id: i64,
    applicant_id: i64,
    upload_date: String,
    file_path: String,
}

#[derive(Debug, Serialize)]
struct CreateApplicationRequest {
    job_id: i64,
    resume_id: i64,
}

#[derive(Debug, Deserialize)]
struct CreateApplicationResponse {
    status: String,
    match_score: f32,
}

#[derive(Debug, Serialize)]
struct StatusUpdateRequest {
    status: String,
}

/// Portal timestamps arrive either as RFC 3339 or as SQLite's
/// `YYYY-MM-DD HH:MM:SS`; both are treated as UTC.
fn parse_portal_datetime(value: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::Remote(format!("Unreadable portal timestamp: {}", value)))
}

impl JobRow {
    fn into_job(self) -> AppResult<Job> {
        Ok(Job {
            id: self.id,
            title: self.title,
            description: self.description,
            posting_date: parse_portal_datetime(&self.posting_date)?,
        })
    }
}

impl ApplicationRow {
    fn into_application(self) -> AppResult<Application> {
        let application = Application {
            id: self.id,
            job_id: self.job_id,
            applicant_id: self.applicant_id,
            resume_id: self.resume_id,
            application_date: parse_portal_datetime(&self.application_date)?,
            status: ApplicationStatus::parse(&self.status)?,
            match_score: self.match_score,
            job_title: self.job_title,
            applicant_name: self.username,
            applicant_email: self.email,
        };

        validate_application(&application)?;
        Ok(application)
    }
}

impl ResumeRow {
    fn into_resume(self) -> AppResult<Resume> {
        Ok(Resume {
            id: self.id,
            owner_id: self.applicant_id,
            upload_date: parse_portal_datetime(&self.upload_date)?,
            file_path: self.file_path,
        })
    }
}

// ============================================================================
// HTTP implementation
// ============================================================================

pub struct HttpRecordStore {
    client: Arc<PortalClient>,
}

impl HttpRecordStore {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        let rows: Vec<JobRow> = self.client.get_json("/api/jobs").await?;
        rows.into_iter().map(JobRow::into_job).collect()
    }

    async fn fetch_job(&self, job_id: i64) -> AppResult<Job> {
        let row: JobRow = self
            .client
            .get_json(&format!("/api/jobs/{}", job_id))
            .await?;
        row.into_job()
    }

    async fn list_my_applications(&self) -> AppResult<Vec<Application>> {
        let rows: Vec<ApplicationRow> = self.client.get_json("/api/applications").await?;
        rows.into_iter().map(ApplicationRow::into_application).collect()
    }

    async fn list_all_applications(&self) -> AppResult<Vec<Application>> {
        let rows: Vec<ApplicationRow> = self.client.get_json("/api/admin/applications").await?;
        rows.into_iter().map(ApplicationRow::into_application).collect()
    }

    async fn create_application(
        &self,
        job_id: i64,
        resume_id: i64,
    ) -> AppResult<ApplicationReceipt> {
        let response: CreateApplicationResponse = self
            .client
            .post_json("/api/applications", &CreateApplicationRequest { job_id, resume_id })
            .await?;

        Ok(ApplicationReceipt {
            status: ApplicationStatus::parse(&response.status)?,
            match_score: response.match_score,
        })
    }

    async fn update_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> AppResult<()> {
        let _: serde_json::Value = self
            .client
            .put_json(
                &format!("/api/admin/applications/{}/status", application_id),
                &StatusUpdateRequest {
                    status: status.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    async fn list_resumes(&self) -> AppResult<Vec<Resume>> {
        let rows: Vec<ResumeRow> = self.client.get_json("/api/resumes").await?;
        rows.into_iter().map(ResumeRow::into_resume).collect()
    }

    async fn fetch_stats(&self) -> AppResult<PortalStats> {
        self.client.get_json("/api/admin/stats").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sqlite_datetime() {
        let parsed = parse_portal_datetime("2026-08-12 09:30:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-12T09:30:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_datetime() {
        let parsed = parse_portal_datetime("2026-08-12T09:30:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-12T09:30:00+00:00");
    }

    #[test]
    fn test_unreadable_datetime_rejected() {
        assert!(parse_portal_datetime("last tuesday").is_err());
    }

    #[test]
    fn test_application_row_mapping() {
        let row = ApplicationRow {
            id: 42,
            job_id: 7,
            applicant_id: 3,
            resume_id: 5,
            application_date: "2026-08-12 09:30:00".to_string(),
            status: "pending".to_string(),
            match_score: 81.0,
            job_title: "Backend Engineer".to_string(),
            username: Some("dana".to_string()),
            email: Some("dana@example.com".to_string()),
        };

        let application = row.into_application().unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.applicant_name.as_deref(), Some("dana"));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let row = ApplicationRow {
            id: 42,
            job_id: 7,
            applicant_id: 3,
            resume_id: 5,
            application_date: "2026-08-12 09:30:00".to_string(),
            status: "pending".to_string(),
            match_score: 120.0,
            job_title: "Backend Engineer".to_string(),
            username: None,
            email: None,
        };

        assert!(row.into_application().is_err());
    }

    #[test]
    fn test_unknown_status_row_rejected() {
        let row = ApplicationRow {
            id: 42,
            job_id: 7,
            applicant_id: 3,
            resume_id: 5,
            application_date: "2026-08-12 09:30:00".to_string(),
            status: "withdrawn".to_string(),
            match_score: 81.0,
            job_title: "Backend Engineer".to_string(),
            username: None,
            email: None,
        };

        assert!(row.into_application().is_err());
    }
}
