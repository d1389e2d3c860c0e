// src/services/job_service.rs
//
// Read paths over the remote job store, plus the batched loads the
// dashboard and apply-form views issue together. A batch either resolves
// completely or fails completely; no partial-success view state.

use std::sync::Arc;

use tokio::try_join;

use crate::domain::{Job, Resume};
use crate::error::AppResult;
use crate::integrations::{PortalStats, RecordStore};

/// Batch payload for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardView {
    pub jobs: Vec<Job>,
    pub stats: PortalStats,
}

/// Batch payload for the application form.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyFormView {
    pub job: Job,
    pub resumes: Vec<Resume>,
}

pub struct JobService {
    records: Arc<dyn RecordStore>,
}

impl JobService {
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }

    /// Open postings for the applicant dashboard.
    pub async fn list_jobs(&self) -> AppResult<Vec<Job>> {
        self.records.list_jobs().await
    }

    /// A single posting. An absent id is `AppError::NotFound`, which views
    /// render as a dedicated not-found state, distinct from failure.
    pub async fn fetch_job(&self, job_id: i64) -> AppResult<Job> {
        self.records.fetch_job(job_id).await
    }

    /// Admin dashboard: postings and portal counters, fetched concurrently.
    pub async fn load_admin_dashboard(&self) -> AppResult<AdminDashboardView> {
        let (jobs, stats) = try_join!(self.records.list_jobs(), self.records.fetch_stats())?;
        Ok(AdminDashboardView { jobs, stats })
    }

    /// Apply form: the targeted posting and the caller's résumés, fetched
    /// concurrently.
    pub async fn load_apply_form(&self, job_id: i64) -> AppResult<ApplyFormView> {
        let (job, resumes) = try_join!(
            self.records.fetch_job(job_id),
            self.records.list_resumes()
        )?;
        Ok(ApplyFormView { job, resumes })
    }
}
