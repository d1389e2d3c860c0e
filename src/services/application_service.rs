// src/services/application_service.rs
//
// Application workflow: the admin-side status mutation and the
// applicant-side read path, over a shared in-memory mirror of the last
// fetched application list.
//
// RULES:
// - The mirror only advances after the portal acknowledges a mutation;
//   a rejected mutation leaves it untouched (no optimistic update)
// - The mirror is advisory for reads and may be momentarily stale right
//   after a submission, until the next refresh

use std::sync::{Arc, RwLock};

use tokio::try_join;

use crate::domain::{Application, ApplicationStatus, Job, Role};
use crate::error::{AppError, AppResult};
use crate::integrations::{ApplicationReceipt, RecordStore};
use crate::services::session_service::SessionManager;

/// Batch payload for the posting detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsView {
    pub job: Job,
    pub already_applied: bool,
}

pub struct ApplicationService {
    records: Arc<dyn RecordStore>,
    sessions: Arc<SessionManager>,
    /// Mirror of the most recently fetched list, scoped to the identity
    /// that fetched it.
    mirror: RwLock<Vec<Application>>,
}

impl ApplicationService {
    pub fn new(records: Arc<dyn RecordStore>, sessions: Arc<SessionManager>) -> Self {
        Self {
            records,
            sessions,
            mirror: RwLock::new(Vec::new()),
        }
    }

    /// Fetch the application list for the current identity and replace the
    /// mirror: every application for an admin, own applications otherwise.
    pub async fn refresh(&self) -> AppResult<Vec<Application>> {
        let applications = match self.sessions.role() {
            Some(Role::Admin) => self.records.list_all_applications().await?,
            Some(Role::Applicant) => self.records.list_my_applications().await?,
            None => return Err(AppError::Authentication),
        };

        *self.mirror.write().unwrap() = applications.clone();
        Ok(applications)
    }

    /// Snapshot of the mirror.
    pub fn cached(&self) -> Vec<Application> {
        self.mirror.read().unwrap().clone()
    }

    /// Mirror entries matching `filter`, or all of them when it is None.
    pub fn filtered_by_status(&self, filter: Option<ApplicationStatus>) -> Vec<Application> {
        let mirror = self.mirror.read().unwrap();
        match filter {
            Some(status) => mirror
                .iter()
                .filter(|a| a.status == status)
                .cloned()
                .collect(),
            None => mirror.clone(),
        }
    }

    /// Move an application to `new_status`. Admin only.
    ///
    /// The mirrored entry is updated in place only after the portal
    /// acknowledges, so the visible list reflects the change without a
    /// re-fetch; any rejection leaves the mirror untouched and propagates
    /// so the caller can offer a retry.
    pub async fn set_status(
        &self,
        application_id: i64,
        new_status: ApplicationStatus,
    ) -> AppResult<()> {
        match self.sessions.role() {
            Some(Role::Admin) => {}
            Some(_) => return Err(AppError::Authorization),
            None => return Err(AppError::Authentication),
        }

        self.records.update_status(application_id, new_status).await?;

        let mut mirror = self.mirror.write().unwrap();
        if let Some(application) = mirror.iter_mut().find(|a| a.id == application_id) {
            application.status = new_status;
        }

        log::info!("Application {} moved to {}", application_id, new_status);
        Ok(())
    }

    /// Submit an application for the current applicant.
    ///
    /// The mirror is NOT updated here; it stays stale until the next
    /// `refresh`, which the uniqueness check below tolerates.
    pub async fn submit(&self, job_id: i64, resume_id: i64) -> AppResult<ApplicationReceipt> {
        match self.sessions.role() {
            Some(Role::Applicant) => {}
            Some(_) => return Err(AppError::Authorization),
            None => return Err(AppError::Authentication),
        }

        let receipt = self.records.create_application(job_id, resume_id).await?;
        log::info!(
            "Submitted application for job {} (initial status {})",
            job_id,
            receipt.status
        );
        Ok(receipt)
    }

    /// Advisory duplicate check against the mirror. The authoritative
    /// one-application-per-job constraint lives on the portal.
    pub fn has_applied(&self, job_id: i64) -> bool {
        self.mirror
            .read()
            .unwrap()
            .iter()
            .any(|a| a.job_id == job_id)
    }

    /// Batch load for the posting detail view: the job plus a fresh copy of
    /// the caller's applications for the already-applied banner. Either both
    /// fetches succeed or the whole load fails.
    pub async fn load_job_details(&self, job_id: i64) -> AppResult<JobDetailsView> {
        let (job, applications) = try_join!(
            self.records.fetch_job(job_id),
            self.records.list_my_applications()
        )?;

        let already_applied = applications.iter().any(|a| a.job_id == job_id);
        *self.mirror.write().unwrap() = applications;

        Ok(JobDetailsView {
            job,
            already_applied,
        })
    }
}
