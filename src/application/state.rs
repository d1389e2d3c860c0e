// src/application/state.rs

use std::sync::Arc;

use crate::config::Config;
use crate::db::{create_pool_at, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::integrations::{HttpCredentialStore, HttpRecordStore, PortalClient, RecordStore};
use crate::repositories::SqliteCredentialRepository;
use crate::services::{AccessGate, ApplicationService, JobService, SessionManager};

/// Shared application state.
/// All fields are Arc-wrapped for thread-safe sharing across the UI layer.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub sessions: Arc<SessionManager>,
    pub gate: Arc<AccessGate>,
    pub jobs: Arc<JobService>,
    pub applications: Arc<ApplicationService>,
}

impl AppState {
    /// Wire the whole client: database, portal transport, services.
    ///
    /// The persisted session is restored here, before any view can render,
    /// so the first navigation already sees the signed-in identity.
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let db_path = config.database_path()?;
        let pool = Arc::new(create_pool_at(&db_path)?);

        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }
        log::info!("Session database ready at {}", db_path.display());

        let transport = Arc::new(PortalClient::new(&config.portal_url));
        let storage = Arc::new(SqliteCredentialRepository::new(Arc::clone(&pool)));
        let credentials = Arc::new(HttpCredentialStore::new(Arc::clone(&transport)));
        let records: Arc<dyn RecordStore> =
            Arc::new(HttpRecordStore::new(Arc::clone(&transport)));

        let sessions = Arc::new(SessionManager::new(credentials, storage, transport));
        sessions.restore()?;

        let gate = Arc::new(AccessGate::new(Arc::clone(&sessions)));
        let jobs = Arc::new(JobService::new(Arc::clone(&records)));
        let applications = Arc::new(ApplicationService::new(records, Arc::clone(&sessions)));

        Ok(Self {
            pool,
            sessions,
            gate,
            jobs,
            applications,
        })
    }
}
