// src/config.rs
//
// Environment-backed configuration. Every variable has a working default
// so a plain `jobhub` setup runs against a local portal without a .env.

use std::path::PathBuf;

use anyhow::Result;

use crate::db::get_database_path;
use crate::error::AppResult;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hiring portal API.
    pub portal_url: String,
    /// Optional override for the session database file.
    pub database_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let database_file = match std::env::var("JOBHUB_DATABASE_FILE") {
            Ok(value) if !value.trim().is_empty() => Some(PathBuf::from(value)),
            _ => None,
        };

        Ok(Config {
            portal_url: std::env::var("JOBHUB_PORTAL_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            database_file,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Where the session database lives: the override if one is set,
    /// otherwise the per-user data directory.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.database_file {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_override_wins() {
        let config = Config {
            portal_url: "http://localhost:5000".to_string(),
            database_file: Some(PathBuf::from("/tmp/jobhub-test.db")),
            rust_log: "info".to_string(),
        };

        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/jobhub-test.db")
        );
    }
}
