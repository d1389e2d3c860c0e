use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting, owned by the portal. The client only ever holds
/// read-through copies; a copy is invalidated by re-fetching, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub posting_date: DateTime<Utc>,
}
