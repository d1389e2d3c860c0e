use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded résumé. Applications reference it by id; the file itself
/// stays on the portal and is never duplicated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub owner_id: i64,
    pub upload_date: DateTime<Utc>,
    pub file_path: String,
}
