use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task placed in a lane. Only the lane reference matters here: a lane
/// referenced by any task cannot be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub swimlane_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
