//! Lane entity - a named horizontal partition of a project's board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lane (swimlane) belonging to a project.
///
/// `position` is the 1-based rank among the project's active lanes and is
/// always 0 while the lane is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub id: i64,
    pub project_id: i64,

    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,

    pub position: i32,
    pub is_active: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lane {
    /// The default lane carries no flag; it is recognised by name only.
    pub fn is_default(&self, default_lane_name: &str) -> bool {
        self.name == default_lane_name
    }
}
