use serde::{Deserialize, Serialize};

/// Fields supplied when creating a lane. Id, position and timestamps are
/// assigned by the service and the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLane {
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl NewLane {
    pub fn new(project_id: i64, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            description: None,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
