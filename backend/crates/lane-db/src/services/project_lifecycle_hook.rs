use crate::Result as DbErrorResult;

use async_trait::async_trait;
use sqlx::SqliteConnection;

/// Callbacks the project repository runs inside its own transaction.
#[async_trait]
pub trait ProjectLifecycleHook: Send + Sync {
    /// A project was just inserted.
    async fn on_project_created(
        &self,
        conn: &mut SqliteConnection,
        project_id: i64,
    ) -> DbErrorResult<()>;

    /// `target_id` was created as a clone of `source_id`.
    /// Runs after [`on_project_created`](Self::on_project_created) for the target.
    async fn on_project_duplicated(
        &self,
        conn: &mut SqliteConnection,
        source_id: i64,
        target_id: i64,
    ) -> DbErrorResult<()>;
}
