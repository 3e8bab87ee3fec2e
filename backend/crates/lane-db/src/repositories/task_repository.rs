use crate::repositories::from_timestamp;
use crate::{DbError, Result as DbErrorResult};

use lane_core::Task;

use chrono::{DateTime, Utc};

const TABLE: &str = "tasks";

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    project_id: i64,
    swimlane_id: i64,
    title: String,
    created_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: row.id,
            project_id: row.project_id,
            swimlane_id: row.swimlane_id,
            title: row.title,
            created_at: from_timestamp(TABLE, "created_at", row.created_at)?,
        })
    }
}

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(
        executor: E,
        project_id: i64,
        swimlane_id: i64,
        title: &str,
        now: DateTime<Utc>,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO tasks (project_id, swimlane_id, title, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(project_id)
        .bind(swimlane_id)
        .bind(title)
        .bind(now.timestamp())
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, project_id, swimlane_id, title, created_at
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .map(Task::try_from)
        .transpose()
    }

    /// Number of tasks placed in the lane. A non-zero count blocks removal.
    pub async fn count_by_lane<'e, E>(executor: E, swimlane_id: i64) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE swimlane_id = ?")
            .bind(swimlane_id)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
