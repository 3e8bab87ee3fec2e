//! Project repository.
//!
//! Projects are only created and looked up here. Creation runs the
//! registered [`ProjectLifecycleHook`] inside the same transaction, so a
//! project never becomes visible without its default lane.

use crate::repositories::from_timestamp;
use crate::connection::database::begin_write;
use crate::{DbError, ProjectLifecycleHook, Result as DbErrorResult};

use lane_core::Project;

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;

const TABLE: &str = "projects";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    created_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(row: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: row.id,
            name: row.name,
            created_at: from_timestamp(TABLE, "created_at", row.created_at)?,
        })
    }
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
    hook: Arc<dyn ProjectLifecycleHook>,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool, hook: Arc<dyn ProjectLifecycleHook>) -> Self {
        Self { pool, hook }
    }

    /// Create a project and return its id.
    pub async fn create(&self, name: &str) -> DbErrorResult<i64> {
        let mut tx = begin_write(&self.pool).await?;

        let project_id = Self::insert(&mut *tx, name).await?;
        self.hook.on_project_created(&mut *tx, project_id).await?;

        tx.commit().await?;

        debug!("Created project {} ({})", project_id, name);

        Ok(project_id)
    }

    /// Clone `source_id` into a new project called `name`. Returns `None`
    /// when the source project does not exist.
    pub async fn duplicate(&self, source_id: i64, name: &str) -> DbErrorResult<Option<i64>> {
        let mut tx = begin_write(&self.pool).await?;

        if Self::find_by_id_with(&mut *tx, source_id).await?.is_none() {
            return Ok(None);
        }

        let project_id = Self::insert(&mut *tx, name).await?;
        self.hook.on_project_created(&mut *tx, project_id).await?;
        self.hook
            .on_project_duplicated(&mut *tx, source_id, project_id)
            .await?;

        tx.commit().await?;

        debug!(
            "Duplicated project {} into {} ({})",
            source_id, project_id, name
        );

        Ok(Some(project_id))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        Self::find_by_id_with(&self.pool, id).await
    }

    async fn insert<'e, E>(executor: E, name: &str) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("INSERT INTO projects (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(Utc::now().timestamp())
            .execute(executor)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id_with<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, ProjectRow>("SELECT id, name, created_at FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?
            .map(Project::try_from)
            .transpose()
    }
}
