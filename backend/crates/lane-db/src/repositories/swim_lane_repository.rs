//! Swim lane persistence.
//!
//! All functions are stateless and generic over the executor so the service
//! can run several of them inside one transaction. None of them maintain
//! position density on their own; that is the job of
//! [`LaneOrderingService`](crate::LaneOrderingService).

use crate::repositories::from_timestamp;
use crate::{DbError, Result as DbErrorResult};

use lane_core::{Lane, LaneChanges, LanePosition, NewLane};

use chrono::{DateTime, Utc};

const TABLE: &str = "swimlanes";

#[derive(sqlx::FromRow)]
struct LaneRow {
    id: i64,
    project_id: i64,
    name: String,
    description: Option<String>,
    color: Option<String>,
    position: i64,
    is_active: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<LaneRow> for Lane {
    type Error = DbError;

    fn try_from(row: LaneRow) -> DbErrorResult<Self> {
        Ok(Lane {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            description: row.description,
            color: row.color,
            position: i32::try_from(row.position).map_err(|_| {
                DbError::invalid_row(TABLE, format!("position {} out of range", row.position))
            })?,
            is_active: row.is_active,
            created_at: from_timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: from_timestamp(TABLE, "updated_at", row.updated_at)?,
        })
    }
}

fn into_lanes(rows: Vec<LaneRow>) -> DbErrorResult<Vec<Lane>> {
    rows.into_iter().map(Lane::try_from).collect()
}

pub struct SwimLaneRepository;

impl SwimLaneRepository {
    /// Insert a lane and return the id assigned by the database.
    pub async fn create<'e, E>(
        executor: E,
        lane: &NewLane,
        position: i32,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let timestamp = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO swimlanes (
                    project_id, name, description, color, position, is_active,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(lane.project_id)
        .bind(&lane.name)
        .bind(&lane.description)
        .bind(&lane.color)
        .bind(position)
        .bind(is_active)
        .bind(timestamp)
        .bind(timestamp)
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?
        .map(Lane::try_from)
        .transpose()
    }

    /// First lane (lowest id) of the project carrying `name`.
    pub async fn find_by_name<'e, E>(
        executor: E,
        project_id: i64,
        name: &str,
    ) -> DbErrorResult<Option<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE project_id = ? AND name = ?
                ORDER BY id ASC
                LIMIT 1
            "#,
        )
        .bind(project_id)
        .bind(name)
        .fetch_optional(executor)
        .await?
        .map(Lane::try_from)
        .transpose()
    }

    /// Active lanes by position, then inactive lanes by name (id breaks ties).
    pub async fn find_by_project<'e, E>(executor: E, project_id: i64) -> DbErrorResult<Vec<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE project_id = ?
                ORDER BY is_active DESC, position ASC, name ASC, id ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(executor)
        .await?;

        into_lanes(rows)
    }

    /// Lanes with the given active flag. Inactive lanes all sit at position
    /// 0, so ordering by position then id sorts them by id.
    pub async fn find_by_status<'e, E>(
        executor: E,
        project_id: i64,
        is_active: bool,
    ) -> DbErrorResult<Vec<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE project_id = ? AND is_active = ?
                ORDER BY position ASC, id ASC
            "#,
        )
        .bind(project_id)
        .bind(is_active)
        .fetch_all(executor)
        .await?;

        into_lanes(rows)
    }

    /// Every lane of the project in creation order.
    pub async fn find_by_project_in_creation_order<'e, E>(
        executor: E,
        project_id: i64,
    ) -> DbErrorResult<Vec<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE project_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(executor)
        .await?;

        into_lanes(rows)
    }

    pub async fn find_first_active<'e, E>(
        executor: E,
        project_id: i64,
    ) -> DbErrorResult<Option<Lane>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, LaneRow>(
            r#"
                SELECT id, project_id, name, description, color, position, is_active,
                       created_at, updated_at
                FROM swimlanes
                WHERE project_id = ? AND is_active = 1
                ORDER BY position ASC, id ASC
                LIMIT 1
            "#,
        )
        .bind(project_id)
        .fetch_optional(executor)
        .await?
        .map(Lane::try_from)
        .transpose()
    }

    /// Snapshot of the project's active lanes, ordered by position.
    pub async fn find_active_positions<'e, E>(
        executor: E,
        project_id: i64,
    ) -> DbErrorResult<Vec<LanePosition>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
                SELECT id, position FROM swimlanes
                WHERE project_id = ? AND is_active = 1
                ORDER BY position ASC, id ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(|(lane_id, position)| {
                i32::try_from(position)
                    .map(|position| LanePosition::new(lane_id, position))
                    .map_err(|_| {
                        DbError::invalid_row(TABLE, format!("position {position} out of range"))
                    })
            })
            .collect()
    }

    pub async fn last_position<'e, E>(executor: E, project_id: i64) -> DbErrorResult<i32>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let last: i64 = sqlx::query_scalar(
            r#"
                SELECT COALESCE(MAX(position), 0) FROM swimlanes
                WHERE project_id = ? AND is_active = 1
            "#,
        )
        .bind(project_id)
        .fetch_one(executor)
        .await?;

        i32::try_from(last)
            .map_err(|_| DbError::invalid_row(TABLE, format!("position {last} out of range")))
    }

    pub async fn count_active<'e, E>(executor: E, project_id: i64) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM swimlanes WHERE project_id = ? AND is_active = 1",
        )
        .bind(project_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Apply the non-empty fields of `changes`. Returns the number of rows
    /// touched (0 when the lane does not exist).
    pub async fn update<'e, E>(
        executor: E,
        changes: &LaneChanges,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE swimlanes
                SET name = COALESCE(?, name),
                    description = COALESCE(?, description),
                    color = COALESCE(?, color),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.color)
        .bind(now.timestamp())
        .bind(changes.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn set_status<'e, E>(
        executor: E,
        id: i64,
        is_active: bool,
        position: i32,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE swimlanes
                SET is_active = ?, position = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(is_active)
        .bind(position)
        .bind(now.timestamp())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn set_position<'e, E>(
        executor: E,
        id: i64,
        position: i32,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE swimlanes
                SET position = ?, updated_at = ?
                WHERE id = ? AND is_active = 1
            "#,
        )
        .bind(position)
        .bind(now.timestamp())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete. Returns the number of rows removed.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM swimlanes WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
