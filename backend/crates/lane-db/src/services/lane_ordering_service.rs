//! Lane CRUD and position maintenance for a project's board.
//!
//! ## Position invariant
//!
//! Within a project the active lanes always hold positions `1..=N` with no
//! gaps or duplicates; inactive lanes hold position 0. Every mutating
//! operation:
//!
//! 1. takes the project's lock from [`ProjectLocks`],
//! 2. opens one write transaction with `BEGIN IMMEDIATE`,
//! 3. reads the active-lane snapshot and computes the new positions with
//!    the pure functions in [`lane_core::ordering`],
//! 4. writes only the rows that changed and commits.
//!
//! Returning early drops the transaction, which rolls it back. The project
//! lock keeps writers of one project in order; the immediate write lock
//! makes writers of different projects queue on SQLite's busy timeout.
//!
//! ## Failure reporting
//!
//! Business-rule failures (unknown lane, lane of another project, inactive
//! lane passed to `change_position`, position out of range, lane still
//! referenced by a task) are reported as `Ok(false)` and logged at `warn`.
//! Lookups report "not found" as `None`. Only storage failures and invalid
//! lane names come back as `Err`.

use crate::connection::database::begin_write;
use crate::{
    ProjectLifecycleHook, ProjectLocks, Result as DbErrorResult, SwimLaneRepository,
    TaskRepository,
};

use lane_core::ordering::{self, LanePosition};
use lane_core::validation::validate_lane_name;
use lane_core::{
    DEFAULT_LANE_NAME, DEFAULT_MAX_LANE_NAME_LENGTH, Lane, LaneChanges, LaneStatus, NewLane,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use sqlx::{SqliteConnection, SqlitePool};

/// Knobs the service reads from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSettings {
    /// Name of the lane created with every project. Lanes with this name
    /// are skipped when duplicating a project's lanes.
    pub default_lane_name: String,
    pub max_name_length: usize,
}

impl Default for LaneSettings {
    fn default() -> Self {
        Self {
            default_lane_name: DEFAULT_LANE_NAME.to_string(),
            max_name_length: DEFAULT_MAX_LANE_NAME_LENGTH,
        }
    }
}

#[derive(Clone)]
pub struct LaneOrderingService {
    pool: SqlitePool,
    locks: ProjectLocks,
    settings: LaneSettings,
}

impl LaneOrderingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_settings(pool, LaneSettings::default())
    }

    pub fn with_settings(pool: SqlitePool, settings: LaneSettings) -> Self {
        Self {
            pool,
            locks: ProjectLocks::new(),
            settings,
        }
    }

    // =====================================================================
    // Creation
    // =====================================================================

    /// Append a new active lane after the project's last active lane and
    /// return its id.
    pub async fn create(&self, lane: NewLane) -> DbErrorResult<i64> {
        let name = validate_lane_name(&lane.name, self.settings.max_name_length)?;
        let lane = NewLane { name, ..lane };

        let _guard = self.locks.acquire(lane.project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let position = SwimLaneRepository::last_position(&mut *tx, lane.project_id).await? + 1;
        let lane_id =
            SwimLaneRepository::create(&mut *tx, &lane, position, true, Utc::now()).await?;

        tx.commit().await?;

        debug!(
            "Created lane {} '{}' in project {} at position {}",
            lane_id, lane.name, lane.project_id, position
        );

        Ok(lane_id)
    }

    /// Copy every non-default lane of `source_project_id` into
    /// `target_project_id`, in creation order. Active copies are appended
    /// after the target's active lanes; inactive copies keep position 0.
    pub async fn duplicate(
        &self,
        source_project_id: i64,
        target_project_id: i64,
    ) -> DbErrorResult<bool> {
        let _guard = self.locks.acquire(target_project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let copied = self
            .duplicate_lanes(&mut tx, source_project_id, target_project_id)
            .await?;

        tx.commit().await?;

        debug!(
            "Duplicated {} lanes from project {} into project {}",
            copied, source_project_id, target_project_id
        );

        Ok(true)
    }

    // =====================================================================
    // Lookups
    // =====================================================================

    /// Highest position among the project's active lanes (0 when none).
    pub async fn get_last_position(&self, project_id: i64) -> DbErrorResult<i32> {
        SwimLaneRepository::last_position(&self.pool, project_id).await
    }

    pub async fn count_active(&self, project_id: i64) -> DbErrorResult<i64> {
        SwimLaneRepository::count_active(&self.pool, project_id).await
    }

    pub async fn get_by_id(&self, lane_id: i64) -> DbErrorResult<Option<Lane>> {
        SwimLaneRepository::find_by_id(&self.pool, lane_id).await
    }

    pub async fn get_by_name(&self, project_id: i64, name: &str) -> DbErrorResult<Option<Lane>> {
        SwimLaneRepository::find_by_name(&self.pool, project_id, name).await
    }

    pub async fn get_id_by_name(&self, project_id: i64, name: &str) -> DbErrorResult<Option<i64>> {
        Ok(self
            .get_by_name(project_id, name)
            .await?
            .map(|lane| lane.id))
    }

    pub async fn get_name_by_id(&self, lane_id: i64) -> DbErrorResult<Option<String>> {
        Ok(self.get_by_id(lane_id).await?.map(|lane| lane.name))
    }

    /// All lanes of the project: active ones by position, then inactive
    /// ones by name.
    pub async fn get_all(&self, project_id: i64) -> DbErrorResult<Vec<Lane>> {
        SwimLaneRepository::find_by_project(&self.pool, project_id).await
    }

    /// Active lanes by position, or inactive lanes by id.
    pub async fn get_all_by_status(
        &self,
        project_id: i64,
        status: LaneStatus,
    ) -> DbErrorResult<Vec<Lane>> {
        SwimLaneRepository::find_by_status(&self.pool, project_id, status.is_active()).await
    }

    /// `(id, name)` pairs in [`get_all`](Self::get_all) order.
    pub async fn get_list(&self, project_id: i64) -> DbErrorResult<Vec<(i64, String)>> {
        Ok(self
            .get_all(project_id)
            .await?
            .into_iter()
            .map(|lane| (lane.id, lane.name))
            .collect())
    }

    pub async fn get_first_active_lane(&self, project_id: i64) -> DbErrorResult<Option<Lane>> {
        SwimLaneRepository::find_first_active(&self.pool, project_id).await
    }

    pub async fn get_first_active_lane_id(&self, project_id: i64) -> DbErrorResult<Option<i64>> {
        Ok(self
            .get_first_active_lane(project_id)
            .await?
            .map(|lane| lane.id))
    }

    // =====================================================================
    // Mutations
    // =====================================================================

    /// Change a lane's name, description or color. Position and the active
    /// flag are left alone. Returns `false` when the lane does not exist.
    pub async fn update(&self, changes: LaneChanges) -> DbErrorResult<bool> {
        let mut changes = changes;
        if let Some(name) = &changes.name {
            changes.name = Some(validate_lane_name(name, self.settings.max_name_length)?);
        }

        if changes.is_empty() {
            return Ok(self.get_by_id(changes.id).await?.is_some());
        }

        let updated = SwimLaneRepository::update(&self.pool, &changes, Utc::now()).await?;
        if updated == 0 {
            warn!("update: lane {} not found", changes.id);
            return Ok(false);
        }

        debug!("Updated lane {}", changes.id);

        Ok(true)
    }

    /// Deactivate a lane and close the gap it leaves.
    pub async fn disable(&self, project_id: i64, lane_id: i64) -> DbErrorResult<bool> {
        let _guard = self.locks.acquire(project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let Some(lane) = Self::find_in_project(&mut tx, project_id, lane_id, "disable").await?
        else {
            return Ok(false);
        };

        if !lane.is_active {
            return Ok(true);
        }

        let active = SwimLaneRepository::find_active_positions(&mut *tx, project_id).await?;
        let now = Utc::now();

        SwimLaneRepository::set_status(&mut *tx, lane_id, false, 0, now).await?;
        Self::write_positions(&mut tx, &ordering::compact(&active, lane_id), now).await?;

        tx.commit().await?;

        debug!(
            "Disabled lane {} of project {} (was position {})",
            lane_id, project_id, lane.position
        );

        Ok(true)
    }

    /// Reactivate a lane at the end of the active lanes. The lane never
    /// returns to the slot it held before being disabled.
    pub async fn enable(&self, project_id: i64, lane_id: i64) -> DbErrorResult<bool> {
        let _guard = self.locks.acquire(project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let Some(lane) = Self::find_in_project(&mut tx, project_id, lane_id, "enable").await?
        else {
            return Ok(false);
        };

        if lane.is_active {
            return Ok(true);
        }

        let position = SwimLaneRepository::last_position(&mut *tx, project_id).await? + 1;
        SwimLaneRepository::set_status(&mut *tx, lane_id, true, position, Utc::now()).await?;

        tx.commit().await?;

        debug!(
            "Enabled lane {} of project {} at position {}",
            lane_id, project_id, position
        );

        Ok(true)
    }

    /// Delete a lane no task references. Removing an active lane compacts
    /// the remaining positions exactly like [`disable`](Self::disable).
    pub async fn remove(&self, project_id: i64, lane_id: i64) -> DbErrorResult<bool> {
        let _guard = self.locks.acquire(project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let Some(lane) = Self::find_in_project(&mut tx, project_id, lane_id, "remove").await?
        else {
            return Ok(false);
        };

        let references = TaskRepository::count_by_lane(&mut *tx, lane_id).await?;
        if references > 0 {
            warn!(
                "remove: lane {} of project {} is referenced by {} task(s)",
                lane_id, project_id, references
            );
            return Ok(false);
        }

        let active = if lane.is_active {
            SwimLaneRepository::find_active_positions(&mut *tx, project_id).await?
        } else {
            Vec::new()
        };

        SwimLaneRepository::delete(&mut *tx, lane_id).await?;

        if lane.is_active {
            Self::write_positions(&mut tx, &ordering::compact(&active, lane_id), Utc::now())
                .await?;
        }

        tx.commit().await?;

        debug!("Removed lane {} of project {}", lane_id, project_id);

        Ok(true)
    }

    /// Move an active lane to `new_position` (1-based), shifting the lanes
    /// in between by one slot.
    pub async fn change_position(
        &self,
        project_id: i64,
        lane_id: i64,
        new_position: i32,
    ) -> DbErrorResult<bool> {
        let _guard = self.locks.acquire(project_id).await;
        let mut tx = begin_write(&self.pool).await?;

        let Some(lane) =
            Self::find_in_project(&mut tx, project_id, lane_id, "change_position").await?
        else {
            return Ok(false);
        };

        if !lane.is_active {
            warn!(
                "change_position: lane {} of project {} is inactive",
                lane_id, project_id
            );
            return Ok(false);
        }

        let active = SwimLaneRepository::find_active_positions(&mut *tx, project_id).await?;
        let updates = match ordering::reposition(&active, lane_id, new_position) {
            Ok(updates) => updates,
            Err(e) => {
                warn!("change_position: rejected for lane {}: {}", lane_id, e);
                return Ok(false);
            }
        };

        Self::write_positions(&mut tx, &updates, Utc::now()).await?;

        tx.commit().await?;

        debug!(
            "Moved lane {} of project {} from position {} to {}",
            lane_id, project_id, lane.position, new_position
        );

        Ok(true)
    }

    // =====================================================================
    // Helpers
    // =====================================================================

    /// Load a lane and check it belongs to `project_id`.
    async fn find_in_project(
        conn: &mut SqliteConnection,
        project_id: i64,
        lane_id: i64,
        operation: &str,
    ) -> DbErrorResult<Option<Lane>> {
        match SwimLaneRepository::find_by_id(&mut *conn, lane_id).await? {
            Some(lane) if lane.project_id == project_id => Ok(Some(lane)),
            Some(lane) => {
                warn!(
                    "{}: lane {} belongs to project {}, not {}",
                    operation, lane_id, lane.project_id, project_id
                );
                Ok(None)
            }
            None => {
                warn!("{}: lane {} not found", operation, lane_id);
                Ok(None)
            }
        }
    }

    async fn write_positions(
        conn: &mut SqliteConnection,
        updates: &[LanePosition],
        now: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        for update in updates {
            SwimLaneRepository::set_position(&mut *conn, update.lane_id, update.position, now)
                .await?;
        }

        Ok(())
    }

    async fn duplicate_lanes(
        &self,
        conn: &mut SqliteConnection,
        source_project_id: i64,
        target_project_id: i64,
    ) -> DbErrorResult<usize> {
        let lanes =
            SwimLaneRepository::find_by_project_in_creation_order(&mut *conn, source_project_id)
                .await?;
        let mut position = SwimLaneRepository::last_position(&mut *conn, target_project_id).await?;
        let now = Utc::now();
        let mut copied = 0;

        for lane in lanes
            .iter()
            .filter(|lane| !lane.is_default(&self.settings.default_lane_name))
        {
            let copy = NewLane {
                project_id: target_project_id,
                name: lane.name.clone(),
                description: lane.description.clone(),
                color: lane.color.clone(),
            };

            let copy_position = if lane.is_active {
                position += 1;
                position
            } else {
                0
            };

            SwimLaneRepository::create(&mut *conn, &copy, copy_position, lane.is_active, now)
                .await?;
            copied += 1;
        }

        Ok(copied)
    }
}

#[async_trait]
impl ProjectLifecycleHook for LaneOrderingService {
    /// Give the new project its default lane at position 1.
    async fn on_project_created(
        &self,
        conn: &mut SqliteConnection,
        project_id: i64,
    ) -> DbErrorResult<()> {
        let position = SwimLaneRepository::last_position(&mut *conn, project_id).await? + 1;
        let lane = NewLane::new(project_id, self.settings.default_lane_name.clone());
        let lane_id =
            SwimLaneRepository::create(&mut *conn, &lane, position, true, Utc::now()).await?;

        debug!(
            "Created default lane {} for project {}",
            lane_id, project_id
        );

        Ok(())
    }

    async fn on_project_duplicated(
        &self,
        conn: &mut SqliteConnection,
        source_id: i64,
        target_id: i64,
    ) -> DbErrorResult<()> {
        self.duplicate_lanes(conn, source_id, target_id).await?;
        Ok(())
    }
}
