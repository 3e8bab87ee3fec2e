pub mod project_repository;
pub mod swim_lane_repository;
pub mod task_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

/// Convert a stored unix timestamp (seconds) back into a `DateTime`.
#[track_caller]
pub(crate) fn from_timestamp(
    table: &'static str,
    column: &str,
    seconds: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        DbError::invalid_row(table, format!("invalid timestamp {seconds} in {column}"))
    })
}
