use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid lane position: {position} (expected 1..={max}) {location}")]
    InvalidPosition {
        position: i32,
        max: i32,
        location: ErrorLocation,
    },

    #[error("Lane {lane_id} is not an active lane of the project {location}")]
    LaneNotActive {
        lane_id: i64,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
