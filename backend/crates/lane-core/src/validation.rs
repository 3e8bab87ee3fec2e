use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Trim a lane name and check it is non-blank and within `max_length`
/// characters. Returns the trimmed name.
#[track_caller]
pub fn validate_lane_name(name: &str, max_length: usize) -> CoreErrorResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            message: "lane name cannot be empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let length = trimmed.chars().count();
    if length > max_length {
        return Err(CoreError::Validation {
            message: format!("lane name must be at most {max_length} characters, got {length}"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(trimmed.to_string())
}
