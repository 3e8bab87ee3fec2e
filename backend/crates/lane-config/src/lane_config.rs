use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_LANE_NAME: &str = "Default swimlane";

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

/// Lane naming rules.
///
/// `default_lane_name` is the lane every new project starts with. Lanes
/// carrying this name are left out when a project's lanes are duplicated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaneConfig {
    pub default_lane_name: String,
    /// Maximum lane name length, in characters
    pub max_name_length: usize,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            default_lane_name: String::from(DEFAULT_LANE_NAME),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl LaneConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&self.max_name_length) {
            return Err(ConfigError::lanes(format!(
                "lanes.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        let name = self.default_lane_name.trim();
        if name.is_empty() {
            return Err(ConfigError::lanes("lanes.default_lane_name cannot be blank"));
        }

        if name.chars().count() > self.max_name_length {
            return Err(ConfigError::lanes(format!(
                "lanes.default_lane_name is longer than lanes.max_name_length ({})",
                self.max_name_length
            )));
        }

        Ok(())
    }
}
