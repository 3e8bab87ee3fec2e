pub mod error;
pub mod models;
pub mod ordering;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::lane::Lane;
pub use models::lane_changes::LaneChanges;
pub use models::lane_status::LaneStatus;
pub use models::new_lane::NewLane;
pub use models::project::Project;
pub use models::task::Task;
pub use ordering::LanePosition;

/// Name given to the lane every project receives on creation.
pub const DEFAULT_LANE_NAME: &str = "Default swimlane";

/// Upper bound applied to lane names when no configured limit is supplied.
pub const DEFAULT_MAX_LANE_NAME_LENGTH: usize = 200;
