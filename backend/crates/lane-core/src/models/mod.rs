pub mod lane;
pub mod lane_changes;
pub mod lane_status;
pub mod new_lane;
pub mod project;
pub mod task;
