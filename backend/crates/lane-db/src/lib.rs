pub mod connection;
pub mod error;
pub mod repositories;
pub mod services;

#[cfg(test)]
mod tests;

pub use connection::database::{open, open_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::swim_lane_repository::SwimLaneRepository;
pub use repositories::task_repository::TaskRepository;
pub use services::lane_ordering_service::{LaneOrderingService, LaneSettings};
pub use services::project_lifecycle_hook::ProjectLifecycleHook;
pub use services::project_locks::ProjectLocks;
