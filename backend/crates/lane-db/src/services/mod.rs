pub mod lane_ordering_service;
pub mod project_lifecycle_hook;
pub mod project_locks;
