use lane_db::{LaneOrderingService, ProjectRepository};

use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    lane_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Service plus a project repository wired to it, sharing one pool
pub struct TestContext {
    pub pool: SqlitePool,
    pub lanes: LaneOrderingService,
    pub projects: ProjectRepository,
}

pub async fn create_test_context() -> TestContext {
    let pool = create_test_pool().await;
    let lanes = LaneOrderingService::new(pool.clone());
    let projects = ProjectRepository::new(pool.clone(), Arc::new(lanes.clone()));

    TestContext {
        pool,
        lanes,
        projects,
    }
}

/// Same wiring over a database file with `max_connections` pooled
/// connections. The directory lives as long as the returned `TempDir`.
pub async fn create_file_test_context(max_connections: u32) -> (TempDir, TestContext) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = lane_db::open(&dir.path().join("lanes.db"), max_connections)
        .await
        .expect("Failed to open file-backed test pool");
    let lanes = LaneOrderingService::new(pool.clone());
    let projects = ProjectRepository::new(pool.clone(), Arc::new(lanes.clone()));

    (
        dir,
        TestContext {
            pool,
            lanes,
            projects,
        },
    )
}
