use crate::common::TestContext;

use lane_core::{Lane, LaneStatus, NewLane};
use lane_db::TaskRepository;

use chrono::Utc;

/// Creates a project (and its default lane) and returns its id
pub async fn create_test_project(ctx: &TestContext, name: &str) -> i64 {
    ctx.projects
        .create(name)
        .await
        .expect("Failed to create test project")
}

/// Creates an active lane at the end of the project and returns its id
pub async fn create_test_lane(ctx: &TestContext, project_id: i64, name: &str) -> i64 {
    ctx.lanes
        .create(NewLane::new(project_id, name))
        .await
        .expect("Failed to create test lane")
}

/// Creates a task placed in `lane_id` and returns its id
pub async fn create_test_task(ctx: &TestContext, project_id: i64, lane_id: i64) -> i64 {
    TaskRepository::create(&ctx.pool, project_id, lane_id, "test", Utc::now())
        .await
        .expect("Failed to create test task")
}

/// Loads a lane that must exist
pub async fn lane(ctx: &TestContext, lane_id: i64) -> Lane {
    ctx.lanes
        .get_by_id(lane_id)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("lane {lane_id} should exist"))
}

/// `(id, position)` of the active lanes, in position order
pub async fn active_ids_and_positions(ctx: &TestContext, project_id: i64) -> Vec<(i64, i32)> {
    ctx.lanes
        .get_all_by_status(project_id, LaneStatus::Active)
        .await
        .unwrap()
        .into_iter()
        .map(|lane| (lane.id, lane.position))
        .collect()
}

/// Asserts active positions are exactly 1..=N and inactive ones are 0
pub async fn assert_dense(ctx: &TestContext, project_id: i64) {
    let lanes = ctx.lanes.get_all(project_id).await.unwrap();
    let mut active: Vec<i32> = lanes
        .iter()
        .filter(|lane| lane.is_active)
        .map(|lane| lane.position)
        .collect();
    active.sort_unstable();

    let expected: Vec<i32> = (1..=active.len() as i32).collect();
    assert_eq!(active, expected, "active positions must be dense");

    assert!(
        lanes
            .iter()
            .filter(|lane| !lane.is_active)
            .all(|lane| lane.position == 0),
        "inactive lanes must sit at position 0"
    );
}
