use crate::ProjectLocks;

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test]
async fn given_released_lock_when_other_project_acquires_then_idle_entry_is_dropped() {
    // Given: project 1 was locked and released, project 2 is still held
    let locks = ProjectLocks::new();
    drop(locks.acquire(1).await);
    let _held = locks.acquire(2).await;

    // When
    let _third = locks.acquire(3).await;

    // Then: only the held projects remain tracked
    assert_that!(locks.tracked_projects().await, eq(2));
}

#[tokio::test]
async fn given_many_sequential_projects_when_each_released_then_map_stays_small() {
    let locks = ProjectLocks::new();

    for project_id in 1..=500 {
        let _guard = locks.acquire(project_id).await;
    }

    assert_that!(locks.tracked_projects().await, eq(1));
}

#[tokio::test]
async fn given_held_lock_when_same_project_acquires_then_it_waits() {
    // Given
    let locks = ProjectLocks::new();
    let held = locks.acquire(7).await;

    // When: a second writer on the same project tries while the first holds
    let blocked = tokio::time::timeout(Duration::from_millis(50), locks.acquire(7)).await;

    // Then
    assert_that!(blocked.is_err(), eq(true));

    // And: another project prunes nothing that is still held
    let _other = locks.acquire(8).await;
    assert_that!(locks.tracked_projects().await, eq(2));

    drop(held);
    let reacquired = tokio::time::timeout(Duration::from_millis(500), locks.acquire(7)).await;
    assert_that!(reacquired.is_ok(), eq(true));
}
