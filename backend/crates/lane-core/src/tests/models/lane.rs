use crate::{DEFAULT_LANE_NAME, Lane, LaneStatus};

use chrono::Utc;

fn lane(id: i64, name: &str, position: i32, is_active: bool) -> Lane {
    let now = Utc::now();
    Lane {
        id,
        project_id: 1,
        name: name.to_string(),
        description: None,
        color: None,
        position,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_lane_is_default_by_name_only() {
    assert!(lane(1, DEFAULT_LANE_NAME, 1, true).is_default(DEFAULT_LANE_NAME));
    assert!(lane(7, DEFAULT_LANE_NAME, 0, false).is_default(DEFAULT_LANE_NAME));
    assert!(!lane(1, "Backend", 1, true).is_default(DEFAULT_LANE_NAME));
}

#[test]
fn test_lane_status_from_bool_and_display() {
    assert_eq!(LaneStatus::from(true), LaneStatus::Active);
    assert_eq!(LaneStatus::from(false), LaneStatus::Inactive);
    assert_eq!(LaneStatus::Active.to_string(), "active");
    assert_eq!(LaneStatus::Inactive.to_string(), "inactive");
    assert!(LaneStatus::default().is_active());
}
