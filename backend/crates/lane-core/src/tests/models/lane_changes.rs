use crate::{LaneChanges, NewLane};

#[test]
fn test_lane_changes_builder_sets_only_given_fields() {
    let changes = LaneChanges::new(5).name("Ops");

    assert_eq!(changes.id, 5);
    assert_eq!(changes.name.as_deref(), Some("Ops"));
    assert!(changes.description.is_none());
    assert!(changes.color.is_none());
    assert!(!changes.is_empty());
}

#[test]
fn test_lane_changes_without_fields_is_empty() {
    assert!(LaneChanges::new(5).is_empty());
}

#[test]
fn test_new_lane_builder() {
    let lane = NewLane::new(3, "Frontend")
        .with_description("UI work")
        .with_color("#00ff00");

    assert_eq!(lane.project_id, 3);
    assert_eq!(lane.name, "Frontend");
    assert_eq!(lane.description.as_deref(), Some("UI work"));
    assert_eq!(lane.color.as_deref(), Some("#00ff00"));
}
