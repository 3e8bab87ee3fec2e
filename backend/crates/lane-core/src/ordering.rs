//! Position maintenance for the active lanes of a project.
//!
//! Every function here is pure: it takes a snapshot of the project's active
//! lanes and returns the rows whose position must change. The caller writes
//! the returned rows inside a single transaction, so readers never observe a
//! partially renumbered project.
//!
//! The input is sorted by `(position, lane_id)` before renumbering, so a
//! snapshot that somehow lost its density (gaps or duplicates) comes out
//! dense again.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// An active lane's identity and rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanePosition {
    pub lane_id: i64,
    pub position: i32,
}

impl LanePosition {
    pub fn new(lane_id: i64, position: i32) -> Self {
        Self { lane_id, position }
    }
}

/// Renumber the active lanes after `vacated_id` left the active set
/// (disabled or removed). Lanes behind the vacated slot move up by one.
///
/// `vacated_id` may or may not still be present in `active`; it is skipped
/// either way.
pub fn compact(active: &[LanePosition], vacated_id: i64) -> Vec<LanePosition> {
    let remaining: Vec<LanePosition> = ordered(active)
        .into_iter()
        .filter(|lane| lane.lane_id != vacated_id)
        .collect();

    renumber(&remaining, active)
}

/// Move `lane_id` to `new_position`, shifting the lanes in between by one.
///
/// Moving up (`new < old`) pushes the lanes in `[new, old - 1]` down one
/// slot; moving down (`new > old`) pulls the lanes in `[old + 1, new]` up
/// one slot. Moving a lane onto its own position yields no updates.
#[track_caller]
pub fn reposition(
    active: &[LanePosition],
    lane_id: i64,
    new_position: i32,
) -> CoreErrorResult<Vec<LanePosition>> {
    let max = i32::try_from(active.len()).unwrap_or(i32::MAX);

    if new_position < 1 || new_position > max {
        return Err(CoreError::InvalidPosition {
            position: new_position,
            max,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut sequence = ordered(active);
    let index = sequence
        .iter()
        .position(|lane| lane.lane_id == lane_id)
        .ok_or_else(|| CoreError::LaneNotActive {
            lane_id,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let moved = sequence.remove(index);
    sequence.insert((new_position - 1) as usize, moved);

    Ok(renumber(&sequence, active))
}

fn ordered(active: &[LanePosition]) -> Vec<LanePosition> {
    let mut lanes = active.to_vec();
    lanes.sort_by_key(|lane| (lane.position, lane.lane_id));
    lanes
}

/// Assign 1..=N to `sequence` and keep only the lanes whose stored
/// position (as found in `current`) differs.
fn renumber(sequence: &[LanePosition], current: &[LanePosition]) -> Vec<LanePosition> {
    sequence
        .iter()
        .zip(1..)
        .filter_map(|(lane, position)| {
            let stored = current
                .iter()
                .find(|candidate| candidate.lane_id == lane.lane_id)
                .map(|candidate| candidate.position);

            (stored != Some(position)).then_some(LanePosition::new(lane.lane_id, position))
        })
        .collect()
}
