mod lane;
mod lane_changes;
