use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum LaneCommands {
    /// Append a swimlane after the project's last active swimlane
    Create {
        /// Project ID
        project_id: i64,
        /// Swimlane name
        name: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Display color (e.g. "#ff8800")
        #[arg(long)]
        color: Option<String>,
    },
    /// List all swimlanes: active by position, then inactive by name
    List {
        /// Project ID
        project_id: i64,
    },
    /// List active swimlanes by position
    ListActive {
        /// Project ID
        project_id: i64,
    },
    /// List inactive swimlanes
    ListInactive {
        /// Project ID
        project_id: i64,
    },
    /// List (id, name) pairs
    Names {
        /// Project ID
        project_id: i64,
    },
    /// Get a swimlane by ID
    Show {
        /// Swimlane ID
        id: i64,
    },
    /// Get a swimlane by name
    Find {
        /// Project ID
        project_id: i64,
        /// Swimlane name
        name: String,
    },
    /// Get the active swimlane at position 1
    First {
        /// Project ID
        project_id: i64,
    },
    /// Highest active position (0 when no swimlane is active)
    LastPosition {
        /// Project ID
        project_id: i64,
    },
    /// Change name, description or color
    Update {
        /// Swimlane ID
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Deactivate a swimlane and close the gap it leaves
    Disable {
        /// Project ID
        project_id: i64,
        /// Swimlane ID
        id: i64,
    },
    /// Reactivate a swimlane at the end of the active swimlanes
    Enable {
        /// Project ID
        project_id: i64,
        /// Swimlane ID
        id: i64,
    },
    /// Delete a swimlane no task references
    Remove {
        /// Project ID
        project_id: i64,
        /// Swimlane ID
        id: i64,
    },
    /// Move an active swimlane to a new 1-based position
    Move {
        /// Project ID
        project_id: i64,
        /// Swimlane ID
        id: i64,
        /// Target position
        #[arg(allow_negative_numbers = true)]
        position: i32,
    },
    /// Copy the non-default swimlanes of one project into another
    Duplicate {
        /// Project to copy from
        source_project_id: i64,
        /// Project to copy into
        target_project_id: i64,
    },
}
