use crate::{
    lane_commands::LaneCommands, project_commands::ProjectCommands, task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Swimlane operations
    Lane {
        #[command(subcommand)]
        action: LaneCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
}
