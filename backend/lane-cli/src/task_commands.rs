use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Create a task in a swimlane
    Create {
        /// Project ID
        project_id: i64,
        /// Swimlane the task is placed in
        lane_id: i64,
        /// Task title
        title: String,
    },
}
