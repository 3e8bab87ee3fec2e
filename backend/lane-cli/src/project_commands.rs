use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a project with its default swimlane
    Create {
        /// Project name
        name: String,
    },
    /// Create a new project holding copies of another project's swimlanes
    Duplicate {
        /// Project to copy from
        source_id: i64,
        /// Name of the new project
        name: String,
    },
    /// Get a project by ID
    Show {
        /// Project ID
        id: i64,
    },
}
