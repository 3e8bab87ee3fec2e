//! lane-cli library
//!
//! Command parsing and dispatch for the `lanes` binary, exported so the
//! commands can be driven against an in-memory database in tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod lane_commands;
pub mod logger;
pub mod project_commands;
pub mod task_commands;

#[cfg(test)]
mod tests;

pub use app::{App, Outcome};
pub use cli::Cli;
pub use error::{CliError, CliErrorResult};
