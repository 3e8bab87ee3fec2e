//! lanes - swimlane board CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a project (it starts with a "Default swimlane")
//! lanes project create "Website"
//!
//! # Add a swimlane and move it to the front
//! lanes lane create 1 "In review" --color "#ffaa00"
//! lanes lane move 1 2 1
//!
//! # Show the board order
//! lanes lane list 1 --pretty
//! ```

use lane_cli::{App, Cli, CliErrorResult, Outcome, logger};
use lane_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{Level, log_enabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(outcome) => print(&outcome, pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Outcome> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    if log_enabled!(Level::Debug) {
        config.log_summary();
    }

    let app = App::open(&config).await?;
    let outcome = app.execute(cli.command).await;
    app.close().await;

    outcome
}

fn print(outcome: &Outcome, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(&outcome.value)
    } else {
        serde_json::to_string(&outcome.value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
