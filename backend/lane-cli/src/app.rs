//! Wires the services together and runs one parsed command.

use crate::{
    CliErrorResult, commands::Commands, lane_commands::LaneCommands,
    project_commands::ProjectCommands, task_commands::TaskCommands,
};

use lane_config::Config;
use lane_core::{LaneChanges, LaneStatus, NewLane};
use lane_db::{LaneOrderingService, LaneSettings, ProjectRepository, TaskRepository};

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

/// Result of one command: the JSON to print, and whether the operation
/// was accepted. Rejected operations still print their JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub value: Value,
    pub success: bool,
}

impl Outcome {
    fn value<T: Serialize>(value: &T) -> CliErrorResult<Self> {
        Ok(Self {
            value: serde_json::to_value(value).map_err(crate::CliError::from_json)?,
            success: true,
        })
    }

    /// Missing records print `null` and fail the command.
    fn found<T: Serialize>(value: &Option<T>) -> CliErrorResult<Self> {
        Ok(Self {
            success: value.is_some(),
            ..Self::value(value)?
        })
    }

    fn accepted(success: bool) -> Self {
        Self {
            value: json!({ "success": success }),
            success,
        }
    }
}

pub struct App {
    pool: SqlitePool,
    lanes: LaneOrderingService,
    projects: ProjectRepository,
}

impl App {
    /// Open the configured database file.
    pub async fn open(config: &Config) -> CliErrorResult<Self> {
        let path = config.database_path()?;
        let pool = lane_db::open(&path, config.database.max_connections).await?;

        Ok(Self::with_pool(pool, Self::lane_settings(config)))
    }

    pub fn with_pool(pool: SqlitePool, settings: LaneSettings) -> Self {
        let lanes = LaneOrderingService::with_settings(pool.clone(), settings);
        let projects = ProjectRepository::new(pool.clone(), Arc::new(lanes.clone()));

        Self {
            pool,
            lanes,
            projects,
        }
    }

    pub fn lane_settings(config: &Config) -> LaneSettings {
        LaneSettings {
            default_lane_name: config.lanes.default_lane_name.trim().to_string(),
            max_name_length: config.lanes.max_name_length,
        }
    }

    pub async fn execute(&self, command: Commands) -> CliErrorResult<Outcome> {
        debug!("Executing {:?}", command);

        match command {
            Commands::Project { action } => self.execute_project(action).await,
            Commands::Lane { action } => self.execute_lane(action).await,
            Commands::Task { action } => self.execute_task(action).await,
        }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    async fn execute_project(&self, action: ProjectCommands) -> CliErrorResult<Outcome> {
        match action {
            ProjectCommands::Create { name } => {
                let id = self.projects.create(&name).await?;
                Outcome::value(&json!({ "id": id }))
            }
            ProjectCommands::Duplicate { source_id, name } => {
                let id = self.projects.duplicate(source_id, &name).await?;
                Outcome::found(&id.map(|id| json!({ "id": id })))
            }
            ProjectCommands::Show { id } => Outcome::found(&self.projects.find_by_id(id).await?),
        }
    }

    async fn execute_lane(&self, action: LaneCommands) -> CliErrorResult<Outcome> {
        let lanes = &self.lanes;

        match action {
            LaneCommands::Create {
                project_id,
                name,
                description,
                color,
            } => {
                let lane = NewLane {
                    project_id,
                    name,
                    description,
                    color,
                };
                let id = lanes.create(lane).await?;
                Outcome::value(&json!({ "id": id }))
            }
            LaneCommands::List { project_id } => Outcome::value(&lanes.get_all(project_id).await?),
            LaneCommands::ListActive { project_id } => Outcome::value(
                &lanes
                    .get_all_by_status(project_id, LaneStatus::Active)
                    .await?,
            ),
            LaneCommands::ListInactive { project_id } => Outcome::value(
                &lanes
                    .get_all_by_status(project_id, LaneStatus::Inactive)
                    .await?,
            ),
            LaneCommands::Names { project_id } => {
                let pairs: Vec<Value> = lanes
                    .get_list(project_id)
                    .await?
                    .into_iter()
                    .map(|(id, name)| json!({ "id": id, "name": name }))
                    .collect();
                Outcome::value(&pairs)
            }
            LaneCommands::Show { id } => Outcome::found(&lanes.get_by_id(id).await?),
            LaneCommands::Find { project_id, name } => {
                Outcome::found(&lanes.get_by_name(project_id, &name).await?)
            }
            LaneCommands::First { project_id } => {
                Outcome::found(&lanes.get_first_active_lane(project_id).await?)
            }
            LaneCommands::LastPosition { project_id } => {
                let position = lanes.get_last_position(project_id).await?;
                Outcome::value(&json!({ "position": position }))
            }
            LaneCommands::Update {
                id,
                name,
                description,
                color,
            } => {
                let changes = LaneChanges {
                    id,
                    name,
                    description,
                    color,
                };
                Ok(Outcome::accepted(lanes.update(changes).await?))
            }
            LaneCommands::Disable { project_id, id } => {
                Ok(Outcome::accepted(lanes.disable(project_id, id).await?))
            }
            LaneCommands::Enable { project_id, id } => {
                Ok(Outcome::accepted(lanes.enable(project_id, id).await?))
            }
            LaneCommands::Remove { project_id, id } => {
                Ok(Outcome::accepted(lanes.remove(project_id, id).await?))
            }
            LaneCommands::Move {
                project_id,
                id,
                position,
            } => Ok(Outcome::accepted(
                lanes.change_position(project_id, id, position).await?,
            )),
            LaneCommands::Duplicate {
                source_project_id,
                target_project_id,
            } => Ok(Outcome::accepted(
                lanes
                    .duplicate(source_project_id, target_project_id)
                    .await?,
            )),
        }
    }

    async fn execute_task(&self, action: TaskCommands) -> CliErrorResult<Outcome> {
        match action {
            TaskCommands::Create {
                project_id,
                lane_id,
                title,
            } => {
                let id =
                    TaskRepository::create(&self.pool, project_id, lane_id, &title, Utc::now())
                        .await?;
                Outcome::value(&json!({ "id": id }))
            }
        }
    }
}
