use crate::commands::Commands;
use crate::lane_commands::LaneCommands;
use crate::project_commands::ProjectCommands;
use crate::task_commands::TaskCommands;
use crate::{App, CliError};

use lane_config::Config;
use lane_db::{DbError, LaneSettings};

use googletest::prelude::*;
use serde_json::{Value, json};

async fn create_test_app() -> App {
    let pool = lane_db::open_in_memory()
        .await
        .expect("Failed to create test pool");
    App::with_pool(pool, LaneSettings::default())
}

fn lane(action: LaneCommands) -> Commands {
    Commands::Lane { action }
}

async fn create_project(app: &App, name: &str) -> i64 {
    let outcome = app
        .execute(Commands::Project {
            action: ProjectCommands::Create {
                name: name.to_string(),
            },
        })
        .await
        .unwrap();
    outcome.value["id"].as_i64().unwrap()
}

async fn create_lane(app: &App, project_id: i64, name: &str) -> i64 {
    let outcome = app
        .execute(lane(LaneCommands::Create {
            project_id,
            name: name.to_string(),
            description: None,
            color: None,
        }))
        .await
        .unwrap();
    outcome.value["id"].as_i64().unwrap()
}

async fn names(app: &App, project_id: i64) -> Vec<String> {
    let outcome = app
        .execute(lane(LaneCommands::List { project_id }))
        .await
        .unwrap();
    outcome
        .value
        .as_array()
        .unwrap()
        .iter()
        .map(|lane| lane["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn given_new_project_when_listing_lanes_then_default_lane_is_printed() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;

    let outcome = app
        .execute(lane(LaneCommands::List { project_id }))
        .await
        .unwrap();

    assert_that!(outcome.success, eq(true));
    let lanes = outcome.value.as_array().unwrap();
    assert_that!(lanes.len(), eq(1));
    assert_that!(lanes[0]["name"], eq(&json!("Default swimlane")));
    assert_that!(lanes[0]["position"], eq(&json!(1)));
    assert_that!(lanes[0]["is_active"], eq(&json!(true)));
}

#[tokio::test]
async fn given_lanes_when_moved_then_list_reflects_new_order() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    create_lane(&app, project_id, "Doing").await;
    let done = create_lane(&app, project_id, "Done").await;

    let outcome = app
        .execute(lane(LaneCommands::Move {
            project_id,
            id: done,
            position: 1,
        }))
        .await
        .unwrap();

    assert_that!(outcome.value, eq(&json!({ "success": true })));
    assert_that!(
        names(&app, project_id).await,
        elements_are![eq("Done"), eq("Default swimlane"), eq("Doing")]
    );
}

#[tokio::test]
async fn given_out_of_range_move_when_executed_then_not_successful() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    let doing = create_lane(&app, project_id, "Doing").await;

    let outcome = app
        .execute(lane(LaneCommands::Move {
            project_id,
            id: doing,
            position: 5,
        }))
        .await
        .unwrap();

    assert_that!(outcome.success, eq(false));
    assert_that!(outcome.value, eq(&json!({ "success": false })));
}

#[tokio::test]
async fn given_missing_lane_when_shown_then_null_and_not_successful() {
    let app = create_test_app().await;

    let outcome = app
        .execute(lane(LaneCommands::Show { id: 99 }))
        .await
        .unwrap();

    assert_that!(outcome.success, eq(false));
    assert_that!(outcome.value, eq(&Value::Null));
}

#[tokio::test]
async fn given_lane_with_task_when_removed_then_rejected() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    let doing = create_lane(&app, project_id, "Doing").await;
    app.execute(Commands::Task {
        action: TaskCommands::Create {
            project_id,
            lane_id: doing,
            title: "Ship it".to_string(),
        },
    })
    .await
    .unwrap();

    let outcome = app
        .execute(lane(LaneCommands::Remove {
            project_id,
            id: doing,
        }))
        .await
        .unwrap();

    assert_that!(outcome.success, eq(false));
}

#[tokio::test]
async fn given_disabled_lane_when_listing_inactive_then_it_is_printed_at_zero() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    let doing = create_lane(&app, project_id, "Doing").await;
    app.execute(lane(LaneCommands::Disable {
        project_id,
        id: doing,
    }))
    .await
    .unwrap();

    let outcome = app
        .execute(lane(LaneCommands::ListInactive { project_id }))
        .await
        .unwrap();

    let lanes = outcome.value.as_array().unwrap();
    assert_that!(lanes.len(), eq(1));
    assert_that!(lanes[0]["id"], eq(&json!(doing)));
    assert_that!(lanes[0]["position"], eq(&json!(0)));
}

#[tokio::test]
async fn given_project_when_duplicated_then_new_project_has_copied_lanes() {
    let app = create_test_app().await;
    let source = create_project(&app, "Website").await;
    create_lane(&app, source, "Doing").await;

    let outcome = app
        .execute(Commands::Project {
            action: ProjectCommands::Duplicate {
                source_id: source,
                name: "Website v2".to_string(),
            },
        })
        .await
        .unwrap();

    assert_that!(outcome.success, eq(true));
    let copy = outcome.value["id"].as_i64().unwrap();
    assert_that!(
        names(&app, copy).await,
        elements_are![eq("Default swimlane"), eq("Doing")]
    );
}

#[tokio::test]
async fn given_missing_source_project_when_duplicated_then_not_successful() {
    let app = create_test_app().await;

    let outcome = app
        .execute(Commands::Project {
            action: ProjectCommands::Duplicate {
                source_id: 5,
                name: "Nothing".to_string(),
            },
        })
        .await
        .unwrap();

    assert_that!(outcome.success, eq(false));
}

#[tokio::test]
async fn given_names_command_when_executed_then_id_name_pairs() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    let doing = create_lane(&app, project_id, "Doing").await;

    let outcome = app
        .execute(lane(LaneCommands::Names { project_id }))
        .await
        .unwrap();

    assert_that!(
        outcome.value,
        eq(&json!([
            { "id": doing - 1, "name": "Default swimlane" },
            { "id": doing, "name": "Doing" }
        ]))
    );
}

#[tokio::test]
async fn given_update_with_name_when_executed_then_lane_is_renamed() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    let doing = create_lane(&app, project_id, "Doing").await;

    let outcome = app
        .execute(lane(LaneCommands::Update {
            id: doing,
            name: Some("In progress".to_string()),
            description: None,
            color: Some("#00ff00".to_string()),
        }))
        .await
        .unwrap();

    assert_that!(outcome.success, eq(true));
    let shown = app
        .execute(lane(LaneCommands::Find {
            project_id,
            name: "In progress".to_string(),
        }))
        .await
        .unwrap();
    assert_that!(shown.value["color"], eq(&json!("#00ff00")));
    assert_that!(shown.value["position"], eq(&json!(2)));
}

#[tokio::test]
async fn given_blank_lane_name_when_created_then_validation_error() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;

    let result = app
        .execute(lane(LaneCommands::Create {
            project_id,
            name: "  ".to_string(),
            description: None,
            color: None,
        }))
        .await;

    assert!(matches!(result, Err(CliError::Db(DbError::Core { .. }))));
}

#[tokio::test]
async fn given_first_and_last_position_when_executed_then_match_board() {
    let app = create_test_app().await;
    let project_id = create_project(&app, "Website").await;
    create_lane(&app, project_id, "Doing").await;

    let first = app
        .execute(lane(LaneCommands::First { project_id }))
        .await
        .unwrap();
    let last = app
        .execute(lane(LaneCommands::LastPosition { project_id }))
        .await
        .unwrap();

    assert_that!(first.value["name"], eq(&json!("Default swimlane")));
    assert_that!(last.value, eq(&json!({ "position": 2 })));
}

#[test]
fn given_config_with_padded_default_name_when_mapped_then_settings_are_trimmed() {
    let mut config = Config::default();
    config.lanes.default_lane_name = "  Inbox ".to_string();
    config.lanes.max_name_length = 40;

    let settings = App::lane_settings(&config);

    assert_that!(settings.default_lane_name, eq("Inbox"));
    assert_that!(settings.max_name_length, eq(40));
}
