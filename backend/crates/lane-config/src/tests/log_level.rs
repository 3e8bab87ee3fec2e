use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, LogLevel};

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_known_level_names_when_parsed_then_matching_filter() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("WARN", LevelFilter::Warn),
        ("Info", LevelFilter::Info),
        (" debug ", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        let level: LogLevel = input.parse().unwrap();
        assert_that!(level.0, eq(expected));
    }
}

#[test]
fn given_unknown_level_name_when_parsed_then_info() {
    let level: LogLevel = "verbose".parse().unwrap();

    assert_that!(level.0, eq(LevelFilter::Info));
}

#[test]
fn given_no_level_when_defaulted_then_info() {
    assert_that!(LogLevel::default(), eq(LogLevel(LevelFilter::Info)));
}

#[test]
#[serial]
fn given_table_level_in_toml_when_load_then_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(temp.path(), "[logging]\nlevel = { name = \"debug\" }\n");
    let _level = EnvGuard::remove("LANES_LOG_LEVEL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
}

#[test]
fn given_level_when_displayed_then_log_crate_spelling() {
    assert_that!(LogLevel(LevelFilter::Warn).to_string(), eq("WARN"));
}

#[test]
#[serial]
fn given_non_string_level_in_toml_when_load_then_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(temp.path(), "[logging]\nlevel = 3\n");
    let _level = EnvGuard::remove("LANES_LOG_LEVEL");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_invalid_level_env_var_when_load_then_info() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(temp.path(), "[logging]\nlevel = \"trace\"\n");
    let _level = EnvGuard::set("LANES_LOG_LEVEL", "loud");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Info));
}
