#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use paceline_client::SuccessEnvelope;
use paceline_client::commands::log::{LogAction, LogRunOptions};
use paceline_client::commands::{self, settings::SettingsChange};
use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("paceline-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    let value = NaiveDate::from_ymd_opt(year, month, day);
    assert!(value.is_some(), "invalid fixture date {year}-{month}-{day}");
    value.unwrap_or_default()
}

pub fn write_state(home: &Path, state: &Value) {
    let body = serde_json::to_string_pretty(state);
    assert!(body.is_ok());
    if let Ok(text) = body {
        let write = fs::write(home.join("state.json"), text);
        assert!(write.is_ok());
    }
}

pub fn read_state(home: &Path) -> Value {
    let body = fs::read_to_string(home.join("state.json"));
    assert!(body.is_ok());
    if let Ok(text) = body {
        let parsed = serde_json::from_str::<Value>(&text);
        assert!(parsed.is_ok());
        if let Ok(value) = parsed {
            return value;
        }
    }
    Value::Null
}

pub fn payload(result: paceline_client::ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok(), "command failed: {result:?}");
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(json) = value {
            return json;
        }
    }
    Value::Null
}

/// Replaces the default exercises with a single `push-ups` plan (base 50, +10 weekly).
pub fn configure_single_exercise(home: &Path, start_date: &str, today: NaiveDate) {
    let start = commands::settings::run_with_options(commands::settings::SettingsRunOptions {
        change: SettingsChange::StartDate(start_date.to_string()),
        home_override: Some(home),
        today: Some(today),
    });
    assert!(start.is_ok());

    for exercise in ["sit-ups", "squats"] {
        let removed = commands::settings::run_with_options(commands::settings::SettingsRunOptions {
            change: SettingsChange::RemoveExercise(exercise.to_string()),
            home_override: Some(home),
            today: Some(today),
        });
        assert!(removed.is_ok());
    }
}

pub fn log_entry(
    home: &Path,
    action: LogAction,
    exercise: &str,
    quantity: i64,
    day: &str,
    today: NaiveDate,
) -> paceline_client::ClientResult<SuccessEnvelope> {
    commands::log::run_with_options(LogRunOptions {
        action,
        exercise: exercise.to_string(),
        quantity,
        date: Some(day.to_string()),
        home_override: Some(home),
        today: Some(today),
    })
}
