use std::path::Path;

use chrono::NaiveDate;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `paceline {cmd} --help` for usage."),
            None => "Run `paceline --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn malformed_date(field_name: &str, value: &str) -> Self {
        Self::new(
            "malformed_date",
            &format!("`{field_name}` value `{value}` is not a valid YYYY-MM-DD calendar date."),
            vec![
                "Use the YYYY-MM-DD format with a real calendar date (e.g. 2025-10-23)."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "field": field_name,
            "value": value,
        }))
    }

    pub fn unknown_exercise(exercise: &str, configured: &[String]) -> Self {
        Self::new(
            "unknown_exercise",
            &format!("Exercise `{exercise}` is not configured with a base goal and weekly increment."),
            vec![
                "Run `paceline settings show` to list configured exercises.".to_string(),
                format!(
                    "Configure it with `paceline settings exercise set {exercise} --base <n> --increment <n>`."
                ),
            ],
        )
        .with_data(json!({
            "exercise": exercise,
            "configured_exercises": configured,
        }))
    }

    pub fn entry_exists(exercise: &str, date: NaiveDate, quantity: i64) -> Self {
        let day = date.format("%Y-%m-%d");
        Self::new(
            "entry_exists",
            &format!("`{exercise}` already has {quantity} logged on {day}."),
            vec![format!(
                "Use `paceline log edit {exercise} <quantity> --date {day}` to change it."
            )],
        )
        .with_data(json!({
            "exercise": exercise,
            "date": day.to_string(),
            "quantity": quantity,
        }))
    }

    pub fn entry_not_found(exercise: &str, date: NaiveDate) -> Self {
        let day = date.format("%Y-%m-%d");
        Self::new(
            "entry_not_found",
            &format!("No `{exercise}` entry is logged on {day}."),
            vec![
                "Run `paceline history` to review logged entries.".to_string(),
                format!("Use `paceline log add {exercise} <quantity> --date {day}` to create it."),
            ],
        )
        .with_data(json!({
            "exercise": exercise,
            "date": day.to_string(),
        }))
    }

    pub fn exercise_in_use(exercise: &str, entry_count: usize) -> Self {
        Self::new(
            "exercise_in_use",
            &format!("Exercise `{exercise}` still has {entry_count} logged entries."),
            vec![
                format!("Delete its entries with `paceline log delete {exercise} --date <date>` first."),
                "Or keep the exercise and set its goals to 0.".to_string(),
            ],
        )
        .with_data(json!({
            "exercise": exercise,
            "entry_count": entry_count,
        }))
    }

    /// A yearly total or its delta left the `i64` range.
    pub fn total_out_of_range(exercise: &str, year: i32) -> Self {
        Self::new(
            "total_out_of_range",
            &format!("The {year} totals for `{exercise}` exceed the supported range."),
            vec![
                "Lower the exercise's base goal or weekly increment with `paceline settings exercise set`."
                    .to_string(),
                "Correct oversized quantities with `paceline log edit`.".to_string(),
            ],
        )
        .with_data(json!({
            "exercise": exercise,
            "year": year,
        }))
    }

    pub fn export_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_failed",
            &format!("Could not write the export to `{location}`: {detail}"),
            vec![
                "Check that the destination directory exists and is writable.".to_string(),
                "Run `paceline export <path>` with a different destination.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn state_corrupt(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "state_corrupt",
            &format!("Tracker state at `{location}` could not be read: {detail}"),
            vec![format!(
                "Fix or replace `{location}` with a valid state file, or restore it from backup."
            )],
        )
    }

    pub fn state_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "state_permission_denied",
            &format!("Cannot access tracker state at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `PACELINE_HOME` to a writable directory."
            )],
        )
    }

    pub fn state_io_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "state_io_failed",
            &format!("Tracker state I/O failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_") || self.code.starts_with("state_")
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
