use std::path::Path;

use chrono::NaiveDate;

use crate::config::resolve_today;
use crate::contracts::types::{ExerciseProgressRow, ExerciseSettingsRow};
use crate::engine::YearlyProgress;
use crate::engine::date::parse_iso_date;
use crate::setup::{SetupContext, ensure_initialized, ensure_initialized_at};
use crate::tracker::Settings;
use crate::{ClientError, ClientResult};

/// Loaded state plus the evaluation date a command runs against.
#[derive(Debug, Clone)]
pub(crate) struct CommandContext {
    pub(crate) setup: SetupContext,
    pub(crate) today: NaiveDate,
}

pub(crate) fn load_context(
    home_override: Option<&Path>,
    today_override: Option<NaiveDate>,
) -> ClientResult<CommandContext> {
    let today = resolve_today(today_override)?;
    let setup = match home_override {
        Some(home) => ensure_initialized_at(home, today)?,
        None => ensure_initialized(today)?,
    };
    Ok(CommandContext { setup, today })
}

pub(crate) fn resolve_date(
    value: Option<&str>,
    field_name: &str,
    today: NaiveDate,
) -> ClientResult<NaiveDate> {
    match value {
        Some(raw) => parse_iso_date(raw, field_name),
        None => Ok(today),
    }
}

pub(crate) fn normalize_exercise_name(value: &str, command: &str) -> ClientResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "Exercise name must not be empty.",
            Some(command),
        ));
    }
    Ok(trimmed.to_string())
}

/// Fails with `unknown_exercise` unless the exercise has both goal settings.
pub(crate) fn require_exercise(settings: &Settings, exercise: &str) -> ClientResult<()> {
    settings.plan(exercise).map(|_| ())
}

pub(crate) fn progress_row(progress: &YearlyProgress) -> ExerciseProgressRow {
    ExerciseProgressRow {
        exercise: progress.exercise.clone(),
        year: progress.year,
        performed_total: progress.performed_total,
        yearly_goal: progress.yearly_goal,
        goal_to_date: progress.goal_to_date,
        delta: progress.delta(),
        pace: progress.pace().as_str().to_string(),
        ratio: progress.ratio(),
    }
}

pub(crate) fn exercise_settings_rows(settings: &Settings) -> Vec<ExerciseSettingsRow> {
    settings
        .exercises()
        .into_iter()
        .map(|exercise| ExerciseSettingsRow {
            base_goal: settings.base_goals.get(&exercise).copied().unwrap_or(0),
            weekly_increment: settings
                .weekly_increment
                .get(&exercise)
                .copied()
                .unwrap_or(0),
            exercise,
        })
        .collect()
}
