use std::path::Path;

use chrono::NaiveDate;

use crate::commands::common::{
    CommandContext, exercise_settings_rows, load_context, normalize_exercise_name,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SettingsData;
use crate::engine::date::{format_iso_date, parse_iso_date, week_end};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    Show,
    StartDate(String),
    SetExercise {
        exercise: String,
        base_goal: i64,
        weekly_increment: i64,
    },
    RemoveExercise(String),
}

impl SettingsChange {
    fn command_name(&self) -> &'static str {
        match self {
            Self::Show => "settings show",
            Self::StartDate(_) => "settings start-date",
            Self::SetExercise { .. } => "settings exercise set",
            Self::RemoveExercise(_) => "settings exercise remove",
        }
    }
}

#[derive(Debug)]
pub struct SettingsRunOptions<'a> {
    pub change: SettingsChange,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn show() -> ClientResult<SuccessEnvelope> {
    run(SettingsChange::Show)
}

pub fn run(change: SettingsChange) -> ClientResult<SuccessEnvelope> {
    run_with_options(SettingsRunOptions {
        change,
        home_override: None,
        today: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: SettingsRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let command = options.change.command_name();
    let mut context = load_context(options.home_override, options.today)?;

    let notice = match options.change {
        SettingsChange::Show => None,
        SettingsChange::StartDate(raw) => Some(change_start_date(&mut context, &raw)?),
        SettingsChange::SetExercise {
            exercise,
            base_goal,
            weekly_increment,
        } => {
            let name = normalize_exercise_name(&exercise, command)?;
            ensure_non_negative_goal(base_goal, "base goal", command)?;
            context
                .setup
                .state
                .settings
                .set_exercise(&name, base_goal, weekly_increment);
            context.setup.persist()?;
            tracing::info!(exercise = %name, base_goal, weekly_increment, "exercise goals updated");
            None
        }
        SettingsChange::RemoveExercise(exercise) => {
            let name = normalize_exercise_name(&exercise, command)?;
            remove_exercise(&mut context, &name)?;
            None
        }
    };

    let settings = &context.setup.state.settings;
    let data = SettingsData {
        action: command.to_string(),
        state_path: context.setup.state_path.display().to_string(),
        start_date: format_iso_date(&settings.start_date),
        first_week_end: format_iso_date(&week_end(settings.start_date)),
        exercises: exercise_settings_rows(settings),
        notice,
    };

    success(command, data)
}

fn change_start_date(context: &mut CommandContext, raw: &str) -> ClientResult<String> {
    let start_date = parse_iso_date(raw, "start_date")?;
    let previous = context.setup.state.settings.start_date;
    if previous == start_date {
        return Ok(format!(
            "Start date is already {}; nothing changed.",
            format_iso_date(&start_date)
        ));
    }
    context.setup.state.settings.start_date = start_date;
    context.setup.persist()?;

    if !context.setup.state.workouts.is_empty() {
        tracing::warn!(
            previous = %previous,
            start_date = %start_date,
            "start date changed; goals for all logged history are recomputed"
        );
    }

    Ok(format!(
        "Start date moved from {} to {}. Goals, achievements, and calendar status for every past date are recomputed against the new schedule.",
        format_iso_date(&previous),
        format_iso_date(&start_date)
    ))
}

fn remove_exercise(context: &mut CommandContext, exercise: &str) -> ClientResult<()> {
    let entry_count = context.setup.state.workouts.entry_count_for(exercise);
    if entry_count > 0 {
        return Err(ClientError::exercise_in_use(exercise, entry_count));
    }

    let settings = &mut context.setup.state.settings;
    if !settings.remove_exercise(exercise) {
        return Err(ClientError::unknown_exercise(exercise, &settings.exercises()));
    }
    context.setup.persist()?;
    tracing::info!(exercise, "exercise removed");
    Ok(())
}

fn ensure_non_negative_goal(value: i64, label: &str, command: &str) -> ClientResult<()> {
    if value < 0 {
        return Err(ClientError::invalid_argument_for_command(
            &format!("The {label} must be zero or greater (received {value})."),
            Some(command),
        ));
    }
    Ok(())
}
