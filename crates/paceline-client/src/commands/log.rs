use std::path::Path;

use chrono::NaiveDate;

use crate::ClientResult;
use crate::commands::common::{
    load_context, normalize_exercise_name, require_exercise, resolve_date,
};
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::LogData;
use crate::engine::ProgressAggregator;
use crate::engine::date::format_iso_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Add,
    Edit,
    Delete,
}

impl LogAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    fn command_name(self) -> &'static str {
        match self {
            Self::Add => "log add",
            Self::Edit => "log edit",
            Self::Delete => "log delete",
        }
    }
}

#[derive(Debug)]
pub struct LogRunOptions<'a> {
    pub action: LogAction,
    pub exercise: String,
    /// Ignored for [`LogAction::Delete`].
    pub quantity: i64,
    pub date: Option<String>,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn add(exercise: &str, quantity: i64, date: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(options(LogAction::Add, exercise, quantity, date))
}

pub fn edit(exercise: &str, quantity: i64, date: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(options(LogAction::Edit, exercise, quantity, date))
}

pub fn delete(exercise: &str, date: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(options(LogAction::Delete, exercise, 0, date))
}

#[doc(hidden)]
pub fn run_with_options(options: LogRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let command = options.action.command_name();
    let exercise = normalize_exercise_name(&options.exercise, command)?;
    let mut context = load_context(options.home_override, options.today)?;
    let date = resolve_date(options.date.as_deref(), "date", context.today)?;

    let workouts = &mut context.setup.state.workouts;
    let (quantity, previous_quantity) = match options.action {
        LogAction::Add => {
            require_exercise(&context.setup.state.settings, &exercise)?;
            workouts.add(date, &exercise, options.quantity)?;
            (Some(options.quantity), None)
        }
        LogAction::Edit => {
            require_exercise(&context.setup.state.settings, &exercise)?;
            let previous = workouts.edit(date, &exercise, options.quantity)?;
            (Some(options.quantity), Some(previous))
        }
        LogAction::Delete => {
            let removed = workouts.delete(date, &exercise)?;
            (None, Some(removed))
        }
    };

    context.setup.persist()?;
    tracing::info!(
        action = options.action.as_str(),
        exercise = %exercise,
        date = %date,
        quantity = ?quantity,
        previous = ?previous_quantity,
        "workout log updated"
    );

    let state = &context.setup.state;
    let aggregator = ProgressAggregator::new(state, context.today);
    // Deleting an entry for an exercise no longer configured has no goal to report.
    let goal = aggregator.scheduler().goal_for(&exercise, date).ok();
    let achieved = match quantity {
        Some(_) => Some(aggregator.achieved(&exercise, date)?),
        None => None,
    };

    let data = LogData {
        action: options.action.as_str().to_string(),
        date: format_iso_date(&date),
        exercise,
        quantity,
        previous_quantity,
        goal,
        achieved,
        day_entries: state.workouts.day(date).cloned().unwrap_or_default(),
    };

    success_as_of(command, context.today, data)
}

fn options<'a>(
    action: LogAction,
    exercise: &str,
    quantity: i64,
    date: Option<&str>,
) -> LogRunOptions<'a> {
    LogRunOptions {
        action,
        exercise: exercise.to_string(),
        quantity,
        date: date.map(std::string::ToString::to_string),
        home_override: None,
        today: None,
    }
}
