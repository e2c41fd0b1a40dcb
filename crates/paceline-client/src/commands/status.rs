use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::ClientResult;
use crate::commands::common::{load_context, progress_row};
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{StatusData, StatusExerciseRow};
use crate::engine::ProgressAggregator;
use crate::engine::date::format_iso_date;

#[derive(Debug, Default)]
pub struct StatusRunOptions<'a> {
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run() -> ClientResult<SuccessEnvelope> {
    run_with_options(StatusRunOptions::default())
}

#[doc(hidden)]
pub fn run_with_options(options: StatusRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = load_context(options.home_override, options.today)?;
    let state = &context.setup.state;
    let today = context.today;
    let aggregator = ProgressAggregator::new(state, today);
    let scheduler = aggregator.scheduler();

    let mut exercises = Vec::new();
    for exercise in state.settings.exercises() {
        let progress = aggregator.yearly_progress(&exercise, today.year())?;
        exercises.push(StatusExerciseRow {
            goal_today: scheduler.goal_for(&exercise, today)?,
            logged_today: state.workouts.quantity(today, &exercise),
            achieved_today: aggregator.achieved(&exercise, today)?,
            progress: progress_row(&progress),
            exercise,
        });
    }

    let data = StatusData {
        today: format_iso_date(&today),
        start_date: format_iso_date(&state.settings.start_date),
        day_status: aggregator.classify_day(today).as_str().to_string(),
        exercises,
    };

    success_as_of("status", today, data)
}
