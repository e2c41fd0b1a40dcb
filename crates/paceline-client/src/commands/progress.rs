use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::ClientResult;
use crate::commands::common::{
    load_context, normalize_exercise_name, progress_row, require_exercise,
};
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{ExerciseProgressRow, ProgressData};
use crate::engine::ProgressAggregator;
use crate::engine::date::format_iso_date;

#[derive(Debug, Default)]
pub struct ProgressRunOptions<'a> {
    pub year: Option<i32>,
    pub exercise: Option<String>,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run(year: Option<i32>, exercise: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ProgressRunOptions {
        year,
        exercise: exercise.map(std::string::ToString::to_string),
        ..ProgressRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ProgressRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let filter = options
        .exercise
        .as_deref()
        .map(|name| normalize_exercise_name(name, "progress"))
        .transpose()?;
    let context = load_context(options.home_override, options.today)?;
    let state = &context.setup.state;
    let year = options.year.unwrap_or_else(|| context.today.year());

    let exercises = match filter {
        Some(exercise) => {
            require_exercise(&state.settings, &exercise)?;
            vec![exercise]
        }
        None => state.settings.exercises(),
    };

    let aggregator = ProgressAggregator::new(state, context.today);
    let rows = exercises
        .iter()
        .map(|exercise| {
            aggregator
                .yearly_progress(exercise, year)
                .map(|progress| progress_row(&progress))
        })
        .collect::<ClientResult<Vec<ExerciseProgressRow>>>()?;

    let data = ProgressData {
        year,
        as_of: format_iso_date(&context.today),
        rows,
    };

    success_as_of("progress", context.today, data)
}
