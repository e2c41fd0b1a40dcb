use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::ClientResult;
use crate::commands::common::{load_context, normalize_exercise_name, require_exercise};
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{HistoryData, HistoryRow};
use crate::engine::GoalScheduler;
use crate::engine::date::format_iso_date;
use crate::tracker::TrackerState;

#[derive(Debug, Default)]
pub struct HistoryRunOptions<'a> {
    pub year: Option<i32>,
    pub exercise: Option<String>,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run(year: Option<i32>, exercise: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(HistoryRunOptions {
        year,
        exercise: exercise.map(std::string::ToString::to_string),
        ..HistoryRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: HistoryRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let filter = options
        .exercise
        .as_deref()
        .map(|name| normalize_exercise_name(name, "history"))
        .transpose()?;
    let context = load_context(options.home_override, options.today)?;
    let year = options.year.unwrap_or_else(|| context.today.year());
    let rows = history_rows(&context.setup.state, year, filter.as_deref())?;

    let data = HistoryData {
        year,
        exercise: filter,
        total: rows.len(),
        achieved_count: rows.iter().filter(|row| row.achieved).count(),
        rows,
    };

    success_as_of("history", context.today, data)
}

/// Logged entries for `year` compared against each day's goal, newest first.
pub(crate) fn history_rows(
    state: &TrackerState,
    year: i32,
    exercise: Option<&str>,
) -> ClientResult<Vec<HistoryRow>> {
    if let Some(name) = exercise {
        require_exercise(&state.settings, name)?;
    }

    let scheduler = GoalScheduler::new(&state.settings);
    let mut rows = Vec::new();
    for entry in state.workouts.entries_in_year(year) {
        if exercise.is_some_and(|name| name != entry.exercise) {
            continue;
        }
        // Entries for an exercise no longer configured have no goal to compare against.
        let Ok(goal) = scheduler.goal_for(&entry.exercise, entry.date) else {
            tracing::debug!(exercise = %entry.exercise, date = %entry.date, "skipping unconfigured entry");
            continue;
        };
        rows.push(HistoryRow {
            date: format_iso_date(&entry.date),
            achieved: entry.quantity >= goal,
            performed: entry.quantity,
            goal,
            exercise: entry.exercise,
        });
    }

    // Entries arrive date-ascending; a stable sort on date keeps exercises alphabetical.
    rows.sort_by(|left, right| right.date.cmp(&left.date));
    Ok(rows)
}
