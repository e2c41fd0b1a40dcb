use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::ClientResult;
use crate::commands::common::load_context;
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{CalendarData, CalendarDay};
use crate::engine::date::{YearMonth, format_iso_date, parse_year_month};
use crate::engine::{DayStatus, ProgressAggregator};

#[derive(Debug, Default)]
pub struct CalendarRunOptions<'a> {
    pub month: Option<String>,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run(month: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(CalendarRunOptions {
        month: month.map(std::string::ToString::to_string),
        ..CalendarRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: CalendarRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = load_context(options.home_override, options.today)?;
    let month = match options.month.as_deref() {
        Some(value) => parse_year_month(value, "calendar")?,
        None => YearMonth::of(context.today),
    };

    let state = &context.setup.state;
    let aggregator = ProgressAggregator::new(state, context.today);

    let mut counts = DayStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), 0usize))
        .collect::<BTreeMap<String, usize>>();
    let mut days = Vec::new();
    for date in month.days()? {
        let status = aggregator.classify_day(date);
        if let Some(count) = counts.get_mut(status.as_str()) {
            *count += 1;
        }
        days.push(CalendarDay {
            date: format_iso_date(&date),
            day: date.day(),
            weekday: date.weekday().num_days_from_monday(),
            status: status.as_str().to_string(),
        });
    }

    let data = CalendarData {
        month: month.label(),
        today: format_iso_date(&context.today),
        start_date: format_iso_date(&state.settings.start_date),
        days,
        counts,
    };

    success_as_of("calendar", context.today, data)
}
