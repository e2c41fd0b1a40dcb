use chrono::{Local, NaiveDate};

use crate::ClientResult;
use crate::engine::date::parse_iso_date;

/// Directory holding `state.json`.
pub const HOME_ENV: &str = "PACELINE_HOME";
/// Evaluation date override in `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "PACELINE_TODAY";
/// `tracing` env-filter directive for the CLI.
pub const LOG_ENV: &str = "PACELINE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const HOME_DIR_NAME: &str = ".paceline";

/// Resolves the evaluation date: explicit override, then `PACELINE_TODAY`,
/// then the local calendar date.
pub fn resolve_today(today_override: Option<NaiveDate>) -> ClientResult<NaiveDate> {
    if let Some(today) = today_override {
        return Ok(today);
    }
    match std::env::var(TODAY_ENV) {
        Ok(value) if !value.trim().is_empty() => parse_iso_date(value.trim(), TODAY_ENV),
        _ => Ok(Local::now().date_naive()),
    }
}

pub fn log_filter() -> String {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}
