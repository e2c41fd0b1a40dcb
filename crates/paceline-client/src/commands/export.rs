use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::commands::common::load_context;
use crate::commands::history::history_rows;
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{ExportData, HistoryRow};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct ExportRunOptions<'a> {
    pub path: PathBuf,
    pub year: Option<i32>,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run(path: &Path, year: Option<i32>) -> ClientResult<SuccessEnvelope> {
    run_with_options(ExportRunOptions {
        path: path.to_path_buf(),
        year,
        ..ExportRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: ExportRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let context = load_context(options.home_override, options.today)?;
    let year = options.year.unwrap_or_else(|| context.today.year());
    let mut rows = history_rows(&context.setup.state, year, None)?;
    rows.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.exercise.cmp(&right.exercise))
    });

    write_csv(&options.path, &rows)?;
    tracing::info!(path = %options.path.display(), year, rows = rows.len(), "exported history");

    let data = ExportData {
        path: options.path.display().to_string(),
        year,
        rows_written: rows.len(),
    };
    success_as_of("export", context.today, data)
}

fn write_csv(path: &Path, rows: &[HistoryRow]) -> ClientResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| map_csv_error(path, error))?;
    if rows.is_empty() {
        writer
            .write_record(["date", "exercise", "performed", "goal", "achieved"])
            .map_err(|error| map_csv_error(path, error))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|error| map_csv_error(path, error))?;
    }
    writer
        .flush()
        .map_err(|error| ClientError::export_failed(path, &error.to_string()))
}

fn map_csv_error(path: &Path, error: csv::Error) -> ClientError {
    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => ClientError::export_failed(path, &io_error.to_string()),
        other => ClientError::internal_serialization(&format!("{other:?}")),
    }
}
