use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_year(value: &str) -> Result<i32, String> {
    if value.len() != 4 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err("year must be four digits (e.g. 2025)".to_string());
    }
    value
        .parse::<i32>()
        .map_err(|_| "year must be four digits (e.g. 2025)".to_string())
}

pub fn parse_month(value: &str) -> Result<String, String> {
    let bytes = value.as_bytes();
    let shaped = value.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == 4 || byte.is_ascii_digit());
    if !shaped {
        return Err("month must use YYYY-MM format".to_string());
    }
    match value[5..].parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(value.to_string()),
        _ => Err("month must be between 01 and 12".to_string()),
    }
}

/// Extended help shown after `paceline goal --help`.
pub const GOAL_AFTER_HELP: &str = "\
How daily goals are scheduled:
  Before the start date the goal is 0.
  From the start date through the following Sunday (the first partial week),
  the goal is the full base goal. It is never pro-rated by days remaining.
  Every Monday after that adds one weekly increment:
    goal = base + full_weeks_elapsed x increment (never below 0)

Example (start 2025-10-23, base 50, increment 10):
  2025-10-24  50    first partial week
  2025-10-27  60    first full week
  2025-11-03  70    second full week

Use --explain to see the arithmetic for a specific date.
";

#[derive(Debug, Parser)]
#[command(
    name = "paceline",
    version,
    about = "daily exercise goals that climb every week",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show today's goals, what you logged, and whether you are ahead or behind
    Status {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the goal for one exercise on a date
    #[command(after_long_help = GOAL_AFTER_HELP)]
    Goal {
        /// Exercise name (e.g. push-ups)
        exercise: String,
        /// Date to evaluate (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Show how the goal was derived
        #[arg(long)]
        explain: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Compare performed totals against the cumulative goal for a year
    Progress {
        /// Year to report (defaults to the current year)
        #[arg(long, value_parser = parse_year)]
        year: Option<i32>,
        /// Limit the report to one exercise
        #[arg(long)]
        exercise: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show a month calendar colored by completion status
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(long, value_parser = parse_month)]
        month: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List logged entries with their goal and whether it was met
    History {
        /// Year to list (defaults to the current year)
        #[arg(long, value_parser = parse_year)]
        year: Option<i32>,
        /// Limit the listing to one exercise
        #[arg(long)]
        exercise: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Add, edit, or delete a logged quantity
    #[command(arg_required_else_help = true)]
    Log {
        #[command(subcommand)]
        command: LogCommand,
    },
    /// Inspect or change the start date and per-exercise goals
    #[command(arg_required_else_help = true)]
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Write a year of history to a CSV file
    Export {
        /// Destination CSV path
        path: PathBuf,
        /// Year to export (defaults to the current year)
        #[arg(long, value_parser = parse_year)]
        year: Option<i32>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum LogCommand {
    /// Record a quantity for an exercise on a date
    Add {
        /// Exercise name (e.g. push-ups)
        exercise: String,
        /// Quantity performed (zero or greater)
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        quantity: i64,
        /// Date of the workout (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Replace the quantity already logged for an exercise on a date
    Edit {
        /// Exercise name (e.g. push-ups)
        exercise: String,
        /// New quantity (zero or greater)
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        quantity: i64,
        /// Date of the workout (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Remove the quantity logged for an exercise on a date
    Delete {
        /// Exercise name (e.g. push-ups)
        exercise: String,
        /// Date of the workout (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsCommand {
    /// Show the start date and every exercise's goals
    Show {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Move the schedule's start date (recomputes every past goal)
    StartDate {
        /// New start date (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        date: IsoDate,
    },
    /// Add, update, or remove an exercise
    #[command(arg_required_else_help = true)]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ExerciseCommand {
    /// Create or update an exercise's base goal and weekly increment
    Set {
        /// Exercise name (e.g. push-ups)
        name: String,
        /// Goal for the first partial week
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        base: i64,
        /// Amount added each full week (negative values taper the goal)
        #[arg(long, allow_negative_numbers = true)]
        increment: i64,
    },
    /// Remove an exercise that has no logged entries
    Remove {
        /// Exercise name
        name: String,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
