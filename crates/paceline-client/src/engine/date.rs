use chrono::{Datelike, Duration, NaiveDate};

use crate::{ClientError, ClientResult};

/// Calendar month addressed by `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> ClientResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            ClientError::invalid_argument(&format!(
                "Month {:04}-{:02} is outside the supported calendar range.",
                self.year, self.month
            ))
        })
    }

    pub fn days(self) -> ClientResult<Vec<NaiveDate>> {
        let first = self.first_day()?;
        Ok(first
            .iter_days()
            .take_while(|day| day.month() == self.month)
            .collect())
    }

    pub fn label(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

pub fn parse_iso_date(value: &str, field_name: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(ClientError::malformed_date(field_name, value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ClientError::malformed_date(field_name, value))
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_year_month(value: &str, command: &str) -> ClientResult<YearMonth> {
    let invalid = || {
        ClientError::invalid_argument_for_command(
            &format!("`{value}` is not a valid month; use YYYY-MM (e.g. 2025-10)."),
            Some(command),
        )
    };

    let bytes = value.as_bytes();
    if value.len() != 7 || bytes[4] != b'-' {
        return Err(invalid());
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| index == 4 || byte.is_ascii_digit())
    {
        return Err(invalid());
    }

    let year = value[..4].parse::<i32>().map_err(|_| invalid())?;
    let month = value[5..].parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok(YearMonth { year, month })
}

/// Every calendar day of `year`, January 1 through December 31.
pub fn days_of_year(year: i32) -> ClientResult<Vec<NaiveDate>> {
    let first = year_start(year)?;
    Ok(first
        .iter_days()
        .take_while(|day| day.year() == year)
        .collect())
}

pub fn year_start(year: i32) -> ClientResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
        ClientError::invalid_argument(&format!(
            "Year {year} is outside the supported calendar range."
        ))
    })
}

/// Sunday closing the Monday-start week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let offset = 6 - i64::from(date.weekday().num_days_from_monday());
    date + Duration::days(offset)
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday().num_days_from_monday() {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        _ => "Sunday",
    }
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
