use std::io;

use chrono::NaiveDate;
use serde_json::Value;

use super::format::{i64_field, rows_field, str_field};

const CELL_WIDTH: usize = 4;
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const LEGEND: [(&str, char, &str); 6] = [
    ("fully_completed", '#', "done"),
    ("partially_completed", '+', "partial"),
    ("missed", 'x', "missed"),
    ("today", '*', "today"),
    ("future", '.', "upcoming"),
    ("before_start", '-', "before start"),
];

pub fn render_calendar(data: &Value) -> io::Result<String> {
    let month = str_field(data, "month");
    let mut lines = vec![format!(
        "{} (as of {}, start {})",
        month_title(month),
        str_field(data, "today"),
        str_field(data, "start_date")
    )];
    lines.push(String::new());
    lines.push(
        WEEKDAYS
            .iter()
            .map(|name| format!("{name:>width$}", width = CELL_WIDTH))
            .collect::<Vec<String>>()
            .join(" "),
    );

    let mut week: Vec<String> = Vec::with_capacity(7);
    for day in rows_field(data, "days") {
        let weekday = usize::try_from(i64_field(day, "weekday")).unwrap_or(0);
        if week.is_empty() {
            week.extend((0..weekday).map(|_| " ".repeat(CELL_WIDTH)));
        }
        week.push(format!(
            "{:>width$}{}",
            i64_field(day, "day"),
            glyph(str_field(day, "status")),
            width = CELL_WIDTH - 1
        ));
        if weekday == 6 {
            lines.push(week.join(" ").trim_end().to_string());
            week.clear();
        }
    }
    if !week.is_empty() {
        lines.push(week.join(" ").trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "  {}",
        LEGEND
            .iter()
            .map(|(_, symbol, label)| format!("{symbol} {label}"))
            .collect::<Vec<String>>()
            .join("  ")
    ));

    let counts = data.get("counts").unwrap_or(&Value::Null);
    lines.push(format!(
        "  {} done, {} partial, {} missed",
        i64_field(counts, "fully_completed"),
        i64_field(counts, "partially_completed"),
        i64_field(counts, "missed")
    ));
    Ok(lines.join("\n"))
}

fn glyph(status: &str) -> char {
    LEGEND
        .iter()
        .find(|(name, _, _)| *name == status)
        .map_or('?', |(_, symbol, _)| *symbol)
}

fn month_title(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_else(|_| month.to_string())
}
