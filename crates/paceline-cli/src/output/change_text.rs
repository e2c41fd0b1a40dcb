use std::io;

use serde_json::Value;

use super::format::{Column, i64_field, key_value_rows, render_table, rows_field, str_field};

pub fn render_log(data: &Value) -> io::Result<String> {
    let exercise = str_field(data, "exercise");
    let date = str_field(data, "date");
    let quantity = data.get("quantity").and_then(Value::as_i64);
    let previous = data.get("previous_quantity").and_then(Value::as_i64);

    let headline = match (str_field(data, "action"), quantity, previous) {
        ("add", Some(quantity), _) => format!("Logged {quantity} {exercise} on {date}"),
        ("edit", Some(quantity), Some(previous)) => {
            format!("Updated {exercise} on {date}: {previous} -> {quantity}")
        }
        ("delete", _, Some(previous)) => format!("Deleted {exercise} on {date} (was {previous})"),
        (action, _, _) => {
            return Err(io::Error::other(format!(
                "unsupported log action `{action}`"
            )));
        }
    };

    let goal = data.get("goal").and_then(Value::as_i64);
    let verdict = match (goal, data.get("achieved").and_then(Value::as_bool)) {
        (Some(goal), Some(true)) => format!(" (goal {goal}, met)."),
        (Some(goal), Some(false)) => format!(" (goal {goal}, not met yet)."),
        _ => ".".to_string(),
    };

    let entries = data
        .get("day_entries")
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .map(|(name, value)| format!("{name} {}", value.as_i64().unwrap_or(0)))
                .collect::<Vec<String>>()
        })
        .unwrap_or_default();
    let day_line = if entries.is_empty() {
        format!("  Nothing logged on {date}.")
    } else {
        format!("  Logged on {date}: {}", entries.join(", "))
    };

    Ok(format!("{headline}{verdict}\n{day_line}"))
}

pub fn render_settings(data: &Value) -> io::Result<String> {
    let mut lines = Vec::new();
    if let Some(notice) = data.get("notice").and_then(Value::as_str) {
        lines.push(notice.to_string());
        lines.push(String::new());
    }

    lines.push("Settings".to_string());
    lines.extend(key_value_rows(
        &[
            ("Start date", str_field(data, "start_date").to_string()),
            ("First week ends", str_field(data, "first_week_end").to_string()),
            ("State file", str_field(data, "state_path").to_string()),
        ],
        2,
    ));
    lines.push(String::new());

    let exercises = rows_field(data, "exercises");
    if exercises.is_empty() {
        lines.push("  No exercises are configured.".to_string());
        return Ok(lines.join("\n"));
    }

    let rows = exercises
        .iter()
        .map(|row| {
            vec![
                str_field(row, "exercise").to_string(),
                i64_field(row, "base_goal").to_string(),
                i64_field(row, "weekly_increment").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(render_table(
        &[
            Column::left("Exercise"),
            Column::right("Base goal"),
            Column::right("Weekly increment"),
        ],
        &rows,
    ));
    Ok(lines.join("\n"))
}

pub fn render_export(data: &Value) -> io::Result<String> {
    let rows = i64_field(data, "rows_written");
    let noun = if rows == 1 { "row" } else { "rows" };
    Ok(format!(
        "Wrote {rows} {noun} for {} to {}.",
        i64_field(data, "year"),
        str_field(data, "path")
    ))
}
