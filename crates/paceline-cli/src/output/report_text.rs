use std::io;

use serde_json::Value;

use super::format::{
    Column, i64_field, key_value_rows, pace_label, percent, render_table, rows_field, signed,
    str_field,
};

pub fn render_status(data: &Value) -> io::Result<String> {
    let mut lines = vec![format!(
        "Today is {} ({})",
        str_field(data, "today"),
        status_label(str_field(data, "day_status"))
    )];
    lines.push(String::new());
    lines.extend(key_value_rows(
        &[("Start date", str_field(data, "start_date").to_string())],
        2,
    ));
    lines.push(String::new());

    let exercises = rows_field(data, "exercises");
    if exercises.is_empty() {
        lines.push("  No exercises are configured.".to_string());
        lines.push(
            "  Add one with `paceline settings exercise set <name> --base <n> --increment <n>`."
                .to_string(),
        );
        return Ok(lines.join("\n"));
    }

    let rows = exercises
        .iter()
        .map(|row| {
            let progress = row.get("progress").unwrap_or(&Value::Null);
            let logged = row
                .get("logged_today")
                .and_then(Value::as_i64)
                .map_or_else(|| "-".to_string(), |value| value.to_string());
            vec![
                str_field(row, "exercise").to_string(),
                i64_field(row, "goal_today").to_string(),
                logged,
                yes_no(row.get("achieved_today").and_then(Value::as_bool)),
                i64_field(progress, "performed_total").to_string(),
                i64_field(progress, "goal_to_date").to_string(),
                pace_label(str_field(progress, "pace"), i64_field(progress, "delta")),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(render_table(
        &[
            Column::left("Exercise"),
            Column::right("Goal"),
            Column::right("Logged"),
            Column::left("Met"),
            Column::right("Year total"),
            Column::right("Goal to date"),
            Column::left("Pace"),
        ],
        &rows,
    ));
    Ok(lines.join("\n"))
}

pub fn render_progress(data: &Value) -> io::Result<String> {
    let year = i64_field(data, "year");
    let mut lines = vec![format!(
        "Progress for {year} (as of {})",
        str_field(data, "as_of")
    )];
    lines.push(String::new());

    let rows = rows_field(data, "rows");
    if rows.is_empty() {
        lines.push("  No exercises are configured.".to_string());
        return Ok(lines.join("\n"));
    }

    let mut missing_ratio = false;
    let table_rows = rows
        .iter()
        .map(|row| {
            let ratio = row.get("ratio").and_then(Value::as_f64);
            missing_ratio |= ratio.is_none();
            let delta = i64_field(row, "delta");
            vec![
                str_field(row, "exercise").to_string(),
                i64_field(row, "performed_total").to_string(),
                i64_field(row, "goal_to_date").to_string(),
                signed(delta),
                percent(ratio),
                i64_field(row, "yearly_goal").to_string(),
                pace_label(str_field(row, "pace"), delta),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(render_table(
        &[
            Column::left("Exercise"),
            Column::right("Performed"),
            Column::right("Goal to date"),
            Column::right("Delta"),
            Column::right("Ratio"),
            Column::right("Yearly goal"),
            Column::left("Pace"),
        ],
        &table_rows,
    ));

    if missing_ratio {
        lines.push(String::new());
        lines.push("  n/a: no applicable goal has accrued yet for this year.".to_string());
    }
    Ok(lines.join("\n"))
}

pub fn render_history(data: &Value) -> io::Result<String> {
    let year = i64_field(data, "year");
    let scope = data
        .get("exercise")
        .and_then(Value::as_str)
        .map_or_else(String::new, |exercise| format!(" ({exercise})"));
    let rows = rows_field(data, "rows");

    if rows.is_empty() {
        return Ok(format!("No entries logged in {year}{scope}."));
    }

    let mut lines = vec![format!(
        "History for {year}{scope}: {} entries, {} met their goal",
        i64_field(data, "total"),
        i64_field(data, "achieved_count")
    )];
    lines.push(String::new());

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                str_field(row, "date").to_string(),
                str_field(row, "exercise").to_string(),
                i64_field(row, "performed").to_string(),
                i64_field(row, "goal").to_string(),
                yes_no(row.get("achieved").and_then(Value::as_bool)),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(render_table(
        &[
            Column::left("Date"),
            Column::left("Exercise"),
            Column::right("Performed"),
            Column::right("Goal"),
            Column::left("Met"),
        ],
        &table_rows,
    ));
    Ok(lines.join("\n"))
}

pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}
