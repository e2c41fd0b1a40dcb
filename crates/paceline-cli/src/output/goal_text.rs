use std::io;

use serde_json::Value;

use super::format::{i64_field, key_value_rows, str_field};

pub fn render_goal(data: &Value) -> io::Result<String> {
    let mut lines = vec![format!(
        "{} on {}: goal {}",
        str_field(data, "exercise"),
        str_field(data, "date"),
        i64_field(data, "goal")
    )];

    let Some(explanation) = data.get("explanation").filter(|value| value.is_object()) else {
        return Ok(lines.join("\n"));
    };

    lines.push(String::new());
    let mut facts = vec![
        ("Step", str_field(explanation, "branch").replace('_', " ")),
        ("Start date", str_field(explanation, "start_date").to_string()),
    ];
    if let Some(end) = explanation.get("first_week_end").and_then(Value::as_str) {
        facts.push(("First week ends", end.to_string()));
    }
    if let Some(weeks) = explanation.get("full_weeks_elapsed").and_then(Value::as_i64) {
        facts.push(("Full weeks", weeks.to_string()));
    }
    facts.push(("Base goal", i64_field(explanation, "base_goal").to_string()));
    facts.push((
        "Weekly increment",
        i64_field(explanation, "weekly_increment").to_string(),
    ));
    lines.extend(key_value_rows(&facts, 2));

    lines.push(String::new());
    lines.push("How it was derived:".to_string());
    lines.extend(
        explanation
            .get("lines")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(|line| format!("  {line}")),
    );
    Ok(lines.join("\n"))
}
