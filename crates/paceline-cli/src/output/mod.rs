mod calendar_text;
mod change_text;
mod error_text;
mod format;
mod goal_text;
mod json;
mod mode;
mod report_text;

use std::io;

use paceline_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    let data = &success.data;
    match success.command.as_str() {
        "status" => report_text::render_status(data),
        "progress" => report_text::render_progress(data),
        "history" => report_text::render_history(data),
        "goal" => goal_text::render_goal(data),
        "calendar" => calendar_text::render_calendar(data),
        "log add" | "log edit" | "log delete" => change_text::render_log(data),
        "settings show"
        | "settings start-date"
        | "settings exercise set"
        | "settings exercise remove" => change_text::render_settings(data),
        "export" => change_text::render_export(data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
