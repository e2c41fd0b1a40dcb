mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use paceline_client::ClientError;
use stdout_io::write_stdout_text;
use tracing_subscriber::EnvFilter;

const ROOT_HELP: &str = "Paceline - daily exercise goals that climb every week

Usage:
  paceline <command>

Start here:
  paceline status
  paceline log add push-ups 40
  paceline goal --help
";

const TOP_LEVEL_HELP: &str = "Paceline - daily exercise goals that climb every week

USAGE: paceline <command>

Today:
  paceline status                                   Goals, what you logged, ahead or behind
  paceline log add <exercise> <quantity>            Record a workout (use --date for other days)
  paceline log edit <exercise> <quantity>           Correct a logged quantity
  paceline log delete <exercise>                    Remove a logged quantity

Look back:
  paceline progress                                 Performed vs. cumulative goal for the year
  paceline calendar                                 Month grid colored by completion
  paceline history                                  Every logged entry with its goal
  paceline export <path>                            Write a year of history to CSV

Plan:
  paceline goal <exercise> --explain                How a day's goal is derived
  paceline settings show                            Start date and per-exercise goals
  paceline settings start-date <YYYY-MM-DD>         Move the schedule's start date
  paceline settings exercise set <name> --base <n> --increment <n>

Data lives in $PACELINE_HOME (default ~/.paceline). Set PACELINE_LOG=debug for diagnostics.
Run `paceline <command> --help` for command usage.
";

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(paceline_client::config::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(paceline_client::config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return handle_parse_error(&raw_args, &err),
    };
    let mode = output::mode_for_command(&cli.command);
    tracing::debug!(?mode, "dispatching command");

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = %error.code, "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn handle_parse_error(raw_args: &[String], err: &clap::Error) -> Result<ExitCode, ExitCode> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let text = if is_top_level_help_request(raw_args) {
                TOP_LEVEL_HELP.to_string()
            } else {
                err.to_string()
            };
            if write_stdout_text(&text).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::DisplayVersion => {
            if write_stdout_text(&err.to_string()).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        kind => {
            let command_hint = if matches!(
                kind,
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(ExitCode::from(1))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing usage block so "What to do next" is the only guidance shown.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Maps the leading subcommand words to the command whose `--help` should be suggested.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let words: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();

    let hint = match words.as_slice() {
        ["log", action @ ("add" | "edit" | "delete"), ..] => format!("log {action}"),
        ["settings", "exercise", action @ ("set" | "remove"), ..] => {
            format!("settings exercise {action}")
        }
        ["settings", action @ ("show" | "start-date" | "exercise"), ..] => {
            format!("settings {action}")
        }
        [
            command @ ("status" | "goal" | "progress" | "calendar" | "history" | "export" | "log"
            | "settings"),
            ..,
        ] => (*command).to_string(),
        _ => return None,
    };
    Some(hint)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
