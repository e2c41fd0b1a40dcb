use paceline_client::commands;
use paceline_client::commands::settings::SettingsChange;
use paceline_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, ExerciseCommand, IsoDate, LogCommand, SettingsCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Status { .. } => commands::status::run(),
        Commands::Goal {
            exercise,
            date,
            explain,
            ..
        } => commands::goal::run(exercise, date_str(date), *explain),
        Commands::Progress { year, exercise, .. } => {
            commands::progress::run(*year, exercise.as_deref())
        }
        Commands::Calendar { month, .. } => commands::calendar::run(month.as_deref()),
        Commands::History { year, exercise, .. } => {
            commands::history::run(*year, exercise.as_deref())
        }
        Commands::Log { command } => match command {
            LogCommand::Add {
                exercise,
                quantity,
                date,
                ..
            } => commands::log::add(exercise, *quantity, date_str(date)),
            LogCommand::Edit {
                exercise,
                quantity,
                date,
                ..
            } => commands::log::edit(exercise, *quantity, date_str(date)),
            LogCommand::Delete { exercise, date, .. } => {
                commands::log::delete(exercise, date_str(date))
            }
        },
        Commands::Settings { command } => commands::settings::run(settings_change(command)),
        Commands::Export { path, year } => commands::export::run(path, *year),
    }
}

fn date_str(date: &Option<IsoDate>) -> Option<&str> {
    date.as_ref().map(IsoDate::as_str)
}

fn settings_change(command: &SettingsCommand) -> SettingsChange {
    match command {
        SettingsCommand::Show { .. } => SettingsChange::Show,
        SettingsCommand::StartDate { date } => SettingsChange::StartDate(date.0.clone()),
        SettingsCommand::Exercise { command } => match command {
            ExerciseCommand::Set {
                name,
                base,
                increment,
            } => SettingsChange::SetExercise {
                exercise: name.clone(),
                base_goal: *base,
                weekly_increment: *increment,
            },
            ExerciseCommand::Remove { name } => SettingsChange::RemoveExercise(name.clone()),
        },
    }
}
