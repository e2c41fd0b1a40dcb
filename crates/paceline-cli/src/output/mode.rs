use crate::cli::{Commands, LogCommand, SettingsCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Status { json }
        | Commands::Goal { json, .. }
        | Commands::Progress { json, .. }
        | Commands::Calendar { json, .. }
        | Commands::History { json, .. } => OutputMode::from_flag(*json),
        Commands::Log { command } => match command {
            LogCommand::Add { json, .. }
            | LogCommand::Edit { json, .. }
            | LogCommand::Delete { json, .. } => OutputMode::from_flag(*json),
        },
        Commands::Settings {
            command: SettingsCommand::Show { json },
        } => OutputMode::from_flag(*json),
        Commands::Settings { .. } | Commands::Export { .. } => OutputMode::Text,
    }
}
