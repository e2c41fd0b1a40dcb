use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::ClientResult;
use crate::state::{
    ensure_tracker_directory, load_state, resolve_tracker_home, save_state, state_file_path,
};
use crate::tracker::TrackerState;

#[derive(Debug, Clone)]
pub struct SetupContext {
    pub home: PathBuf,
    pub state_path: PathBuf,
    pub state: TrackerState,
    /// Whether this call wrote the initial state file.
    pub created: bool,
}

impl SetupContext {
    pub fn persist(&self) -> ClientResult<()> {
        save_state(&self.state_path, &self.state)
    }
}

pub fn ensure_initialized(today: NaiveDate) -> ClientResult<SetupContext> {
    ensure_initialized_with_home_override(None, today)
}

pub fn ensure_initialized_at(home_override: &Path, today: NaiveDate) -> ClientResult<SetupContext> {
    ensure_initialized_with_home_override(Some(home_override), today)
}

/// Loads the tracker state, writing default settings starting on `today` on first use.
fn ensure_initialized_with_home_override(
    home_override: Option<&Path>,
    today: NaiveDate,
) -> ClientResult<SetupContext> {
    let home = resolve_tracker_home(home_override)?;
    ensure_tracker_directory(&home)?;
    let state_path = state_file_path(&home);

    if let Some(state) = load_state(&state_path)? {
        return Ok(SetupContext {
            home,
            state_path,
            state,
            created: false,
        });
    }

    let state = TrackerState::with_default_settings(today);
    save_state(&state_path, &state)?;
    tracing::info!(
        path = %state_path.display(),
        start_date = %state.settings.start_date,
        "initialized tracker state with default exercises"
    );

    Ok(SetupContext {
        home,
        state_path,
        state,
        created: true,
    })
}
