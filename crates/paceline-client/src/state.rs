use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::{HOME_DIR_NAME, HOME_ENV};
use crate::tracker::TrackerState;
use crate::tracker::stored::StoredState;
use crate::{ClientError, ClientResult};

const STATE_FILE_NAME: &str = "state.json";
const STATE_TEMP_FILE_NAME: &str = "state.json.tmp";

pub fn resolve_tracker_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os(HOME_ENV) {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(HOME_DIR_NAME)
            } else {
                return Err(ClientError::state_io_failed(
                    Path::new("."),
                    "Could not resolve a home directory for tracker state.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_tracker_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn state_file_path(home: &Path) -> PathBuf {
    home.join(STATE_FILE_NAME)
}

/// Reads the state file, returning `None` when it does not exist yet.
pub fn load_state(path: &Path) -> ClientResult<Option<TrackerState>> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(map_io_error(path, &error)),
    };

    let stored = serde_json::from_str::<StoredState>(&body)
        .map_err(|error| ClientError::state_corrupt(path, &error.to_string()))?;
    let state = stored.into_state()?;
    tracing::debug!(
        path = %path.display(),
        days = state.workouts.days().len(),
        "loaded tracker state"
    );
    Ok(Some(state))
}

/// Writes through a sibling temp file so a failed write leaves the old state intact.
pub fn save_state(path: &Path, state: &TrackerState) -> ClientResult<()> {
    let body = serde_json::to_string_pretty(&StoredState::from_state(state))
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;

    let temp_path = path.with_file_name(STATE_TEMP_FILE_NAME);
    fs::write(&temp_path, format!("{body}\n")).map_err(|error| map_io_error(&temp_path, &error))?;
    fs::rename(&temp_path, path).map_err(|error| map_io_error(path, &error))?;

    tracing::debug!(path = %path.display(), "saved tracker state");
    Ok(())
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == ErrorKind::PermissionDenied {
        return ClientError::state_permission_denied(path, &error.to_string());
    }

    ClientError::state_io_failed(path, &error.to_string())
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::state_io_failed(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}
