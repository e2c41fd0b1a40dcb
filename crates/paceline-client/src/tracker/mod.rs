pub mod settings;
pub(crate) mod stored;
pub mod workouts;

use chrono::NaiveDate;

pub use settings::{ExercisePlan, Settings};
pub use workouts::{WorkoutEntry, WorkoutLog};

/// The single snapshot every engine call borrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub settings: Settings,
    pub workouts: WorkoutLog,
}

impl TrackerState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            workouts: WorkoutLog::default(),
        }
    }

    pub fn with_default_settings(start_date: NaiveDate) -> Self {
        Self::new(Settings::with_default_exercises(start_date))
    }
}
