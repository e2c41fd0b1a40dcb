use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ClientResult;
use crate::engine::date::{format_iso_date, parse_iso_date};
use crate::tracker::{Settings, TrackerState, WorkoutLog};

/// On-disk shape of the tracker state. Dates stay strings here and are
/// parsed strictly when converted to [`TrackerState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredState {
    pub(crate) settings: StoredSettings,
    #[serde(default)]
    pub(crate) workouts: BTreeMap<String, BTreeMap<String, i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredSettings {
    pub(crate) start_date: String,
    #[serde(default)]
    pub(crate) base_goals: BTreeMap<String, i64>,
    #[serde(default)]
    pub(crate) weekly_increment: BTreeMap<String, i64>,
}

impl StoredState {
    pub(crate) fn from_state(state: &TrackerState) -> Self {
        let workouts = state
            .workouts
            .days()
            .iter()
            .map(|(date, exercises)| (format_iso_date(date), exercises.clone()))
            .collect();

        Self {
            settings: StoredSettings {
                start_date: format_iso_date(&state.settings.start_date),
                base_goals: state.settings.base_goals.clone(),
                weekly_increment: state.settings.weekly_increment.clone(),
            },
            workouts,
        }
    }

    pub(crate) fn into_state(self) -> ClientResult<TrackerState> {
        let start_date = parse_iso_date(&self.settings.start_date, "settings.start_date")?;

        let mut days = BTreeMap::new();
        for (raw_date, exercises) in self.workouts {
            let date = parse_iso_date(&raw_date, "workouts")?;
            days.insert(date, exercises);
        }

        Ok(TrackerState {
            settings: Settings {
                start_date,
                base_goals: self.settings.base_goals,
                weekly_increment: self.settings.weekly_increment,
            },
            workouts: WorkoutLog::from_days(days),
        })
    }
}
