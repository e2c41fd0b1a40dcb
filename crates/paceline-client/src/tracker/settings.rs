use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{ClientError, ClientResult};

pub const DEFAULT_EXERCISES: [&str; 3] = ["push-ups", "sit-ups", "squats"];
pub const DEFAULT_BASE_GOAL: i64 = 50;
pub const DEFAULT_WEEKLY_INCREMENT: i64 = 10;

/// Goal configuration shared by every exercise.
///
/// The configured exercise set is the key set of `base_goals`. An exercise
/// missing from either map cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start_date: NaiveDate,
    pub base_goals: BTreeMap<String, i64>,
    pub weekly_increment: BTreeMap<String, i64>,
}

/// Resolved per-exercise schedule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExercisePlan {
    pub base_goal: i64,
    pub weekly_increment: i64,
}

impl Settings {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            base_goals: BTreeMap::new(),
            weekly_increment: BTreeMap::new(),
        }
    }

    pub fn with_default_exercises(start_date: NaiveDate) -> Self {
        let mut settings = Self::new(start_date);
        for exercise in DEFAULT_EXERCISES {
            settings.set_exercise(exercise, DEFAULT_BASE_GOAL, DEFAULT_WEEKLY_INCREMENT);
        }
        settings
    }

    pub fn exercises(&self) -> Vec<String> {
        self.base_goals.keys().cloned().collect()
    }

    pub fn plan(&self, exercise: &str) -> ClientResult<ExercisePlan> {
        match (
            self.base_goals.get(exercise),
            self.weekly_increment.get(exercise),
        ) {
            (Some(base_goal), Some(weekly_increment)) => Ok(ExercisePlan {
                base_goal: *base_goal,
                weekly_increment: *weekly_increment,
            }),
            _ => Err(ClientError::unknown_exercise(exercise, &self.exercises())),
        }
    }

    pub fn set_exercise(&mut self, exercise: &str, base_goal: i64, weekly_increment: i64) {
        self.base_goals.insert(exercise.to_string(), base_goal);
        self.weekly_increment
            .insert(exercise.to_string(), weekly_increment);
    }

    /// Returns whether anything was removed.
    pub fn remove_exercise(&mut self, exercise: &str) -> bool {
        let had_base = self.base_goals.remove(exercise).is_some();
        let had_increment = self.weekly_increment.remove(exercise).is_some();
        had_base || had_increment
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_EXERCISES, ExercisePlan, Settings};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 23).unwrap_or_default()
    }

    #[test]
    fn default_settings_configure_three_exercises() {
        let settings = Settings::with_default_exercises(start());
        assert_eq!(settings.exercises(), DEFAULT_EXERCISES.to_vec());
        for exercise in DEFAULT_EXERCISES {
            assert!(settings.plan(exercise).is_ok());
        }
    }

    #[test]
    fn plan_requires_both_maps() {
        let mut settings = Settings::new(start());
        settings.base_goals.insert("lunges".to_string(), 20);

        let plan = settings.plan("lunges");
        assert!(plan.is_err());
        if let Err(error) = plan {
            assert_eq!(error.code, "unknown_exercise");
        }

        settings.weekly_increment.insert("lunges".to_string(), 2);
        let plan = settings.plan("lunges");
        assert!(plan.is_ok());
        if let Ok(value) = plan {
            assert_eq!(
                value,
                ExercisePlan {
                    base_goal: 20,
                    weekly_increment: 2
                }
            );
        }
    }

    #[test]
    fn remove_exercise_clears_both_maps() {
        let mut settings = Settings::with_default_exercises(start());
        assert!(settings.remove_exercise("squats"));
        assert!(!settings.base_goals.contains_key("squats"));
        assert!(!settings.weekly_increment.contains_key("squats"));
        assert!(!settings.remove_exercise("squats"));
    }
}
