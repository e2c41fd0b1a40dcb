use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::engine::date::days_of_year;
use crate::engine::schedule::GoalScheduler;
use crate::tracker::{ExercisePlan, TrackerState};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    BeforeStart,
    Future,
    Today,
    FullyCompleted,
    PartiallyCompleted,
    Missed,
}

impl DayStatus {
    pub const ALL: [Self; 6] = [
        Self::BeforeStart,
        Self::Future,
        Self::Today,
        Self::FullyCompleted,
        Self::PartiallyCompleted,
        Self::Missed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeStart => "before_start",
            Self::Future => "future",
            Self::Today => "today",
            Self::FullyCompleted => "fully_completed",
            Self::PartiallyCompleted => "partially_completed",
            Self::Missed => "missed",
        }
    }
}

/// Ahead/behind signal derived from the sign of the performance delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Ahead,
    OnPace,
    Behind,
}

impl Pace {
    pub fn from_delta(delta: i64) -> Self {
        match delta.cmp(&0) {
            Ordering::Greater => Self::Ahead,
            Ordering::Equal => Self::OnPace,
            Ordering::Less => Self::Behind,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ahead => "ahead",
            Self::OnPace => "on_pace",
            Self::Behind => "behind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyProgress {
    pub exercise: String,
    pub year: i32,
    pub performed_total: i64,
    pub yearly_goal: i64,
    pub goal_to_date: i64,
}

impl YearlyProgress {
    /// Positive is a surplus, negative a deficit. Saturates at the `i64` bounds;
    /// [`ProgressAggregator::yearly_progress`] never builds a value where it would.
    pub fn delta(&self) -> i64 {
        self.performed_total.saturating_sub(self.goal_to_date)
    }

    pub fn pace(&self) -> Pace {
        Pace::from_delta(self.delta())
    }

    /// `None` when no goal has accrued yet, so there is nothing to compare against.
    pub fn ratio(&self) -> Option<f64> {
        if self.goal_to_date <= 0 {
            return None;
        }
        Some(self.performed_total as f64 / self.goal_to_date as f64)
    }
}

/// Read-only aggregation over a borrowed tracker snapshot, evaluated as of `today`.
#[derive(Debug, Clone, Copy)]
pub struct ProgressAggregator<'a> {
    state: &'a TrackerState,
    scheduler: GoalScheduler<'a>,
    today: NaiveDate,
}

impl<'a> ProgressAggregator<'a> {
    pub fn new(state: &'a TrackerState, today: NaiveDate) -> Self {
        Self {
            state,
            scheduler: GoalScheduler::new(&state.settings),
            today,
        }
    }

    pub fn scheduler(&self) -> GoalScheduler<'a> {
        self.scheduler
    }

    pub fn yearly_goal(&self, exercise: &str, year: i32) -> ClientResult<i64> {
        let plan = self.state.settings.plan(exercise)?;
        self.sum_goals(exercise, plan, year, None)
    }

    pub fn yearly_progress(&self, exercise: &str, year: i32) -> ClientResult<YearlyProgress> {
        let plan = self.state.settings.plan(exercise)?;
        let yearly_goal = self.sum_goals(exercise, plan, year, None)?;

        let goal_to_date = match year.cmp(&self.today.year()) {
            Ordering::Less => yearly_goal,
            Ordering::Equal => self.sum_goals(exercise, plan, year, Some(self.today))?,
            Ordering::Greater => 0,
        };
        let performed_total = self
            .state
            .workouts
            .performed_in_year(exercise, year)
            .ok_or_else(|| ClientError::total_out_of_range(exercise, year))?;
        if performed_total.checked_sub(goal_to_date).is_none() {
            return Err(ClientError::total_out_of_range(exercise, year));
        }

        Ok(YearlyProgress {
            exercise: exercise.to_string(),
            year,
            performed_total,
            yearly_goal,
            goal_to_date,
        })
    }

    /// Counts logged presence only; a logged quantity below the day's goal
    /// still completes the day.
    pub fn classify_day(&self, date: NaiveDate) -> DayStatus {
        if date < self.state.settings.start_date {
            return DayStatus::BeforeStart;
        }
        if date > self.today {
            return DayStatus::Future;
        }
        if date == self.today {
            return DayStatus::Today;
        }

        let configured = &self.state.settings.base_goals;
        let logged = self
            .state
            .workouts
            .day(date)
            .map(|exercises| {
                exercises
                    .keys()
                    .filter(|exercise| configured.contains_key(exercise.as_str()))
                    .count()
            })
            .unwrap_or(0);

        if logged == configured.len() {
            DayStatus::FullyCompleted
        } else if logged > 0 {
            DayStatus::PartiallyCompleted
        } else {
            DayStatus::Missed
        }
    }

    /// A missing entry counts as zero performed.
    pub fn achieved(&self, exercise: &str, date: NaiveDate) -> ClientResult<bool> {
        let goal = self.scheduler.goal_for(exercise, date)?;
        let performed = self.state.workouts.quantity(date, exercise).unwrap_or(0);
        Ok(performed >= goal)
    }

    fn sum_goals(
        &self,
        exercise: &str,
        plan: ExercisePlan,
        year: i32,
        through: Option<NaiveDate>,
    ) -> ClientResult<i64> {
        days_of_year(year)?
            .into_iter()
            .take_while(|day| through.is_none_or(|last| *day <= last))
            .map(|day| self.scheduler.goal_for_plan(plan, day))
            .try_fold(0i64, i64::checked_add)
            .ok_or_else(|| ClientError::total_out_of_range(exercise, year))
    }
}
