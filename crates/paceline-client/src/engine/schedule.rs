use chrono::{Duration, NaiveDate};

use crate::ClientResult;
use crate::engine::date::{format_iso_date, week_end, weekday_label};
use crate::tracker::{ExercisePlan, Settings};

/// Which rule of the weekly step schedule governs a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStep {
    BeforeStart,
    FirstWeek {
        first_week_end: NaiveDate,
    },
    FullWeeks {
        first_week_end: NaiveDate,
        first_full_week_start: NaiveDate,
        elapsed_days: i64,
        full_weeks_elapsed: i64,
    },
}

impl GoalStep {
    pub fn resolve(start_date: NaiveDate, date: NaiveDate) -> Self {
        if date < start_date {
            return Self::BeforeStart;
        }

        let first_week_end = week_end(start_date);
        if date <= first_week_end {
            return Self::FirstWeek { first_week_end };
        }

        let first_full_week_start = first_week_end + Duration::days(1);
        let elapsed_days = (date - first_full_week_start).num_days();
        Self::FullWeeks {
            first_week_end,
            first_full_week_start,
            elapsed_days,
            full_weeks_elapsed: elapsed_days / 7 + 1,
        }
    }

    pub fn goal(self, plan: ExercisePlan) -> i64 {
        match self {
            Self::BeforeStart => 0,
            Self::FirstWeek { .. } => plan.base_goal.max(0),
            Self::FullWeeks {
                full_weeks_elapsed, ..
            } => unclamped_full_week_goal(plan, full_weeks_elapsed).max(0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeStart => "before_start",
            Self::FirstWeek { .. } => "first_week",
            Self::FullWeeks { .. } => "full_weeks",
        }
    }
}

/// Computes daily goals from [`Settings`] in constant time per date.
#[derive(Debug, Clone, Copy)]
pub struct GoalScheduler<'a> {
    settings: &'a Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalExplanation {
    pub exercise: String,
    pub date: NaiveDate,
    pub start_date: NaiveDate,
    pub step: GoalStep,
    pub plan: ExercisePlan,
    pub goal: i64,
    pub lines: Vec<String>,
}

impl<'a> GoalScheduler<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn goal_for(&self, exercise: &str, date: NaiveDate) -> ClientResult<i64> {
        let plan = self.settings.plan(exercise)?;
        Ok(self.goal_for_plan(plan, date))
    }

    pub fn goal_for_plan(&self, plan: ExercisePlan, date: NaiveDate) -> i64 {
        GoalStep::resolve(self.settings.start_date, date).goal(plan)
    }

    pub fn explain_goal(&self, exercise: &str, date: NaiveDate) -> ClientResult<GoalExplanation> {
        let plan = self.settings.plan(exercise)?;
        let start_date = self.settings.start_date;
        let step = GoalStep::resolve(start_date, date);
        let goal = step.goal(plan);

        Ok(GoalExplanation {
            exercise: exercise.to_string(),
            date,
            start_date,
            step,
            plan,
            goal,
            lines: explanation_lines(start_date, date, step, plan, goal),
        })
    }
}

fn unclamped_full_week_goal(plan: ExercisePlan, full_weeks_elapsed: i64) -> i64 {
    plan.base_goal
        .saturating_add(full_weeks_elapsed.saturating_mul(plan.weekly_increment))
}

fn explanation_lines(
    start_date: NaiveDate,
    date: NaiveDate,
    step: GoalStep,
    plan: ExercisePlan,
    goal: i64,
) -> Vec<String> {
    let day = format_iso_date(&date);
    let start = format_iso_date(&start_date);

    match step {
        GoalStep::BeforeStart => vec![
            format!("{day} is before the start date {start}, so no goal applies yet."),
            "Goal = 0".to_string(),
        ],
        GoalStep::FirstWeek { first_week_end } => {
            let mut lines = vec![
                format!(
                    "The start date {start} is a {}; the first partial week ends on Sunday {}.",
                    weekday_label(start_date),
                    format_iso_date(&first_week_end)
                ),
                format!(
                    "{day} falls in the first partial week, which always uses the full base goal."
                ),
                format!("Goal = base goal = {}", plan.base_goal),
            ];
            if goal != plan.base_goal {
                lines.push(format!("Negative goal clamped to {goal}."));
            }
            lines
        }
        GoalStep::FullWeeks {
            first_week_end,
            first_full_week_start,
            elapsed_days,
            full_weeks_elapsed,
        } => {
            let raw = unclamped_full_week_goal(plan, full_weeks_elapsed);
            let mut lines = vec![
                format!(
                    "The first partial week ended on Sunday {}; full weeks start on Monday {}.",
                    format_iso_date(&first_week_end),
                    format_iso_date(&first_full_week_start)
                ),
                format!(
                    "{elapsed_days} days have elapsed from {} to {day}: floor({elapsed_days} / 7) + 1 = {full_weeks_elapsed} full weeks.",
                    format_iso_date(&first_full_week_start)
                ),
                format!(
                    "Goal = {} + {full_weeks_elapsed} x {} = {raw}",
                    plan.base_goal, plan.weekly_increment
                ),
            ];
            if raw != goal {
                lines.push(format!("Negative goal clamped to {goal}."));
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::{GoalScheduler, GoalStep};
    use crate::tracker::Settings;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    fn settings(base_goal: i64, weekly_increment: i64) -> Settings {
        let mut settings = Settings::new(date(2025, 10, 23));
        settings.set_exercise("x", base_goal, weekly_increment);
        settings
    }

    fn goal(settings: &Settings, day: NaiveDate) -> i64 {
        GoalScheduler::new(settings)
            .goal_for("x", day)
            .unwrap_or(i64::MIN)
    }

    #[test]
    fn thursday_start_scenario() {
        let settings = settings(50, 10);
        assert_eq!(goal(&settings, date(2025, 10, 22)), 0);
        assert_eq!(goal(&settings, date(2025, 10, 23)), 50);
        assert_eq!(goal(&settings, date(2025, 10, 24)), 50);
        assert_eq!(goal(&settings, date(2025, 10, 26)), 50);
        assert_eq!(goal(&settings, date(2025, 10, 27)), 60);
        assert_eq!(goal(&settings, date(2025, 11, 2)), 60);
        assert_eq!(goal(&settings, date(2025, 11, 3)), 70);
    }

    #[test]
    fn goals_step_weekly_and_never_within_a_week() {
        let settings = settings(50, 10);
        let first_full_week_start = date(2025, 10, 27);
        for week in 0..60_i64 {
            let monday = first_full_week_start + Duration::days(week * 7);
            let expected = 50 + (week + 1) * 10;
            for offset in 0..7 {
                assert_eq!(goal(&settings, monday + Duration::days(offset)), expected);
            }
        }
    }

    #[test]
    fn sunday_start_has_single_day_first_week() {
        let mut settings = Settings::new(date(2025, 10, 26));
        settings.set_exercise("x", 5, 5);
        assert_eq!(goal(&settings, date(2025, 10, 26)), 5);
        assert_eq!(goal(&settings, date(2025, 10, 27)), 10);
    }

    #[test]
    fn negative_configuration_is_floored_at_zero() {
        let tapering = settings(30, -10);
        assert_eq!(goal(&tapering, date(2025, 10, 27)), 20);
        assert_eq!(goal(&tapering, date(2025, 11, 3)), 10);
        assert_eq!(goal(&tapering, date(2025, 11, 10)), 0);
        assert_eq!(goal(&tapering, date(2025, 12, 29)), 0);

        let negative_base = settings(-5, 0);
        assert_eq!(goal(&negative_base, date(2025, 10, 24)), 0);
    }

    #[test]
    fn unknown_exercise_is_surfaced() {
        let settings = settings(50, 10);
        let result = GoalScheduler::new(&settings).goal_for("y", date(2025, 10, 24));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "unknown_exercise");
        }
    }

    #[test]
    fn explanation_matches_goal_for_every_branch() {
        let settings = settings(50, 10);
        let scheduler = GoalScheduler::new(&settings);
        for day in [date(2025, 10, 1), date(2025, 10, 25), date(2025, 11, 5)] {
            let explained = scheduler.explain_goal("x", day);
            assert!(explained.is_ok());
            if let Ok(explanation) = explained {
                assert_eq!(explanation.goal, goal(&settings, day));
                assert!(!explanation.lines.is_empty());
            }
        }
    }

    #[test]
    fn explanation_reports_full_week_arithmetic() {
        let settings = settings(50, 10);
        let explained = GoalScheduler::new(&settings).explain_goal("x", date(2025, 11, 3));
        assert!(explained.is_ok());
        if let Ok(explanation) = explained {
            assert_eq!(
                explanation.step,
                GoalStep::FullWeeks {
                    first_week_end: date(2025, 10, 26),
                    first_full_week_start: date(2025, 10, 27),
                    elapsed_days: 7,
                    full_weeks_elapsed: 2,
                }
            );
            assert!(
                explanation
                    .lines
                    .iter()
                    .any(|line| line == "Goal = 50 + 2 x 10 = 70")
            );
        }
    }

    #[test]
    fn explanation_mentions_no_pro_rating_in_first_week() {
        let settings = settings(50, 10);
        let explained = GoalScheduler::new(&settings).explain_goal("x", date(2025, 10, 26));
        assert!(explained.is_ok());
        if let Ok(explanation) = explained {
            assert_eq!(explanation.step.as_str(), "first_week");
            assert!(explanation.lines[0].contains("Thursday"));
            assert!(explanation.lines.iter().any(|line| line.contains("= 50")));
        }
    }
}
