use std::path::Path;

use chrono::NaiveDate;

use crate::ClientResult;
use crate::commands::common::{load_context, normalize_exercise_name, resolve_date};
use crate::contracts::envelope::{SuccessEnvelope, success_as_of};
use crate::contracts::types::{GoalData, GoalExplanationData};
use crate::engine::date::format_iso_date;
use crate::engine::{GoalExplanation, GoalScheduler, GoalStep};

#[derive(Debug, Default)]
pub struct GoalRunOptions<'a> {
    pub exercise: String,
    pub date: Option<String>,
    pub explain: bool,
    pub home_override: Option<&'a Path>,
    pub today: Option<NaiveDate>,
}

pub fn run(exercise: &str, date: Option<&str>, explain: bool) -> ClientResult<SuccessEnvelope> {
    run_with_options(GoalRunOptions {
        exercise: exercise.to_string(),
        date: date.map(std::string::ToString::to_string),
        explain,
        ..GoalRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: GoalRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let exercise = normalize_exercise_name(&options.exercise, "goal")?;
    let context = load_context(options.home_override, options.today)?;
    let date = resolve_date(options.date.as_deref(), "date", context.today)?;
    let scheduler = GoalScheduler::new(&context.setup.state.settings);

    let data = if options.explain {
        let explanation = scheduler.explain_goal(&exercise, date)?;
        GoalData {
            exercise,
            date: format_iso_date(&date),
            goal: explanation.goal,
            explanation: Some(explanation_data(&explanation)),
        }
    } else {
        GoalData {
            goal: scheduler.goal_for(&exercise, date)?,
            exercise,
            date: format_iso_date(&date),
            explanation: None,
        }
    };

    success_as_of("goal", context.today, data)
}

fn explanation_data(explanation: &GoalExplanation) -> GoalExplanationData {
    let (first_week_end, first_full_week_start, elapsed_days, full_weeks_elapsed) =
        match explanation.step {
            GoalStep::BeforeStart => (None, None, None, None),
            GoalStep::FirstWeek { first_week_end } => (Some(first_week_end), None, None, None),
            GoalStep::FullWeeks {
                first_week_end,
                first_full_week_start,
                elapsed_days,
                full_weeks_elapsed,
            } => (
                Some(first_week_end),
                Some(first_full_week_start),
                Some(elapsed_days),
                Some(full_weeks_elapsed),
            ),
        };

    GoalExplanationData {
        branch: explanation.step.as_str().to_string(),
        start_date: format_iso_date(&explanation.start_date),
        first_week_end: first_week_end.as_ref().map(format_iso_date),
        first_full_week_start: first_full_week_start.as_ref().map(format_iso_date),
        elapsed_days,
        full_weeks_elapsed,
        base_goal: explanation.plan.base_goal,
        weekly_increment: explanation.plan.weekly_increment,
        lines: explanation.lines.clone(),
    }
}
