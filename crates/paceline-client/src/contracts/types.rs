use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseProgressRow {
    pub exercise: String,
    pub year: i32,
    pub performed_total: i64,
    pub yearly_goal: i64,
    pub goal_to_date: i64,
    pub delta: i64,
    pub pace: String,
    /// `None` when no goal has accrued for the year yet.
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressData {
    pub year: i32,
    pub as_of: String,
    pub rows: Vec<ExerciseProgressRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusExerciseRow {
    pub exercise: String,
    pub goal_today: i64,
    pub logged_today: Option<i64>,
    pub achieved_today: bool,
    pub progress: ExerciseProgressRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusData {
    pub today: String,
    pub start_date: String,
    pub day_status: String,
    pub exercises: Vec<StatusExerciseRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalExplanationData {
    pub branch: String,
    pub start_date: String,
    pub first_week_end: Option<String>,
    pub first_full_week_start: Option<String>,
    pub elapsed_days: Option<i64>,
    pub full_weeks_elapsed: Option<i64>,
    pub base_goal: i64,
    pub weekly_increment: i64,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalData {
    pub exercise: String,
    pub date: String,
    pub goal: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<GoalExplanationData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    /// 0 = Monday through 6 = Sunday.
    pub weekday: u32,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarData {
    pub month: String,
    pub today: String,
    pub start_date: String,
    pub days: Vec<CalendarDay>,
    pub counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub exercise: String,
    pub performed: i64,
    pub goal: i64,
    pub achieved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryData {
    pub year: i32,
    pub exercise: Option<String>,
    pub total: usize,
    pub achieved_count: usize,
    pub rows: Vec<HistoryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogData {
    pub action: String,
    pub date: String,
    pub exercise: String,
    pub quantity: Option<i64>,
    pub previous_quantity: Option<i64>,
    pub goal: Option<i64>,
    pub achieved: Option<bool>,
    pub day_entries: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseSettingsRow {
    pub exercise: String,
    pub base_goal: i64,
    pub weekly_increment: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsData {
    pub action: String,
    pub state_path: String,
    pub start_date: String,
    pub first_week_end: String,
    pub exercises: Vec<ExerciseSettingsRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub path: String,
    pub year: i32,
    pub rows_written: usize,
}
