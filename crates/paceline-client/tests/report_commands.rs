mod support;

use std::fs;

use paceline_client::commands::calendar::{self, CalendarRunOptions};
use paceline_client::commands::export::{self, ExportRunOptions};
use paceline_client::commands::goal::{self, GoalRunOptions};
use paceline_client::commands::history::{self, HistoryRunOptions};
use paceline_client::commands::log::LogAction;
use paceline_client::commands::progress::{self, ProgressRunOptions};
use paceline_client::commands::settings::{self, SettingsChange, SettingsRunOptions};
use paceline_client::commands::status::{self, StatusRunOptions};
use serde_json::Value;
use support::tracker_testkit::{
    configure_single_exercise, date, log_entry, payload, read_state, temp_home_in_tmp,
};

#[test]
fn goal_command_follows_weekly_schedule() {
    let temp = temp_home_in_tmp("paceline-goal");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 10);
        configure_single_exercise(&home, "2025-10-23", today);

        for (day, expected) in [
            ("2025-10-22", 0),
            ("2025-10-24", 50),
            ("2025-10-27", 60),
            ("2025-11-03", 70),
        ] {
            let body = payload(goal::run_with_options(GoalRunOptions {
                exercise: "push-ups".to_string(),
                date: Some(day.to_string()),
                home_override: Some(&home),
                today: Some(today),
                ..GoalRunOptions::default()
            }));
            assert_eq!(body["data"]["goal"], expected, "goal for {day}");
            assert!(body["data"].get("explanation").is_none());
        }
    }
}

#[test]
fn goal_explanation_uses_same_branch_as_goal() {
    let temp = temp_home_in_tmp("paceline-goal-explain");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 10);
        configure_single_exercise(&home, "2025-10-23", today);

        let body = payload(goal::run_with_options(GoalRunOptions {
            exercise: "push-ups".to_string(),
            date: Some("2025-11-03".to_string()),
            explain: true,
            home_override: Some(&home),
            today: Some(today),
        }));
        let explanation = &body["data"]["explanation"];
        assert_eq!(body["data"]["goal"], 70);
        assert_eq!(explanation["branch"], "full_weeks");
        assert_eq!(explanation["first_week_end"], "2025-10-26");
        assert_eq!(explanation["first_full_week_start"], "2025-10-27");
        assert_eq!(explanation["elapsed_days"], 7);
        assert_eq!(explanation["full_weeks_elapsed"], 2);
        assert!(
            explanation["lines"]
                .as_array()
                .is_some_and(|lines| lines.iter().any(|line| line == "Goal = 50 + 2 x 10 = 70"))
        );
    }
}

#[test]
fn goal_for_unknown_exercise_is_a_configuration_error() {
    let temp = temp_home_in_tmp("paceline-goal-unknown");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let result = goal::run_with_options(GoalRunOptions {
            exercise: "burpees".to_string(),
            home_override: Some(&home),
            today: Some(date(2025, 11, 10)),
            ..GoalRunOptions::default()
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "unknown_exercise");
        }
    }
}

#[test]
fn progress_reports_surplus_and_deficit() {
    let temp = temp_home_in_tmp("paceline-progress");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 300, "2025-10-23", today).is_ok());

        let body = payload(progress::run_with_options(ProgressRunOptions {
            home_override: Some(&home),
            today: Some(today),
            ..ProgressRunOptions::default()
        }));
        assert_eq!(body["as_of"], "2025-10-28");
        let row = &body["data"]["rows"][0];
        assert_eq!(row["exercise"], "push-ups");
        assert_eq!(row["performed_total"], 300);
        assert_eq!(row["goal_to_date"], 4 * 50 + 2 * 60);
        assert_eq!(row["delta"], 300 - 320);
        assert_eq!(row["pace"], "behind");
        assert!(row["ratio"].is_f64());
    }
}

#[test]
fn progress_for_future_year_has_no_applicable_goal() {
    let temp = temp_home_in_tmp("paceline-progress-future");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);

        let body = payload(progress::run_with_options(ProgressRunOptions {
            year: Some(2026),
            exercise: Some("push-ups".to_string()),
            home_override: Some(&home),
            today: Some(today),
        }));
        let row = &body["data"]["rows"][0];
        assert_eq!(row["goal_to_date"], 0);
        assert_eq!(row["ratio"], Value::Null);
        assert_eq!(row["pace"], "on_pace");
        assert!(row["yearly_goal"].as_i64().is_some_and(|total| total > 0));
    }
}

#[test]
fn status_keeps_today_as_today_after_logging_everything() {
    let temp = temp_home_in_tmp("paceline-status");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 60, "2025-10-28", today).is_ok());

        let body = payload(status::run_with_options(StatusRunOptions {
            home_override: Some(&home),
            today: Some(today),
        }));
        assert_eq!(body["data"]["day_status"], "today");
        let row = &body["data"]["exercises"][0];
        assert_eq!(row["goal_today"], 60);
        assert_eq!(row["logged_today"], 60);
        assert_eq!(row["achieved_today"], true);
        assert_eq!(row["progress"]["year"], 2025);
    }
}

#[test]
fn calendar_classifies_each_day_of_month() {
    let temp = temp_home_in_tmp("paceline-calendar");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 1, "2025-10-24", today).is_ok());

        let body = payload(calendar::run_with_options(CalendarRunOptions {
            month: Some("2025-10".to_string()),
            home_override: Some(&home),
            today: Some(today),
        }));
        let days = body["data"]["days"].as_array().cloned().unwrap_or_default();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0]["weekday"], 2);
        assert_eq!(days[21]["status"], "before_start");
        assert_eq!(days[23]["status"], "fully_completed");
        assert_eq!(days[24]["status"], "missed");
        assert_eq!(days[27]["status"], "today");
        assert_eq!(days[30]["status"], "future");

        let counts = &body["data"]["counts"];
        assert_eq!(counts["before_start"], 22);
        assert_eq!(counts["fully_completed"], 1);
        assert_eq!(counts["missed"], 4);
        assert_eq!(counts["today"], 1);
        assert_eq!(counts["future"], 3);
        assert_eq!(counts["partially_completed"], 0);
    }
}

#[test]
fn calendar_rejects_malformed_month() {
    let temp = temp_home_in_tmp("paceline-calendar-month");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let result = calendar::run_with_options(CalendarRunOptions {
            month: Some("2025-13".to_string()),
            home_override: Some(&home),
            today: Some(date(2025, 10, 28)),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}

#[test]
fn history_compares_each_entry_to_its_goal() {
    let temp = temp_home_in_tmp("paceline-history");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 4);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 50, "2025-10-24", today).is_ok());
        assert!(log_entry(&home, LogAction::Add, "push-ups", 65, "2025-11-03", today).is_ok());

        let body = payload(history::run_with_options(HistoryRunOptions {
            home_override: Some(&home),
            today: Some(today),
            ..HistoryRunOptions::default()
        }));
        let rows = body["data"]["rows"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2025-11-03");
        assert_eq!(rows[0]["goal"], 70);
        assert_eq!(rows[0]["achieved"], false);
        assert_eq!(rows[1]["date"], "2025-10-24");
        assert_eq!(rows[1]["achieved"], true);
        assert_eq!(body["data"]["achieved_count"], 1);
    }
}

#[test]
fn export_writes_history_as_csv() {
    let temp = temp_home_in_tmp("paceline-export");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let today = date(2025, 11, 4);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 65, "2025-11-03", today).is_ok());
        assert!(log_entry(&home, LogAction::Add, "push-ups", 50, "2025-10-24", today).is_ok());

        let target = dir.path().join("history.csv");
        let body = payload(export::run_with_options(ExportRunOptions {
            path: target.clone(),
            year: Some(2025),
            home_override: Some(&home),
            today: Some(today),
        }));
        assert_eq!(body["data"]["rows_written"], 2);

        let written = fs::read_to_string(&target);
        assert!(written.is_ok());
        if let Ok(text) = written {
            let lines = text.lines().collect::<Vec<&str>>();
            assert_eq!(lines[0], "date,exercise,performed,goal,achieved");
            assert_eq!(lines[1], "2025-10-24,push-ups,50,50,true");
            assert_eq!(lines[2], "2025-11-03,push-ups,65,70,false");
        }
    }
}

#[test]
fn start_date_change_reclassifies_history() {
    let temp = temp_home_in_tmp("paceline-start-date");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 4);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 65, "2025-11-03", today).is_ok());

        let body = payload(settings::run_with_options(SettingsRunOptions {
            change: SettingsChange::StartDate("2025-11-03".to_string()),
            home_override: Some(&home),
            today: Some(today),
        }));
        assert!(body["data"]["notice"].as_str().is_some_and(|text| text.contains("recomputed")));
        assert_eq!(body["data"]["first_week_end"], "2025-11-09");

        let history = payload(history::run_with_options(HistoryRunOptions {
            home_override: Some(&home),
            today: Some(today),
            ..HistoryRunOptions::default()
        }));
        assert_eq!(history["data"]["rows"][0]["goal"], 50);
        assert_eq!(history["data"]["rows"][0]["achieved"], true);
    }
}

#[test]
fn removing_exercise_with_entries_is_refused() {
    let temp = temp_home_in_tmp("paceline-remove-exercise");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 4);
        assert!(log_entry(&home, LogAction::Add, "squats", 10, "2025-11-04", today).is_ok());

        let result = settings::run_with_options(SettingsRunOptions {
            change: SettingsChange::RemoveExercise("squats".to_string()),
            home_override: Some(&home),
            today: Some(today),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "exercise_in_use");
        }
        assert_eq!(read_state(&home)["settings"]["base_goals"]["squats"], 50);
    }
}

#[test]
fn set_exercise_adds_a_new_plan() {
    let temp = temp_home_in_tmp("paceline-set-exercise");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 11, 4);
        let body = payload(settings::run_with_options(SettingsRunOptions {
            change: SettingsChange::SetExercise {
                exercise: "lunges".to_string(),
                base_goal: 20,
                weekly_increment: -2,
            },
            home_override: Some(&home),
            today: Some(today),
        }));
        let exercises = body["data"]["exercises"].as_array().cloned().unwrap_or_default();
        assert_eq!(exercises.len(), 4);
        assert_eq!(exercises[0]["exercise"], "lunges");
        assert_eq!(exercises[0]["weekly_increment"], -2);

        let negative_base = settings::run_with_options(SettingsRunOptions {
            change: SettingsChange::SetExercise {
                exercise: "lunges".to_string(),
                base_goal: -1,
                weekly_increment: 0,
            },
            home_override: Some(&home),
            today: Some(today),
        });
        assert!(negative_base.is_err());
    }
}

#[test]
fn oversized_goals_fail_status_and_progress_without_panicking() {
    let temp = temp_home_in_tmp("paceline-oversized-goal");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-01-01", today);
        let set = settings::run_with_options(SettingsRunOptions {
            change: SettingsChange::SetExercise {
                exercise: "push-ups".to_string(),
                base_goal: i64::MAX / 100,
                weekly_increment: 0,
            },
            home_override: Some(&home),
            today: Some(today),
        });
        assert!(set.is_ok());

        let status = status::run_with_options(StatusRunOptions {
            home_override: Some(&home),
            today: Some(today),
        });
        assert!(status.is_err());
        if let Err(error) = status {
            assert_eq!(error.code, "total_out_of_range");
            assert!(!error.is_internal());
        }

        let progress = progress::run_with_options(ProgressRunOptions {
            home_override: Some(&home),
            today: Some(today),
            ..ProgressRunOptions::default()
        });
        assert!(progress.is_err());
        if let Err(error) = progress {
            assert_eq!(error.code, "total_out_of_range");
        }

        // The day's goal itself is still reportable.
        let body = payload(goal::run_with_options(GoalRunOptions {
            exercise: "push-ups".to_string(),
            home_override: Some(&home),
            today: Some(today),
            ..GoalRunOptions::default()
        }));
        assert_eq!(body["data"]["goal"], i64::MAX / 100);
    }
}

#[test]
fn oversized_logged_quantities_fail_progress_without_panicking() {
    let temp = temp_home_in_tmp("paceline-oversized-quantity");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(
            log_entry(&home, LogAction::Add, "push-ups", i64::MAX, "2025-10-24", today).is_ok()
        );
        assert!(log_entry(&home, LogAction::Add, "push-ups", 1, "2025-10-25", today).is_ok());

        let progress = progress::run_with_options(ProgressRunOptions {
            home_override: Some(&home),
            today: Some(today),
            ..ProgressRunOptions::default()
        });
        assert!(progress.is_err());
        if let Err(error) = progress {
            assert_eq!(error.code, "total_out_of_range");
        }
    }
}

#[test]
fn report_commands_trim_exercise_names() {
    let temp = temp_home_in_tmp("paceline-report-trim");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let today = date(2025, 10, 28);
        configure_single_exercise(&home, "2025-10-23", today);
        assert!(log_entry(&home, LogAction::Add, "push-ups", 60, "2025-10-27", today).is_ok());

        let goal_body = payload(goal::run_with_options(GoalRunOptions {
            exercise: " push-ups ".to_string(),
            home_override: Some(&home),
            today: Some(today),
            ..GoalRunOptions::default()
        }));
        assert_eq!(goal_body["data"]["exercise"], "push-ups");
        assert_eq!(goal_body["data"]["goal"], 60);

        let progress_body = payload(progress::run_with_options(ProgressRunOptions {
            exercise: Some("push-ups  ".to_string()),
            home_override: Some(&home),
            today: Some(today),
            ..ProgressRunOptions::default()
        }));
        assert_eq!(progress_body["data"]["rows"][0]["exercise"], "push-ups");

        let history_body = payload(history::run_with_options(HistoryRunOptions {
            exercise: Some("  push-ups".to_string()),
            home_override: Some(&home),
            today: Some(today),
            ..HistoryRunOptions::default()
        }));
        assert_eq!(history_body["data"]["exercise"], "push-ups");
        assert_eq!(history_body["data"]["total"], 1);

        let blank = goal::run_with_options(GoalRunOptions {
            exercise: "   ".to_string(),
            home_override: Some(&home),
            today: Some(today),
            ..GoalRunOptions::default()
        });
        assert!(blank.is_err());
        if let Err(error) = blank {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}

#[test]
fn export_to_missing_directory_is_a_user_error() {
    let temp = temp_home_in_tmp("paceline-export-missing");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let today = date(2025, 10, 28);
        let target = dir.path().join("no-such-dir").join("history.csv");
        let result = export::run_with_options(ExportRunOptions {
            path: target.clone(),
            year: Some(2025),
            home_override: Some(&home),
            today: Some(today),
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "export_failed");
            assert!(!error.is_internal());
            assert!(error.message.contains("no-such-dir"));
        }
        assert!(!target.exists());
    }
}
