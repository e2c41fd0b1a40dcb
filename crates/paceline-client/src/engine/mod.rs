pub mod date;
pub mod progress;
pub mod schedule;

pub use progress::{DayStatus, Pace, ProgressAggregator, YearlyProgress};
pub use schedule::{GoalExplanation, GoalScheduler, GoalStep};
