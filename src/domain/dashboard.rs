// src/domain/dashboard.rs

use chrono::NaiveDate;

use crate::domain::task::{Task, TaskStatus};

/// Figures shown across the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub done: usize,
    pub open: usize,
    /// Whole percent, rounded half up.
    pub pct_done: u32,
    /// Calendar days from today to the move; negative once it has passed.
    pub days_to_go: Option<i64>,
    /// First task in due-date order that isn't done.
    pub next_due: Option<(String, NaiveDate)>,
}

impl DashboardStats {
    /// `tasks` must already be sorted by due date.
    pub fn compute(tasks: &[Task], move_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let total = tasks.len();
        let done = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .count();
        let pct_done = if total == 0 {
            0
        } else {
            ((done * 100 + total / 2) / total) as u32
        };

        Self {
            total,
            done,
            open: total - done,
            pct_done,
            days_to_go: move_date.map(|d| (d - today).num_days()),
            next_due: tasks
                .iter()
                .find(|t| t.status != TaskStatus::Done)
                .map(|t| (t.title.clone(), t.due_date)),
        }
    }

    pub fn timeline_label(&self) -> String {
        fn days(n: i64) -> String {
            format!("{n} day{}", if n == 1 { "" } else { "s" })
        }

        match self.days_to_go {
            None => "No move yet".to_string(),
            Some(0) => "Today".to_string(),
            Some(n) if n > 0 => format!("In {}", days(n)),
            Some(n) => format!("{} ago", days(-n)),
        }
    }
}

/// Tasks split into the three status columns, keeping their order.
pub fn group_by_status(tasks: &[Task]) -> Vec<(TaskStatus, Vec<&Task>)> {
    TaskStatus::ALL
        .iter()
        .map(|s| (*s, tasks.iter().filter(|t| t.status == *s).collect()))
        .collect()
}
