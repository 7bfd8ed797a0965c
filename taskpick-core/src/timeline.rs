//! Timeline projection for Gantt-style renderers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Task;

/// One horizontal bar: starts at the task's deadline, offset from `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub row: usize,
    pub task_id: u64,
    pub description: String,
    /// Minutes from `now` to the deadline; negative when overdue.
    pub start_offset_minutes: i64,
    pub length_minutes: i64,
}

impl TimelineBar {
    pub fn end_offset_minutes(&self) -> i64 {
        self.start_offset_minutes + self.length_minutes
    }
}

/// Deterministically project tasks into bars, one row per task in the given order.
pub fn project_timeline(tasks: &[Task], now: NaiveDateTime) -> Vec<TimelineBar> {
    tasks
        .iter()
        .enumerate()
        .map(|(row, t)| TimelineBar {
            row,
            task_id: t.id,
            description: t.description.clone(),
            start_offset_minutes: (t.deadline - now).num_minutes(),
            length_minutes: t.duration,
        })
        .collect()
}
