//! Task model: one schedulable unit of work.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::time::{format_deadline, parse_deadline};

/// Core task type.
///
/// Tasks are not mutated once they are handed to a [`crate::Scheduler`].
/// Ordering (and therefore equality) is by `deadline` only; use
/// [`Task::same_fields`] to compare every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,

    /// Minute precision, no timezone.
    #[serde(with = "crate::time::deadline_text")]
    pub deadline: NaiveDateTime,

    /// Higher means more valuable. Unbounded, may be negative.
    pub priority: i64,

    /// Free-form category tag ("personal", "academic", ...).
    pub task_type: String,

    /// Minutes.
    pub duration: i64,
}

impl Task {
    /// Build a task from its textual deadline ("YYYY-MM-DD HH:MM").
    pub fn new(
        id: u64,
        description: impl Into<String>,
        deadline: &str,
        priority: i64,
        task_type: impl Into<String>,
        duration: i64,
    ) -> Result<Self> {
        let deadline = parse_deadline(deadline)?;
        Ok(Self::with_deadline(id, description, deadline, priority, task_type, duration))
    }

    /// Build a task from an already-parsed deadline.
    pub fn with_deadline(
        id: u64,
        description: impl Into<String>,
        deadline: NaiveDateTime,
        priority: i64,
        task_type: impl Into<String>,
        duration: i64,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            deadline,
            priority,
            task_type: task_type.into(),
            duration,
        }
    }

    pub fn deadline_text(&self) -> String {
        format_deadline(self.deadline)
    }

    pub fn deadline_date(&self) -> NaiveDate {
        self.deadline.date()
    }

    /// Field-by-field equality, unlike `==` which only looks at the deadline.
    pub fn same_fields(&self, other: &Task) -> bool {
        self.id == other.id
            && self.description == other.description
            && self.deadline == other.deadline
            && self.priority == other.priority
            && self.task_type == other.task_type
            && self.duration == other.duration
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline
    }
}
impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline.cmp(&other.deadline)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (due {}, priority {}, type {}, {} min)",
            self.id,
            self.description,
            self.deadline_text(),
            self.priority,
            self.task_type,
            self.duration
        )
    }
}
