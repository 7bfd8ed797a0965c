//! Scheduler — owns the session's tasks and the operations over them.
//!
//! Storage is a flat list in insertion order plus a deadline heap. Sorted
//! views are computed on read and never reorder storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::deadline_queue::DeadlineQueue;
use crate::error::{Result, SchedulerError};
use crate::optimize::{self, Selection};
use crate::search::{self, SearchQuery};
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Earliest deadline first.
    Deadline,
    /// Highest priority first.
    Priority,
    /// Category tag, lexicographic.
    Type,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Deadline => "deadline",
            SortKey::Priority => "priority",
            SortKey::Type => "type",
        }
    }
}

impl FromStr for SortKey {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deadline" => Ok(SortKey::Deadline),
            "priority" => Ok(SortKey::Priority),
            "type" => Ok(SortKey::Type),
            other => Err(SchedulerError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    tasks: Vec<Task>,
    by_deadline: DeadlineQueue,
    next_id: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            by_deadline: DeadlineQueue::new(),
            next_id: 1,
        }
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next [`Scheduler::create_task`] call will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in storage (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Parse, assign the next id, and insert. On a bad deadline nothing
    /// changes and the id is not consumed.
    pub fn create_task(
        &mut self,
        description: impl Into<String>,
        deadline: &str,
        priority: i64,
        task_type: impl Into<String>,
        duration: i64,
    ) -> Result<&Task> {
        let task = Task::new(self.next_id, description, deadline, priority, task_type, duration)?;
        let slot = self.tasks.len();
        self.add_task(task);
        Ok(&self.tasks[slot])
    }

    /// Insert a pre-built task. Later ids are allocated past its id.
    pub fn add_task(&mut self, task: Task) {
        debug!(task_id = task.id, deadline = %task.deadline_text(), "add task");

        self.next_id = self.next_id.max(task.id.saturating_add(1));
        self.by_deadline.push(task.deadline, self.tasks.len());
        self.tasks.push(task);
    }

    /// Task with the earliest deadline; ties go to the first inserted.
    pub fn earliest(&self) -> Option<&Task> {
        self.by_deadline.peek_slot().map(|slot| &self.tasks[slot])
    }

    /// Sorted copy of the tasks. Sorting is stable, so ties keep storage order.
    pub fn get_sorted_tasks(&self, by: SortKey) -> Vec<Task> {
        let mut out = self.tasks.clone();
        match by {
            SortKey::Deadline => out.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
            SortKey::Priority => out.sort_by(|a, b| b.priority.cmp(&a.priority)),
            SortKey::Type => out.sort_by(|a, b| a.task_type.cmp(&b.task_type)),
        }
        out
    }

    /// [`Scheduler::get_sorted_tasks`] with a textual key.
    pub fn get_sorted_tasks_by(&self, by: &str) -> Result<Vec<Task>> {
        Ok(self.get_sorted_tasks(by.parse()?))
    }

    /// Highest-priority subset fitting in `total_minutes`.
    /// See [`crate::optimize`] for ordering and tie rules.
    pub fn optimize_schedule(&self, total_minutes: i64) -> Result<Vec<Task>> {
        optimize::optimize_schedule(&self.tasks, total_minutes)
    }

    pub fn optimize_summary(&self, total_minutes: i64) -> Result<Selection> {
        optimize::optimize_summary(&self.tasks, total_minutes)
    }

    pub fn search_task(&self, query: &SearchQuery) -> Vec<Task> {
        search::search_tasks(&self.tasks, query)
    }
}
