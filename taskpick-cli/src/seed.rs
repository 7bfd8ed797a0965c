//! Read-only task seed file: a JSON array loaded into a fresh scheduler.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use taskpick_core::Scheduler;
use tracing::info;

/// One entry of the seed file. Ids are not part of the file; the scheduler
/// assigns them in file order.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSpec {
    pub description: String,
    pub deadline: String,
    pub priority: i64,
    #[serde(default = "default_task_type")]
    pub task_type: String,
    pub duration: i64,
}

fn default_task_type() -> String {
    "personal".to_string()
}

pub fn scheduler_from_specs(specs: Vec<TaskSpec>) -> Result<Scheduler> {
    let mut scheduler = Scheduler::new();
    for (i, spec) in specs.into_iter().enumerate() {
        scheduler
            .create_task(
                spec.description,
                &spec.deadline,
                spec.priority,
                spec.task_type,
                spec.duration,
            )
            .with_context(|| format!("task #{} in seed file", i + 1))?;
    }
    Ok(scheduler)
}

pub fn load_seed(path: &Path) -> Result<Scheduler> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let specs: Vec<TaskSpec> =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    let scheduler = scheduler_from_specs(specs)?;
    info!(path = %path.display(), tasks = scheduler.len(), "loaded seed file");
    Ok(scheduler)
}
