//! Time-budget optimizer — exact 0/1 knapsack over the task list.
//!
//! Cost is each task's `duration`, value is its `priority`. The table has
//! `(n + 1) * (budget + 1)` cells, so callers are expected to cap the budget.
//!
//! Cell values are `i128`: a sum of up to `n` `i64` priorities cannot
//! overflow it, so very large weights still compare exactly.
//!
//! Reconstruction walks the tasks from last to first and keeps a task only
//! when it changed the table value. The recurrence replaces the previous
//! value only on strict improvement, so ties leave the later task out.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, SchedulerError};
use crate::task::Task;

/// Outcome of one optimizer run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    /// Selected tasks in reconstruction order (last storage index first).
    pub tasks: Vec<Task>,
    /// Wider than a single priority so large weights never overflow.
    pub total_priority: i128,
    pub minutes_used: i64,
    pub budget: i64,
    pub summary: String,
}

/// Select the subset of `tasks` with the highest total priority whose total
/// duration fits in `total_minutes`.
pub fn optimize_schedule(tasks: &[Task], total_minutes: i64) -> Result<Vec<Task>> {
    let picked = select_indices(tasks, total_minutes)?;
    Ok(picked.into_iter().map(|i| tasks[i].clone()).collect())
}

/// Same selection as [`optimize_schedule`], with totals and a summary line.
pub fn optimize_summary(tasks: &[Task], total_minutes: i64) -> Result<Selection> {
    let picked = select_indices(tasks, total_minutes)?;

    let selected: Vec<Task> = picked.into_iter().map(|i| tasks[i].clone()).collect();
    let total_priority = selected.iter().map(|t| i128::from(t.priority)).sum::<i128>();
    let minutes_used = selected.iter().map(|t| t.duration).sum::<i64>();

    let summary = format!(
        "optimize: selected {} of {} tasks using {} of {} minutes (total priority {})",
        selected.len(),
        tasks.len(),
        minutes_used,
        total_minutes,
        total_priority
    );

    Ok(Selection {
        tasks: selected,
        total_priority,
        minutes_used,
        budget: total_minutes,
        summary,
    })
}

/// Indices into `tasks` of the optimal subset, in reconstruction order.
fn select_indices(tasks: &[Task], total_minutes: i64) -> Result<Vec<usize>> {
    if total_minutes < 0 {
        return Err(SchedulerError::InvalidBudget(total_minutes));
    }
    let budget = usize::try_from(total_minutes)
        .map_err(|_| SchedulerError::InvalidBudget(total_minutes))?;

    let n = tasks.len();
    if n == 0 || budget == 0 {
        return Ok(vec![]);
    }

    debug!(tasks = n, budget, cells = (n + 1) * (budget + 1), "building knapsack table");

    // A negative duration would index past the current column; such tasks
    // are treated as never fitting.
    let costs: Vec<Option<usize>> = tasks
        .iter()
        .map(|t| {
            let cost = usize::try_from(t.duration).ok();
            if cost.is_none() {
                warn!(task_id = t.id, duration = t.duration, "skipping task with negative duration");
            }
            cost
        })
        .collect();

    // dp[i][t]: best total priority from the first i tasks within t minutes.
    let mut dp = vec![vec![0i128; budget + 1]; n + 1];

    for i in 1..=n {
        let value = i128::from(tasks[i - 1].priority);
        let (prev_rows, cur_rows) = dp.split_at_mut(i);
        let prev = &prev_rows[i - 1];
        let cur = &mut cur_rows[0];

        for t in 0..=budget {
            cur[t] = match costs[i - 1] {
                Some(cost) if cost <= t => {
                    let take = prev[t - cost] + value;
                    if take > prev[t] { take } else { prev[t] }
                }
                _ => prev[t],
            };
        }
    }

    let mut t = budget;
    let mut picked = Vec::new();
    for i in (1..=n).rev() {
        if dp[i][t] != dp[i - 1][t] {
            picked.push(i - 1);
            // A changed cell implies the task fit at this column.
            if let Some(cost) = costs[i - 1] {
                t -= cost;
            }
        }
    }

    debug!(selected = picked.len(), best = dp[n][budget], "knapsack done");
    Ok(picked)
}
