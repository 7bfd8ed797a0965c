//! Error type for the scheduling engine.

/// Errors surfaced by task construction and scheduler operations.
///
/// Every variant is raised before any state changes, so a failed call never
/// leaves the scheduler half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// Deadline or query-date text did not match the expected pattern.
    #[error("invalid date/time '{input}': {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Sort key outside `deadline`, `priority`, `type`.
    #[error("invalid sort key '{0}' (expected deadline, priority or type)")]
    InvalidSortKey(String),

    /// Negative optimizer budget.
    #[error("invalid time budget {0} (must be >= 0 minutes)")]
    InvalidBudget(i64),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
