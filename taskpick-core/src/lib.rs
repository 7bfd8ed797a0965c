//! taskpick-core: task model and scheduling engine for taskpick.
//!
//! Rendering, file I/O, and process lifecycle live in the caller; this crate
//! only stores tasks and answers questions about them.

pub mod deadline_queue;
pub mod error;
pub mod optimize;
pub mod scheduler;
pub mod search;
pub mod task;
pub mod time;
pub mod timeline;

pub use deadline_queue::DeadlineQueue;
pub use error::{Result, SchedulerError};
pub use optimize::{optimize_schedule, optimize_summary, Selection};
pub use scheduler::{Scheduler, SortKey};
pub use search::{search_tasks, SearchQuery};
pub use task::Task;
pub use time::{format_deadline, parse_date, parse_deadline, DATE_FORMAT, DEADLINE_FORMAT};
pub use timeline::{project_timeline, TimelineBar};
