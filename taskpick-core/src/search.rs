//! Search predicates over tasks.
//!
//! The query shape is decided by the caller and passed as an explicit
//! variant; the predicates never guess what a string means.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::task::Task;
use crate::time::parse_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchQuery {
    /// Tasks due on this calendar day (time of day ignored).
    Date(NaiveDate),
    /// Case-insensitive substring of the description.
    Text(String),
}

impl SearchQuery {
    /// Classify raw user input: anything with a '-' must be a `YYYY-MM-DD`
    /// date, everything else is a keyword.
    pub fn from_input(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.contains('-') {
            Ok(SearchQuery::Date(parse_date(input)?))
        } else {
            Ok(SearchQuery::Text(input.to_string()))
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            SearchQuery::Date(date) => task.deadline_date() == *date,
            SearchQuery::Text(needle) => task
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Matching tasks, in the order given.
pub fn search_tasks(tasks: &[Task], query: &SearchQuery) -> Vec<Task> {
    tasks.iter().filter(|t| query.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulerError;

    fn task(id: u64, description: &str, deadline: &str) -> Task {
        Task::new(id, description, deadline, 1, "academic", 30).unwrap()
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let tasks = vec![task(1, "Write Report", "2026-03-01 10:00")];
        for q in ["report", "REPORT", "Report", "write rep"] {
            let out = search_tasks(&tasks, &SearchQuery::Text(q.to_string()));
            assert_eq!(out.len(), 1, "query {q:?}");
        }
        assert!(search_tasks(&tasks, &SearchQuery::Text("essay".into())).is_empty());
    }

    #[test]
    fn test_date_ignores_time_of_day() {
        let tasks = vec![
            task(1, "early", "2026-03-01 00:00"),
            task(2, "late", "2026-03-01 23:59"),
            task(3, "next day", "2026-03-02 00:00"),
        ];
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let out = search_tasks(&tasks, &SearchQuery::Date(day));
        assert_eq!(out.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);

        let empty_day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(search_tasks(&tasks, &SearchQuery::Date(empty_day)).is_empty());
    }

    #[test]
    fn test_from_input_classifies() {
        assert_eq!(
            SearchQuery::from_input("2026-03-01").unwrap(),
            SearchQuery::Date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );
        assert_eq!(
            SearchQuery::from_input("  report ").unwrap(),
            SearchQuery::Text("report".to_string())
        );
        assert!(matches!(
            SearchQuery::from_input("follow-up"),
            Err(SchedulerError::Parse { .. })
        ));
    }
}
