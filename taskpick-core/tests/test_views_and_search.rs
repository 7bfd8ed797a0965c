use chrono::NaiveDate;
use taskpick_core::{project_timeline, parse_deadline, Scheduler, SearchQuery, SortKey};

fn week() -> Scheduler {
    let mut s = Scheduler::new();
    s.create_task("Write Report", "2026-03-02 17:00", 8, "academic", 120).unwrap();
    s.create_task("Laundry", "2026-03-01 10:00", 2, "personal", 45).unwrap();
    s.create_task("Review report draft", "2026-03-02 09:00", 6, "academic", 30).unwrap();
    s.create_task("Dentist", "2026-03-04 14:30", 7, "personal", 60).unwrap();
    s.create_task("Pay rent", "2026-03-01 10:00", 9, "finance", 10).unwrap();
    s
}

#[test]
fn test_deadline_view_non_decreasing() {
    let out = week().get_sorted_tasks(SortKey::Deadline);
    assert_eq!(out.len(), 5);
    assert!(out.windows(2).all(|w| w[0].deadline <= w[1].deadline));
}

#[test]
fn test_priority_view_non_increasing() {
    let out = week().get_sorted_tasks(SortKey::Priority);
    assert!(out.windows(2).all(|w| w[0].priority >= w[1].priority));
    assert_eq!(out[0].description, "Pay rent");
}

#[test]
fn test_type_view_lexicographic() {
    let out = week().get_sorted_tasks(SortKey::Type);
    assert!(out.windows(2).all(|w| w[0].task_type <= w[1].task_type));
}

#[test]
fn test_search_by_date() {
    let s = week();
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let out = s.search_task(&SearchQuery::Date(day));
    let names: Vec<&str> = out.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(names, vec!["Write Report", "Review report draft"]);
    assert!(out.iter().all(|t| t.deadline.date() == day));

    let quiet = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
    assert!(s.search_task(&SearchQuery::Date(quiet)).is_empty());
}

#[test]
fn test_search_by_text_any_case() {
    let s = week();
    for q in ["report", "REPORT", "Report"] {
        let out = s.search_task(&SearchQuery::Text(q.to_string()));
        assert_eq!(out.len(), 2, "query {q}");
        assert_eq!(out[0].description, "Write Report");
    }
}

#[test]
fn test_earliest_matches_deadline_view() {
    let s = week();
    let first = &s.get_sorted_tasks(SortKey::Deadline)[0];
    assert_eq!(s.earliest().unwrap().id, first.id);
}

#[test]
fn test_timeline_over_storage() {
    let s = week();
    let now = parse_deadline("2026-03-01 09:00").unwrap();
    let bars = project_timeline(s.tasks(), now);
    assert_eq!(bars.len(), 5);
    assert_eq!(bars[1].description, "Laundry");
    assert_eq!(bars[1].start_offset_minutes, 60);
    assert_eq!(bars[1].length_minutes, 45);
}
