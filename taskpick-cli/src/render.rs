//! Plain-text rendering of core results.

use taskpick_core::{Selection, Task, TimelineBar};

const BAR_WIDTH: usize = 40;

pub fn task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "(no tasks)\n".to_string();
    }

    let desc_width = tasks
        .iter()
        .map(|t| t.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Description".len());

    let mut out = format!(
        "{:>4}  {:<dw$}  {:<16}  {:>8}  {:<10}  {:>8}\n",
        "ID", "Description", "Deadline", "Priority", "Type", "Duration",
        dw = desc_width
    );
    for t in tasks {
        out.push_str(&format!(
            "{:>4}  {:<dw$}  {:<16}  {:>8}  {:<10}  {:>8}\n",
            t.id,
            t.description,
            t.deadline_text(),
            t.priority,
            t.task_type,
            t.duration,
            dw = desc_width
        ));
    }
    out
}

pub fn selection(sel: &Selection) -> String {
    let mut out = format!("{}\n", sel.summary);
    for t in &sel.tasks {
        out.push_str(&format!("- {} (Priority: {})\n", t.description, t.priority));
    }
    out
}

pub fn search_results(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No matching tasks found.\n".to_string();
    }
    let mut out = String::from("Matching tasks:\n");
    for t in tasks {
        out.push_str(&format!(
            "- {} (Deadline: {}, Priority: {})\n",
            t.description,
            t.deadline_text(),
            t.priority
        ));
    }
    out
}

/// ASCII Gantt chart scaled to the span of all bars.
pub fn timeline(bars: &[TimelineBar]) -> String {
    if bars.is_empty() {
        return "(no tasks)\n".to_string();
    }

    let start = bars.iter().map(|b| b.start_offset_minutes).min().unwrap_or(0);
    let end = bars
        .iter()
        .map(|b| b.end_offset_minutes().max(b.start_offset_minutes))
        .max()
        .unwrap_or(start);
    let span = (end - start).max(1);

    let scale = |minutes: i64| -> usize {
        (((minutes - start) as f64 / span as f64) * BAR_WIDTH as f64).round() as usize
    };

    let mut out = format!("timeline: {start:+} .. {end:+} minutes from now\n");
    for b in bars {
        let from = scale(b.start_offset_minutes).min(BAR_WIDTH - 1);
        let to = scale(b.end_offset_minutes().max(b.start_offset_minutes)).min(BAR_WIDTH);
        let len = to.saturating_sub(from).max(1);
        out.push_str(&format!(
            "{:>4} |{}{}{}| {} ({:+} min, {} min)\n",
            b.task_id,
            " ".repeat(from),
            "#".repeat(len),
            " ".repeat(BAR_WIDTH.saturating_sub(from + len)),
            b.description,
            b.start_offset_minutes,
            b.length_minutes
        ));
    }
    out
}
