//! Pure filter/sort pipeline producing the displayed task list.
//!
//! `apply` is a plain function of its inputs: no caching, no suspension, no
//! store access. The full recomputation on every input change is fine at
//! personal-task scale.
//!
//! Date filters compare calendar dates in the local time zone, so a task due
//! at 23:59 tonight still counts as "today" wherever the user is. Sorting is
//! stable: tasks with equal keys keep their input order, which the store
//! guarantees to be insertion order.

use crate::libs::task::{SortOrder, Task, TaskFilter};
use chrono::{Local, Months, NaiveDate};

/// Filters `tasks` by `filter` and `category`, then stable-sorts ascending
/// by `sort`. "Today" is the local calendar date at the time of the call.
pub fn apply(tasks: &[Task], filter: &TaskFilter, category: Option<&str>, sort: SortOrder) -> Vec<Task> {
    apply_on(tasks, filter, category, sort, Local::now().date_naive())
}

/// Same as [`apply`] with an explicit "today", so date-window predicates can
/// be exercised deterministically.
pub fn apply_on(tasks: &[Task], filter: &TaskFilter, category: Option<&str>, sort: SortOrder, today: NaiveDate) -> Vec<Task> {
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_filter(task, filter, today) && matches_category(task, category))
        .cloned()
        .collect();

    // Vec::sort_by / sort_by_key are stable, which keeps equal-key ordering
    // deterministic. Option keys order None first, giving tasks without a
    // modification or due date the earliest position.
    match sort {
        SortOrder::DateCreated => out.sort_by_key(|t| t.created_at),
        SortOrder::DateModified => out.sort_by_key(|t| t.updated_at),
        SortOrder::DueDate => out.sort_by_key(|t| t.due_date),
        SortOrder::Title => out.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    out
}

fn matches_filter(task: &Task, filter: &TaskFilter, today: NaiveDate) -> bool {
    match filter {
        TaskFilter::All => true,
        TaskFilter::Active => !task.is_completed,
        TaskFilter::Completed => task.is_completed,
        TaskFilter::Today => due_date_local(task).is_some_and(|date| date == today),
        TaskFilter::ThisWeek => {
            let week_end = today + chrono::Days::new(7);
            due_date_local(task).is_some_and(|date| date >= today && date <= week_end)
        }
        TaskFilter::ThisMonth => {
            let month_end = today.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX);
            due_date_local(task).is_some_and(|date| date >= today && date <= month_end)
        }
        TaskFilter::Custom { start, end } => match (start, end) {
            (Some(start), Some(end)) => due_date_local(task).is_some_and(|date| date >= *start && date <= *end),
            // A partially-specified range matches everything, due date or
            // not. The range picker relies on this while the user is still
            // choosing the second bound.
            _ => true,
        },
    }
}

fn matches_category(task: &Task, category: Option<&str>) -> bool {
    match category {
        Some(selected) => task.category.as_deref() == Some(selected),
        None => true,
    }
}

fn due_date_local(task: &Task) -> Option<NaiveDate> {
    task.due_date.map(|due| due.with_timezone(&Local).date_naive())
}
