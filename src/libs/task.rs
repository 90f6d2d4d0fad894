//! Domain model for tasks and the filter/sort vocabulary.
//!
//! `Task` is the entity the rest of the core works with; the raw storage row
//! lives in `db::tasks` and is mapped here by the repository. Filters come in
//! a single seven-way enum used both by the view state and, reduced to a
//! store query, by the operations layer.

use chrono::{DateTime, NaiveDate, Utc};

/// Fixed category suggestions offered by the UI. Free-form input is still
/// accepted everywhere; this list is never used for validation.
pub const CATEGORY_SUGGESTIONS: &[&str] = &["Work", "Personal", "Shopping", "Health", "Education"];

/// A single task as seen by the domain.
///
/// `id` and `created_at` are assigned by the store on insert and never change
/// afterwards. `updated_at` stays absent until the first successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub category: Option<String>,
    /// Non-blank tokens in insertion order; duplicates are permitted.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields supplied by the caller when creating a task. The store fills in
/// `id` and `created_at`; completion always starts out false.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Completion/date predicate applied by the filter/sort engine.
///
/// `Custom` bounds are calendar dates, inclusive on both ends. When either
/// bound is absent the predicate passes every task, due date or not; that is
/// deliberate behavior the UI relies on while a range is being picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
    Today,
    ThisWeek,
    ThisMonth,
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// Sort key for the displayed list. Sorting is always ascending and stable;
/// absent `updated_at`/`due_date` values order before any present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    DateCreated,
    DateModified,
    DueDate,
    Title,
}
