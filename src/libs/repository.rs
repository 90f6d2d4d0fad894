//! Translation layer between raw store rows and the domain `Task`.
//!
//! Owns the persisted encoding rules: timestamps as epoch milliseconds, tags
//! as a comma-joined string where the empty list is stored as NULL rather
//! than an empty string. Both encodings must round-trip exactly; the task
//! database predates this crate version and stays compatible with it.
//!
//! Read access is reactive: `list`, `list_incomplete`, and
//! `list_by_category` return a [`TaskSubscription`] that emits the current
//! snapshot immediately and a fresh one after every committed mutation that
//! could change its result set.

use crate::db::tasks::{NewTaskRow, TaskQuery, TaskRow, TaskStore};
use crate::libs::error::TaskError;
use crate::libs::task::{NewTask, Task};
use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the task store. The mutex makes each store operation
/// individually atomic; no transaction ever spans more than one call.
pub type SharedStore = Arc<Mutex<TaskStore>>;

pub struct TaskRepository {
    store: SharedStore,
}

impl TaskRepository {
    /// Opens the repository over the default database location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(Arc::new(Mutex::new(TaskStore::new()?))))
    }

    /// Wraps an already-opened store. Used by tests and by collaborators
    /// that share one store instance (view controller and notifier).
    pub fn with_store(store: SharedStore) -> Self {
        TaskRepository { store }
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    /// Live view of all tasks.
    pub fn list(&self) -> TaskSubscription {
        self.subscribe(TaskQuery::All)
    }

    /// Live view of tasks with `is_completed == false`.
    pub fn list_incomplete(&self) -> TaskSubscription {
        self.subscribe(TaskQuery::Incomplete)
    }

    /// Live view of tasks whose category is exactly `category`.
    pub fn list_by_category(&self, category: &str) -> TaskSubscription {
        self.subscribe(TaskQuery::ByCategory(category.to_string()))
    }

    fn subscribe(&self, query: TaskQuery) -> TaskSubscription {
        let mut revision = self.store.lock().subscribe();
        // A fresh subscription delivers the current snapshot on its first
        // recv, before any mutation happens.
        revision.mark_changed();
        TaskSubscription {
            store: self.store.clone(),
            query,
            revision,
        }
    }

    /// One-shot read of a task by id.
    pub fn get(&self, id: i64) -> Result<Option<Task>, TaskError> {
        let row = self.store.lock().fetch_by_id(id)?;
        row.map(to_domain).transpose()
    }

    /// Validates and inserts a new task. The store assigns id and creation
    /// timestamp; the caller re-reads through a live query.
    pub fn add(&self, fields: &NewTask) -> Result<(), TaskError> {
        if fields.title.trim().is_empty() {
            return Err(TaskError::empty_title());
        }
        let row = NewTaskRow {
            title: fields.title.clone(),
            description: fields.description.clone(),
            due_date: fields.due_date.map(|d| d.timestamp_millis()),
            category: fields.category.clone(),
            tags: encode_tags(&fields.tags),
        };
        self.store.lock().insert(&row)?;
        Ok(())
    }

    /// Validates and persists all mutable fields of `task`, stamping
    /// `updated_at = now`. Fails with `NotFound` when the id is absent; the
    /// loud failure is applied uniformly here and in `toggle_completion`.
    pub fn update(&self, task: &Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::empty_title());
        }
        let mut row = to_row(task);
        row.updated_at = Some(Utc::now().timestamp_millis());
        let affected = self.store.lock().update_by_id(&row)?;
        if affected == 0 {
            return Err(TaskError::NotFound(task.id));
        }
        Ok(())
    }

    /// Deletes a task. Deleting an absent id is an idempotent no-op.
    pub fn delete(&self, id: i64) -> Result<(), TaskError> {
        self.store.lock().delete_by_id(id)?;
        Ok(())
    }

    /// Flips `is_completed` and stamps `updated_at`. The read and the write
    /// happen under one lock so concurrent toggles cannot lose a flip.
    pub fn toggle_completion(&self, id: i64) -> Result<(), TaskError> {
        let store = &mut *self.store.lock();
        let mut row = store.fetch_by_id(id)?.ok_or(TaskError::NotFound(id))?;
        row.is_completed = !row.is_completed;
        row.updated_at = Some(Utc::now().timestamp_millis());
        store.update_by_id(&row)?;
        Ok(())
    }
}

/// A live query over the store: the current snapshot plus a signal that
/// fires whenever a committed mutation may have changed the result set.
///
/// Dropping the subscription tears it down; there is nothing to cancel.
pub struct TaskSubscription {
    store: SharedStore,
    query: TaskQuery,
    revision: watch::Receiver<u64>,
}

impl TaskSubscription {
    /// Reads the current result set without waiting for a change.
    pub fn snapshot(&self) -> Result<Vec<Task>, TaskError> {
        let rows = self.store.lock().fetch(&self.query)?;
        rows.into_iter().map(to_domain).collect()
    }

    /// Waits for the next emission and returns its snapshot. The first call
    /// resolves immediately with the current state. Snapshots are observed
    /// in mutation order; a snapshot read after a mutation's acknowledgment
    /// always reflects that mutation.
    pub async fn recv(&mut self) -> Result<Vec<Task>, TaskError> {
        self.revision.changed().await.map_err(|_| TaskError::Closed)?;
        self.snapshot()
    }
}

/// Encodes a tag list for storage: comma-joined, empty list becomes NULL.
pub fn encode_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

/// Decodes a stored tag string, dropping blank tokens. NULL and the empty
/// string both decode to the empty list.
pub fn decode_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| s.split(',').filter(|t| !t.trim().is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

fn decode_instant(millis: i64) -> Result<DateTime<Utc>, TaskError> {
    DateTime::from_timestamp_millis(millis).ok_or(TaskError::InvalidTimestamp(millis))
}

fn to_domain(row: TaskRow) -> Result<Task, TaskError> {
    Ok(Task {
        id: row.id,
        title: row.title,
        description: row.description,
        due_date: row.due_date.map(decode_instant).transpose()?,
        is_completed: row.is_completed,
        category: row.category,
        tags: decode_tags(row.tags.as_deref()),
        created_at: decode_instant(row.created_at)?,
        updated_at: row.updated_at.map(decode_instant).transpose()?,
    })
}

fn to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        due_date: task.due_date.map(|d| d.timestamp_millis()),
        is_completed: task.is_completed,
        category: task.category.clone(),
        tags: encode_tags(&task.tags),
        created_at: task.created_at.timestamp_millis(),
        updated_at: task.updated_at.map(|d| d.timestamp_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_tags, encode_tags};

    #[test]
    fn tags_round_trip() {
        let cases: &[&[&str]] = &[&[], &["home"], &["home", "urgent", "home"]];
        for tags in cases {
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            let decoded = decode_tags(encode_tags(&tags).as_deref());
            assert_eq!(decoded, tags);
        }
    }

    #[test]
    fn empty_tag_list_stores_null() {
        assert_eq!(encode_tags(&[]), None);
    }

    #[test]
    fn blank_tokens_are_dropped_on_decode() {
        assert_eq!(decode_tags(Some("a,, ,b")), vec!["a".to_string(), "b".to_string()]);
        assert!(decode_tags(Some("")).is_empty());
        assert!(decode_tags(None).is_empty());
    }
}
