//! Validated use-case entry points over the repository.
//!
//! Thin by design: the title rule lives at the repository boundary and the
//! errors it raises pass through unchanged, so these wrappers mostly decide
//! which store query a given filter/category selection needs.

use crate::libs::error::TaskError;
use crate::libs::repository::{TaskRepository, TaskSubscription};
use crate::libs::task::{NewTask, Task, TaskFilter};
use anyhow::Result;

pub struct TaskOperations {
    repo: TaskRepository,
}

impl TaskOperations {
    /// Opens the use-case layer over the default database.
    pub fn new() -> Result<Self> {
        Ok(Self::with_repository(TaskRepository::new()?))
    }

    pub fn with_repository(repo: TaskRepository) -> Self {
        TaskOperations { repo }
    }

    pub fn repository(&self) -> &TaskRepository {
        &self.repo
    }

    /// Creates a task. Fails with `Validation("Title cannot be empty")` when
    /// the trimmed title is empty; the store is not touched in that case.
    pub fn add_task(&self, fields: &NewTask) -> Result<(), TaskError> {
        self.repo.add(fields)
    }

    /// Persists all mutable fields of `task`, applying the same title rule.
    pub fn update_task(&self, task: &Task) -> Result<(), TaskError> {
        self.repo.update(task)
    }

    /// Deletes a task; absent ids are a silent no-op.
    pub fn delete_task(&self, id: i64) -> Result<(), TaskError> {
        self.repo.delete(id)
    }

    /// Flips completion, failing with `NotFound` for absent ids.
    pub fn toggle_task_completion(&self, id: i64) -> Result<(), TaskError> {
        self.repo.toggle_completion(id)
    }

    /// One-shot read of a single task.
    pub fn get_task(&self, id: i64) -> Result<Option<Task>, TaskError> {
        self.repo.get(id)
    }

    /// Opens the live query backing a filter/category selection.
    ///
    /// The store only narrows by completion or category; every other filter
    /// variant is evaluated in memory by the engine, so those all map to the
    /// full list. A selected category wins over the completion narrowing
    /// because the category-scoped query is the rarer, smaller one.
    pub fn get_tasks(&self, filter: &TaskFilter, category: Option<&str>) -> TaskSubscription {
        match (category, filter) {
            (Some(selected), _) => self.repo.list_by_category(selected),
            (None, TaskFilter::Active) => self.repo.list_incomplete(),
            (None, _) => self.repo.list(),
        }
    }

    /// One-shot synchronous read of all incomplete tasks, used by the
    /// due-soon notifier. Not a live subscription.
    pub fn incomplete_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repo.list_incomplete().snapshot()
    }
}
