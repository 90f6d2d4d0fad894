//! Reactive controller behind the task list view.
//!
//! Holds the current filter/category/sort selections and the latest engine
//! output, re-running the filter/sort pipeline whenever the underlying data
//! or the selections change. All command handling goes through `&mut self`,
//! so no two commands of one instance can interleave their
//! mutate-then-reload sequence.
//!
//! Failures never escape to the caller: every operation error lands in
//! `state.error` and stays there until the next successful reload.

use crate::libs::engine;
use crate::libs::error::TaskError;
use crate::libs::operations::TaskOperations;
use crate::libs::repository::TaskSubscription;
use crate::libs::task::{NewTask, SortOrder, Task, TaskFilter};

/// Snapshot of everything the view renders. `displayed` is always the
/// engine's output for the current inputs, never edited by hand.
#[derive(Debug, Default)]
pub struct ViewState {
    pub all_tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub category: Option<String>,
    pub sort_order: SortOrder,
    pub displayed: Vec<Task>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// User actions the controller reacts to.
#[derive(Debug)]
pub enum TaskEvent {
    AddTask(NewTask),
    UpdateTask(Task),
    ToggleTask(i64),
    DeleteTask(i64),
    SetFilter(TaskFilter),
    SetCategory(Option<String>),
    SetSortOrder(SortOrder),
}

pub struct TaskViewState {
    ops: TaskOperations,
    subscription: TaskSubscription,
    state: ViewState,
}

impl TaskViewState {
    /// Creates the controller and performs the initial load.
    pub fn new(ops: TaskOperations) -> Self {
        let subscription = ops.get_tasks(&TaskFilter::All, None);
        let mut view = TaskViewState {
            ops,
            subscription,
            state: ViewState {
                is_loading: true,
                ..ViewState::default()
            },
        };
        view.reload();
        view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Handles one user action. Mutating events run their store operation
    /// and then reload; selection events recompute synchronously from the
    /// snapshot already in hand. Errors are captured, never propagated.
    pub fn handle(&mut self, event: TaskEvent) {
        match event {
            TaskEvent::AddTask(fields) => self.mutate(|ops| ops.add_task(&fields)),
            TaskEvent::UpdateTask(task) => self.mutate(|ops| ops.update_task(&task)),
            TaskEvent::ToggleTask(id) => self.mutate(|ops| ops.toggle_task_completion(id)),
            TaskEvent::DeleteTask(id) => self.mutate(|ops| ops.delete_task(id)),
            TaskEvent::SetFilter(filter) => {
                self.state.filter = filter;
                self.recompute();
            }
            TaskEvent::SetSortOrder(order) => {
                self.state.sort_order = order;
                self.recompute();
            }
            TaskEvent::SetCategory(category) => {
                self.state.category = category;
                // The held snapshot is enough to recompute right away; the
                // underlying query is swapped wholesale so later emissions
                // arrive category-scoped.
                self.recompute();
                self.resubscribe();
            }
        }
    }

    /// Waits for the next emission of the live query and folds it in. The
    /// first call after construction or a resubscribe resolves immediately
    /// with the current snapshot.
    pub async fn changed(&mut self) {
        match self.subscription.recv().await {
            Ok(tasks) => {
                self.state.all_tasks = tasks;
                self.state.is_loading = false;
                self.state.error = None;
                self.recompute();
            }
            Err(err) => {
                self.state.is_loading = false;
                self.state.error = Some(err.to_string());
            }
        }
    }

    fn mutate<F>(&mut self, op: F)
    where
        F: FnOnce(&TaskOperations) -> Result<(), TaskError>,
    {
        match op(&self.ops) {
            Ok(()) => self.reload(),
            Err(err) => {
                tracing::debug!(error = %err, "task operation rejected");
                // Displayed list stays as it was; only the error surfaces.
                self.state.error = Some(err.to_string());
            }
        }
    }

    /// Re-reads the current snapshot from the store and recomputes the
    /// displayed list. A successful reload clears any previous error.
    fn reload(&mut self) {
        self.state.is_loading = true;
        match self.subscription.snapshot() {
            Ok(tasks) => {
                self.state.all_tasks = tasks;
                self.state.is_loading = false;
                self.state.error = None;
                self.recompute();
            }
            Err(err) => {
                self.state.is_loading = false;
                self.state.error = Some(err.to_string());
            }
        }
    }

    fn recompute(&mut self) {
        self.state.displayed = engine::apply(
            &self.state.all_tasks,
            &self.state.filter,
            self.state.category.as_deref(),
            self.state.sort_order,
        );
    }

    /// Replaces the live query wholesale. Only selections that need a
    /// different underlying query (category scoping) call this; plain
    /// filter/sort changes recompute locally and leave the query untouched.
    /// The view always subscribes to the unfiltered variant within its
    /// category scope, since the engine needs the full snapshot to answer
    /// any later filter selection without another round-trip.
    fn resubscribe(&mut self) {
        self.subscription = self.ops.get_tasks(&TaskFilter::All, self.state.category.as_deref());
    }
}
