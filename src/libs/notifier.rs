//! Due-soon detection for the background reminder run.
//!
//! The core only computes what to notify. Scheduling is the host's problem:
//! something external calls [`DueSoonNotifier::run_once`] once per period
//! (and once at process start for warm-up), and each run either completes or
//! fails on its own. There is no retry; a missed run waits for the next
//! trigger.

use crate::libs::error::TaskError;
use crate::libs::operations::TaskOperations;
use crate::libs::task::Task;
use chrono::{DateTime, Duration, Utc};

/// Where matched tasks go. Fire-and-forget: no delivery confirmation comes
/// back to the core.
pub trait NotificationSink {
    fn deliver(&self, task_id: i64, title: &str, due_date: DateTime<Utc>);
}

/// Sink used by the CLI: reminders go to the log/console.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&self, task_id: i64, title: &str, due_date: DateTime<Utc>) {
        tracing::info!(task_id, due = %due_date, "task due soon: {}", title);
        println!("⏰ Due soon: {} (due {})", title, due_date.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"));
    }
}

/// True when `task` should be reminded about at `now`: incomplete, has a due
/// date, and that due date lies in `(now, now + window]`. Already-overdue
/// tasks are not due "soon" and are excluded.
pub fn due_soon(task: &Task, now: DateTime<Utc>, window: Duration) -> bool {
    if task.is_completed {
        return false;
    }
    match task.due_date {
        Some(due) => due > now && due <= now + window,
        None => false,
    }
}

pub struct DueSoonNotifier<S: NotificationSink> {
    ops: TaskOperations,
    sink: S,
    window: Duration,
}

impl<S: NotificationSink> DueSoonNotifier<S> {
    /// Notifier with the standard 24-hour look-ahead window.
    pub fn new(ops: TaskOperations, sink: S) -> Self {
        Self::with_window(ops, sink, Duration::hours(24))
    }

    pub fn with_window(ops: TaskOperations, sink: S, window: Duration) -> Self {
        DueSoonNotifier { ops, sink, window }
    }

    /// One scheduled run: read incomplete tasks once, deliver each match to
    /// the sink exactly once. Returns how many reminders were delivered.
    pub fn run_once(&self) -> Result<usize, TaskError> {
        self.run_at(Utc::now())
    }

    /// [`run_once`](Self::run_once) with an explicit clock, for tests.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<usize, TaskError> {
        let tasks = self.ops.incomplete_tasks()?;
        tracing::debug!(count = tasks.len(), "checking incomplete tasks for due-soon reminders");

        let mut delivered = 0;
        for task in tasks.iter().filter(|t| due_soon(t, now, self.window)) {
            if let Some(due) = task.due_date {
                self.sink.deliver(task.id, &task.title, due);
                delivered += 1;
            }
        }
        tracing::debug!(delivered, "due-soon run finished");
        Ok(delivered)
    }
}
