//! SQLite-backed task table.
//!
//! The store works on raw rows: timestamps as signed epoch milliseconds,
//! completion as a 0/1 integer, tags as a comma-joined string (NULL for the
//! empty list). Mapping to the domain `Task` is the repository's job.
//!
//! Every committed mutation bumps a monotonic revision published on a
//! `tokio::sync::watch` channel. Live queries subscribe to that channel and
//! re-read their result set on each bump, which gives subscribers snapshots
//! in mutation order.

use crate::db::db::Db;
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tokio::sync::watch;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    due_date INTEGER,
    is_completed INTEGER NOT NULL DEFAULT 0,
    category TEXT,
    tags TEXT,
    created_at INTEGER NOT NULL,
    updated_at INTEGER
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, is_completed, category, tags, created_at, updated_at)
    VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6, NULL)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, is_completed = ?5, category = ?6, tags = ?7, updated_at = ?8
    WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, is_completed, category, tags, created_at, updated_at FROM tasks";
const WHERE_INCOMPLETE: &str = "WHERE is_completed = 0";
const WHERE_CATEGORY: &str = "WHERE category = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

/// A task exactly as persisted, before any domain decoding.
#[derive(Debug, Clone)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub is_completed: bool,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Row fields supplied on insert. The store assigns `id` and `created_at`
/// and always starts tasks as incomplete.
#[derive(Debug, Clone)]
pub struct NewTaskRow {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

/// Store-level query shape. Richer filters (date ranges, completion windows)
/// are evaluated in memory by the filter/sort engine; the store only narrows
/// by the dimensions it has indexes for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskQuery {
    All,
    Incomplete,
    ByCategory(String),
}

pub struct TaskStore {
    conn: Connection,
    revision: watch::Sender<u64>,
}

impl TaskStore {
    /// Opens the store at the default database location.
    pub fn new() -> Result<Self> {
        Self::with_db(Db::new()?)
    }

    /// Opens the store at an explicit database path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_db(Db::open(path)?)
    }

    fn with_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        let (revision, _) = watch::channel(0u64);
        Ok(TaskStore { conn: db.conn, revision })
    }

    /// Subscribes to the revision signal. The receiver's value changes after
    /// every committed mutation, in the order the mutations were applied.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Inserts a new row, assigning id and creation timestamp.
    pub fn insert(&mut self, row: &NewTaskRow) -> rusqlite::Result<i64> {
        let created_at = Utc::now().timestamp_millis();
        self.conn.execute(
            INSERT_TASK,
            params![row.title, row.description, row.due_date, row.category, row.tags, created_at],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "task inserted");
        self.bump();
        Ok(id)
    }

    /// Overwrites all mutable fields of a row. Returns the number of rows
    /// affected: 0 when the id is absent, 1 otherwise.
    pub fn update_by_id(&mut self, row: &TaskRow) -> rusqlite::Result<usize> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                row.id,
                row.title,
                row.description,
                row.due_date,
                row.is_completed as i64,
                row.category,
                row.tags,
                row.updated_at
            ],
        )?;
        if affected > 0 {
            tracing::debug!(id = row.id, "task updated");
            self.bump();
        }
        Ok(affected)
    }

    /// Deletes a row. Returns the number of rows affected; deleting an
    /// absent id is a no-op.
    pub fn delete_by_id(&mut self, id: i64) -> rusqlite::Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected > 0 {
            tracing::debug!(id, "task deleted");
            self.bump();
        }
        Ok(affected)
    }

    pub fn fetch_by_id(&self, id: i64) -> rusqlite::Result<Option<TaskRow>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
    }

    /// Fetches the rows matching a store query, ordered by id so that
    /// snapshots are deterministic for the engine's stable sort.
    pub fn fetch(&self, query: &TaskQuery) -> rusqlite::Result<Vec<TaskRow>> {
        let (mut stmt, params) = match query {
            TaskQuery::All => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?, vec![]),
            TaskQuery::Incomplete => (
                self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_INCOMPLETE, ORDER_BY_ID))?,
                vec![],
            ),
            TaskQuery::ByCategory(category) => (
                self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_CATEGORY, ORDER_BY_ID))?,
                vec![category.clone()],
            ),
        };

        let row_iter = stmt.query_map(rusqlite::params_from_iter(params.iter()), Self::map_row)?;
        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TaskRow> {
        Ok(TaskRow {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            is_completed: row.get::<_, i64>(4)? != 0,
            category: row.get(5)?,
            tags: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
