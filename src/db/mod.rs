//! Database layer for the taskdeck application.
//!
//! SQLite persistence for tasks. `db` manages the connection; `tasks` owns
//! the table schema, the raw row types, and the revision signal that drives
//! reactive reads.

/// Core database connection and initialization.
pub mod db;

/// The tasks table: raw rows, store queries, and mutation signalling.
pub mod tasks;
