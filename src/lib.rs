//! # Taskdeck - personal task management
//!
//! A command-line task manager with categories, tags, due dates, flexible
//! filtering/sorting, and due-soon reminders.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete, and delete tasks
//! - **Filtering**: By completion state, category, or due-date window
//! - **Sorting**: By creation date, modification date, due date, or title
//! - **Reminders**: Periodic check for tasks due within 24 hours
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
