//! Core library modules for the taskdeck application.
//!
//! The task state engine lives here: repository mapping, validated
//! use-cases, the pure filter/sort pipeline, the reactive view controller,
//! and due-soon detection. `db` holds the persistence side.

pub mod config;
pub mod data_storage;
pub mod engine;
pub mod error;
pub mod notifier;
pub mod operations;
pub mod repository;
pub mod task;
pub mod view;
pub mod view_state;
