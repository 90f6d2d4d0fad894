use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskdeck.db";

/// A single SQLite connection to the application database. Table schemas are
/// applied by the modules that own them (`tasks::TaskStore`).
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its default location in the platform data dir.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path. Used by tests to point the
    /// store at a temporary directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }
}
