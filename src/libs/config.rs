//! Application configuration.
//!
//! A single JSON file in the platform data directory. Everything is
//! optional: with no file present the application runs on defaults, and
//! unconfigured sections are omitted when saving to keep the file readable.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

const CONFIG_FILE_NAME: &str = "taskdeck.json";

/// Settings for the due-soon reminder runs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NotifyConfig {
    /// How often `notify --watch` re-runs the check, in hours.
    pub period_hours: u64,
    /// Look-ahead window for "due soon", in hours.
    pub window_hours: i64,
}

impl Default for NotifyConfig {
    /// One run per day looking 24 hours ahead, matching the nominal
    /// schedule of the background worker.
    fn default() -> Self {
        NotifyConfig {
            period_hours: 24,
            window_hours: 24,
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Config> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Writes the configuration file, creating the data dir if needed.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }

    /// The notify section, defaulted when absent.
    pub fn notify(&self) -> NotifyConfig {
        self.notify.clone().unwrap_or_default()
    }
}
