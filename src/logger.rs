//! Logging for todozone.
//!
//! Two sinks: the `log` facade, which `fern` sends to a file when logging is
//! enabled in the config, and an in-memory buffer that the logs dialog shows.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Entries kept in memory for the logs dialog
const MAX_ENTRIES: usize = 500;

/// The global `log` logger can only be installed once per process
static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// In-memory logger only
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the logger described by the config, installing the file sink when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::new());
        }

        let path = init_file_logging(config.level_filter()?)?;
        Ok(Self {
            logs: Arc::default(),
            file_path: Some(path),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f");
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_ENTRIES {
                logs.remove(0);
            }
            logs.push(format!("[{}] {}", timestamp, message));
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        match self.logs.lock() {
            Ok(logs) => logs.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file: `$XDG_DATA_HOME/todozone/todozone.log`, or the temp dir
    pub fn get_log_file_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME)
            .join(LOG_FILE_NAME)
    }
}

fn init_file_logging(level: log::LevelFilter) -> Result<PathBuf> {
    FILE_LOGGING
        .get_or_try_init(|| {
            let path = Logger::get_log_file_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(level)
                .chain(file)
                .apply()
                .context("Failed to install logger")?;

            Ok(path)
        })
        .cloned()
}
