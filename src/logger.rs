//! Logging setup.
//!
//! Records from the `log` facade go through a `fern` dispatch into an
//! in-memory history and, when enabled in the configuration, a log file.

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    level: log::LevelFilter,
    file_path: Option<PathBuf>,
}

impl Logger {
    /// In-memory logger at the default level, no file output
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            level: log::LevelFilter::Info,
            file_path: None,
        }
    }

    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let file_path = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        Ok(Self {
            level: config.level_filter()?,
            file_path,
            ..Self::new()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }

    pub fn log_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.push(format!("[{}] {}", timestamp, message));
    }

    fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(line);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Dispatch feeding this logger's history and log file
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let history = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(fern::Output::call(move |record| history.push(record.args().to_string())));

        if let Some(path) = &self.file_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install as the global logger. Only the first installation in a process succeeds.
    pub fn install(&self) -> Result<()> {
        self.dispatch()?.apply().context("A global logger is already installed")
    }

    /// Path of the log file in the user cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
