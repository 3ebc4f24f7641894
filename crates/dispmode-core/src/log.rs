//! File logger with size-based rotation.
//!
//! Writes to `~/.config/dispmode/logs/dispmode.log`. Once the file grows
//! past the configured size it is moved to `dispmode.log.1` and a fresh
//! file is started. Until [`init`] succeeds every macro is a no-op.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "dispmode.log";
const BACKUP_FILE_NAME: &str = "dispmode.log.1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    dir: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false` or the log file can't be
/// opened.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);

    let Ok(file) = open_append(&log_dir.join(LOG_FILE_NAME)) else {
        return;
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        file,
        dir: log_dir,
        min_level: Level::parse(&config.level),
        max_bytes: config.max_file_mb * 1024 * 1024,
        written,
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format!("{} [{}] {args}\n", timestamp(), level.as_str());

    let _ = logger.file.write_all(line.as_bytes());
    logger.written += line.len() as u64;

    if logger.max_bytes > 0 && logger.written >= logger.max_bytes {
        logger.rotate();
    }
}

impl Logger {
    fn rotate(&mut self) {
        let current = self.dir.join(LOG_FILE_NAME);
        let _ = fs::rename(&current, self.dir.join(BACKUP_FILE_NAME));
        if let Ok(f) = open_append(&current) {
            self.file = f;
        }
        self.written = 0;
    }
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// UTC wall-clock time as `HH:MM:SS`.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warning"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn write_before_init_is_a_no_op() {
        // Act / Assert: must not panic without a logger.
        crate::log_info!("nothing to see {}", 42);
    }
}
