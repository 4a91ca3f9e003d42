// Logging Service
// File-backed logger and retention cleanup

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use crate::error::ConfigError;

const LOG_FILE_NAME: &str = "gcm-core.log";
const LOG_RETENTION_DAYS: u32 = 30;

struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    fn new(log_dir: &Path) -> Result<Self, ConfigError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join(LOG_FILE_NAME))?;
        Ok(Self {
            file: Mutex::new(file),
            level: LevelFilter::Info,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now();
        let line = format!(
            "[{}][{}][{}][{}] {}",
            timestamp.format("%Y-%m-%d"),
            timestamp.format("%H:%M:%S"),
            record.target(),
            record.level(),
            record.args()
        );

        if let Ok(mut file) = self.file.try_lock() {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {}
}

/// Install the process-wide file logger.
///
/// Called once by the embedding application before the bootstrap sequence so
/// settings-load fallbacks and catalog failures land in the log.
pub fn init_logger(log_dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(log_dir)?;
    let logger = FileLogger::new(log_dir)?;
    log::set_boxed_logger(Box::new(logger)).map_err(|e| ConfigError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Info);

    match prune_logs(log_dir, LOG_RETENTION_DAYS) {
        Ok(removed) if removed > 0 => log::info!("Pruned {removed} stale log file(s)"),
        Ok(_) => {}
        Err(e) => log::warn!("Failed to prune old logs: {e}"),
    }

    Ok(())
}

/// Delete `.log` files older than the retention window. Returns how many
/// files were removed.
pub fn prune_logs(log_dir: &Path, retention_days: u32) -> Result<usize, ConfigError> {
    if retention_days == 0 || !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(retention_days as u64 * 24 * 60 * 60))
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut removed = 0;
    for entry in fs::read_dir(log_dir)?.flatten() {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("log") {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|metadata| metadata.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        if modified < cutoff && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}
