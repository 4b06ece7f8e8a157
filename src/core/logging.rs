//! # Logging
//!
//! A `Logger` is handed to every component at construction instead of being
//! reached through a global. It wraps any `log::Log` sink (a simplelog
//! `WriteLogger` in the binary, a capture or a no-op sink in tests) and tags
//! each record with the component that wrote it.
//!
//! ```text
//! 2026-10-14T09:12:44+02:00 [INFO] modules_view: Received modules: count=4
//! ```

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Log>,
    component: Arc<str>,
}

impl Logger {
    pub fn new(sink: Arc<dyn Log>) -> Self {
        Self {
            sink,
            component: Arc::from("main"),
        }
    }

    /// A logger that drops everything.
    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardLog))
    }

    /// Child logger sharing the sink, tagged with another component name.
    pub fn with(&self, component: &str) -> Self {
        Self {
            sink: self.sink.clone(),
            component: Arc::from(component),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.emit(Level::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::Debug, message);
    }

    pub fn flush(&self) {
        self.sink.flush();
    }

    fn emit(&self, level: Level, message: impl fmt::Display) {
        let metadata = Metadata::builder()
            .level(level)
            .target(&self.component)
            .build();
        if !self.sink.enabled(&metadata) {
            return;
        }
        self.sink.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{message}"))
                .build(),
        );
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

struct DiscardLog;

impl Log for DiscardLog {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        false
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

/// Path of today's log file inside `dir`: `dir/YYYY-MM-DD.log`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    dir.join(format!("{today}.log"))
}

/// Opens (appending) today's log file under `dir` and builds a logger on it.
///
/// Fails if the directory cannot be created or the file cannot be opened;
/// the caller treats that as fatal.
pub fn open_file_logger(dir: &Path, level: LevelFilter) -> io::Result<Logger> {
    fs::create_dir_all(dir)?;
    let path = log_file_path(dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let sink: Box<dyn Log> = WriteLogger::new(level, config, file);
    Ok(Logger::new(Arc::from(sink)))
}
