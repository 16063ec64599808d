//! # Preview Log
//!
//! [`PreviewLog`] carries the user-facing status lines of a run. Each line is
//! echoed to the terminal and appended, timestamped, to the log file:
//!
//! ```text
//! 2024-05-01 10:15:02	[Info] Input directory check passed.
//! ```
//!
//! The file is opened once when the log is created and closed when it is
//! dropped. Diagnostic output for developers goes through the `log` facade
//! instead.

use chrono::{DateTime, Local};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "colorized_output")]
use console::style;

/// Default log file name, created next to the input directory
pub const LOG_FILE_NAME: &str = "preview.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity tag of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress and success messages
    Info,
    /// Failures reported to the user
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "[Info]"),
            Level::Error => write!(f, "[Error]"),
        }
    }
}

/// Append-only status log shared by every pipeline step
#[derive(Debug)]
pub struct PreviewLog {
    path: PathBuf,
    file: File,
    echo: bool,
}

impl PreviewLog {
    /// Open (or create) the log file in append mode
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            echo: true,
        })
    }

    /// Disable echoing to the terminal (file only)
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Log file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a progress line
    pub fn info(&self, message: impl fmt::Display) {
        self.write(Level::Info, &message.to_string());
    }

    /// Record a failure line
    pub fn error(&self, message: impl fmt::Display) {
        self.write(Level::Error, &message.to_string());
    }

    /// Record a line with an explicit level
    pub fn write(&self, level: Level, message: &str) {
        if self.echo {
            match level {
                Level::Info => println!("{} {message}", tag(level)),
                Level::Error => eprintln!("{} {message}", tag(level)),
            }
        }

        let line = format_line(&Local::now(), level, message);
        if let Err(e) = (&self.file).write_all(line.as_bytes()) {
            log::warn!("Failed to append to {}: {e}", self.path.display());
        }
    }
}

/// One log file line, newline-terminated
pub fn format_line(time: &DateTime<Local>, level: Level, message: &str) -> String {
    format!("{}\t{level} {message}\n", time.format(TIMESTAMP_FORMAT))
}

#[cfg(feature = "colorized_output")]
fn tag(level: Level) -> String {
    match level {
        Level::Info => style(level).green().to_string(),
        Level::Error => style(level).red().bold().to_string(),
    }
}

#[cfg(not(feature = "colorized_output"))]
fn tag(level: Level) -> String {
    level.to_string()
}
