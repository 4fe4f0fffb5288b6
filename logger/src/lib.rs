use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Severity of a log line. Lines below the logger's minimum level are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Appends timestamped lines to `<log_dir>/<name>.log`, optionally echoing
/// them to stdout with colors.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
    echo_to_console: bool,
    min_level: LogLevel,
}

impl Logger {
    /// Creates a new `Logger`, truncating any previous log with the same name.
    ///
    /// # Parameters
    /// - `log_dir`: Existing directory where the log file is created.
    /// - `name`: Base name of the log file, without extension.
    ///
    /// # Errors
    /// - `LoggerError::InvalidPath` - If `log_dir` is not a directory or `name` is empty.
    /// - `LoggerError::IoError` - If the file cannot be created.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory",
                log_dir.display()
            )));
        }

        let sanitized = name.trim().replace([':', '/', '\\', ' '], "_");
        if sanitized.is_empty() {
            return Err(LoggerError::InvalidPath("Empty log name".into()));
        }
        let log_file = log_dir.join(format!("{}.log", sanitized));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file,
            echo_to_console: false,
            min_level: LogLevel::Info,
        })
    }

    /// Enables or disables the colored copy of each line on stdout.
    pub fn with_console(mut self, echo_to_console: bool) -> Self {
        self.echo_to_console = echo_to_console;
        self
    }

    /// Skips every line less severe than `level`.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    fn log(&self, level: LogLevel, color: Option<Color>, message: &str) -> Result<(), LoggerError> {
        if level < self.min_level {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        if self.echo_to_console {
            let ansi = match (level, color) {
                (LogLevel::Info, Some(color)) => color.to_ansi_code(),
                (LogLevel::Info, None) => Color::White.to_ansi_code(),
                (LogLevel::Warn, _) => "\x1b[93m",
                (LogLevel::Error, _) => "\x1b[91m",
            };
            let mut stdout = io::stdout();
            write!(stdout, "{}{}\x1b[0m", ansi, line)?;
            stdout.flush()?;
        }

        let mut file = OpenOptions::new().append(true).open(&self.log_file)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Logs an informational message, shown in `color` on the console.
    pub fn info(&self, message: &str, color: Color) -> Result<(), LoggerError> {
        self.log(LogLevel::Info, Some(color), message)
    }

    pub fn warn(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, None, message)
    }

    pub fn error(&self, message: &str) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, None, message)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}
