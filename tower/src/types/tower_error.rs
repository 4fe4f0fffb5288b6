use std::fmt;

use logger::LoggerError;
use runway::RunwayError;

/// Represents errors that can occur in the control tower console.
#[derive(Debug)]
pub enum TowerError {
    Usage(String),         // Malformed command line
    Config(String),        // Unusable startup configuration
    Runway(RunwayError),   // Rejected airport operation
    Logger(LoggerError),   // Log file could not be written
    Io(std::io::Error),    // Console input/output failed
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerError::Usage(msg) => write!(f, "Invalid command: {}. Use -h for help.", msg),
            TowerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TowerError::Runway(e) => write!(f, "{}", e),
            TowerError::Logger(e) => write!(f, "Logger error: {}", e),
            TowerError::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for TowerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TowerError::Runway(e) => Some(e),
            TowerError::Logger(e) => Some(e),
            TowerError::Io(e) => Some(e),
            TowerError::Usage(_) | TowerError::Config(_) => None,
        }
    }
}

impl From<RunwayError> for TowerError {
    fn from(err: RunwayError) -> Self {
        TowerError::Runway(err)
    }
}

impl From<LoggerError> for TowerError {
    fn from(err: LoggerError) -> Self {
        TowerError::Logger(err)
    }
}

impl From<std::io::Error> for TowerError {
    fn from(err: std::io::Error) -> Self {
        TowerError::Io(err)
    }
}
