use std::env;
use std::fs;
use std::path::PathBuf;

use super::tower_error::TowerError;
use super::LOG_NAME;

/// Environment variable consulted when no log directory is given on the command line.
pub const LOG_DIR_VAR: &str = "TOWER_LOG_DIR";

/// Startup settings of the control tower console.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerConfig {
    pub log_dir: PathBuf,
    pub log_name: String,
    pub echo_to_console: bool,
}

impl TowerConfig {
    /// Builds the configuration from the command-line arguments (program name excluded).
    ///
    /// # Usage
    ///
    /// ```sh
    /// cargo run -p tower -- [log_dir] [--quiet]
    /// ```
    ///
    /// The log directory falls back to `TOWER_LOG_DIR`, then to the current directory.
    pub fn from_args(args: &[String]) -> Result<Self, TowerError> {
        let mut log_dir = None;
        let mut echo_to_console = true;

        for arg in args {
            match arg.as_str() {
                "--quiet" | "-q" => echo_to_console = false,
                flag if flag.starts_with('-') => {
                    return Err(TowerError::Config(format!("Unknown option {}", flag)));
                }
                path if log_dir.is_none() => log_dir = Some(PathBuf::from(path)),
                _ => {
                    return Err(TowerError::Config(
                        "Usage: tower [log_dir] [--quiet]".to_string(),
                    ));
                }
            }
        }

        let log_dir = match log_dir {
            Some(dir) => dir,
            None => match env::var(LOG_DIR_VAR) {
                Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
                _ => env::current_dir().map_err(|_| {
                    TowerError::Config("Failed to determine the current directory".to_string())
                })?,
            },
        };

        Ok(TowerConfig {
            log_dir,
            log_name: LOG_NAME.to_string(),
            echo_to_console,
        })
    }

    /// Creates the log directory if it does not exist yet.
    pub fn ensure_log_dir(&self) -> Result<(), TowerError> {
        if !self.log_dir.exists() {
            fs::create_dir_all(&self.log_dir).map_err(|_| {
                TowerError::Config(format!(
                    "Failed to create directory at {}",
                    self.log_dir.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_dir_and_quiet_flag() {
        let config = TowerConfig::from_args(&args(&["/tmp/tower_logs", "--quiet"])).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/tmp/tower_logs"));
        assert_eq!(config.log_name, "tower");
        assert!(!config.echo_to_console);
    }

    #[test]
    fn test_console_echo_is_on_by_default() {
        let config = TowerConfig::from_args(&args(&["logs"])).unwrap();
        assert!(config.echo_to_console);
    }

    #[test]
    fn test_rejects_unknown_flags_and_extra_paths() {
        assert!(TowerConfig::from_args(&args(&["--verbose"])).is_err());
        assert!(TowerConfig::from_args(&args(&["a", "b"])).is_err());
    }

    #[test]
    fn test_ensure_log_dir_creates_missing_directory() {
        let dir = env::temp_dir().join(format!("tower_config_{}", std::process::id()));
        let config = TowerConfig {
            log_dir: dir.clone(),
            log_name: LOG_NAME.to_string(),
            echo_to_console: false,
        };

        config.ensure_log_dir().unwrap();
        assert!(dir.is_dir());

        fs::remove_dir_all(dir).unwrap();
    }
}
