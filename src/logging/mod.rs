//! Tracing subscriber initialization.
//!
//! Logs go to a file so the interactive session on stdout stays clean.
//! Follow them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_FILTER_ENV: &str = "FNLIST_LOG";

const DEFAULT_FILTER: &str = "fnlist=info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The path has no file name or no directory to put it in.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into its directory and file name.
fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let invalid = || LoggingError::InvalidPath(log_path.to_path_buf());
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(invalid)?;
    let directory = log_path.parent().ok_or_else(invalid)?;
    Ok((directory, file_name))
}

/// Build the filter from `FNLIST_LOG`, then `RUST_LOG`, then `fnlist=info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send tracing output to `log_path`, creating its directory if needed.
///
/// # Errors
///
/// Fails if the subscriber was already initialized, the path has no file
/// name, or the directory cannot be created.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    if !directory.as_os_str().is_empty() {
        std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("fnlist_test_logs_create");
        let log_file = test_dir.join("test.log");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail if subscriber already set; the directory is created first.
        let _ = init(&log_file);

        assert!(test_dir.exists(), "Log directory should be created: {test_dir:?}");
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let log_file = std::env::temp_dir()
            .join("fnlist_test_logs_twice")
            .join("twice.log");

        let _ = init(&log_file);
        assert!(matches!(init(&log_file), Err(LoggingError::SubscriberAlreadySet)));
    }

    #[test]
    fn root_path_is_invalid() {
        assert!(matches!(init(Path::new("/")), Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    fn bare_file_name_logs_to_current_directory() {
        let (directory, file_name) = split_log_path(Path::new("fnlist.log")).unwrap();
        assert_eq!(directory, Path::new(""));
        assert_eq!(file_name, "fnlist.log");
    }
}
