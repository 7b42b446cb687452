//! File logging for the terminal front end
//!
//! The terminal belongs to the UI, so tracing output goes to a file.
//! `RUST_LOG` overrides the configured filter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging initialisation errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber is already installed
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter: `RUST_LOG` if set and valid, else `default_directive`
#[must_use]
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs a global subscriber appending to `path`
pub fn init_file_logging(path: &Path, default_directive: &str) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directive() {
        let filter = env_filter("calcpad=debug");
        assert!(!format!("{filter}").is_empty());
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calcpad.log");
        std::fs::write(&path, "existing\n").unwrap();

        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "appended").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\nappended\n");
    }

    #[test]
    fn test_open_log_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_file_logging(&dir.path().join("nope/calcpad.log"), "info").unwrap_err();
        assert!(matches!(err, LoggingError::Io(_)));
    }
}
