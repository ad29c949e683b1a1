//! Diagnostic log
//!
//! Everything is written to an append-only file so the TUI owns the terminal.
//! `RUST_LOG` overrides the default `debug` level.

use crate::error::{MediaPickError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Open (creating if needed) the log file in append mode
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MediaPickError::logging(path, e))
}

/// Install the global subscriber writing to `path`
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| MediaPickError::logging(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("debug.txt");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("debug.txt");

        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, MediaPickError::Logging { .. }));
        assert!(err.to_string().starts_with("Cannot open log file"));
    }
}
