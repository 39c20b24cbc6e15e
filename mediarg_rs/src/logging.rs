//! Tracing subscriber setup for the `mediarg` binary.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::domain::LogLevel;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` decides. Output goes to
/// stderr, or is appended to `log_file` without ANSI colors.
pub fn init_logging(level: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.level_filter().into()));

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|err| anyhow!(err).context("failed to install tracing subscriber"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_receives_events() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("mediarg.log");

        init_logging(LogLevel::Info, Some(&path)).expect("install subscriber");
        tracing::warn!("checksum mismatch in fixture");

        let content = std::fs::read_to_string(&path).expect("read log");
        assert!(content.contains("checksum mismatch in fixture"));
        assert!(init_logging(LogLevel::Info, None).is_err());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("missing").join("mediarg.log");
        assert!(init_logging(LogLevel::Info, Some(&path)).is_err());
    }
}
