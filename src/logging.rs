use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Send tracing output to `path`. The terminal belongs to the TUI, so there
/// is no stderr subscriber; without this call events are discarded.
pub(crate) fn init_file(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {path}"))?;

    let filter = EnvFilter::new("pocketplan=debug");

    fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    tracing::info!(path, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_init_file_writes_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pocketplan.log");
        let path = path.to_str().unwrap();

        init_file(path).unwrap();
        tracing::debug!(target: "pocketplan", "hello from test");

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("logging initialized"));
        assert!(contents.contains("hello from test"));
        // A second global subscriber is refused
        assert!(init_file(path).is_err());
    }

    #[test]
    fn test_init_file_bad_path() {
        let err = init_file("/nonexistent-dir/pocketplan.log").unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
