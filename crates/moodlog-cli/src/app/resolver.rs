//! Path resolution for config and journal files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, MoodlogConfig};
use crate::constants::env_vars;
use crate::errors::CliError;

/// Resolve the config file path, checking `MOODLOG_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_vars::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the journal file path from `--file` / `MOODLOG_PATH` or the config.
pub fn resolve_journal_path(cli: &Cli, config: Option<&MoodlogConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.file.as_deref() {
        return Ok(PathBuf::from(path));
    }
    match config {
        Some(config) => Ok(PathBuf::from(&config.journal.path)),
        None => {
            let config_path = resolve_config_path()?;
            Err(CliError::not_found(
                format!("No journal configured (looked for {})", config_path.display()),
                "Run:\n  moodlog init\n\nOr point at a journal file:\n  MOODLOG_PATH=/path/to/journal.json moodlog list",
            )
            .into())
        }
    }
}

/// Error message when the journal file is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!(
        "No journal found at {}\n\nRun:\n  moodlog init {}",
        path.display(),
        path.display()
    )
}
