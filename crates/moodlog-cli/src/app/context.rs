//! Application context for the moodlog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{read_config, MoodlogConfig};
use crate::ui::UiContext;

use super::passphrase::{open_with_retry, OpenJournal};
use super::resolver::{resolve_config_path, resolve_journal_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<MoodlogConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded once per invocation.
    pub fn config(&self) -> anyhow::Result<Option<&MoodlogConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    pub fn journal_path(&self) -> anyhow::Result<PathBuf> {
        resolve_journal_path(self.cli, self.config()?)
    }

    /// UI context for a command, honoring its `--json` flag.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }

    /// Whether prompts may be shown.
    pub fn interactive(&self, no_input: bool) -> bool {
        !no_input && std::io::stdin().is_terminal()
    }

    /// Resolve, unlock, and load the journal.
    pub fn open_journal(&self, no_input: bool) -> anyhow::Result<OpenJournal> {
        let path = self.journal_path()?;
        let time_format = self
            .config()?
            .and_then(|config| config.ui.time_format.as_deref());
        open_with_retry(&path, time_format, self.interactive(no_input))
    }
}
