use std::path::PathBuf;

use moodlog_core::crypto::validate_new_passphrase;
use moodlog_core::{JournalStore, LocalFile};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_journal_path, read_config, write_config, MoodlogConfig};
use crate::constants::env_vars;
use crate::errors::{from_core, CliError};
use crate::helpers::prompt_new_passphrase;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let target = match args.path.as_deref().or(ctx.cli().file.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };

    let existing_len = std::fs::metadata(&target).map(|m| m.len()).unwrap_or(0);
    if existing_len > 0 {
        return Err(CliError::invalid_input(format!(
            "A journal already exists at {}\nHint: Run `moodlog migrate` to encrypt an older plaintext journal.",
            target.display()
        ))
        .into());
    }

    let interactive = ctx.interactive(args.no_input);
    let (passphrase, confirmation) = prompt_new_passphrase(env_vars::PASSPHRASE, interactive)?;
    validate_new_passphrase(&passphrase).map_err(from_core)?;
    if *passphrase != *confirmation {
        return Err(CliError::invalid_input("Passphrases do not match").into());
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }

    let mut store = JournalStore::new();
    store
        .connect(LocalFile::new(&target), &passphrase)
        .map_err(from_core)?;
    store.save().map_err(from_core)?;
    tracing::info!(path = %target.display(), "journal created");

    let journal_path = std::fs::canonicalize(&target).unwrap_or_else(|_| target.clone());
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        let mut config = read_config(&config_path)?;
        config.journal.path = journal_path.to_string_lossy().to_string();
        config
    } else {
        MoodlogConfig::new(&journal_path)
    };
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let journal_display = journal_path.display().to_string();
        let config_display = config_path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Journal created",
                &[("Path", &journal_display), ("Config", &config_display)],
            ),
        );
        print(&ui_ctx, &hint(&ui_ctx, "moodlog add --rating 7 --label \"Calm\""));
    }
    Ok(())
}
