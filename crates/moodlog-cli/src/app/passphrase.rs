//! Opening the journal with passphrase retry logic.

use std::path::{Path, PathBuf};

use moodlog_core::storage::StoredFormat;
use moodlog_core::{JournalStore, LocalFile, MoodlogError};
use zeroize::Zeroizing;

use crate::constants::{env_vars, MAX_PASSPHRASE_ATTEMPTS};
use crate::errors::{from_core, CliError};
use crate::helpers::{env_passphrase, prompt_passphrase};

use super::resolver::missing_journal_message;

const FORGOTTEN_HINT: &str =
    "Hint: If you forgot your passphrase, the journal cannot be recovered.";

/// An unlocked journal plus what it took to open it.
pub struct OpenJournal {
    pub store: JournalStore,
    pub path: PathBuf,
    pub format: StoredFormat,
    /// The passphrase that unlocked the journal.
    pub passphrase: Zeroizing<String>,
}

/// Open the journal at `path`, retrying wrong passphrases on a TTY.
///
/// `MOODLOG_PASSPHRASE` gets exactly one try.
pub fn open_with_retry(
    path: &Path,
    time_format: Option<&str>,
    interactive: bool,
) -> anyhow::Result<OpenJournal> {
    if !path.exists() {
        return Err(CliError::not_found(
            missing_journal_message(path),
            "Or pass --file to open a different journal.",
        )
        .into());
    }

    let mut store = JournalStore::new();
    if let Some(format) = time_format {
        store = store.with_time_format(format).map_err(from_core)?;
    }

    if let Some(passphrase) = env_passphrase(env_vars::PASSPHRASE) {
        return match store.connect(LocalFile::new(path), &passphrase) {
            Ok(format) => Ok(OpenJournal {
                store,
                path: path.to_path_buf(),
                format,
                passphrase,
            }),
            Err(MoodlogError::IncorrectPassphraseOrCorruptFile) => {
                Err(CliError::auth_failed("Incorrect passphrase.").into())
            }
            Err(err) => Err(from_core(err)),
        };
    }

    let max_attempts = if interactive { MAX_PASSPHRASE_ATTEMPTS } else { 1 };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let passphrase = prompt_passphrase(env_vars::PASSPHRASE, "Passphrase", interactive)?;
        match store.connect(LocalFile::new(path), &passphrase) {
            Ok(format) => {
                return Ok(OpenJournal {
                    store,
                    path: path.to_path_buf(),
                    format,
                    passphrase,
                })
            }
            Err(MoodlogError::IncorrectPassphraseOrCorruptFile) => {
                let remaining = max_attempts.saturating_sub(attempts);
                if remaining == 0 {
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed passphrase attempts.",
                        FORGOTTEN_HINT,
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect passphrase. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
            Err(err) => return Err(from_core(err)),
        }
    }
}
