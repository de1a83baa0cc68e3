//! Passphrase rotation.

use secrecy::{ExposeSecret, SecretString};

use super::store::JournalStore;
use crate::crypto::validate_new_passphrase;
use crate::error::{MoodlogError, Result};

impl JournalStore {
    /// Re-encrypt the in-memory collection under a new passphrase.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. both new-passphrase fields are non-empty
    /// 2. `current` matches the session passphrase
    /// 3. `new` is at least 8 characters
    /// 4. `new` equals `confirmation`
    ///
    /// The file is not re-read; what is in memory is what gets sealed. If the
    /// write fails the session keeps the old passphrase, which still opens the
    /// untouched file on disk.
    pub fn rotate_passphrase(&mut self, current: &str, new: &str, confirmation: &str) -> Result<()> {
        if !self.is_ready() {
            return Err(MoodlogError::NotReady);
        }

        if new.is_empty() || confirmation.is_empty() {
            return Err(MoodlogError::Validation(
                "New passphrase and confirmation are required".to_string(),
            ));
        }

        let matches_session = self
            .secret
            .as_ref()
            .is_some_and(|secret| secret.expose_secret() == current);
        if !matches_session {
            return Err(MoodlogError::WrongCurrentPassphrase);
        }

        validate_new_passphrase(new)?;

        if new != confirmation {
            return Err(MoodlogError::Validation(
                "New passphrases do not match".to_string(),
            ));
        }

        let previous = self.secret.replace(SecretString::from(new.to_string()));
        match self.persist() {
            Ok(()) => {
                tracing::info!(entries = self.entries().len(), "journal passphrase rotated");
                Ok(())
            }
            Err(err) => {
                self.secret = previous;
                Err(err)
            }
        }
    }
}
