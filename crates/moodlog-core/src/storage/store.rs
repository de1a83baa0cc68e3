//! The encrypted journal store.
//!
//! `JournalStore` is the only owner of the entry collection. Every mutating
//! call validates, applies the change in memory, and re-encrypts the whole
//! collection to the backing file before returning.
//!
//! Mutations take `&mut self`, so two persists can never overlap on one store;
//! callers sharing a store across threads wrap it in a `Mutex`.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use secrecy::{ExposeSecret, SecretString};

use super::envelope::{self, StoredFormat};
use super::medium::JournalFile;
use crate::error::{MoodlogError, Result};
use crate::journal::{Entry, EntryId, EntryPatch, NewEntry};

/// Default format for the display-only `time` field.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Encrypted, single-file journal store.
pub struct JournalStore {
    file: Option<Box<dyn JournalFile>>,
    pub(super) secret: Option<SecretString>,
    entries: Vec<Entry>,
    format: Option<StoredFormat>,
    time_format: String,
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JournalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalStore")
            .field("file", &self.file_description())
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("entries", &self.entries.len())
            .field("format", &self.format)
            .finish()
    }
}

impl JournalStore {
    /// A disconnected, empty store.
    pub fn new() -> Self {
        Self {
            file: None,
            secret: None,
            entries: Vec::new(),
            format: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Use a different strftime format for the `time` captured on new entries.
    pub fn with_time_format(mut self, time_format: &str) -> Result<Self> {
        let invalid = StrftimeItems::new(time_format).any(|item| matches!(item, Item::Error));
        if invalid || time_format.is_empty() {
            return Err(MoodlogError::InvalidInput(format!(
                "Invalid time format: {}",
                time_format
            )));
        }
        self.time_format = time_format.to_string();
        Ok(self)
    }

    /// Bind to `file` and `passphrase` and load its entries.
    ///
    /// On any failure the store is left disconnected and empty, so nothing from
    /// a previous file is shown as if it belonged to the new one.
    ///
    /// # Errors
    ///
    /// - `MoodlogError::InvalidInput` for an empty passphrase
    /// - `MoodlogError::Storage` if the file cannot be read
    /// - `MoodlogError::DecodeFailed` for malformed journal data
    /// - `MoodlogError::IncorrectPassphraseOrCorruptFile` if decryption fails
    pub fn connect<F>(&mut self, file: F, passphrase: &str) -> Result<StoredFormat>
    where
        F: JournalFile + 'static,
    {
        self.disconnect();

        if passphrase.is_empty() {
            return Err(MoodlogError::InvalidInput(
                "Passphrase required".to_string(),
            ));
        }

        let raw = file
            .read()
            .map_err(|e| MoodlogError::Storage(format!("Failed to read {}: {}", file.describe(), e)))?;
        let secret = SecretString::from(passphrase.to_string());
        let (entries, format) = envelope::decode(&raw, Some(&secret))?;

        tracing::debug!(
            file = %file.describe(),
            ?format,
            entries = entries.len(),
            "connected journal"
        );
        if format == StoredFormat::Legacy {
            tracing::info!(file = %file.describe(), "legacy plaintext journal; next save encrypts it");
        }

        self.file = Some(Box::new(file));
        self.secret = Some(secret);
        self.entries = entries;
        self.format = Some(format);
        Ok(format)
    }

    /// Forget the file, the passphrase, and the entries.
    pub fn disconnect(&mut self) {
        self.file = None;
        self.secret = None;
        self.entries.clear();
        self.format = None;
    }

    /// Whether a file is connected.
    pub fn is_connected(&self) -> bool {
        self.file.is_some()
    }

    /// Whether mutations are allowed (file connected and passphrase set).
    pub fn is_ready(&self) -> bool {
        self.file.is_some() && self.secret.is_some()
    }

    /// Name of the connected file, if any.
    pub fn file_description(&self) -> Option<String> {
        self.file.as_ref().map(|file| file.describe())
    }

    /// Format the file was in when connected, or `Sealed` after any save.
    pub fn stored_format(&self) -> Option<StoredFormat> {
        self.format
    }

    /// strftime format used for the display `time` of new and re-stamped entries.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Validate, append, and persist a new entry.
    pub fn add(&mut self, new_entry: NewEntry) -> Result<Entry> {
        self.ensure_ready()?;

        let now = Local::now();
        let next_free = match self.entries.iter().map(|entry| entry.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                MoodlogError::Validation("No entry ids left after the largest stored id".to_string())
            })?,
            None => i64::MIN,
        };
        let id = now.timestamp_millis().max(next_free);

        let entry = new_entry.into_entry(id, now, &self.time_format);
        entry.validate()?;

        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Merge `patch` into the entry with `id` and persist.
    ///
    /// Returns `Ok(false)` without persisting when no entry has that id.
    pub fn update(&mut self, id: EntryId, patch: &EntryPatch) -> Result<bool> {
        self.ensure_ready()?;

        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(false);
        };
        let updated = self.entries[index].patched(patch)?;
        self.entries[index] = updated;
        self.persist()?;
        Ok(true)
    }

    /// Remove the entry with `id` and persist.
    ///
    /// Returns `Ok(false)` without persisting when no entry has that id.
    pub fn delete(&mut self, id: EntryId) -> Result<bool> {
        self.ensure_ready()?;

        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Remove every entry dated `date`; returns how many were removed.
    pub fn clear_day(&mut self, date: NaiveDate) -> Result<usize> {
        self.ensure_ready()?;

        let before = self.entries.len();
        self.entries.retain(|entry| entry.date != date);
        let removed = before - self.entries.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Remove every entry; returns how many were removed.
    pub fn clear_all(&mut self) -> Result<usize> {
        self.ensure_ready()?;

        let removed = self.entries.len();
        if removed > 0 {
            self.entries.clear();
            self.persist()?;
        }
        Ok(removed)
    }

    /// Re-encrypt and write the current collection, upgrading legacy files.
    pub fn save(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.persist()
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(MoodlogError::NotReady)
        }
    }

    /// Seal the whole collection under a fresh salt and nonce and overwrite the file.
    ///
    /// In-memory changes are kept if the write fails.
    pub(super) fn persist(&mut self) -> Result<()> {
        let (Some(file), Some(secret)) = (self.file.as_mut(), self.secret.as_ref()) else {
            return Err(MoodlogError::NotReady);
        };

        let envelope = envelope::seal(&self.entries, secret.expose_secret())?;
        let bytes = envelope.to_bytes()?;
        file.write(&bytes).map_err(|e| {
            tracing::warn!(file = %file.describe(), error = %e, "journal write failed");
            MoodlogError::PersistFailed(format!("Failed to write {}: {}", file.describe(), e))
        })?;

        tracing::debug!(
            file = %file.describe(),
            entries = self.entries.len(),
            bytes = bytes.len(),
            "persisted journal"
        );
        self.format = Some(StoredFormat::Sealed);
        Ok(())
    }
}
