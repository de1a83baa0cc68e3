//! Journal entry types.
//!
//! The serialized field names and shapes are the on-disk format, shared by the
//! legacy plaintext array and the decrypted envelope payload.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{MoodlogError, Result};

/// Entry identifier: the creation instant in epoch milliseconds.
pub type EntryId = i64;

/// Highest allowed rating (ratings run 0..=10).
pub const MAX_RATING: u8 = 10;

/// Maximum label length in characters.
pub const MAX_LABEL_CHARS: usize = 100;

/// A single journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for this entry
    pub id: EntryId,

    /// The calendar day this entry is about (no timezone)
    pub date: NaiveDate,

    /// Mood rating, 0..=10
    pub rating: u8,

    /// Short free-text tag
    pub label: String,

    /// Free-text note, possibly empty
    #[serde(default)]
    pub note: String,

    /// Flagged as important
    #[serde(default)]
    pub important: bool,

    /// Creation instant in epoch milliseconds; orders entries within a day
    #[serde(default)]
    pub timestamp: i64,

    /// Time of day captured at creation, display only
    #[serde(default)]
    pub time: String,
}

impl Entry {
    /// Check the field constraints enforced on add and update.
    pub fn validate(&self) -> Result<()> {
        validate_rating(self.rating)?;
        validate_label(&self.label)
    }

    fn apply(&mut self, patch: &EntryPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(label) = &patch.label {
            self.label = label.clone();
        }
        if let Some(note) = &patch.note {
            self.note = note.clone();
        }
        if let Some(important) = patch.important {
            self.important = important;
        }
        if let Some(timestamp) = patch.timestamp {
            self.timestamp = timestamp;
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
    }

    /// Return a copy with `patch` merged in.
    ///
    /// Only the fields the patch sets are validated, so entries written by
    /// other clients with a blank label can still be edited.
    pub fn patched(&self, patch: &EntryPatch) -> Result<Entry> {
        patch.validate()?;
        let mut updated = self.clone();
        updated.apply(patch);
        Ok(updated)
    }
}

/// Fields for a new entry; id, timestamp, and time are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub rating: u8,
    pub label: String,
    pub note: String,
    pub important: bool,
}

impl NewEntry {
    pub fn new(date: NaiveDate, rating: u8, label: impl Into<String>) -> Self {
        Self {
            date,
            rating,
            label: label.into(),
            note: String::new(),
            important: false,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into().trim().to_string();
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Build the stored entry created at `created` with the given id.
    pub(crate) fn into_entry(self, id: EntryId, created: DateTime<Local>, time_format: &str) -> Entry {
        Entry {
            id,
            date: self.date,
            rating: self.rating,
            label: self.label,
            note: self.note,
            important: self.important,
            timestamp: created.timestamp_millis(),
            time: created.format(time_format).to_string(),
        }
    }
}

/// A partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub rating: Option<u8>,
    pub label: Option<String>,
    pub note: Option<String>,
    pub important: Option<bool>,
    pub timestamp: Option<i64>,
    pub time: Option<String>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into().trim().to_string());
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }

    /// Re-stamp the entry as written at `at`, like saving an edit form does.
    pub fn retimed(mut self, at: DateTime<Local>, time_format: &str) -> Self {
        self.timestamp = Some(at.timestamp_millis());
        self.time = Some(at.format(time_format).to_string());
        self
    }

    /// Check the constraints on the fields this patch sets.
    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        if let Some(label) = &self.label {
            validate_label(label)?;
        }
        Ok(())
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.rating.is_none()
            && self.label.is_none()
            && self.note.is_none()
            && self.important.is_none()
            && self.timestamp.is_none()
            && self.time.is_none()
    }
}

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        MoodlogError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", value))
    })
}

fn validate_rating(rating: u8) -> Result<()> {
    if rating > MAX_RATING {
        return Err(MoodlogError::Validation(format!(
            "Rating must be between 0 and {} (got {})",
            MAX_RATING, rating
        )));
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(MoodlogError::Validation("Label cannot be empty".to_string()));
    }
    let length = label.chars().count();
    if length > MAX_LABEL_CHARS {
        return Err(MoodlogError::Validation(format!(
            "Label must be at most {} characters (got {})",
            MAX_LABEL_CHARS, length
        )));
    }
    Ok(())
}
