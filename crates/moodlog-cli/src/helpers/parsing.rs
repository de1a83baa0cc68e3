//! Parsing helpers for dates, months, and entry IDs.

use chrono::{Datelike, NaiveDate};

use moodlog_core::journal::parse_date;
use moodlog_core::EntryId;

use crate::errors::{from_core, CliError};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to `today`.
pub fn parse_day(value: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match value {
        None => Ok(today),
        Some("today") => Ok(today),
        Some(raw) => parse_date(raw).map_err(from_core),
    }
}

/// Parse a `YYYY-MM` month, defaulting to the month containing `today`.
pub fn parse_month(value: Option<&str>, today: NaiveDate) -> anyhow::Result<(i32, u32)> {
    let Some(raw) = value else {
        return Ok((today.year(), today.month()));
    };
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|first| (first.year(), first.month()))
        .map_err(|_| CliError::invalid_input(format!("Invalid month (expected YYYY-MM): {}", raw)).into())
}

/// Parse an entry ID.
pub fn parse_entry_id(value: &str) -> anyhow::Result<EntryId> {
    value
        .trim()
        .parse::<EntryId>()
        .map_err(|_| CliError::invalid_input(format!("Invalid entry ID: {}", value)).into())
}
