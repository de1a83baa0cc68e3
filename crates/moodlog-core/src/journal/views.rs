//! Derived views over the entry collection.
//!
//! Every function here is a pure read of a slice of entries: nothing is cached
//! and nothing is mutated, so each call rebuilds its view from scratch.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::entry::Entry;

/// Maximum number of search results returned.
pub const SEARCH_LIMIT: usize = 40;

/// Group entries by date, newest first within each day.
pub fn entries_by_date(entries: &[Entry]) -> BTreeMap<NaiveDate, Vec<&Entry>> {
    let mut map: BTreeMap<NaiveDate, Vec<&Entry>> = BTreeMap::new();
    for entry in entries {
        map.entry(entry.date).or_default().push(entry);
    }
    for day in map.values_mut() {
        day.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
    map
}

/// Entries for a single day, newest first.
pub fn entries_on(entries: &[Entry], date: NaiveDate) -> Vec<&Entry> {
    let mut day: Vec<&Entry> = entries.iter().filter(|e| e.date == date).collect();
    day.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    day
}

/// The set of dates that have at least one entry.
pub fn distinct_dates(entries: &[Entry]) -> BTreeSet<NaiveDate> {
    entries.iter().map(|e| e.date).collect()
}

/// Digest of one day: how many entries, the latest one, and whether any is flagged.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary<'a> {
    pub date: NaiveDate,
    pub count: usize,
    pub latest: &'a Entry,
    pub any_important: bool,
}

impl<'a> DaySummary<'a> {
    /// Summarize a day; `None` when the day has no entries.
    pub fn for_date(entries: &'a [Entry], date: NaiveDate) -> Option<Self> {
        let day = entries_on(entries, date);
        let latest = *day.first()?;
        Some(Self {
            date,
            count: day.len(),
            latest,
            any_important: day.iter().any(|e| e.important),
        })
    }
}

/// Current and longest runs of consecutive days with entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Streaks {
    /// Consecutive days ending today; zero when today has no entry
    pub current: u32,
    /// Longest run anywhere in the journal
    pub longest: u32,
}

/// Compute streaks relative to `today` (the caller's local date).
pub fn streaks(entries: &[Entry], today: NaiveDate) -> Streaks {
    let dates = distinct_dates(entries);

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &date in &dates {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }

    let mut current = 0u32;
    let mut cursor = today;
    while dates.contains(&cursor) {
        current += 1;
        match cursor.checked_sub_signed(Duration::days(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }

    Streaks { current, longest }
}

/// Average rating and entry count for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub count: usize,
    /// `None` when the month has no entries
    pub average: Option<f64>,
}

/// Aggregate the entries dated within `year`-`month`.
pub fn monthly_summary(entries: &[Entry], year: i32, month: u32) -> MonthlySummary {
    let ratings: Vec<f64> = entries
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .map(|e| f64::from(e.rating))
        .collect();

    let count = ratings.len();
    let average = if count == 0 {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / count as f64)
    };

    MonthlySummary {
        year,
        month,
        count,
        average,
    }
}

/// Case-insensitive substring search over note, label, and date.
///
/// Results are newest first and capped at [`SEARCH_LIMIT`]. A blank query
/// returns nothing; whether to show everything instead is the caller's call.
pub fn search<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&Entry> = entries
        .iter()
        .filter(|e| {
            let haystack = format!("{} {} {}", e.note, e.label, e.date).to_lowercase();
            haystack.contains(&needle)
        })
        .collect();
    matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matches.truncate(SEARCH_LIMIT);
    matches
}
