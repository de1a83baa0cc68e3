//! Journal data model and the read-only views computed over it.

pub mod entry;
pub mod views;

pub use entry::{parse_date, Entry, EntryId, EntryPatch, NewEntry, MAX_LABEL_CHARS, MAX_RATING};
pub use views::{
    distinct_dates, entries_by_date, entries_on, monthly_summary, search, streaks, DaySummary,
    MonthlySummary, Streaks, SEARCH_LIMIT,
};
