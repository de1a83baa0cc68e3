//! JSON output formatting for entries.

use moodlog_core::Entry;

use crate::ui::mood_phrase;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "date": entry.date,
        "rating": entry.rating,
        "mood": mood_phrase(entry.rating),
        "label": entry.label,
        "note": entry.note,
        "important": entry.important,
        "timestamp": entry.timestamp,
        "time": entry.time,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> serde_json::Value {
    serde_json::Value::Array(entries.into_iter().map(entry_json).collect())
}

/// Print a JSON value to stdout, pretty-printed.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
