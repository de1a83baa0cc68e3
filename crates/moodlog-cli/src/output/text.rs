//! Text and table output formatting for entries.

use moodlog_core::Entry;

use crate::ui::theme;
use crate::ui::{mood_face, print, simple_table, truncate, Column, UiContext};

/// Columns used by every entry listing.
pub const ENTRY_COLUMNS: [Column; 6] = [
    Column::new("ID"),
    Column::new("Date"),
    Column::new("Time"),
    Column::new("Mood"),
    Column::new("Label"),
    Column::new("Note"),
];

const NOTE_WIDTH: usize = 48;

/// Table rows for `entries`, one per entry.
///
/// Pretty rows show a face and a truncated note; plain rows keep the whole
/// note on one line so scripts can cut fields.
pub fn entry_rows<'a>(ctx: &UiContext, entries: impl IntoIterator<Item = &'a Entry>) -> Vec<Vec<String>> {
    entries
        .into_iter()
        .map(|entry| {
            let rating = format!("{}/10", entry.rating);
            let mut label = entry.label.clone();
            if entry.important {
                label = if ctx.mode.is_pretty() {
                    format!("{} {}", theme::important("*", ctx.color), label)
                } else {
                    format!("*{}", label)
                };
            }
            let single_line_note = entry.note.replace('\n', " ");
            if ctx.mode.is_pretty() {
                vec![
                    entry.id.to_string(),
                    entry.date.to_string(),
                    entry.time.clone(),
                    format!(
                        "{} {}",
                        mood_face(entry.rating, ctx.unicode),
                        theme::rating(entry.rating, &rating, ctx.color)
                    ),
                    label,
                    truncate(&single_line_note, NOTE_WIDTH),
                ]
            } else {
                vec![
                    entry.id.to_string(),
                    entry.date.to_string(),
                    entry.time.clone(),
                    rating,
                    label,
                    single_line_note,
                ]
            }
        })
        .collect()
}

/// Print entries as a table, or a short notice when there are none.
pub fn print_entry_list<'a>(
    ctx: &UiContext,
    entries: impl IntoIterator<Item = &'a Entry>,
    empty_message: &str,
) {
    let rows = entry_rows(ctx, entries);
    if rows.is_empty() {
        if ctx.mode.is_pretty() {
            print(ctx, &theme::dim(empty_message, ctx.color));
        }
        return;
    }
    print(ctx, &simple_table(ctx, &ENTRY_COLUMNS, &rows));
}
