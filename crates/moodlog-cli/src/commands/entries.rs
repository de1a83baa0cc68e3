//! Commands that change entries: add, edit, delete.

use chrono::Local;

use moodlog_core::{Entry, EntryId, EntryPatch, NewEntry};

use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, EditArgs};
use crate::errors::{from_core, CliError};
use crate::helpers::{confirm, parse_day, parse_entry_id};
use crate::output::{entry_json, print_json};
use crate::ui::{mood_phrase, print, receipt, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let date = parse_day(args.date.as_deref(), today)?;

    let mut new_entry = NewEntry::new(date, args.rating, args.label.trim()).important(args.important);
    if let Some(note) = args.note.as_deref() {
        new_entry = new_entry.with_note(note);
    }

    let mut journal = ctx.open_journal(args.no_input)?;
    let entry = journal.store.add(new_entry).map_err(from_core)?;

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        return print_json(&entry_json(&entry));
    }
    if !ctx.quiet() {
        print(&ui_ctx, &entry_receipt(&ui_ctx, "Entry added", &entry));
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let today = Local::now().date_naive();

    let mut patch = EntryPatch::new();
    if let Some(date) = args.date.as_deref() {
        patch = patch.date(parse_day(Some(date), today)?);
    }
    if let Some(rating) = args.rating {
        patch = patch.rating(rating);
    }
    if let Some(label) = args.label.as_deref() {
        patch = patch.label(label.trim());
    }
    if let Some(note) = args.note.as_deref() {
        patch = patch.note(note);
    }
    if args.important {
        patch = patch.important(true);
    } else if args.not_important {
        patch = patch.important(false);
    }
    if patch.is_empty() {
        return Err(CliError::invalid_input(
            "Nothing to change. Pass at least one of --rating, --label, --note, --date, --important, --not-important.",
        )
        .into());
    }

    let mut journal = ctx.open_journal(args.no_input)?;
    // Saving an edit re-stamps the entry, so it moves to the top of its day.
    let patch = patch.retimed(Local::now(), journal.store.time_format());
    let updated = journal.store.update(id, &patch).map_err(from_core)?;
    if !updated {
        return Err(entry_not_found(id));
    }
    let entry = journal
        .store
        .get(id)
        .cloned()
        .ok_or_else(|| entry_not_found(id))?;

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        return print_json(&entry_json(&entry));
    }
    if !ctx.quiet() {
        print(&ui_ctx, &entry_receipt(&ui_ctx, "Entry updated", &entry));
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let mut journal = ctx.open_journal(args.no_input)?;

    let Some(entry) = journal.store.get(id).cloned() else {
        return Err(entry_not_found(id));
    };

    let question = format!("Delete entry {} ({}, {})?", entry.id, entry.date, entry.label);
    if !confirm(&question, args.yes, ctx.interactive(args.no_input))? {
        return Err(anyhow::anyhow!("Delete cancelled"));
    }

    if !journal.store.delete(id).map_err(from_core)? {
        return Err(entry_not_found(id));
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let id_text = id.to_string();
        print(&ui_ctx, &receipt(&ui_ctx, "Entry deleted", &[("ID", &id_text)]));
    }
    Ok(())
}

fn entry_receipt(ui_ctx: &UiContext, title: &str, entry: &Entry) -> String {
    let id = entry.id.to_string();
    let date = entry.date.to_string();
    let mood = format!("{}/10 {}", entry.rating, mood_phrase(entry.rating));
    let mut items = vec![
        ("ID", id.as_str()),
        ("Date", date.as_str()),
        ("Time", entry.time.as_str()),
        ("Mood", mood.as_str()),
        ("Label", entry.label.as_str()),
    ];
    if entry.important {
        items.push(("Important", "yes"));
    }
    receipt(ui_ctx, title, &items)
}

fn entry_not_found(id: EntryId) -> anyhow::Error {
    CliError::not_found(
        format!("No entry with id {}", id),
        "Hint: Run `moodlog list` to find entry IDs.",
    )
    .into()
}
