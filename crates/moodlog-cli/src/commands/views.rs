//! Read-only commands over the derived views: day, list, search, stats.

use chrono::{Datelike, Local};

use moodlog_core::journal::{
    entries_by_date, entries_on, monthly_summary, search, streaks, DaySummary, SEARCH_LIMIT,
};
use moodlog_core::Entry;

use crate::app::AppContext;
use crate::cli::{DayArgs, ListArgs, SearchArgs, StatsArgs};
use crate::helpers::{parse_day, parse_month};
use crate::output::{entries_json, entry_json, print_entry_list, print_json};
use crate::ui::{blank_line, format_average, header, hint, kv, mood_face, mood_phrase, print};

pub fn handle_day(ctx: &AppContext, args: &DayArgs) -> anyhow::Result<()> {
    let date = parse_day(args.date.as_deref(), Local::now().date_naive())?;
    let journal = ctx.open_journal(args.no_input)?;
    let entries = journal.store.entries();
    let day = entries_on(entries, date);
    let summary = DaySummary::for_date(entries, date);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let latest = summary.as_ref().map(|s| entry_json(s.latest));
        return print_json(&serde_json::json!({
            "date": date,
            "count": day.len(),
            "any_important": summary.as_ref().is_some_and(|s| s.any_important),
            "latest": latest,
            "entries": entries_json(day),
        }));
    }

    let date_text = date.to_string();
    print(&ui_ctx, &header(&ui_ctx, "day", Some(&date_text)));
    match summary {
        Some(summary) => {
            let latest = summary.latest;
            print(
                &ui_ctx,
                &kv(
                    &ui_ctx,
                    "Latest",
                    &format!(
                        "{} {}/10 {}",
                        mood_face(latest.rating, ui_ctx.unicode),
                        latest.rating,
                        mood_phrase(latest.rating)
                    ),
                ),
            );
            print(&ui_ctx, &kv(&ui_ctx, "Entries", &summary.count.to_string()));
            if summary.any_important {
                print(&ui_ctx, &kv(&ui_ctx, "Important", "yes"));
            }
            blank_line(&ui_ctx);
            print_entry_list(&ui_ctx, day, "No entries for this day.");
        }
        None => {
            print(&ui_ctx, &kv(&ui_ctx, "Entries", "0"));
            if ui_ctx.mode.is_pretty() {
                print(&ui_ctx, &hint(&ui_ctx, "moodlog add --rating 7 --label \"Calm\""));
            }
        }
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let month = match args.month.as_deref() {
        Some(raw) => Some(parse_month(Some(raw), Local::now().date_naive())?),
        None => None,
    };
    let journal = ctx.open_journal(args.no_input)?;
    let listed = select_for_list(journal.store.entries(), month, args.important, args.limit);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(listed));
    }

    let context = month.map(|(year, month)| format!("{:04}-{:02}", year, month));
    print(&ui_ctx, &header(&ui_ctx, "list", context.as_deref()));
    print_entry_list(&ui_ctx, listed, "No entries yet.");
    Ok(())
}

/// Entries grouped by day, newest day first and newest first within a day.
fn select_for_list(
    entries: &[Entry],
    month: Option<(i32, u32)>,
    important_only: bool,
    limit: Option<usize>,
) -> Vec<&Entry> {
    entries_by_date(entries)
        .into_iter()
        .rev()
        .filter(|(date, _)| month.map_or(true, |(y, m)| date.year() == y && date.month() == m))
        .flat_map(|(_, day)| day)
        .filter(|entry| !important_only || entry.important)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let journal = ctx.open_journal(args.no_input)?;
    let results = search(journal.store.entries(), &args.query);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        return print_json(&entries_json(results));
    }

    print(&ui_ctx, &header(&ui_ctx, "search", Some(args.query.trim())));
    let capped = results.len() == SEARCH_LIMIT;
    print_entry_list(&ui_ctx, results, "No matches.");
    if capped && ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &hint(
                &ui_ctx,
                &format!("Showing the newest {} matches; narrow the query to see older ones.", SEARCH_LIMIT),
            ),
        );
    }
    Ok(())
}

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let (year, month) = parse_month(args.month.as_deref(), today)?;
    let journal = ctx.open_journal(args.no_input)?;
    let entries = journal.store.entries();

    let summary = monthly_summary(entries, year, month);
    let runs = streaks(entries, today);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "month": format!("{:04}-{:02}", year, month),
            "count": summary.count,
            "average": summary.average,
            "streaks": runs,
            "total_entries": entries.len(),
        }));
    }

    let month_text = format!("{:04}-{:02}", year, month);
    print(&ui_ctx, &header(&ui_ctx, "stats", Some(&month_text)));
    print(&ui_ctx, &kv(&ui_ctx, "Entries", &summary.count.to_string()));
    print(&ui_ctx, &kv(&ui_ctx, "Average", &format_average(summary.average)));
    if let Some(average) = summary.average {
        let rounded = average.round().clamp(0.0, 10.0) as u8;
        print(&ui_ctx, &kv(&ui_ctx, "Mood", mood_phrase(rounded)));
    }
    blank_line(&ui_ctx);
    print(&ui_ctx, &kv(&ui_ctx, "Current Streak", &days(runs.current)));
    print(&ui_ctx, &kv(&ui_ctx, "Longest Streak", &days(runs.longest)));
    Ok(())
}

fn days(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}
