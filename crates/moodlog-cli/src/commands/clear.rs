use chrono::Local;

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::errors::from_core;
use crate::helpers::{confirm, parse_day};
use crate::ui::{badge, print, receipt, Badge};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let day = match args.day.as_deref() {
        Some(raw) => Some(parse_day(Some(raw), Local::now().date_naive())?),
        None => None,
    };
    let mut journal = ctx.open_journal(args.no_input)?;
    let interactive = ctx.interactive(args.no_input);

    let (removed, scope) = match day {
        Some(date) => {
            let question = format!("Delete every entry on {}?", date);
            if !confirm(&question, args.yes, interactive)? {
                return Err(anyhow::anyhow!("Clear cancelled"));
            }
            let removed = journal.store.clear_day(date).map_err(from_core)?;
            (removed, date.to_string())
        }
        None => {
            let question = format!(
                "Delete all {} entries? This cannot be undone.",
                journal.store.entries().len()
            );
            if !confirm(&question, args.yes, interactive)? {
                return Err(anyhow::anyhow!("Clear cancelled"));
            }
            let removed = journal.store.clear_all().map_err(from_core)?;
            (removed, "all".to_string())
        }
    };

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        if removed == 0 {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Nothing to clear"));
            return Ok(());
        }
        let removed_text = removed.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Entries cleared",
                &[("Scope", &scope), ("Removed", &removed_text)],
            ),
        );
    }
    Ok(())
}
