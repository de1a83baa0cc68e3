use moodlog_core::storage::StoredFormat;

use crate::app::AppContext;
use crate::cli::MigrateArgs;
use crate::errors::from_core;
use crate::ui::{badge, print, receipt, Badge};

/// Encrypt a plaintext journal in place.
///
/// Opening a legacy file accepts any passphrase; the one given here becomes
/// the journal's passphrase once it is sealed.
pub fn handle_migrate(ctx: &AppContext, args: &MigrateArgs) -> anyhow::Result<()> {
    let mut journal = ctx.open_journal(args.no_input)?;
    let ui_ctx = ctx.ui_context(false);

    match journal.format {
        StoredFormat::Legacy => {
            journal.store.save().map_err(from_core)?;
            tracing::info!(
                path = %journal.path.display(),
                entries = journal.store.entries().len(),
                "legacy journal encrypted"
            );
            if !ctx.quiet() {
                let count = journal.store.entries().len().to_string();
                print(
                    &ui_ctx,
                    &receipt(&ui_ctx, "Journal encrypted", &[("Entries", &count)]),
                );
            }
        }
        StoredFormat::Sealed => {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Journal is already encrypted"));
            }
        }
        StoredFormat::Empty => {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Journal is empty; nothing to migrate"));
            }
        }
    }
    Ok(())
}
