use crate::app::AppContext;
use crate::cli::PasswdArgs;
use crate::constants::env_vars;
use crate::errors::from_core;
use crate::helpers::prompt_new_passphrase;
use crate::ui::{hint, print, receipt};

/// Re-encrypt the journal under a new passphrase.
///
/// The passphrase that unlocks the journal doubles as the "current" one the
/// rotation checks against.
pub fn handle_passwd(ctx: &AppContext, args: &PasswdArgs) -> anyhow::Result<()> {
    let mut journal = ctx.open_journal(args.no_input)?;
    let interactive = ctx.interactive(args.no_input);

    let (new, confirmation) = prompt_new_passphrase(env_vars::NEW_PASSPHRASE, interactive)?;
    journal
        .store
        .rotate_passphrase(&journal.passphrase, &new, &confirmation)
        .map_err(from_core)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        let path = journal.path.display().to_string();
        print(&ui_ctx, &receipt(&ui_ctx, "Passphrase changed", &[("Path", &path)]));
        if ui_ctx.mode.is_pretty() {
            print(
                &ui_ctx,
                &hint(&ui_ctx, "Copies of the journal made before now still open with the old passphrase."),
            );
        }
    }
    Ok(())
}
