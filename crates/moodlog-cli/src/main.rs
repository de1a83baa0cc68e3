//! Moodlog CLI - a private, encrypted mood journal for the terminal
//!
//! A thin command-line surface over `moodlog-core`: it resolves paths and
//! passphrases, calls into the store and views, and formats the results.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{clear, entries, init, migrate, misc, passwd, views};
use crate::constants::env_vars;
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    setup_logging();
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        let full = err.to_string();
        let (message, hint) = split_hint(&full);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Add(args) => entries::handle_add(ctx, args),
        Commands::Edit(args) => entries::handle_edit(ctx, args),
        Commands::Delete(args) => entries::handle_delete(ctx, args),
        Commands::Day(args) => views::handle_day(ctx, args),
        Commands::List(args) => views::handle_list(ctx, args),
        Commands::Search(args) => views::handle_search(ctx, args),
        Commands::Stats(args) => views::handle_stats(ctx, args),
        Commands::Clear(args) => clear::handle_clear(ctx, args),
        Commands::Passwd(args) => passwd::handle_passwd(ctx, args),
        Commands::Migrate(args) => migrate::handle_migrate(ctx, args),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}

/// Log to stderr, filtered by `MOODLOG_LOG` (default `warn`).
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(env_vars::LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Split a trailing "Hint: ..." paragraph off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    let Some(idx) = error.find("\nHint:").or_else(|| error.find("\nRun:")) else {
        return (error, None);
    };
    let hint = error[idx..].trim().trim_start_matches("Hint:").trim_start();
    (error[..idx].trim_end(), Some(hint))
}
