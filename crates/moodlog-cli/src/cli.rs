use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use moodlog_core::VERSION;

/// Moodlog - a private, encrypted mood journal for the terminal
#[derive(Parser)]
#[command(name = "moodlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "MOODLOG_PATH")]
    pub file: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Mood rating from 0 (rough) to 10 (great)
    #[arg(short, long, value_name = "0-10")]
    pub rating: u8,

    /// Short label for the mood
    #[arg(short, long, default_value = "Meh")]
    pub label: String,

    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Flag the entry as important
    #[arg(short, long)]
    pub important: bool,

    /// Calendar day (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New mood rating (0-10)
    #[arg(short, long, value_name = "0-10")]
    pub rating: Option<u8>,

    /// New label
    #[arg(short, long)]
    pub label: Option<String>,

    /// New note (pass an empty string to clear it)
    #[arg(short, long)]
    pub note: Option<String>,

    /// Move the entry to another day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Flag the entry as important
    #[arg(long, conflicts_with = "not_important")]
    pub important: bool,

    /// Remove the important flag
    #[arg(long)]
    pub not_important: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `day` command
#[derive(Args)]
pub struct DayArgs {
    /// Calendar day (YYYY-MM-DD, defaults to today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show one month (YYYY-MM)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Only show important entries
    #[arg(long)]
    pub important: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in notes, labels, and dates
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Month to summarize (YYYY-MM, defaults to the current month)
    #[arg(long, value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `clear` command
#[derive(Args)]
#[command(group(ArgGroup::new("scope").required(true).args(["all", "day"])))]
pub struct ClearArgs {
    /// Remove every entry in the journal
    #[arg(long)]
    pub all: bool,

    /// Remove every entry on one day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub day: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `passwd` command
#[derive(Args)]
pub struct PasswdArgs {
    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `migrate` command
#[derive(Args)]
pub struct MigrateArgs {
    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new encrypted journal
    Init(InitArgs),

    /// Log a mood entry
    Add(AddArgs),

    /// Change an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Show the entries for one day
    Day(DayArgs),

    /// List entries, newest day first
    List(ListArgs),

    /// Search notes, labels, and dates
    Search(SearchArgs),

    /// Monthly average and logging streaks
    Stats(StatsArgs),

    /// Remove a day's entries or the whole journal
    Clear(ClearArgs),

    /// Change the journal passphrase
    Passwd(PasswdArgs),

    /// Re-encrypt a plaintext journal written by older versions
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_clear_requires_scope() {
        let result = Cli::try_parse_from(["moodlog", "clear"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from(["moodlog", "clear", "--all", "--day", "2024-01-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_defaults_label() {
        let cli = Cli::try_parse_from(["moodlog", "add", "--rating", "7"]).unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.rating, 7);
                assert_eq!(args.label, "Meh");
                assert!(!args.important);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_edit_important_flags_conflict() {
        let result = Cli::try_parse_from([
            "moodlog",
            "edit",
            "1",
            "--important",
            "--not-important",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_file_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["moodlog", "list", "--file", "/tmp/j.json"]).unwrap();
        assert_eq!(cli.file.as_deref(), Some("/tmp/j.json"));
    }
}
