//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, journal, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong passphrase, too many attempts).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variables read by the CLI.
pub mod env_vars {
    pub const CONFIG: &str = "MOODLOG_CONFIG";
    pub const PASSPHRASE: &str = "MOODLOG_PASSPHRASE";
    pub const NEW_PASSPHRASE: &str = "MOODLOG_NEW_PASSPHRASE";
    pub const LOG: &str = "MOODLOG_LOG";
}

/// Passphrase attempts allowed on an interactive terminal.
pub const MAX_PASSPHRASE_ATTEMPTS: u32 = 3;

/// File name of the journal created by `init` in the data directory.
pub const DEFAULT_JOURNAL_FILE: &str = "journal.json";
