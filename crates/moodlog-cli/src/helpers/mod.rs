//! Input and parsing helper functions for the CLI.
//!
//! - Passphrase prompts and confirmations (`input`)
//! - Date, month, and entry ID parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, env_passphrase, prompt_new_passphrase, prompt_passphrase};
pub use parsing::{parse_day, parse_entry_id, parse_month};
