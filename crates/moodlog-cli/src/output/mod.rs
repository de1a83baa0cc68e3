//! Output formatting helpers for the CLI.
//!
//! Formatting utilities for displaying entries as JSON, tables, or plain text.

mod json;
mod text;

pub use json::{entries_json, entry_json, print_json};
pub use text::print_entry_list;
