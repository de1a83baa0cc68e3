//! UI primitives for the moodlog CLI.
//!
//! - **Context**: environment detection (TTY, color) and output mode
//! - **Theme**: badge tokens and owo-colors styling
//! - **Render**: tables, headers, receipts, hints
//! - **Format**: mood phrases, truncation, averages

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, simple_table, Column,
};

pub use format::{format_average, mood_face, mood_phrase, truncate};
