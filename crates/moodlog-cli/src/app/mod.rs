//! Application-level utilities for the moodlog CLI.
//!
//! - Path resolution for config and journal files
//! - Passphrase handling with retry logic
//! - A per-invocation context bundling both

mod context;
mod passphrase;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
