//! UI context for environment detection and output mode routing.

use std::io::IsTerminal;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Plain `key=value` text, stable for scripts and pipes
    #[default]
    Plain,
    /// Tables and color (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode.
    ///
    /// `--json` always wins; otherwise pretty output needs a TTY that is not
    /// `TERM=dumb`.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            Self::Json
        } else if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols (faces, check marks) are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from the environment and CLI flags.
    ///
    /// Color is off for `--no-color`, `NO_COLOR`, `TERM=dumb`, or a non-TTY stdout.
    pub fn from_env(json_flag: bool, no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !term_is_dumb,
            mode: OutputMode::resolve(json_flag, is_tty, term_is_dumb),
        }
    }

    /// A colorless plain-text context.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    /// A pretty context without escape codes, for snapshot-style assertions.
    #[cfg(test)]
    pub fn pretty_uncolored() -> Self {
        Self {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }
}
