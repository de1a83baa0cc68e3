//! Badges and color styling.

use owo_colors::OwoColorize;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Badge text, with a symbol when unicode is allowed.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[!]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
            (Self::Info, _) => "[i]",
        }
    }

    /// Paint the badge text in its color.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            Self::Ok => text.green().bold().to_string(),
            Self::Warn => text.yellow().bold().to_string(),
            Self::Err => text.red().bold().to_string(),
            Self::Info => text.cyan().to_string(),
        }
    }
}

pub fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Color a rating from red (rough) through yellow to green (great).
pub fn rating(value: u8, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match value {
        0..=4 => text.red().to_string(),
        5..=6 => text.yellow().to_string(),
        _ => text.green().to_string(),
    }
}

pub fn important(text: &str, color: bool) -> String {
    if color {
        text.magenta().bold().to_string()
    } else {
        text.to_string()
    }
}
