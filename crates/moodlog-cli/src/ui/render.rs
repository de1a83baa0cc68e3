//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::{OutputMode, UiContext};
use super::theme::{self, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Moodlog · command (context)"
/// Plain mode: "moodlog command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = theme::bold("Moodlog", ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("moodlog {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let painted = kind.paint(kind.display(ctx.unicode), ctx.color);
    if message.is_empty() {
        painted
    } else {
        format!("{} {}", painted, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", theme::dim(&format!("{}:", key), ctx.color), value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", theme::dim("Hint:", ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: badge plus indented key-value pairs
/// Plain mode: `status=ok` plus `key=value` lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table.
///
/// Pretty mode: dim header row, padded columns
/// Plain mode: tab-separated values, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let cell = Cell::new(c.header);
                if ctx.color {
                    cell.add_attribute(Attribute::Dim)
                } else {
                    cell
                }
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&UiContext::plain(), "day", Some("2024-01-05")), "moodlog day");
        assert_eq!(
            header(&UiContext::pretty_uncolored(), "day", Some("2024-01-05")),
            "Moodlog \u{00B7} day (2024-01-05)"
        );
    }

    #[test]
    fn test_kv_plain_normalizes_key() {
        assert_eq!(kv(&UiContext::plain(), "Longest Streak", "4"), "longest_streak=4");
        assert_eq!(kv(&UiContext::pretty_uncolored(), "Longest Streak", "4"), "Longest Streak: 4");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&UiContext::plain(), "Entry added", &[("ID", "42"), ("Date", "2024-01-05")]);
        assert_eq!(out, "status=ok\nid=42\ndate=2024-01-05");
    }

    #[test]
    fn test_simple_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::new("Label")];
        let rows = vec![
            vec!["1".to_string(), "Calm".to_string()],
            vec!["2".to_string(), "Tired".to_string()],
        ];
        assert_eq!(simple_table(&UiContext::plain(), &columns, &rows), "1\tCalm\n2\tTired");
    }

    #[test]
    fn test_simple_table_pretty_has_headers() {
        let columns = [Column::new("ID"), Column::new("Label")];
        let rows = vec![vec!["1".to_string(), "Calm".to_string()]];
        let out = simple_table(&UiContext::pretty_uncolored(), &columns, &rows);
        assert!(out.contains("Label"));
        assert!(out.contains("Calm"));
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&UiContext::plain(), "No entry with id 7", Some("run list"));
        assert_eq!(out, "error=No entry with id 7\nhint=run list");
    }
}
