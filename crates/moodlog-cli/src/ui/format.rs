//! String formatting utilities for UI rendering.

/// One-line description of a 0-10 rating.
pub fn mood_phrase(rating: u8) -> &'static str {
    match rating {
        0..=2 => "Really rough day.",
        3..=4 => "Kinda low energy / not great.",
        5..=6 => "Mixed or neutral vibes.",
        7..=8 => "Pretty decent overall.",
        _ => "Really good mood today.",
    }
}

/// Face for a rating; ASCII fallback when unicode is off.
pub fn mood_face(rating: u8, unicode: bool) -> &'static str {
    match (rating, unicode) {
        (0..=2, true) => "\u{1F62B}",
        (3..=4, true) => "\u{1F615}",
        (5..=6, true) => "\u{1F610}",
        (7..=8, true) => "\u{1F642}",
        (_, true) => "\u{1F929}",
        (0..=2, false) => ":'(",
        (3..=4, false) => ":/",
        (5..=6, false) => ":|",
        (7..=8, false) => ":)",
        (_, false) => ":D",
    }
}

/// Format a monthly average with one decimal, or a dash when there is none.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.1}", value),
        None => "-".to_string(),
    }
}

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}
