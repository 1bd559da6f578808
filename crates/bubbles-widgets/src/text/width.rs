//! Text width, truncation and alignment utilities.
//!
//! Everything here measures terminal cells, not bytes or chars, so wide
//! characters (CJK, emoji) are accounted for.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tail appended to truncated text.
pub const TAIL: &str = "...";

/// Get the visual width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Text that already fits is returned unchanged. Otherwise the result is the
/// longest prefix fitting in `max_width - 3` cells followed by [`TAIL`]. When
/// even the tail does not fit, the result is empty.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = visual_width(TAIL);
    if max_width < tail_width {
        return String::new();
    }

    let target_width = max_width - tail_width;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(TAIL);
    result
}

/// Right-pad with spaces to `width` cells. Wider text is left untouched.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(visual_width(s));
    format!("{s}{}", " ".repeat(padding))
}

/// Center text within `width` cells; odd leftover space goes to the right.
pub fn center_in_width(s: &str, width: usize) -> String {
    let short = width.saturating_sub(visual_width(s));
    let left = short / 2;
    let right = short - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}
