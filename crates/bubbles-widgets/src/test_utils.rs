//! Test utilities for widget rendering tests.
//!
//! Renders component views into a ratatui [`Buffer`] and converts the buffer
//! back to plain text for assertions and snapshots.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget},
};

use crate::component::Component;

/// Build a plain key press event.
pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Flatten each line of a view into its unstyled content.
pub fn text_to_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed from every row and trailing blank rows are
/// dropped.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    while result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a component at its own width and height and return it as a string.
pub fn render_to_string<C: Component>(component: &C) -> String {
    let area = Rect::new(0, 0, component.width(), component.height());
    let mut buffer = Buffer::empty(area);
    Paragraph::new(component.view()).render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::{Line, Span};

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld");
    }

    #[test]
    fn test_text_to_lines() {
        let text = Text::from(vec![
            Line::from(vec![Span::raw("a"), Span::raw("b")]),
            Line::default(),
        ]);
        assert_eq!(text_to_lines(&text), vec!["ab", ""]);
    }
}
