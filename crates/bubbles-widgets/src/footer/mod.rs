//! Footer status bar widget with an expandable help panel.
//!
//! Collapsed:
//!
//! ```text
//!   status message                 ? help
//! ```
//!
//! Expanded (after pressing `?`):
//!
//! ```text
//!   status message                 ? hide
//!
//! r red • g green • ctrl+c quit
//! ```
//!
//! Toggling emits [`Notification::Resized`] since the footer height changes.

mod help;
mod keymap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::text::{Line, Span, Text};

use crate::component::{text_height, Component, Notification};
use crate::text::{center_in_width, pad_to_width, truncate_to_width};
use crate::theme::Theme;

pub use help::{short_help, HelpStyles, SEPARATOR};
pub use keymap::KeyBinding;

/// Fixed width of the toggle control, in cells.
pub const TOGGLE_WIDTH: u16 = 8;

/// Key that expands and collapses the help panel.
pub const TOGGLE_KEY: char = '?';

/// Horizontal padding on each side of the status bar message.
const BAR_PADDING: usize = 2;

const LABEL_COLLAPSED: &str = "? help";
const LABEL_EXPANDED: &str = "? hide";

/// Footer component: a status bar plus a toggleable help panel.
#[derive(Debug, Clone)]
pub struct Footer {
    bar_message: String,
    bar_width: u16,
    width: u16,
    expanded: bool,
    keymap: Vec<KeyBinding>,
    help: HelpStyles,
    theme: Theme,
}

impl Footer {
    /// Create a collapsed footer listing `keymap` in its help panel.
    pub fn new(keymap: impl Into<Vec<KeyBinding>>) -> Self {
        let theme = Theme::default();
        Self {
            bar_message: String::new(),
            bar_width: 0,
            width: 0,
            expanded: false,
            keymap: keymap.into(),
            help: HelpStyles::from_theme(&theme),
            theme,
        }
    }

    /// Use a different color palette.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.help = HelpStyles::from_theme(&theme);
        self.theme = theme;
        self
    }

    /// Set the message shown within the status bar.
    pub fn message(&mut self, message: impl Into<String>) {
        self.bar_message = message.into();
    }

    /// The current status bar message.
    pub fn message_text(&self) -> &str {
        &self.bar_message
    }

    /// Whether the help panel is visible.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The bindings listed in the help panel.
    pub fn keymap(&self) -> &[KeyBinding] {
        &self.keymap
    }

    /// Width available to the status bar, next to the toggle control.
    pub fn bar_width(&self) -> u16 {
        self.bar_width
    }

    fn status_bar(&self) -> Span<'static> {
        let bar_width = usize::from(self.bar_width);
        let content = if bar_width < 2 * BAR_PADDING {
            " ".repeat(bar_width)
        } else {
            let message = truncate_to_width(&self.bar_message, bar_width - 2 * BAR_PADDING);
            pad_to_width(&format!("{}{message}", " ".repeat(BAR_PADDING)), bar_width)
        };
        Span::styled(content, self.theme.bar())
    }

    fn toggle(&self) -> Span<'static> {
        let label = if self.expanded {
            LABEL_EXPANDED
        } else {
            LABEL_COLLAPSED
        };
        Span::styled(
            center_in_width(label, usize::from(TOGGLE_WIDTH)),
            self.theme.heading(),
        )
    }
}

fn is_toggle_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.code == KeyCode::Char(TOGGLE_KEY)
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl Component for Footer {
    fn resize(&mut self, width: u16, _height: u16) {
        self.width = width;
        self.bar_width = width.saturating_sub(TOGGLE_WIDTH);
        tracing::debug!(width, bar_width = self.bar_width, "footer resized");
    }

    fn update(&mut self, event: &Event) -> Option<Notification> {
        match event {
            Event::Key(key) if is_toggle_key(key) => {
                self.expanded = !self.expanded;
                tracing::debug!(expanded = self.expanded, "footer help toggled");
                Some(Notification::Resized)
            }
            _ => None,
        }
    }

    fn view(&self) -> Text<'static> {
        let mut lines = vec![Line::from(vec![self.status_bar(), self.toggle()])];

        if self.expanded {
            // Top margin above the help panel
            lines.push(Line::default());
            lines.push(short_help(&self.keymap, &self.help));
        }

        Text::from(lines)
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        text_height(&self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{key, render_to_string, text_to_lines};
    use crate::text::visual_width;
    use insta::assert_snapshot;

    fn rgb_keymap() -> Vec<KeyBinding> {
        vec![KeyBinding::new("r", "red"), KeyBinding::new("g", "green")]
    }

    fn footer_at(width: u16) -> Footer {
        let mut footer = Footer::new(rgb_keymap());
        footer.resize(width, 24);
        footer
    }

    #[test]
    fn test_new_footer_is_collapsed() {
        let footer = Footer::new(rgb_keymap());
        assert!(!footer.is_expanded());
        assert_eq!(footer.message_text(), "");
        assert_eq!(footer.width(), 0);
        assert_eq!(footer.keymap().len(), 2);
    }

    #[test]
    fn test_resize_computes_bar_width() {
        let footer = footer_at(40);
        assert_eq!(footer.width(), 40);
        assert_eq!(footer.bar_width(), 32);
    }

    #[test]
    fn test_resize_narrower_than_toggle() {
        let footer = footer_at(5);
        assert_eq!(footer.bar_width(), 0);
        let lines = text_to_lines(&footer.view());
        assert_eq!(lines[0], " ? help ");
    }

    #[test]
    fn test_collapsed_view_shows_help_label() {
        let footer = footer_at(40);
        let lines = text_to_lines(&footer.view());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("? help"));
        assert_eq!(visual_width(&lines[0]), 40);
    }

    #[test]
    fn test_toggle_expands_and_notifies() {
        let mut footer = footer_at(40);

        let notification = footer.update(&key('?'));
        assert_eq!(notification, Some(Notification::Resized));
        assert!(footer.is_expanded());

        let view = text_to_lines(&footer.view());
        assert!(view[0].contains("? hide"));
        let help = &view[2];
        for label in ["r", "red", "g", "green"] {
            assert!(help.contains(label), "missing {label} in {help:?}");
        }
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut footer = footer_at(40);
        let before = footer.view();

        for c in ['r', 'g', 'h', '/'] {
            assert_eq!(footer.update(&key(c)), None);
        }
        assert_eq!(footer.update(&Event::Resize(10, 10)), None);
        assert_eq!(footer.update(&Event::FocusLost), None);

        assert!(!footer.is_expanded());
        assert_eq!(footer.view(), before);
    }

    #[test]
    fn test_modified_toggle_key_is_ignored() {
        let mut footer = footer_at(40);
        let ctrl = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::CONTROL));
        assert_eq!(footer.update(&ctrl), None);

        // Shift is how '?' is typed on most layouts
        let shift = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert_eq!(footer.update(&shift), Some(Notification::Resized));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut footer = footer_at(40);
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('?'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(footer.update(&release), None);
        assert!(!footer.is_expanded());
    }

    #[test]
    fn test_one_notification_per_toggle() {
        let mut footer = footer_at(40);
        let notifications = (0..5)
            .filter_map(|_| footer.update(&key('?')))
            .count();
        assert_eq!(notifications, 5);
        assert!(footer.is_expanded());
    }

    #[test]
    fn test_even_toggles_restore_view() {
        let mut footer = footer_at(40);
        footer.message("status");
        let original = footer.view();

        for _ in 0..4 {
            footer.update(&key('?'));
        }
        assert!(!footer.is_expanded());
        assert_eq!(footer.view(), original);
    }

    #[test]
    fn test_height_tracks_expansion() {
        let mut footer = footer_at(40);
        let collapsed = footer.height();
        footer.update(&key('?'));
        let expanded = footer.height();

        assert_eq!(collapsed, 1);
        assert_eq!(expanded, 3);
        assert!(collapsed < expanded);
    }

    #[test]
    fn test_message_shown_in_bar() {
        let mut footer = footer_at(40);
        footer.message("background :red:");
        assert_eq!(footer.message_text(), "background :red:");
        let lines = text_to_lines(&footer.view());
        assert!(lines[0].starts_with("  background :red:"));
    }

    #[test]
    fn test_long_message_truncated_to_bar() {
        let mut footer = footer_at(20);
        footer.message("a very long status message indeed");
        let lines = text_to_lines(&footer.view());
        // 12 cell bar: 2 padding + 8 message + 2 padding
        assert!(lines[0].starts_with("  a ver...  "));
        assert_eq!(visual_width(&lines[0]), 20);
    }

    #[test]
    fn test_help_lists_every_binding_when_narrow() {
        let mut footer = Footer::new(vec![
            KeyBinding::new("r", "red"),
            KeyBinding::new("g", "green"),
            KeyBinding::new("b", "blue"),
            KeyBinding::new("c", "clear"),
            KeyBinding::new("ctrl+c", "quit"),
        ]);
        footer.resize(40, 10);
        footer.update(&key('?'));

        let lines = text_to_lines(&footer.view());
        assert_eq!(
            lines[2],
            "r red • g green • b blue • c clear • ctrl+c quit"
        );
    }

    #[test]
    fn test_theme_updates_help_styles() {
        let footer = Footer::new(rgb_keymap()).theme(Theme::latte());
        assert_eq!(footer.help, HelpStyles::from_theme(&Theme::latte()));
    }

    #[test]
    fn test_snapshot_expanded_footer() {
        let mut footer = footer_at(40);
        footer.message("background :clear:");
        footer.update(&key('?'));

        assert_snapshot!(render_to_string(&footer), @r"
          background :clear:             ? hide

        r red • g green
        ");
    }
}
