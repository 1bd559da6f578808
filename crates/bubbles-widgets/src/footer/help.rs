//! Compact, single-line help rendering.
//!
//! Format: `r red • g green • ctrl+c quit`

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::keymap::KeyBinding;
use crate::theme::Theme;

/// Separator placed between bindings.
pub const SEPARATOR: &str = " • ";

/// Styles used when rendering short help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpStyles {
    pub key: Style,
    pub description: Style,
    pub separator: Style,
}

impl HelpStyles {
    /// Derive help styles from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            key: theme.help_key(),
            description: theme.help_desc(),
            separator: theme.help_separator(),
        }
    }
}

impl Default for HelpStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Render every enabled binding on one line, in keymap order.
pub fn short_help(bindings: &[KeyBinding], styles: &HelpStyles) -> Line<'static> {
    let mut spans = Vec::new();

    for binding in bindings.iter().filter(|b| b.enabled) {
        if !spans.is_empty() {
            spans.push(Span::styled(SEPARATOR, styles.separator));
        }
        spans.push(Span::styled(binding.key.clone(), styles.key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description.clone(), styles.description));
    }

    Line::from(spans)
}
