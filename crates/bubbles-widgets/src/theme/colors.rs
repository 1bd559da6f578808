//! Color palettes and the semantic styles derived from them.
//!
//! Widgets never pick colors directly: they ask the [`Theme`] for a
//! semantic style (heading, faint text, status bar, ...).

use ratatui::style::{Color, Modifier, Style};

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub bar: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Borders
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46), // #1e1e2e
            bar: Color::Rgb(38, 37, 37),  // #262525

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)

            border: Color::Rgb(69, 71, 90), // #45475a
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245), // #eff1f5
            bar: Color::Rgb(220, 224, 232),  // #dce0e8

            text: Color::Rgb(76, 79, 105),     // #4c4f69
            subtext: Color::Rgb(92, 95, 119),  // #5c5f77
            muted: Color::Rgb(140, 143, 161),  // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)
            secondary: Color::Rgb(23, 146, 153), // #179299 (teal)

            border: Color::Rgb(188, 192, 204), // #bcc0cc
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            bar: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            secondary: Color::Magenta,

            border: Color::White,
        }
    }

    /// Level-2 heading, used for the header title and the footer toggle.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Level-4 heading, used for version tags.
    pub fn heading_muted(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Faint body text.
    pub fn faint(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Status bar block: solid background with faint text.
    pub fn bar(&self) -> Style {
        Style::default()
            .fg(self.subtext)
            .bg(self.bar)
            .add_modifier(Modifier::DIM)
    }

    /// Horizontal rules and borders.
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Key label inside the help panel.
    pub fn help_key(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Binding description inside the help panel.
    pub fn help_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Separator between bindings inside the help panel.
    pub fn help_separator(&self) -> Style {
        Style::default()
            .fg(self.subtext)
            .add_modifier(Modifier::DIM)
    }
}
