//! Border glyphs with Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` terminals by drawing rules with plain ASCII.

use ratatui::symbols::line;

/// Which glyph family borders are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII for limited terminals.
    Ascii,
}

/// Border set based on border mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderSet {
    mode: BorderMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: BorderMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> BorderMode {
        self.mode
    }

    /// Glyph for a single horizontal border cell.
    pub fn horizontal(&self) -> &'static str {
        match self.mode {
            BorderMode::Unicode => line::NORMAL.horizontal,
            BorderMode::Ascii => "-",
        }
    }

    /// A horizontal rule exactly `width` cells wide.
    pub fn rule(&self, width: u16) -> String {
        self.horizontal().repeat(usize::from(width))
    }
}
