//! Header widget.
//!
//! Layout:
//!
//! ```text
//! Title 0.1.0
//!
//! A description truncated to the width...
//! ────────────────────────────────────────
//! ```
//!
//! The version, description and bottom border are all optional. The height
//! is measured once, at construction, and stays fixed afterwards.

use crossterm::event::Event;
use ratatui::text::{Line, Span, Text};

use crate::component::{text_height, Component, Notification};
use crate::text::truncate_to_width;
use crate::theme::{BorderSet, Theme};

/// Header component with a title and optional version, description and border.
#[derive(Debug, Clone)]
pub struct Header {
    title: String,
    version: String,
    show_version: bool,
    description: String,
    show_description: bool,
    show_border: bool,
    width: u16,
    height: u16,
    theme: Theme,
    borders: BorderSet,
}

/// Builder applying header options in call order.
///
/// ```
/// use bubbles_widgets::Header;
///
/// let header = Header::builder("bubbles")
///     .description("a collection of TUI components")
///     .border()
///     .build();
/// assert_eq!(header.title(), "bubbles");
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct HeaderBuilder {
    header: Header,
}

impl HeaderBuilder {
    /// Show a version tag next to the title. Blank versions are ignored.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        if !version.trim().is_empty() {
            self.header.version = version;
            self.header.show_version = true;
        }
        self
    }

    /// Show a description underneath the title. Blank descriptions are ignored.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.trim().is_empty() {
            self.header.description = description;
            self.header.show_description = true;
        }
        self
    }

    /// Underline the header with a border as wide as the header.
    pub fn border(mut self) -> Self {
        self.header.show_border = true;
        self
    }

    /// Use a different color palette.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.header.theme = theme;
        self
    }

    /// Use a different border glyph set.
    pub fn borders(mut self, borders: BorderSet) -> Self {
        self.header.borders = borders;
        self
    }

    /// Finish construction, freezing the header height.
    pub fn build(self) -> Header {
        let mut header = self.header;
        header.height = text_height(&header.view());
        header
    }
}

impl Header {
    /// Create a header showing only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self::builder(title).build()
    }

    /// Start building a header with a title.
    pub fn builder(title: impl Into<String>) -> HeaderBuilder {
        HeaderBuilder {
            header: Self {
                title: title.into(),
                version: String::new(),
                show_version: false,
                description: String::new(),
                show_description: false,
                show_border: false,
                width: 0,
                height: 0,
                theme: Theme::default(),
                borders: BorderSet::default(),
            },
        }
    }

    /// The header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The version tag, if one is shown.
    pub fn version(&self) -> Option<&str> {
        self.show_version.then_some(self.version.as_str())
    }

    /// The full, untruncated description, if one is shown.
    pub fn description(&self) -> Option<&str> {
        self.show_description.then_some(self.description.as_str())
    }

    /// Whether a bottom border is drawn.
    pub fn has_border(&self) -> bool {
        self.show_border
    }
}

impl Component for Header {
    fn resize(&mut self, width: u16, _height: u16) {
        tracing::debug!(width, "header resized");
        self.width = width;
    }

    fn update(&mut self, _event: &Event) -> Option<Notification> {
        None
    }

    fn view(&self) -> Text<'static> {
        let mut title = vec![Span::styled(self.title.clone(), self.theme.heading())];
        if self.show_version {
            title.push(Span::raw(" "));
            title.push(Span::styled(
                self.version.clone(),
                self.theme.heading_muted(),
            ));
        }

        let mut lines = vec![Line::from(title)];

        if self.show_description {
            lines.push(Line::default());
            lines.push(Line::styled(
                truncate_to_width(&self.description, usize::from(self.width)),
                self.theme.faint(),
            ));
        }

        if self.show_border {
            // Before the first resize the rule underlines the content instead
            let rule_width = if self.width == 0 {
                let content = lines.iter().map(Line::width).max().unwrap_or_default();
                u16::try_from(content).unwrap_or(u16::MAX)
            } else {
                self.width
            };
            lines.push(Line::styled(
                self.borders.rule(rule_width),
                self.theme.border(),
            ));
            // Margin below the border
            lines.push(Line::default());
        }

        Text::from(lines)
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}
