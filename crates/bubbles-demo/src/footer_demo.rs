//! Footer demo: a colored fill region above the footer.
//!
//! `r`, `g`, `b` and `c` repaint the fill and update the status message;
//! `?` toggles the help panel, shrinking or growing the fill.

use bubbles_widgets::{Component, Footer, KeyBinding, Notification, Theme};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::terminal::{is_interrupt, DemoApp};

/// Background painted above the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Red,
    Green,
    Blue,
    Clear,
}

impl Fill {
    fn color(self) -> Option<Color> {
        match self {
            Self::Red => Some(Color::Rgb(204, 41, 54)),   // #cc2936
            Self::Green => Some(Color::Rgb(103, 141, 88)), // #678d58
            Self::Blue => Some(Color::Rgb(8, 65, 92)),    // #08415c
            Self::Clear => None,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Red => "background :red:",
            Self::Green => "background :green:",
            Self::Blue => "background :blue:",
            Self::Clear => "background :clear:",
        }
    }
}

/// Bindings listed in the footer help panel.
pub fn demo_keymap() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("r", "red"),
        KeyBinding::new("g", "green"),
        KeyBinding::new("b", "blue"),
        KeyBinding::new("c", "clear"),
        KeyBinding::new("ctrl+c", "quit"),
    ]
}

/// State for the footer demo.
#[derive(Debug)]
pub struct FooterDemo {
    footer: Footer,
    fill: Fill,
    height: u16,
    fill_height: u16,
    should_quit: bool,
}

impl FooterDemo {
    pub fn new(theme: Theme) -> Self {
        let mut footer = Footer::new(demo_keymap()).theme(theme);
        footer.message(Fill::Clear.message());

        Self {
            footer,
            fill: Fill::Clear,
            height: 0,
            fill_height: 0,
            should_quit: false,
        }
    }

    fn paint(&mut self, fill: Fill) {
        self.fill = fill;
        self.footer.message(fill.message());
    }

    fn relayout(&mut self) {
        self.fill_height = self.height.saturating_sub(self.footer.height());
        tracing::debug!(fill_height = self.fill_height, "footer demo relayout");
    }
}

impl DemoApp for FooterDemo {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Resize(width, height) => {
                self.height = *height;
                self.footer.resize(*width, *height);
                self.relayout();
            }
            Event::Key(key) if is_interrupt(key) => self.should_quit = true,
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('r') => self.paint(Fill::Red),
                KeyCode::Char('g') => self.paint(Fill::Green),
                KeyCode::Char('b') => self.paint(Fill::Blue),
                KeyCode::Char('c') => self.paint(Fill::Clear),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            _ => {}
        }

        if let Some(Notification::Resized) = self.footer.update(event) {
            self.relayout();
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.fill_height),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let mut fill = Style::default();
        if let Some(color) = self.fill.color() {
            fill = fill.bg(color);
        }
        frame.render_widget(Block::default().style(fill), chunks[0]);
        frame.render_widget(Paragraph::new(self.footer.view()), chunks[1]);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
