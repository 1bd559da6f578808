//! Header demo: a bordered header above an empty fill region.

use bubbles_widgets::{Component, Header};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::terminal::{is_interrupt, DemoApp};

/// Description shown when none is given on the command line.
pub const DEFAULT_DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";

/// State for the header demo.
#[derive(Debug)]
pub struct HeaderDemo {
    header: Header,
    should_quit: bool,
}

impl HeaderDemo {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            should_quit: false,
        }
    }
}

impl DemoApp for HeaderDemo {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Resize(width, height) => self.header.resize(*width, *height),
            Event::Key(key) if is_interrupt(key) => self.should_quit = true,
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) =>
            {
                self.should_quit = true;
            }
            _ => {}
        }

        self.header.update(event);
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        // The rest of the screen stays empty below the header
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(self.header.height()), Constraint::Min(0)])
            .split(frame.area());

        frame.render_widget(Paragraph::new(self.header.view()), chunks[0]);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
