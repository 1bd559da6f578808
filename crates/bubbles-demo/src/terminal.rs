//! Terminal setup, teardown and the synchronous demo event loop.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};

/// Poll interval between draws (~60fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// A full-screen demo driven by [`run`].
pub trait DemoApp {
    /// Apply a terminal event to the app state.
    fn handle_event(&mut self, event: &Event);

    /// Draw the current state.
    fn draw(&self, frame: &mut Frame<'_>);

    /// Whether the loop should stop.
    fn should_quit(&self) -> bool;
}

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Whether a key press is Ctrl+C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.code == KeyCode::Char('c')
}

/// Run a demo in the alternate screen until it asks to quit.
pub fn run<A: DemoApp>(app: &mut A) -> io::Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Components start at zero width until the first resize
    let size = terminal.size()?;
    app.handle_event(&Event::Resize(size.width, size.height));

    let result = run_loop(&mut terminal, app);
    terminal.show_cursor()?;
    result
}

fn run_loop<B: Backend, A: DemoApp>(terminal: &mut Terminal<B>, app: &mut A) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            app.handle_event(&event);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
