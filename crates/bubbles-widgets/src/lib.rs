//! bubbles-widgets: header and footer bar components for terminal UIs
//!
//! This crate provides two leaf widgets that a host event loop composes into
//! a larger ratatui application:
//! - [`Header`] - Title, optional version, description and bottom border
//! - [`Footer`] - Status bar with a `?` toggle revealing a help panel
//!
//! Both implement [`Component`]: the host resizes them, feeds them events,
//! and places their rendered [`Text`](ratatui::text::Text) in its layout.
//!
//! ```
//! use bubbles_widgets::{Component, Footer, KeyBinding, Notification};
//! use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
//!
//! let mut footer = Footer::new(vec![KeyBinding::new("q", "quit")]);
//! footer.resize(40, 24);
//!
//! let toggle = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
//! assert_eq!(footer.update(&toggle), Some(Notification::Resized));
//! assert_eq!(footer.height(), 3);
//! ```

pub mod component;
pub mod config;
pub mod footer;
pub mod header;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod text;
pub mod theme;

pub use component::{Component, Notification};
pub use config::{ConfigError, ThemeName, UiConfig};
pub use footer::{Footer, KeyBinding};
pub use header::{Header, HeaderBuilder};
pub use theme::{BorderMode, BorderSet, Theme};

/// Get the widgets crate version.
pub fn widgets_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
