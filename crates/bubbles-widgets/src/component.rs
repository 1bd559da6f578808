//! The contract shared by every widget in this crate.
//!
//! A host event loop owns its components and drives them synchronously:
//!
//! ```text
//! construct -> resize -> (update -> view)*
//! ```
//!
//! `update` hands back at most one [`Notification`] that the host should act
//! on before the next draw.

use crossterm::event::Event;
use ratatui::text::Text;

/// Follow-up actions a component asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Notification {
    /// The component's rendered height changed; the host should recompute
    /// any layout that depends on it.
    Resized,
}

/// A self-rendering widget driven by a host event loop.
pub trait Component {
    /// Record the dimensions the component may render into.
    fn resize(&mut self, width: u16, height: u16);

    /// React to an input event.
    fn update(&mut self, event: &Event) -> Option<Notification>;

    /// Render the current state as styled text.
    fn view(&self) -> Text<'static>;

    /// Current render width.
    fn width(&self) -> u16;

    /// Number of lines the component occupies.
    fn height(&self) -> u16;
}

/// Line count of a rendered view, clamped to `u16`.
pub(crate) fn text_height(text: &Text<'_>) -> u16 {
    u16::try_from(text.height()).unwrap_or(u16::MAX)
}
