//! Terminal event types delivered by the poller.

use crossterm::event::KeyEvent;

/// Events the UI reacts to. Mouse events are not captured; the palette is
/// keyboard-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}
