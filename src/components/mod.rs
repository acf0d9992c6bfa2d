//! UI components: props in, actions out, render is a pure function of props.
//!
//! Internal UI state (scroll offset, cursor, menu highlight) lives in
//! `&mut self`; data mutations go through actions only.

mod action_menu;
mod component_list;
mod palette;
mod search_input;
mod snippet_preview;
mod status_bar;

pub use action_menu::{ActionMenu, ActionMenuProps};
pub use component_list::{ComponentList, ComponentListProps};
pub use palette::{Palette, PaletteProps};
pub use search_input::{SearchInput, SearchInputProps};
pub use snippet_preview::{SnippetPreview, SnippetPreviewProps};
pub use status_bar::{StatusBar, StatusBarProps};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::action::Action;
use crate::event::EventKind;

/// A UI component that renders from props and emits actions.
pub trait Component {
    /// Read-only data needed for rendering and event handling.
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Render-only
    /// components keep the default.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

/// A rectangle of the given size centered within `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
