//! The filtered catalog list: title, subtitle, and the tag accessory.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::catalog::ComponentRecord;
use crate::event::EventKind;

pub struct ComponentListProps<'a> {
    /// The current filtered view, in catalog order.
    pub records: &'a [&'static ComponentRecord],
    pub selected: usize,
}

/// Scrollable selection list over the filtered view.
///
/// Up/Down and Ctrl+N/Ctrl+P move the selection; PageUp/PageDown jump by a
/// viewport. Character keys are left to the search input.
#[derive(Default)]
pub struct ComponentList {
    /// Scroll offset for the viewport.
    scroll_offset: usize,
    /// Height of the last rendered viewport, for page jumps.
    viewport_height: usize,
}

impl ComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }

    fn page(&self) -> usize {
        self.viewport_height.max(1)
    }
}

impl Component for ComponentList {
    type Props<'a> = ComponentListProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if props.records.is_empty() {
            return Vec::new();
        }
        let last = props.records.len() - 1;

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        let is_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let target = match key.code {
            KeyCode::Down => Some((props.selected + 1).min(last)),
            KeyCode::Up => Some(props.selected.saturating_sub(1)),
            KeyCode::Char('n') if is_ctrl => Some((props.selected + 1).min(last)),
            KeyCode::Char('p') if is_ctrl => Some(props.selected.saturating_sub(1)),
            KeyCode::PageDown => Some((props.selected + self.page()).min(last)),
            KeyCode::PageUp => Some(props.selected.saturating_sub(self.page())),
            _ => None,
        };

        match target {
            Some(index) if index != props.selected => vec![Action::SelectionSet(index)],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let viewport_height = area.height.saturating_sub(2) as usize;
        self.viewport_height = viewport_height;
        self.ensure_visible(props.selected, viewport_height);

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = props
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let is_selected = i == props.selected;
                let title_style = if is_selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let subtitle_style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let tag_style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Green)
                };

                // Right-align the tag accessory when there is room.
                let tag = record.tag();
                let left = format!("{}  {}", record.title, record.description);
                let pad = inner_width
                    .saturating_sub(left.chars().count() + tag.chars().count())
                    .max(1);

                let line = Line::from(vec![
                    Span::styled(record.title, title_style),
                    Span::styled("  ", subtitle_style),
                    Span::styled(record.description, subtitle_style),
                    Span::styled(" ".repeat(pad), subtitle_style),
                    Span::styled(tag, tag_style),
                ]);
                ListItem::new(line)
            })
            .collect();

        let title = if props.records.is_empty() {
            " Components (no matches) "
        } else {
            " Components "
        };
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        let mut state = ListState::default().with_selected(Some(props.selected));
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);
    }
}
