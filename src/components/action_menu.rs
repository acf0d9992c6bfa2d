//! Modal menu with the four actions for the selected component.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};
use ratatui::Frame;

use super::{centered_rect, Component};
use crate::action::Action;
use crate::catalog::ComponentRecord;
use crate::event::EventKind;

pub struct ActionMenuProps {
    pub record: &'static ComponentRecord,
}

/// Menu entries, primary action first.
const ENTRIES: [(&str, &str); 4] = [
    ("Copy Snippet", "Enter"),
    ("Copy Component Tag", "^T"),
    ("Open Documentation", "^O"),
    ("Copy Install Command", "^I"),
];

/// Centered modal over the list; highlight is internal UI state.
#[derive(Default)]
pub struct ActionMenu {
    selected: usize,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the highlight when the menu opens.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    fn invoke(&self, record: &'static ComponentRecord) -> Action {
        match self.selected {
            0 => Action::CopySnippet(record),
            1 => Action::CopyTag(record),
            2 => Action::OpenDocs(record),
            _ => Action::CopyInstallCommand(record),
        }
    }
}

impl Component for ActionMenu {
    type Props<'a> = ActionMenuProps;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ENTRIES.len() - 1);
                Vec::new()
            }
            KeyCode::Enter => vec![self.invoke(props.record)],
            KeyCode::Esc | KeyCode::Tab => vec![Action::MenuClose],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let menu_area = centered_rect(40, ENTRIES.len() as u16 + 2, area);
        frame.render_widget(Clear, menu_area);

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, (label, shortcut))| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let width = menu_area.width.saturating_sub(2) as usize;
                let pad = width
                    .saturating_sub(label.chars().count() + shortcut.chars().count() + 2)
                    .max(1);
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::raw(*label),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(*shortcut, Style::default().fg(Color::Yellow)),
                ]);
                ListItem::new(line).style(style)
            })
            .collect();

        let title = format!(" {} ", props.record.title);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, menu_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::testing::{key, RenderHarness};

    fn badge() -> &'static ComponentRecord {
        CATALOG.iter().find(|r| r.name == "badge").unwrap()
    }

    #[test]
    fn test_enter_invokes_highlighted_entry() {
        let mut menu = ActionMenu::new();
        let props = ActionMenuProps { record: badge() };

        let actions = menu.handle_event(&EventKind::Key(key("enter")), props);

        assert_eq!(actions, vec![Action::CopySnippet(badge())]);
    }

    #[test]
    fn test_navigation_reaches_every_entry() {
        let mut menu = ActionMenu::new();

        menu.handle_event(&EventKind::Key(key("down")), ActionMenuProps { record: badge() });
        let actions = menu.handle_event(&EventKind::Key(key("enter")), ActionMenuProps { record: badge() });
        assert_eq!(actions, vec![Action::CopyTag(badge())]);

        menu.handle_event(&EventKind::Key(key("down")), ActionMenuProps { record: badge() });
        let actions = menu.handle_event(&EventKind::Key(key("enter")), ActionMenuProps { record: badge() });
        assert_eq!(actions, vec![Action::OpenDocs(badge())]);

        menu.handle_event(&EventKind::Key(key("down")), ActionMenuProps { record: badge() });
        let actions = menu.handle_event(&EventKind::Key(key("enter")), ActionMenuProps { record: badge() });
        assert_eq!(actions, vec![Action::CopyInstallCommand(badge())]);
    }

    #[test]
    fn test_navigation_clamps_at_last_entry() {
        let mut menu = ActionMenu::new();
        for _ in 0..10 {
            menu.handle_event(&EventKind::Key(key("down")), ActionMenuProps { record: badge() });
        }
        assert_eq!(menu.selected, ENTRIES.len() - 1);
    }

    #[test]
    fn test_esc_closes_menu() {
        let mut menu = ActionMenu::new();

        let actions = menu.handle_event(&EventKind::Key(key("esc")), ActionMenuProps { record: badge() });

        assert_eq!(actions, vec![Action::MenuClose]);
    }

    #[test]
    fn test_reset_returns_highlight_to_top() {
        let mut menu = ActionMenu::new();
        menu.handle_event(&EventKind::Key(key("down")), ActionMenuProps { record: badge() });
        menu.reset();

        let actions = menu.handle_event(&EventKind::Key(key("enter")), ActionMenuProps { record: badge() });

        assert_eq!(actions, vec![Action::CopySnippet(badge())]);
    }

    #[test]
    fn test_render_lists_all_four_actions() {
        let mut harness = RenderHarness::new(60, 10);
        let mut menu = ActionMenu::new();

        let output = harness.render_to_string(|frame| {
            menu.render(frame, frame.area(), ActionMenuProps { record: badge() });
        });

        assert!(output.contains("Copy Snippet"));
        assert!(output.contains("Copy Component Tag"));
        assert!(output.contains("Open Documentation"));
        assert!(output.contains("Copy Install Command"));
        assert!(output.contains("Badge"));
    }
}
