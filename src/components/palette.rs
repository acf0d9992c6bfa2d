//! Root component: composes the search box, list, preview, action menu and
//! status bar, and routes keyboard events between them.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use super::{
    ActionMenu, ActionMenuProps, Component, ComponentList, ComponentListProps, SearchInput,
    SearchInputProps, SnippetPreview, SnippetPreviewProps, StatusBar, StatusBarProps,
};
use crate::action::Action;
use crate::catalog::CATALOG;
use crate::event::EventKind;
use crate::state::AppState;

pub struct PaletteProps<'a> {
    pub state: &'a AppState,
}

pub struct Palette {
    search: SearchInput,
    list: ComponentList,
    preview: SnippetPreview,
    menu: ActionMenu,
    status: StatusBar,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        Self {
            search: SearchInput::new(),
            list: ComponentList::new(),
            preview: SnippetPreview,
            menu: ActionMenu::new(),
            status: StatusBar,
        }
    }
}

impl Component for Palette {
    type Props<'a> = PaletteProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        let state = props.state;

        if let EventKind::Resize(width, height) = event {
            return vec![Action::UiTerminalResize(*width, *height)];
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        let is_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global quit, regardless of focus.
        if is_ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            return vec![Action::Quit];
        }

        // The open menu captures everything else.
        if state.menu_open {
            if let Some(record) = state.selected_record() {
                return self.menu.handle_event(event, ActionMenuProps { record });
            }
            return vec![Action::MenuClose];
        }

        match key.code {
            KeyCode::Esc => {
                if state.query.is_empty() {
                    vec![Action::Quit]
                } else {
                    vec![Action::QueryClear]
                }
            }
            // Primary action: copy the selected snippet.
            KeyCode::Enter => state
                .selected_record()
                .map(|record| vec![Action::CopySnippet(record)])
                .unwrap_or_default(),
            KeyCode::Tab => {
                self.menu.reset();
                vec![Action::MenuOpen]
            }
            KeyCode::Char('t') if is_ctrl => state
                .selected_record()
                .map(|record| vec![Action::CopyTag(record)])
                .unwrap_or_default(),
            KeyCode::Char('o') if is_ctrl => state
                .selected_record()
                .map(|record| vec![Action::OpenDocs(record)])
                .unwrap_or_default(),
            KeyCode::Char('i') if is_ctrl => state
                .selected_record()
                .map(|record| vec![Action::CopyInstallCommand(record)])
                .unwrap_or_default(),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                let records = state.filtered();
                self.list.handle_event(
                    event,
                    ComponentListProps {
                        records: &records,
                        selected: state.selected,
                    },
                )
            }
            KeyCode::Char('n') | KeyCode::Char('p') if is_ctrl => {
                let records = state.filtered();
                self.list.handle_event(
                    event,
                    ComponentListProps {
                        records: &records,
                        selected: state.selected,
                    },
                )
            }
            _ => self.search.handle_event(
                event,
                SearchInputProps {
                    value: &state.query,
                    placeholder: "Search SheafUI components...",
                    match_count: state.filtered().len(),
                    total_count: CATALOG.len(),
                },
            ),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let records = state.filtered();

        let [search_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [list_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body_area);

        self.search.render(
            frame,
            search_area,
            SearchInputProps {
                value: &state.query,
                placeholder: "Search SheafUI components...",
                match_count: records.len(),
                total_count: CATALOG.len(),
            },
        );
        self.list.render(
            frame,
            list_area,
            ComponentListProps {
                records: &records,
                selected: state.selected,
            },
        );
        self.preview.render(
            frame,
            preview_area,
            SnippetPreviewProps {
                record: state.selected_record(),
            },
        );
        self.status.render(
            frame,
            status_area,
            StatusBarProps {
                status_message: state.status_message.as_ref(),
            },
        );

        if state.menu_open {
            if let Some(record) = state.selected_record() {
                self.menu.render(frame, body_area, ActionMenuProps { record });
            }
        }
    }
}
