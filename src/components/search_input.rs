//! The query box: a single-line text input with cursor editing.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

pub struct SearchInputProps<'a> {
    /// Current query value.
    pub value: &'a str,
    pub placeholder: &'a str,
    /// Matches in the current filtered view, shown in the title.
    pub match_count: usize,
    pub total_count: usize,
}

/// Single-line input emitting `Action::QueryChange` per keystroke.
///
/// Enter is deliberately not handled here; the palette binds it to the
/// primary copy action.
#[derive(Default)]
pub struct SearchInput {
    /// Cursor position (byte index into the value).
    cursor: usize,
    /// Whether the cursor has been placed against a value yet.
    synced: bool,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// First sight of the value puts the cursor at its end (the query may
    /// be pre-filled); afterwards just clamp to the current length.
    fn sync_cursor(&mut self, value: &str) {
        if !self.synced {
            self.cursor = value.len();
            self.synced = true;
        }
        self.cursor = self.cursor.min(value.len());
    }

    /// Terminal column of the cursor; byte index converted to char count.
    fn display_column(&self, value: &str) -> u16 {
        value[..self.cursor].chars().count() as u16
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let before_cursor = &value[..self.cursor];
        let char_start = before_cursor
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        let after_cursor = &value[self.cursor..];
        if let Some((_, c)) = after_cursor.char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl Component for SearchInput {
    type Props<'a> = SearchInputProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        self.sync_cursor(props.value);

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    Vec::new()
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    Vec::new()
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    vec![Action::QueryClear]
                }
                _ => Vec::new(),
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                vec![Action::QueryChange(new_value)]
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| vec![Action::QueryChange(v)])
                .unwrap_or_default(),
            KeyCode::Delete => self
                .delete_char_at(props.value)
                .map(|v| vec![Action::QueryChange(v)])
                .unwrap_or_default(),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                Vec::new()
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                Vec::new()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Vec::new()
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync_cursor(props.value);

        let display_text = if props.value.is_empty() {
            props.placeholder
        } else {
            props.value
        };
        let style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let title = format!(" Search ({}/{}) ", props.match_count, props.total_count);
        let paragraph = Paragraph::new(display_text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);

        // Cursor inside the border.
        let cursor_x = area.x + 1 + self.display_column(props.value);
        let cursor_y = area.y + 1;
        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
