//! Bottom line: transient HUD message when present, key hints otherwise.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Component;
use crate::state::StatusMessage;

pub struct StatusBarProps<'a> {
    pub status_message: Option<&'a StatusMessage>,
}

#[derive(Default)]
pub struct StatusBar;

impl Component for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if let Some(msg) = props.status_message {
            let style = if msg.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            frame.render_widget(Paragraph::new(msg.text.as_str()).style(style), area);
            return;
        }

        let key_style = Style::default().fg(Color::Yellow);
        let sep_style = Style::default().fg(Color::DarkGray);
        let hints = [
            ("↑/↓", "select"),
            ("Enter", "copy snippet"),
            ("Tab", "actions"),
            ("^T", "tag"),
            ("^O", "docs"),
            ("^I", "install"),
            ("Esc", "clear/quit"),
        ];

        let mut spans = Vec::new();
        for (key, desc) in hints {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::raw(":"));
            spans.push(Span::raw(desc));
            spans.push(Span::styled(" | ", sep_style));
        }
        if spans.len() >= 3 {
            spans.truncate(spans.len() - 1);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
