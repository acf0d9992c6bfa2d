//! Read-only preview of the selected record's snippet and derived strings.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::Component;
use crate::catalog::ComponentRecord;
use crate::event::EventKind;

pub struct SnippetPreviewProps {
    pub record: Option<&'static ComponentRecord>,
}

#[derive(Default)]
pub struct SnippetPreview;

impl Component for SnippetPreview {
    type Props<'a> = SnippetPreviewProps;

    fn handle_event(&mut self, _event: &EventKind, _props: Self::Props<'_>) -> Vec<crate::action::Action> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Snippet ")
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(record) = props.record else {
            let paragraph = Paragraph::new("No component selected")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let dim = Style::default().fg(Color::DarkGray);
        let mut lines: Vec<Line> = record.snippet.lines().map(Line::raw).collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("docs:    ", dim),
            Span::styled(record.docs_url(), Style::default().fg(Color::Blue)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("install: ", dim),
            Span::raw(record.install_command()),
        ]));

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}
