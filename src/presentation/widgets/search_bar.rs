use ratatui::{prelude::*, widgets::Paragraph};

/// Search field above the list
pub struct SearchBar<'a> {
    query: &'a str,
    editing: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, editing: bool) -> Self {
        Self { query, editing }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match (self.query.is_empty(), self.editing) {
            (true, false) => Line::styled("⌕ Search", Style::default().fg(Color::DarkGray)),
            (_, editing) => {
                let cursor = if editing { "▏" } else { "" };
                Line::from(vec![
                    Span::styled("⌕ ", Style::default().fg(Color::Gray)),
                    Span::raw(self.query.to_string()),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            }
        };
        Paragraph::new(line).render(area, buf);
    }
}
