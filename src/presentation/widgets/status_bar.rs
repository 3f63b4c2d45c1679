use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::status_bar::StatusBar;

const HINT: &str = "/ search  A archived  q quit";

pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar) -> Self {
        Self { status_bar }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let (text, style) = match self.status_bar.message() {
            Some(message) if self.status_bar.is_error() => {
                (message, Style::default().fg(Color::Red))
            }
            Some(message) => (message, Style::default().fg(Color::Gray)),
            None => (HINT, Style::default().fg(Color::DarkGray).italic()),
        };
        Paragraph::new(text).style(style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status_bar::Message;

    fn render_line(status_bar: &StatusBar) -> (String, Style) {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        StatusBarWidget::new(status_bar).render(area, &mut buffer);
        let line = buffer.content()[..60]
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        (line, buffer[(0, 0)].style())
    }

    #[test]
    fn test_render_hint_without_message() {
        let (line, _) = render_line(&StatusBar::default());
        assert!(line.contains("q quit"));
    }

    #[test]
    fn test_render_committed_action() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::RowActionCommitted {
            action: "Pinned".to_string(),
            name: "Sarah Johnson".to_string(),
        });
        let (line, _) = render_line(&status_bar);
        assert!(line.contains("[Pinned] Sarah Johnson"));
    }

    #[test]
    fn test_render_error_in_red() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::ErrorChanged {
            label: "Camera".to_string(),
            message: "access denied".to_string(),
        });
        let (line, style) = render_line(&status_bar);
        assert!(line.contains("[ERR: Camera] access denied"));
        assert_eq!(style.fg, Some(Color::Red));
    }
}
