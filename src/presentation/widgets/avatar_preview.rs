use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};

use crate::domain::row::Row;

const WIDTH: u16 = 32;
const HEIGHT: u16 = 7;

/// Popup showing the avatar and details of one row
pub struct AvatarPreview<'a> {
    row: &'a Row,
    now: DateTime<Local>,
}

impl<'a> AvatarPreview<'a> {
    pub fn new(row: &'a Row, now: DateTime<Local>) -> Self {
        Self { row, now }
    }

    /// Centered popup area inside `area`
    pub fn area(area: Rect) -> Rect {
        let width = WIDTH.min(area.width);
        let height = HEIGHT.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Widget for AvatarPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::area(area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(Line::from(self.row.name.as_str()).bold())
            .title_bottom(Line::from("Esc to close").right_aligned())
            .border_style(Style::default().fg(Color::Cyan));

        let text = vec![
            Line::from(self.row.avatar_label()).bold().centered(),
            Line::from(""),
            Line::from(format!(
                "{} · {}",
                self.row.kind,
                self.row.activity_label(self.now)
            ))
            .style(Style::default().fg(Color::Gray))
            .centered(),
        ];
        Paragraph::new(text).block(block).render(popup, buf);
    }
}
