use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        row::{Row, RowKind},
        text::truncate_to_width,
    },
    model::gesture::{Indicator, RevealVisuals},
    presentation::{layout::AVATAR_WIDTH, widgets::fade::faded},
};

/// One chat list row, shifted by its live drag translation
///
/// The column uncovered by the shift shows the reveal icon of the action the
/// drag is heading for.
#[derive(Clone, Debug)]
pub struct ChatRow<'a> {
    row: &'a Row,
    visuals: RevealVisuals,
    units_per_column: f64,
    highlight: bool,
    skip_lines: u16,
    now: DateTime<Local>,
}

impl<'a> ChatRow<'a> {
    pub fn new(row: &'a Row, now: DateTime<Local>) -> Self {
        Self {
            row,
            visuals: RevealVisuals::NEUTRAL,
            units_per_column: 1.0,
            highlight: false,
            skip_lines: 0,
            now,
        }
    }

    pub fn visuals(mut self, visuals: RevealVisuals, units_per_column: f64) -> Self {
        self.visuals = visuals;
        self.units_per_column = units_per_column.max(f64::EPSILON);
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Lines cut off at the top when the row is partially scrolled out
    pub fn skip_lines(mut self, skip_lines: u16) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Horizontal shift in columns; positive moves the row right
    pub fn shift(&self) -> i32 {
        (self.visuals.translation_x / self.units_per_column).round() as i32
    }

    fn avatar_cell(&self) -> String {
        let label = truncate_to_width(&self.row.avatar_label(), AVATAR_WIDTH as usize - 1);
        let padding = (AVATAR_WIDTH as usize).saturating_sub(label.width());
        format!("{label}{}", " ".repeat(padding))
    }

    fn name_line(&self, width: usize) -> Line<'a> {
        let time = self.row.activity_label(self.now);
        let pin = if self.row.pinned { " 📌" } else { "" };
        let available = width
            .saturating_sub(AVATAR_WIDTH as usize + pin.width() + time.width() + 1)
            .max(1);
        let name = truncate_to_width(&self.row.name, available);
        let padding = available.saturating_sub(name.width()) + 1;

        let mut name_style = Style::default().fg(Color::White);
        if self.row.unread_count > 0 {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        Line::from(vec![
            Span::raw(self.avatar_cell()),
            Span::styled(name, name_style),
            Span::styled(pin, Style::default().fg(Color::Yellow)),
            Span::raw(" ".repeat(padding)),
            Span::styled(time, Style::default().fg(Color::Gray)),
        ])
    }

    fn message_line(&self, width: usize) -> Line<'a> {
        let badge = match self.row.unread_count {
            0 => String::new(),
            n => format!(" {n} "),
        };
        let prefix = match self.row.kind {
            RowKind::Call => "☎ ",
            RowKind::Chat => "",
        };
        let available = width
            .saturating_sub(AVATAR_WIDTH as usize + prefix.width() + badge.width() + 1)
            .max(1);
        let message = truncate_to_width(&self.row.last_message, available);
        let padding = available.saturating_sub(message.width()) + 1;

        Line::from(vec![
            Span::raw(" ".repeat(AVATAR_WIDTH as usize)),
            Span::styled(prefix, Style::default().fg(Color::Green)),
            Span::styled(message, Style::default().fg(Color::Gray)),
            Span::raw(" ".repeat(padding)),
            Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Blue)),
        ])
    }

    /// Indicator heading the reveal area, with its label and accent color
    fn reveal(&self) -> Option<(Indicator, &'static str, Color)> {
        if self.visuals.translation_x > 0.0 {
            let label = if self.row.pinned { "Unpin" } else { "Pin" };
            return Some((self.visuals.pin, label, Color::Yellow));
        }
        if self.visuals.translation_x < 0.0 {
            let RevealVisuals {
                archive, delete, ..
            } = self.visuals;
            return if archive.opacity >= delete.opacity {
                let label = if self.row.archived {
                    "Unarchive"
                } else {
                    "Archive"
                };
                Some((archive, label, Color::Blue))
            } else {
                Some((delete, "Delete", Color::Red))
            };
        }
        None
    }

    fn render_reveal(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some((indicator, label, color)) = self.reveal() else {
            return;
        };
        let Some(mut style) = faded(color, indicator.opacity) else {
            return;
        };
        if indicator.scale >= 1.0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for ChatRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as i32;
        let shift = self.shift().clamp(-width, width);
        let reveal_width = shift.unsigned_abs() as u16;

        let (content_area, reveal_area, scroll_x) = if shift >= 0 {
            (
                Rect {
                    x: area.x + reveal_width,
                    width: area.width - reveal_width,
                    ..area
                },
                Rect {
                    width: reveal_width,
                    ..area
                },
                0,
            )
        } else {
            (
                Rect {
                    width: area.width - reveal_width,
                    ..area
                },
                Rect {
                    x: area.x + area.width - reveal_width,
                    width: reveal_width,
                    ..area
                },
                reveal_width,
            )
        };

        let mut style = Style::default();
        if self.highlight {
            style = style.bg(Color::DarkGray);
        }
        if self.visuals.row_scale < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }

        let width = area.width as usize;
        let lines = vec![self.name_line(width), self.message_line(width)];
        Paragraph::new(lines)
            .style(style)
            .scroll((self.skip_lines, scroll_x))
            .render(content_area, buf);

        self.render_reveal(reveal_area, buf);
    }
}
