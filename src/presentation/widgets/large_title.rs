use ratatui::{prelude::*, widgets::*};

use crate::{model::header::HeaderPresentation, presentation::widgets::fade::faded};

/// Large screen title that fades and rises as the list scrolls
#[derive(Clone, Debug)]
pub struct LargeTitle<'a> {
    title: &'a str,
    presentation: HeaderPresentation,
    units_per_line: f64,
}

impl<'a> LargeTitle<'a> {
    pub fn new(title: &'a str, presentation: HeaderPresentation, units_per_line: f64) -> Self {
        Self {
            title,
            presentation,
            units_per_line: units_per_line.max(f64::EPSILON),
        }
    }

    /// Lines the title moved up from its resting line (the bottom of its area)
    pub fn rise(&self) -> u16 {
        (self.presentation.title_translate_y / self.units_per_line).round() as u16
    }
}

impl Widget for LargeTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let Some(style) = faded(Color::White, self.presentation.title_opacity) else {
            return;
        };
        let y = area.bottom() - 1 - self.rise().min(area.height - 1);
        let line_area = Rect {
            y,
            height: 1,
            ..area
        };
        Paragraph::new(self.title)
            .style(style.add_modifier(Modifier::BOLD))
            .render(line_area, buf);
    }
}

/// Compact title bar; its title fades in as the large title fades out
#[derive(Clone, Debug)]
pub struct TopBar<'a> {
    title: &'a str,
    presentation: HeaderPresentation,
}

impl<'a> TopBar<'a> {
    pub fn new(title: &'a str, presentation: HeaderPresentation) -> Self {
        Self {
            title,
            presentation,
        }
    }

    /// Divider line drawn under the bar once the large title is gone
    pub fn divider(&self, width: u16) -> Option<Paragraph<'static>> {
        self.presentation.show_divider.then(|| {
            Paragraph::new("─".repeat(width as usize)).style(Style::default().fg(Color::DarkGray))
        })
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(style) = faded(Color::White, self.presentation.compact_title_opacity) {
            Paragraph::new(self.title)
                .style(style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }
}
