//! Chat list component
//!
//! Displays the scrolled rows of the current view and the footer line.

use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::{
        layout::{list_footer, ROW_HEIGHT},
        widgets::chat_row::ChatRow,
    },
};

/// Stateless renderer of the row list
#[derive(Debug, Clone, Default)]
pub struct ChatListComponent;

impl ChatListComponent {
    pub fn new() -> Self {
        Self
    }

    fn empty_text(state: &AppState) -> String {
        if state.chat_list.is_searching() {
            format!("No results for \"{}\"", state.chat_list.query())
        } else if state.chat_list.is_showing_archived() {
            String::from("No archived chats")
        } else {
            String::from("No chats yet")
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, now: DateTime<Local>) {
        let rows = state.chat_list.display_rows();
        let footer = list_footer(&state.chat_list);
        let first_line = state.first_visible_line();
        let selected = state.chat_list.selection().selected_index();

        if rows.is_empty() {
            let empty = Paragraph::new(Self::empty_text(state))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            // Keep the first line free for the footer
            let y = area.y + area.height / 2;
            frame.render_widget(empty, Rect { y, height: 1, ..area }.intersection(area));
        }

        let row_height = ROW_HEIGHT as usize;
        let visible = first_line..first_line + area.height as usize;

        for (index, row) in rows.iter().enumerate() {
            let top = index * row_height;
            let bottom = top + row_height;
            if bottom <= visible.start || top >= visible.end {
                continue;
            }
            let skip = visible.start.saturating_sub(top);
            let y = area.y + top.saturating_sub(visible.start) as u16;
            let height = ((bottom - top - skip) as u16).min(area.bottom() - y);
            let row_area = Rect {
                y,
                height,
                ..area
            };

            let widget = ChatRow::new(row, now)
                .visuals(state.row_visuals(&row.id), state.settings.units_per_column)
                .highlight(selected == Some(index))
                .skip_lines(skip as u16);
            frame.render_widget(widget, row_area);
        }

        let footer_line = rows.len() * row_height;
        if let Some(footer) = footer {
            if visible.contains(&footer_line) {
                let y = area.y + (footer_line - visible.start) as u16;
                let line = Paragraph::new(footer).style(Style::default().fg(Color::Cyan));
                frame.render_widget(line, Rect { y, height: 1, ..area });
            }
        }
    }
}
