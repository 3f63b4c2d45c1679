//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use chrono::{DateTime, Local};
use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        layout::ScreenLayout,
        widgets::{
            avatar_preview::AvatarPreview,
            large_title::{LargeTitle, TopBar},
            search_bar::SearchBar,
            status_bar::StatusBarWidget,
        },
    },
};

pub mod chat_list;

pub use chat_list::ChatListComponent;

/// Collection of all components of the chat screen
#[derive(Debug, Default)]
pub struct Components {
    pub chat_list: ChatListComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            chat_list: ChatListComponent::new(),
        }
    }

    pub fn title(state: &AppState) -> &'static str {
        if state.chat_list.is_showing_archived() {
            "Archived"
        } else {
            "Chats"
        }
    }

    /// Render the whole screen
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        self.render_at(frame, state, Local::now());
    }

    pub fn render_at(&mut self, frame: &mut Frame, state: &AppState, now: DateTime<Local>) {
        let area = frame.area();
        let layout = ScreenLayout::new(area);
        let title = Self::title(state);
        let header = state.header_presentation();

        let top_bar = TopBar::new(title, header);
        if let Some(divider) = top_bar.divider(layout.divider.width) {
            frame.render_widget(divider, layout.divider);
        }
        frame.render_widget(top_bar, layout.top_bar);
        frame.render_widget(
            LargeTitle::new(title, header, state.settings.units_per_line),
            layout.large_title,
        );
        frame.render_widget(
            SearchBar::new(state.chat_list.query(), state.ui.searching),
            layout.search,
        );

        self.chat_list.view(state, frame, layout.list, now);

        frame.render_widget(StatusBarWidget::new(&state.status_bar), layout.status);

        if let Some(row) = state.chat_list.preview() {
            frame.render_widget(AvatarPreview::new(row, now), area);
        }
    }
}
