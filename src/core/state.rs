use std::collections::HashMap;

use crate::{
    domain::row::{Row, RowId},
    infrastructure::config::Config,
    model::{
        chat_list::ChatList,
        gesture::{CancelPolicy, RevealVisuals, SwipeGesture, SwipeThresholds},
        header::{HeaderPresentation, HeaderScroll, HeaderThresholds},
        permission::Permission,
        status_bar::StatusBar,
    },
};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub chat_list: ChatList,
    pub header: HeaderScroll,
    /// Live drag sessions; a row without an entry is at rest
    pub gestures: HashMap<RowId, SwipeGesture>,
    pub status_bar: StatusBar,
    pub camera: Permission,
    pub ui: UiState,
    pub system: SystemState,
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub searching: bool,
    /// Row currently under an active drag
    pub dragging: Option<RowId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub width: u16,
    pub height: u16,
    /// Row waiting for camera access before its video call starts
    pub pending_video_call: Option<RowId>,
}

/// Tunables resolved from config once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub swipe: SwipeThresholds,
    pub cancel_policy: CancelPolicy,
    pub header: HeaderThresholds,
    pub units_per_column: f64,
    pub units_per_line: f64,
    pub scroll_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            swipe: config.gesture.thresholds(),
            cancel_policy: config.gesture.cancel_policy,
            header: config.header.thresholds(),
            units_per_column: config.gesture.units_per_column.max(1.0),
            units_per_line: config.header.units_per_line(),
            scroll_step: config.header.scroll_step,
        }
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.chat_list = ChatList::new(rows);
        self
    }

    pub fn header_presentation(&self) -> HeaderPresentation {
        self.header.presentation(&self.settings.header)
    }

    /// Visuals of a row: neutral unless it has a live drag
    pub fn row_visuals(&self, id: &RowId) -> RevealVisuals {
        self.gestures
            .get(id)
            .map(SwipeGesture::visuals)
            .unwrap_or(RevealVisuals::NEUTRAL)
    }

    pub fn new_gesture(&self) -> SwipeGesture {
        SwipeGesture::new(self.settings.swipe, self.settings.cancel_policy)
    }

    /// First list line visible at the current scroll offset
    pub fn first_visible_line(&self) -> usize {
        (self.header.offset() / self.settings.units_per_line).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::header::Message as HeaderMessage;

    #[test]
    fn test_settings_from_default_config() {
        let settings = Settings::default();
        assert_eq!(settings.swipe, SwipeThresholds::default());
        assert_eq!(settings.header, HeaderThresholds::default());
        assert_eq!(settings.cancel_policy, CancelPolicy::Commit);
    }

    #[test]
    fn test_row_visuals_neutral_without_gesture() {
        let state = AppState::default();
        assert!(state.row_visuals(&RowId::new("1")).is_neutral());
    }

    #[test]
    fn test_first_visible_line() {
        let mut state = AppState::default();
        state.header.update(HeaderMessage::ScrolledTo(35.0));
        assert_eq!(state.first_visible_line(), 3);
    }
}
