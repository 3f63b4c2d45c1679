//! Screen geometry shared by rendering and mouse hit-testing

use ratatui::prelude::*;

use crate::model::chat_list::ChatList;

pub const TOP_BAR_HEIGHT: u16 = 1;
pub const DIVIDER_HEIGHT: u16 = 1;
pub const LARGE_TITLE_HEIGHT: u16 = 3;
pub const SEARCH_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;

/// Lines taken by one row: name line and message line
pub const ROW_HEIGHT: u16 = 2;
/// Columns of the avatar at the start of a row; a tap there opens the preview
pub const AVATAR_WIDTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub top_bar: Rect,
    pub divider: Rect,
    pub large_title: Rect,
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
}

/// What sits under a point of the list area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListHit {
    Row { index: usize, on_avatar: bool },
    Footer,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_BAR_HEIGHT),
                Constraint::Length(DIVIDER_HEIGHT),
                Constraint::Length(LARGE_TITLE_HEIGHT),
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            top_bar: chunks[0],
            divider: chunks[1],
            large_title: chunks[2],
            search: chunks[3],
            list: chunks[4],
            status: chunks[5],
        }
    }

    pub fn from_size(width: u16, height: u16) -> Self {
        Self::new(Rect::new(0, 0, width, height))
    }

    /// Largest scroll offset (logical units) that still fills the list area
    pub fn max_scroll_offset(&self, content_lines: usize, units_per_line: f64) -> f64 {
        let overflow = content_lines.saturating_sub(self.list.height as usize);
        overflow as f64 * units_per_line
    }

    /// Hit-test a terminal cell against the list scrolled to `first_line`
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        first_line: usize,
        row_count: usize,
        has_footer: bool,
    ) -> Option<ListHit> {
        let point = Position::new(column, row);
        if !self.list.contains(point) {
            return None;
        }

        let line = (row - self.list.y) as usize + first_line;
        let index = line / ROW_HEIGHT as usize;
        if index < row_count {
            return Some(ListHit::Row {
                index,
                on_avatar: column < self.list.x + AVATAR_WIDTH,
            });
        }
        let footer_line = row_count * ROW_HEIGHT as usize;
        (has_footer && line == footer_line).then_some(ListHit::Footer)
    }
}

/// Label of the line below the rows: the way into, or back out of, the archive
pub fn list_footer(chat_list: &ChatList) -> Option<String> {
    if chat_list.is_showing_archived() {
        return Some(String::from("‹ Back to Chats"));
    }
    match chat_list.archived_rows().len() {
        0 => None,
        n => Some(format!("Archived ({n})")),
    }
}

/// Total list lines for the current view, footer included
pub fn content_lines(chat_list: &ChatList) -> usize {
    let rows = chat_list.display_rows().len() * ROW_HEIGHT as usize;
    rows + usize::from(list_footer(chat_list).is_some())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{domain::row::Row, model::chat_list::Message};

    #[fixture]
    fn layout() -> ScreenLayout {
        ScreenLayout::from_size(40, 20)
    }

    #[rstest]
    fn test_layout_regions(layout: ScreenLayout) {
        assert_eq!(layout.top_bar, Rect::new(0, 0, 40, 1));
        assert_eq!(layout.large_title, Rect::new(0, 2, 40, 3));
        assert_eq!(layout.list, Rect::new(0, 6, 40, 13));
        assert_eq!(layout.status, Rect::new(0, 19, 40, 1));
    }

    #[rstest]
    #[case(10, 6, 0, Some(ListHit::Row { index: 0, on_avatar: false }))]
    #[case(10, 7, 0, Some(ListHit::Row { index: 0, on_avatar: false }))]
    #[case(2, 8, 0, Some(ListHit::Row { index: 1, on_avatar: true }))]
    #[case(10, 6, 3, Some(ListHit::Row { index: 1, on_avatar: false }))]
    #[case(10, 12, 0, Some(ListHit::Footer))]
    #[case(10, 13, 0, None)]
    #[case(10, 3, 0, None)]
    fn test_hit_test(
        layout: ScreenLayout,
        #[case] column: u16,
        #[case] row: u16,
        #[case] first_line: usize,
        #[case] expected: Option<ListHit>,
    ) {
        assert_eq!(layout.hit_test(column, row, first_line, 3, true), expected);
    }

    #[rstest]
    fn test_no_footer_hit_without_footer(layout: ScreenLayout) {
        assert_eq!(layout.hit_test(10, 12, 0, 3, false), None);
    }

    #[rstest]
    fn test_max_scroll_offset(layout: ScreenLayout) {
        assert_eq!(layout.max_scroll_offset(5, 10.0), 0.0);
        assert_eq!(layout.max_scroll_offset(33, 10.0), 200.0);
    }

    #[test]
    fn test_list_footer() {
        let mut chat_list = ChatList::new(vec![
            Row::new("1", "Mom", Utc::now()),
            Row::new("2", "Book Club", Utc::now()).archived(true),
        ]);
        assert_eq!(list_footer(&chat_list), Some("Archived (1)".to_string()));
        assert_eq!(content_lines(&chat_list), 3);

        chat_list.update(Message::Unarchived("2".into()));
        assert_eq!(list_footer(&chat_list), None);
        assert_eq!(content_lines(&chat_list), 4);

        chat_list.update(Message::ArchivedViewToggled);
        assert_eq!(list_footer(&chat_list), Some("‹ Back to Chats".to_string()));
    }
}
