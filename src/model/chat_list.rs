//! Row collection of the chat list screen
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through the `update` function
//! - All state transitions are explicitly defined as `Message` variants
//!
//! Rows keep insertion order. Display order is derived: pinned rows first,
//! then the rest, each group in insertion order, after search filtering.

use crate::{
    domain::row::{Row, RowId},
    model::selection::{Message as SelectionMessage, Selection},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    RowsLoaded(Vec<Row>),
    PinToggled(RowId),
    Archived(RowId),
    Unarchived(RowId),
    Deleted(RowId),
    MarkedRead(RowId),
    SearchChanged(String),
    SearchCleared,
    /// Switch between the main list and the archived rows
    ArchivedViewToggled,
    AvatarPressed(RowId),
    PreviewClosed,
    Selection(SelectionMessage),
}

/// What a message changed in the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowChange {
    Loaded { count: usize },
    PinnedSet { id: RowId, pinned: bool },
    ArchivedSet { id: RowId, archived: bool },
    Deleted { id: RowId },
    Read { id: RowId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatList {
    rows: Vec<Row>,
    query: String,
    showing_archived: bool,
    preview: Option<RowId>,
    selection: Selection,
    /// Bumped by every change that has to reach the row source
    revision: u64,
}

impl ChatList {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// All rows in insertion order, archived ones included
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| &row.id == id)
    }

    fn row_mut(&mut self, id: &RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| &row.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_showing_archived(&self) -> bool {
        self.showing_archived
    }

    pub fn preview(&self) -> Option<&Row> {
        self.preview.as_ref().and_then(|id| self.row(id))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of local mutations so far; a load issued at an older revision
    /// misses some of them
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Rows in display order for the current view and search query
    pub fn display_rows(&self) -> Vec<&Row> {
        let visible = self
            .rows
            .iter()
            .filter(|row| row.archived == self.showing_archived)
            .filter(|row| row.matches(&self.query));

        let (pinned, others): (Vec<&Row>, Vec<&Row>) = visible.partition(|row| row.pinned);
        pinned.into_iter().chain(others).collect()
    }

    /// Archived rows in insertion order
    pub fn archived_rows(&self) -> Vec<&Row> {
        self.rows.iter().filter(|row| row.archived).collect()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        let index = self.selection.selected_index()?;
        self.display_rows().get(index).copied()
    }

    fn clamp_selection(&mut self) {
        let len = self.display_rows().len();
        self.selection.update(SelectionMessage::ListResized { len });
    }

    /// Update the collection based on a message
    ///
    /// Returns what changed. Messages naming an unknown row are silent no-ops,
    /// which covers a delete racing a pending gesture commit.
    pub fn update(&mut self, message: Message) -> Option<RowChange> {
        let change = match message {
            Message::RowsLoaded(rows) => {
                let count = rows.len();
                self.rows = rows;
                if self.preview().is_none() {
                    self.preview = None;
                }
                Some(RowChange::Loaded { count })
            }
            Message::PinToggled(id) => match self.row_mut(&id) {
                Some(row) => {
                    row.pinned = !row.pinned;
                    Some(RowChange::PinnedSet {
                        pinned: row.pinned,
                        id,
                    })
                }
                None => unknown_row(&id),
            },
            Message::Archived(id) => self.set_archived(id, true),
            Message::Unarchived(id) => self.set_archived(id, false),
            Message::Deleted(id) => {
                match self.rows.iter().position(|row| row.id == id) {
                    Some(index) => {
                        self.rows.remove(index);
                        if self.preview.as_ref() == Some(&id) {
                            self.preview = None;
                        }
                        Some(RowChange::Deleted { id })
                    }
                    None => unknown_row(&id),
                }
            }
            Message::MarkedRead(id) => match self.row_mut(&id) {
                Some(row) if row.unread_count > 0 => {
                    row.unread_count = 0;
                    Some(RowChange::Read { id })
                }
                Some(_) => None,
                None => unknown_row(&id),
            },
            Message::SearchChanged(query) => {
                self.query = query;
                None
            }
            Message::SearchCleared => {
                self.query.clear();
                None
            }
            Message::ArchivedViewToggled => {
                self.showing_archived = !self.showing_archived;
                self.selection.update(SelectionMessage::SelectionCleared);
                None
            }
            Message::AvatarPressed(id) => {
                if self.row(&id).is_some() {
                    self.preview = Some(id);
                }
                None
            }
            Message::PreviewClosed => {
                self.preview = None;
                None
            }
            Message::Selection(selection_message) => {
                self.selection.update(selection_message);
                None
            }
        };

        self.clamp_selection();
        if matches!(&change, Some(c) if !matches!(c, RowChange::Loaded { .. })) {
            self.revision += 1;
        }
        change
    }

    fn set_archived(&mut self, id: RowId, archived: bool) -> Option<RowChange> {
        match self.row_mut(&id) {
            // Already in the requested state: duplicate invocations do nothing
            Some(row) if row.archived != archived => {
                row.archived = archived;
                Some(RowChange::ArchivedSet { id, archived })
            }
            Some(_) => None,
            None => unknown_row(&id),
        }
    }
}

fn unknown_row(id: &RowId) -> Option<RowChange> {
    log::debug!("row {id} not found");
    None
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn row(id: &str, name: &str) -> Row {
        Row::new(id, name, Utc::now())
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|row| row.id.to_string()).collect()
    }

    #[fixture]
    fn chat_list() -> ChatList {
        ChatList::new(vec![
            row("a", "Alice").pinned(true),
            row("b", "Bob").with_last_message("no message"),
            row("c", "Carol").pinned(true),
            row("d", "Sarah Johnson").with_last_message("Lunch?"),
        ])
    }

    #[rstest]
    fn test_pinned_rows_come_first(chat_list: ChatList) {
        assert_eq!(ids(&chat_list.display_rows()), vec!["a", "c", "b", "d"]);
    }

    #[rstest]
    fn test_search_filters_name_and_message(mut chat_list: ChatList) {
        chat_list.update(Message::SearchChanged("sar".to_string()));
        assert_eq!(ids(&chat_list.display_rows()), vec!["d"]);

        chat_list.update(Message::SearchChanged("LUNCH".to_string()));
        assert_eq!(ids(&chat_list.display_rows()), vec!["d"]);

        chat_list.update(Message::SearchCleared);
        assert_eq!(chat_list.display_rows().len(), 4);
    }

    #[rstest]
    fn test_pin_toggle_twice_restores_state(mut chat_list: ChatList) {
        let id = RowId::new("b");
        assert_eq!(
            chat_list.update(Message::PinToggled(id.clone())),
            Some(RowChange::PinnedSet {
                id: id.clone(),
                pinned: true
            })
        );
        assert_eq!(ids(&chat_list.display_rows()), vec!["a", "b", "c", "d"]);

        chat_list.update(Message::PinToggled(id.clone()));
        assert_eq!(chat_list.row(&id).map(|row| row.pinned), Some(false));
        assert_eq!(ids(&chat_list.display_rows()), vec!["a", "c", "b", "d"]);
    }

    #[rstest]
    fn test_archive_is_idempotent(mut chat_list: ChatList) {
        let id = RowId::new("d");
        assert_eq!(
            chat_list.update(Message::Archived(id.clone())),
            Some(RowChange::ArchivedSet {
                id: id.clone(),
                archived: true
            })
        );
        assert_eq!(chat_list.update(Message::Archived(id.clone())), None);
        assert_eq!(ids(&chat_list.display_rows()), vec!["a", "c", "b"]);
        assert_eq!(ids(&chat_list.archived_rows()), vec!["d"]);

        chat_list.update(Message::ArchivedViewToggled);
        assert_eq!(ids(&chat_list.display_rows()), vec!["d"]);

        chat_list.update(Message::Unarchived(id));
        assert!(chat_list.display_rows().is_empty());
    }

    #[rstest]
    fn test_delete_removes_row(mut chat_list: ChatList) {
        let id = RowId::new("c");
        assert_eq!(
            chat_list.update(Message::Deleted(id.clone())),
            Some(RowChange::Deleted { id: id.clone() })
        );
        assert_eq!(chat_list.row(&id), None);
        assert_eq!(chat_list.rows().len(), 3);

        // Deleting again is a silent no-op
        assert_eq!(chat_list.update(Message::Deleted(id)), None);
        assert_eq!(chat_list.rows().len(), 3);
    }

    #[rstest]
    fn test_unknown_row_is_noop(mut chat_list: ChatList) {
        let before = chat_list.clone();
        let missing = RowId::new("zzz");
        assert_eq!(chat_list.update(Message::PinToggled(missing.clone())), None);
        assert_eq!(chat_list.update(Message::Archived(missing.clone())), None);
        assert_eq!(chat_list.update(Message::MarkedRead(missing.clone())), None);
        chat_list.update(Message::AvatarPressed(missing));
        assert_eq!(chat_list, before);
    }

    #[rstest]
    fn test_preview_cleared_when_row_deleted(mut chat_list: ChatList) {
        let id = RowId::new("d");
        chat_list.update(Message::AvatarPressed(id.clone()));
        assert_eq!(chat_list.preview().map(|row| row.name.as_str()), Some("Sarah Johnson"));

        chat_list.update(Message::Deleted(id));
        assert_eq!(chat_list.preview(), None);
    }

    #[rstest]
    fn test_selection_follows_display_order(mut chat_list: ChatList) {
        chat_list.update(Message::Selection(SelectionMessage::ItemSelected(1)));
        assert_eq!(
            chat_list.selected_row().map(|row| row.id.to_string()),
            Some("c".to_string())
        );

        chat_list.update(Message::Selection(SelectionMessage::LastItemSelected {
            len: 4,
        }));
        chat_list.update(Message::Deleted(RowId::new("d")));
        assert_eq!(chat_list.selection().selected_index(), Some(2));
    }

    #[test]
    fn test_mark_read() {
        let mut chat_list = ChatList::new(vec![row("a", "Alice").with_unread_count(3)]);
        let id = RowId::new("a");
        assert_eq!(
            chat_list.update(Message::MarkedRead(id.clone())),
            Some(RowChange::Read { id: id.clone() })
        );
        assert_eq!(chat_list.row(&id).map(|row| row.unread_count), Some(0));
        assert_eq!(chat_list.update(Message::MarkedRead(id)), None);
    }

    #[rstest]
    fn test_revision_counts_persisted_changes(mut chat_list: ChatList) {
        let id = chat_list.rows()[0].id.clone();
        chat_list.update(Message::SearchChanged("a".to_string()));
        chat_list.update(Message::PinToggled(RowId::new("404")));
        assert_eq!(chat_list.revision(), 0);

        chat_list.update(Message::PinToggled(id.clone()));
        chat_list.update(Message::Archived(id.clone()));
        chat_list.update(Message::Archived(id.clone()));
        assert_eq!(chat_list.revision(), 2);

        chat_list.update(Message::RowsLoaded(vec![row("x", "Xavier")]));
        assert_eq!(chat_list.revision(), 2);
    }

    #[test]
    fn test_rows_loaded_replaces_collection() {
        let mut chat_list = ChatList::default();
        assert_eq!(
            chat_list.update(Message::RowsLoaded(vec![row("x", "Xavier")])),
            Some(RowChange::Loaded { count: 1 })
        );
        assert_eq!(ids(&chat_list.display_rows()), vec!["x"]);
    }
}
