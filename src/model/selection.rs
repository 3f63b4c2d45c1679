//! Selection state management for the chat list
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through the `update` function
//! - All state transitions are explicitly defined as `Message` variants
//! - The module only knows about indices, not about rows

/// Messages that can be sent to update the selection state
///
/// Following Elm conventions, messages are named in past tense
/// to indicate "what happened" rather than "what to do"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A specific item was selected by index
    ItemSelected(usize),
    /// The selection was cleared (no item selected)
    SelectionCleared,
    /// The previous item in the list was selected
    PreviousItemSelected,
    /// The next item in the list was selected
    NextItemSelected { len: usize },
    /// The first item in the list was selected
    FirstItemSelected { len: usize },
    /// The last item in the list was selected
    LastItemSelected { len: usize },
    /// The list changed length; the selection must stay in bounds
    ListResized { len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected_index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_selected(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ItemSelected(index) => {
                self.selected_index = Some(index);
            }
            Message::SelectionCleared => {
                self.selected_index = None;
            }
            Message::PreviousItemSelected => match self.selected_index {
                Some(index) => {
                    self.selected_index = Some(index.saturating_sub(1));
                }
                None => {
                    self.selected_index = Some(0);
                }
            },
            Message::NextItemSelected { len } => match self.selected_index {
                Some(index) if index + 1 < len => {
                    self.selected_index = Some(index + 1);
                }
                None if len > 0 => {
                    self.selected_index = Some(0);
                }
                _ => {}
            },
            Message::FirstItemSelected { len } => {
                self.selected_index = (len > 0).then_some(0);
            }
            Message::LastItemSelected { len } => {
                self.selected_index = len.checked_sub(1);
            }
            Message::ListResized { len } => {
                self.selected_index = match self.selected_index {
                    Some(_) if len == 0 => None,
                    Some(index) => Some(index.min(len - 1)),
                    None => None,
                };
            }
        }
    }
}
