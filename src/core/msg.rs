pub mod row;
pub mod system;
pub mod ui;

use crate::{
    domain::row::RowId,
    model::{
        chat_list::Message as ChatListMessage, gesture::Message as GestureMessage,
        header::Message as HeaderMessage, permission::Message as PermissionMessage,
    },
};
use row::RowMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages processed by the update function
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    System(SystemMsg),
    Ui(UiMsg),
    /// Row intents that are not a raw list mutation (open, keyboard commits, calls)
    Row(RowMsg),
    ChatList(ChatListMessage),
    /// A drag event for the row with this id
    Gesture {
        id: RowId,
        message: GestureMessage,
    },
    Header(HeaderMessage),
    Camera(PermissionMessage),
}

impl Msg {
    /// Messages that fire many times per second; excluded from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system_msg) => system_msg.is_frequent(),
            Msg::Gesture { message, .. } => matches!(message, GestureMessage::DragMoved { .. }),
            Msg::Header(_) => true,
            _ => false,
        }
    }
}
