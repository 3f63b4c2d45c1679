use crate::{
    core::{
        cmd::Cmd,
        msg::{row::RowMsg, system::SystemMsg, ui::UiMsg, Msg},
        state::AppState,
    },
    domain::row::{RowId, RowKind},
    infrastructure::navigation::Route,
    model::{
        chat_list::{Message as ChatListMessage, RowChange},
        gesture::{Message as GestureMessage, SwipeAction},
        permission::Message as PermissionMessage,
        status_bar::Message as StatusBarMessage,
    },
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    let commands = match msg {
        Msg::System(system_msg) => update_system(system_msg, &mut state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state),
        Msg::Row(row_msg) => update_row(row_msg, &mut state),
        Msg::ChatList(chat_list_msg) => state
            .chat_list
            .update(chat_list_msg)
            .and_then(persist)
            .into_iter()
            .collect(),
        Msg::Gesture { id, message } => update_gesture(id, message, &mut state),
        Msg::Header(header_msg) => {
            state.header.update(header_msg);
            vec![]
        }
        Msg::Camera(permission_msg) => update_camera(permission_msg, &mut state),
    };

    (state, commands)
}

fn update_system(msg: SystemMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        SystemMsg::Quit => {
            state.system.should_quit = true;
        }
        SystemMsg::Resize(width, height) => {
            state.system.width = width;
            state.system.height = height;
        }
        SystemMsg::Tick => {}
        SystemMsg::ShowError { label, message } => {
            log::error!("{label}: {message}");
            state
                .status_bar
                .update(StatusBarMessage::ErrorChanged { label, message });
        }
        SystemMsg::ShowInfo { label, message } => {
            state
                .status_bar
                .update(StatusBarMessage::InfoChanged { label, message });
        }
        SystemMsg::ClearStatus => {
            state.status_bar.update(StatusBarMessage::Cleared);
        }
    }
    vec![]
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::SearchStarted => {
            state.ui.searching = true;
        }
        UiMsg::SearchInput(c) => {
            let mut query = state.chat_list.query().to_string();
            query.push(c);
            state.chat_list.update(ChatListMessage::SearchChanged(query));
        }
        UiMsg::SearchBackspace => {
            let mut query = state.chat_list.query().to_string();
            query.pop();
            state.chat_list.update(ChatListMessage::SearchChanged(query));
        }
        UiMsg::SearchFinished => {
            state.ui.searching = false;
        }
        UiMsg::SearchCancelled => {
            state.ui.searching = false;
            state.chat_list.update(ChatListMessage::SearchCleared);
        }
    }
    vec![]
}

fn update_row(msg: RowMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        RowMsg::ActionRequested { id, action } => commit_row_action(state, id, action),
        RowMsg::Opened(id) => {
            let Some(kind) = state.chat_list.row(&id).map(|row| row.kind) else {
                return vec![];
            };
            let mut commands: Vec<Cmd> = state
                .chat_list
                .update(ChatListMessage::MarkedRead(id.clone()))
                .and_then(persist)
                .into_iter()
                .collect();
            let route = match kind {
                RowKind::Chat => Route::ChatDetail { id },
                RowKind::Call => Route::CallDetail { id },
            };
            commands.push(Cmd::Navigate(route));
            commands
        }
        RowMsg::VideoCallRequested(id) => {
            if state.chat_list.row(&id).is_none() {
                return vec![];
            }
            if state.camera.is_granted() {
                return vec![Cmd::Navigate(Route::VideoCall { id })];
            }
            if !state.camera.can_request() {
                // A request is already in flight; the pending call is replaced
                state.system.pending_video_call = Some(id);
                return vec![];
            }
            state.camera.update(PermissionMessage::RequestStarted);
            state.system.pending_video_call = Some(id);
            vec![Cmd::RequestCameraPermission]
        }
        RowMsg::ArchivedViewToggled => {
            state.chat_list.update(ChatListMessage::ArchivedViewToggled);
            if state.chat_list.is_showing_archived() {
                vec![Cmd::Navigate(Route::Archived)]
            } else {
                vec![]
            }
        }
        RowMsg::RowsRequested => vec![Cmd::LoadRows {
            revision: state.chat_list.revision(),
        }],
        RowMsg::RowsFetched { rows, revision } => {
            let current = state.chat_list.revision();
            if revision != current {
                // Commits made while the load was in flight are missing from it
                log::debug!("discarding rows from revision {revision}, now at {current}");
                return vec![Cmd::LoadRows { revision: current }];
            }
            state.chat_list.update(ChatListMessage::RowsLoaded(rows));
            vec![]
        }
    }
}

fn update_camera(msg: PermissionMessage, state: &mut AppState) -> Vec<Cmd> {
    state.camera.update(msg);
    match msg {
        PermissionMessage::Granted => {
            state.status_bar.update(StatusBarMessage::InfoChanged {
                label: "Camera".to_string(),
                message: "access granted".to_string(),
            });
            state
                .system
                .pending_video_call
                .take()
                .filter(|id| state.chat_list.row(id).is_some())
                .map(|id| vec![Cmd::Navigate(Route::VideoCall { id })])
                .unwrap_or_default()
        }
        PermissionMessage::Denied => {
            state.system.pending_video_call = None;
            state.status_bar.update(StatusBarMessage::ErrorChanged {
                label: "Camera".to_string(),
                message: "access denied, press v to ask again".to_string(),
            });
            vec![]
        }
        PermissionMessage::RequestStarted => vec![],
    }
}

fn update_gesture(id: RowId, message: GestureMessage, state: &mut AppState) -> Vec<Cmd> {
    let mut gesture = state
        .gestures
        .remove(&id)
        .unwrap_or_else(|| state.new_gesture());
    let committed = gesture.update(message);

    if gesture.is_active() {
        state.ui.dragging = Some(id.clone());
        state.gestures.insert(id.clone(), gesture);
    } else if state.ui.dragging.as_ref() == Some(&id) {
        // Ended sessions are discarded so the row renders at rest
        state.ui.dragging = None;
    }

    match committed {
        Some(action) => commit_row_action(state, id, action),
        None => vec![],
    }
}

/// Apply a committed action to the list and emit its side effects
///
/// A row that vanished before the commit is a silent no-op.
fn commit_row_action(state: &mut AppState, id: RowId, action: SwipeAction) -> Vec<Cmd> {
    let Some((name, archived)) = state
        .chat_list
        .row(&id)
        .map(|row| (row.name.clone(), row.archived))
    else {
        log::debug!("{action} ignored: row {id} is gone");
        return vec![];
    };

    let message = match action {
        SwipeAction::TogglePin => ChatListMessage::PinToggled(id),
        // Archiving from the archived view brings the row back
        SwipeAction::Archive if archived => ChatListMessage::Unarchived(id),
        SwipeAction::Archive => ChatListMessage::Archived(id),
        SwipeAction::Delete => ChatListMessage::Deleted(id),
    };

    let Some(change) = state.chat_list.update(message) else {
        return vec![];
    };
    let label = match &change {
        RowChange::PinnedSet { pinned: true, .. } => "Pinned",
        RowChange::PinnedSet { pinned: false, .. } => "Unpinned",
        RowChange::ArchivedSet { archived: true, .. } => "Archived",
        RowChange::ArchivedSet { archived: false, .. } => "Unarchived",
        RowChange::Deleted { .. } => "Deleted",
        RowChange::Loaded { .. } | RowChange::Read { .. } => return vec![],
    };

    state.status_bar.update(StatusBarMessage::RowActionCommitted {
        action: label.to_string(),
        name,
    });
    let mut commands = vec![Cmd::Haptic(action.haptic())];
    commands.extend(persist(change));
    commands
}

/// Row source command mirroring a change already applied to the list
fn persist(change: RowChange) -> Option<Cmd> {
    match change {
        RowChange::PinnedSet { id, pinned } => Some(Cmd::SetPinned { id, pinned }),
        RowChange::ArchivedSet { id, archived } => Some(Cmd::SetArchived { id, archived }),
        RowChange::Deleted { id } => Some(Cmd::DeleteRow { id }),
        RowChange::Read { id } => Some(Cmd::MarkRead { id }),
        RowChange::Loaded { .. } => None,
    }
}
