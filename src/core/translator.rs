use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{row::RowMsg, system::SystemMsg, ui::UiMsg, Msg},
        state::AppState,
    },
    domain::row::RowId,
    infrastructure::tui::Event,
    model::{
        chat_list::Message as ChatListMessage, gesture::Message as GestureMessage,
        gesture::SwipeAction, header::Message as HeaderMessage,
        selection::Message as SelectionMessage,
    },
    presentation::layout::{list_footer, ListHit, ScreenLayout},
};

/// Translates terminal events into domain messages
/// This function is pure and contains no side effects
pub fn translate_event(event: Event, state: &AppState) -> Vec<Msg> {
    match event {
        Event::Quit => vec![Msg::System(SystemMsg::Quit)],
        Event::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        Event::Tick => vec![Msg::System(SystemMsg::Tick)],
        Event::Error => vec![Msg::System(SystemMsg::ShowError {
            label: "Terminal".to_string(),
            message: "failed to read input".to_string(),
        })],

        // The host took the pointer away: the live drag is cancelled
        Event::FocusLost => cancel_drag(state).into_iter().collect(),

        Event::Key(key) => translate_key_event(key, state),
        Event::Mouse(mouse) => translate_mouse_event(mouse, state),
        Event::Paste(text) if state.ui.searching => text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| Msg::Ui(UiMsg::SearchInput(c)))
            .collect(),

        // Rendering is driven by the runner
        Event::Init | Event::Render | Event::FocusGained | Event::Paste(_) => vec![],
    }
}

fn layout(state: &AppState) -> ScreenLayout {
    ScreenLayout::from_size(state.system.width, state.system.height)
}

/// Logical x of a terminal column
fn logical_x(column: u16, state: &AppState) -> f64 {
    f64::from(column) * state.settings.units_per_column
}

/// Current translation of the row under drag, if any
fn live_drag(state: &AppState) -> Option<(&RowId, f64, f64)> {
    let id = state.ui.dragging.as_ref()?;
    let session = state.gestures.get(id)?.session()?;
    Some((id, session.origin_x, session.translation_x))
}

fn cancel_drag(state: &AppState) -> Option<Msg> {
    let (id, _, translation_x) = live_drag(state)?;
    Some(Msg::Gesture {
        id: id.clone(),
        message: GestureMessage::DragCancelled { translation_x },
    })
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => mouse_down(mouse, state),
        MouseEventKind::Drag(MouseButton::Left) => match live_drag(state) {
            Some((id, origin_x, _)) => vec![Msg::Gesture {
                id: id.clone(),
                message: GestureMessage::DragMoved {
                    translation_x: logical_x(mouse.column, state) - origin_x,
                },
            }],
            None => vec![],
        },
        MouseEventKind::Up(MouseButton::Left) => mouse_up(mouse, state),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let step = state.settings.scroll_step;
            let delta = if mouse.kind == MouseEventKind::ScrollDown {
                step
            } else {
                -step
            };
            // Scrolling takes the gesture over from a live drag
            let mut msgs: Vec<Msg> = cancel_drag(state).into_iter().collect();
            msgs.push(Msg::Header(HeaderMessage::ScrolledBy(delta)));
            msgs
        }
        _ => vec![],
    }
}

fn mouse_down(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    // A press while a drag is live means its release never arrived
    let mut msgs: Vec<Msg> = cancel_drag(state).into_iter().collect();
    msgs.extend(press(mouse, state));
    msgs
}

fn press(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if state.chat_list.preview().is_some() {
        return vec![Msg::ChatList(ChatListMessage::PreviewClosed)];
    }

    let rows = state.chat_list.display_rows();
    let hit = layout(state).hit_test(
        mouse.column,
        mouse.row,
        state.first_visible_line(),
        rows.len(),
        list_footer(&state.chat_list).is_some(),
    );
    match hit {
        Some(ListHit::Row { index, .. }) => match rows.get(index) {
            Some(row) => vec![Msg::Gesture {
                id: row.id.clone(),
                message: GestureMessage::DragStarted {
                    origin_x: logical_x(mouse.column, state),
                },
            }],
            None => vec![],
        },
        Some(ListHit::Footer) => vec![Msg::Row(RowMsg::ArchivedViewToggled)],
        None => vec![],
    }
}

fn mouse_up(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let Some((id, origin_x, _)) = live_drag(state) else {
        return vec![];
    };
    let translation_x = logical_x(mouse.column, state) - origin_x;
    let mut msgs = vec![Msg::Gesture {
        id: id.clone(),
        message: GestureMessage::DragEnded { translation_x },
    }];

    // A release without horizontal movement is a tap
    if translation_x == 0.0 {
        let rows = state.chat_list.display_rows();
        if let Some(index) = rows.iter().position(|row| &row.id == id) {
            msgs.push(Msg::ChatList(ChatListMessage::Selection(
                SelectionMessage::ItemSelected(index),
            )));
            let on_avatar = matches!(
                layout(state).hit_test(
                    mouse.column,
                    mouse.row,
                    state.first_visible_line(),
                    rows.len(),
                    false,
                ),
                Some(ListHit::Row {
                    on_avatar: true,
                    ..
                })
            );
            msgs.push(if on_avatar {
                Msg::ChatList(ChatListMessage::AvatarPressed(id.clone()))
            } else {
                Msg::Row(RowMsg::Opened(id.clone()))
            });
        }
    }
    msgs
}

/// Translates keyboard input to domain messages based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if state.ui.searching {
        translate_search_keys(key)
    } else {
        translate_normal_keys(key, state)
    }
}

/// Key bindings while the search field has focus
fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Ui(UiMsg::SearchCancelled)],
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SearchFinished)],
        KeyCode::Backspace => vec![Msg::Ui(UiMsg::SearchBackspace)],
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![Msg::Ui(UiMsg::SearchInput(c))]
        }
        _ => vec![],
    }
}

fn translate_normal_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let len = state.chat_list.display_rows().len();
    let selected = state.chat_list.selected_row().map(|row| row.id.clone());
    let selection =
        |message: SelectionMessage| vec![Msg::ChatList(ChatListMessage::Selection(message))];
    let on_selected =
        |f: fn(RowId) -> Msg| -> Vec<Msg> { selected.clone().map(f).into_iter().collect() };

    match key.code {
        KeyCode::Char('q') => vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Char('j') | KeyCode::Down => selection(SelectionMessage::NextItemSelected { len }),
        KeyCode::Char('k') | KeyCode::Up => selection(SelectionMessage::PreviousItemSelected),
        KeyCode::Char('g') | KeyCode::Home => {
            selection(SelectionMessage::FirstItemSelected { len })
        }
        KeyCode::Char('G') | KeyCode::End => selection(SelectionMessage::LastItemSelected { len }),
        KeyCode::Enter => on_selected(|id| Msg::Row(RowMsg::Opened(id))),
        KeyCode::Char('a') => on_selected(|id| Msg::ChatList(ChatListMessage::AvatarPressed(id))),
        KeyCode::Char('p') => on_selected(|id| row_action(id, SwipeAction::TogglePin)),
        KeyCode::Char('e') => on_selected(|id| row_action(id, SwipeAction::Archive)),
        KeyCode::Char('d') => on_selected(|id| row_action(id, SwipeAction::Delete)),
        KeyCode::Char('u') => on_selected(|id| Msg::ChatList(ChatListMessage::MarkedRead(id))),
        KeyCode::Char('v') => on_selected(|id| Msg::Row(RowMsg::VideoCallRequested(id))),
        KeyCode::Char('/') => vec![Msg::Ui(UiMsg::SearchStarted)],
        KeyCode::Char('A') => vec![Msg::Row(RowMsg::ArchivedViewToggled)],
        KeyCode::Char('r') => vec![Msg::Row(RowMsg::RowsRequested)],
        KeyCode::Esc => {
            if state.chat_list.preview().is_some() {
                vec![Msg::ChatList(ChatListMessage::PreviewClosed)]
            } else if state.chat_list.is_searching() {
                vec![Msg::Ui(UiMsg::SearchCancelled)]
            } else {
                selection(SelectionMessage::SelectionCleared)
            }
        }
        _ => vec![],
    }
}

fn row_action(id: RowId, action: SwipeAction) -> Msg {
    Msg::Row(RowMsg::ActionRequested { id, action })
}
