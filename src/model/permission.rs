//! Camera permission state for video calls
//!
//! Denial is a UI state of its own: the user has to re-request explicitly.

use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    RequestStarted,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Permission {
    #[default]
    #[strum(to_string = "not determined")]
    NotDetermined,
    #[strum(to_string = "requesting")]
    Requesting,
    #[strum(to_string = "granted")]
    Granted,
    #[strum(to_string = "denied")]
    Denied,
}

impl Permission {
    pub fn is_granted(&self) -> bool {
        matches!(self, Permission::Granted)
    }

    /// Whether a new request may be issued from this state
    pub fn can_request(&self) -> bool {
        matches!(self, Permission::NotDetermined | Permission::Denied)
    }

    pub fn update(&mut self, message: Message) {
        *self = match (*self, message) {
            (Permission::Granted, Message::RequestStarted) => Permission::Granted,
            (_, Message::RequestStarted) => Permission::Requesting,
            (_, Message::Granted) => Permission::Granted,
            (_, Message::Denied) => Permission::Denied,
        };
    }
}
