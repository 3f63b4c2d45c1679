use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::text::{contains_ignore_case, initials};

/// Stable identity of a chat or call row
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    #[default]
    Chat,
    Call,
}

/// A single chat or call list entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    #[serde(default)]
    pub kind: RowKind,
    pub name: String,
    #[serde(default)]
    pub last_message: String,
    pub last_activity: DateTime<Utc>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Row {
    pub fn new(id: impl Into<RowId>, name: impl Into<String>, last_activity: DateTime<Utc>) -> Self {
        Row {
            id: id.into(),
            kind: RowKind::Chat,
            name: name.into(),
            last_message: String::new(),
            last_activity,
            unread_count: 0,
            pinned: false,
            archived: false,
            avatar: None,
        }
    }

    pub fn with_kind(mut self, kind: RowKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_last_message(mut self, last_message: impl Into<String>) -> Self {
        self.last_message = last_message.into();
        self
    }

    pub fn with_unread_count(mut self, unread_count: u32) -> Self {
        self.unread_count = unread_count;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar label; falls back to the name initials when no avatar is set
    pub fn avatar_label(&self) -> String {
        match &self.avatar {
            Some(avatar) if !avatar.trim().is_empty() => avatar.clone(),
            _ => initials(&self.name),
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Whether the row matches a search query on its name or last message
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query) || contains_ignore_case(&self.last_message, query)
    }

    /// Short activity label relative to `now`: time of day for today, weekday within a week, date otherwise
    pub fn activity_label(&self, now: DateTime<Local>) -> String {
        let activity = self.last_activity.with_timezone(&Local);
        let days = now.date_naive().signed_duration_since(activity.date_naive()).num_days();
        match days {
            0 => activity.format("%H:%M").to_string(),
            1 => String::from("Yesterday"),
            2..=6 => activity.format("%A").to_string(),
            _ => activity.format("%Y/%m/%d").to_string(),
        }
    }
}
