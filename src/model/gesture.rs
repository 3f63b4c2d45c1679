//! Swipe gesture interpretation for a single list row
//!
//! This module follows the Elm Architecture pattern:
//! - State changes only through the `update` function
//! - All state transitions are explicitly defined as `Message` variants
//! - The module is self-contained and doesn't know which row it belongs to
//!
//! A drag session turns a continuous horizontal translation into at most one
//! committed [`SwipeAction`], plus continuous [`RevealVisuals`] while the drag is live.

use serde::Deserialize;
use strum::Display;

use crate::model::interpolate::interpolate;

/// Drag distances (logical units) at which swipe actions commit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Right-drag distance that must be exceeded to toggle pin
    pub pin: f64,
    /// Left-drag distance that must be exceeded to archive
    pub archive: f64,
    /// Left-drag distance at which archive turns into delete
    pub delete: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            pin: 80.0,
            archive: 80.0,
            delete: 160.0,
        }
    }
}

impl SwipeThresholds {
    pub fn is_valid(&self) -> bool {
        self.pin > 0.0 && self.archive > 0.0 && self.archive < self.delete
    }
}

/// How a drag cancelled by the host gesture system is resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Evaluate the final translation exactly like a normal release
    #[default]
    Commit,
    /// Reset visuals without committing anything
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SwipeAction {
    #[strum(to_string = "Pinned")]
    TogglePin,
    #[strum(to_string = "Archived")]
    Archive,
    #[strum(to_string = "Deleted")]
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl SwipeAction {
    pub fn haptic(&self) -> HapticIntensity {
        match self {
            SwipeAction::TogglePin | SwipeAction::Archive => HapticIntensity::Medium,
            SwipeAction::Delete => HapticIntensity::Heavy,
        }
    }
}

/// Resolve a released drag into an action
///
/// Right-swipe is checked before left-swipe and short-left before long-left.
/// Equaling a threshold is not enough to commit; it has to be exceeded.
pub fn resolve_swipe(translation_x: f64, thresholds: &SwipeThresholds) -> Option<SwipeAction> {
    if translation_x > thresholds.pin {
        Some(SwipeAction::TogglePin)
    } else if translation_x < -thresholds.archive && translation_x > -thresholds.delete {
        Some(SwipeAction::Archive)
    } else if translation_x <= -thresholds.delete {
        Some(SwipeAction::Delete)
    } else {
        None
    }
}

/// Opacity and scale of one reveal icon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub opacity: f64,
    pub scale: f64,
}

impl Indicator {
    const HIDDEN: Indicator = Indicator {
        opacity: 0.0,
        scale: 0.5,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Continuous visual feedback derived from the current translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisuals {
    pub translation_x: f64,
    pub row_scale: f64,
    pub pin: Indicator,
    pub archive: Indicator,
    pub delete: Indicator,
}

impl Default for RevealVisuals {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl RevealVisuals {
    pub const NEUTRAL: RevealVisuals = RevealVisuals {
        translation_x: 0.0,
        row_scale: 1.0,
        pin: Indicator::HIDDEN,
        archive: Indicator::HIDDEN,
        delete: Indicator::HIDDEN,
    };

    pub fn for_translation(translation_x: f64, thresholds: &SwipeThresholds) -> Self {
        let right = translation_x.max(0.0);
        let left = (-translation_x).max(0.0);
        let SwipeThresholds {
            pin,
            archive,
            delete,
        } = *thresholds;

        RevealVisuals {
            translation_x,
            row_scale: interpolate(translation_x.abs(), &[0.0, delete], &[1.0, 0.95]),
            pin: Indicator {
                opacity: interpolate(right, &[0.0, pin], &[0.0, 1.0]),
                scale: interpolate(right, &[0.0, pin], &[0.5, 1.0]),
            },
            archive: Indicator {
                opacity: interpolate(left, &[0.0, archive, delete], &[0.0, 1.0, 0.0]),
                scale: interpolate(left, &[0.0, archive], &[0.5, 1.0]),
            },
            delete: Indicator {
                opacity: interpolate(left, &[archive, delete], &[0.0, 1.0]),
                scale: interpolate(left, &[archive, delete], &[0.5, 1.2]),
            },
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// A live drag, from drag start to release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub origin_x: f64,
    pub translation_x: f64,
    pub scale: f64,
}

/// Messages that can be sent to update the gesture state
///
/// Following Elm conventions, messages are named in past tense
/// to indicate "what happened" rather than "what to do"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DragStarted { origin_x: f64 },
    DragMoved { translation_x: f64 },
    DragEnded { translation_x: f64 },
    DragCancelled { translation_x: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeGesture {
    thresholds: SwipeThresholds,
    cancel_policy: CancelPolicy,
    session: Option<GestureSession>,
}

impl SwipeGesture {
    pub fn new(thresholds: SwipeThresholds, cancel_policy: CancelPolicy) -> Self {
        Self {
            thresholds,
            cancel_policy,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn thresholds(&self) -> &SwipeThresholds {
        &self.thresholds
    }

    /// Visual parameters to render the row with right now
    pub fn visuals(&self) -> RevealVisuals {
        match &self.session {
            Some(session) => RevealVisuals::for_translation(session.translation_x, &self.thresholds),
            None => RevealVisuals::NEUTRAL,
        }
    }

    /// Update the gesture state based on a message
    ///
    /// Returns the action committed by this message, if any. Only a release
    /// (or a cancel under [`CancelPolicy::Commit`]) can commit, and the session
    /// is discarded right after, so one session commits at most once.
    pub fn update(&mut self, message: Message) -> Option<SwipeAction> {
        match message {
            Message::DragStarted { origin_x } => {
                if self.session.is_none() {
                    self.session = Some(GestureSession {
                        origin_x,
                        translation_x: 0.0,
                        scale: 1.0,
                    });
                }
                None
            }
            Message::DragMoved { translation_x } => {
                let thresholds = self.thresholds;
                if let Some(session) = self.session.as_mut() {
                    session.translation_x = translation_x;
                    session.scale =
                        RevealVisuals::for_translation(translation_x, &thresholds).row_scale;
                }
                None
            }
            Message::DragEnded { translation_x } => {
                // Visuals return to neutral whether or not anything commits
                self.session
                    .take()
                    .and_then(|_| resolve_swipe(translation_x, &self.thresholds))
            }
            Message::DragCancelled { translation_x } => {
                let session = self.session.take();
                match self.cancel_policy {
                    CancelPolicy::Commit => {
                        session.and_then(|_| resolve_swipe(translation_x, &self.thresholds))
                    }
                    CancelPolicy::Discard => None,
                }
            }
        }
    }
}
