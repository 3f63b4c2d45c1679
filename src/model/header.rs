//! Large-title header driven by the list scroll offset
//!
//! [`header_presentation`] is the single mapping from scroll offset to header
//! visuals; every screen with a large title renders through it.

use crate::model::interpolate::interpolate;

/// Scroll offsets (logical units) shaping the large title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderThresholds {
    /// Offset where the large title starts to fade
    pub fade_start: f64,
    /// Offset where the large title is fully hidden
    pub fade_end: f64,
    /// Title displacement per unit of scroll once fading
    pub displacement_factor: f64,
    /// Upper bound of the title displacement
    pub max_displacement: f64,
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            fade_start: 40.0,
            fade_end: 60.0,
            displacement_factor: 0.3,
            max_displacement: 20.0,
        }
    }
}

impl HeaderThresholds {
    pub fn is_valid(&self) -> bool {
        self.fade_start >= 0.0
            && self.fade_start < self.fade_end
            && self.displacement_factor >= 0.0
            && self.max_displacement >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPresentation {
    pub title_opacity: f64,
    pub title_translate_y: f64,
    pub compact_title_opacity: f64,
    pub show_divider: bool,
}

impl HeaderPresentation {
    pub fn is_title_visible(&self) -> bool {
        self.title_opacity > 0.0
    }
}

/// Map a scroll offset to header visuals
///
/// Pure function of `offset`: no hidden state and no hysteresis.
pub fn header_presentation(offset: f64, thresholds: &HeaderThresholds) -> HeaderPresentation {
    let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };

    let title_opacity = interpolate(
        offset,
        &[thresholds.fade_start, thresholds.fade_end],
        &[1.0, 0.0],
    );
    let title_translate_y = if offset < thresholds.fade_start {
        0.0
    } else {
        (offset * thresholds.displacement_factor).min(thresholds.max_displacement)
    };

    HeaderPresentation {
        title_opacity,
        title_translate_y,
        compact_title_opacity: 1.0 - title_opacity,
        show_divider: offset >= thresholds.fade_end,
    }
}

/// Messages that can be sent to update the header scroll state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The list was scrolled to an absolute offset
    ScrolledTo(f64),
    /// The list was scrolled by a delta (negative scrolls up)
    ScrolledBy(f64),
    /// The content height changed; the offset limit follows it
    ContentResized { max_offset: f64 },
    /// The screen was mounted again
    Reset,
}

/// Scroll offset of the screen owning the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderScroll {
    offset: f64,
    max_offset: Option<f64>,
}

impl HeaderScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> Option<f64> {
        self.max_offset
    }

    pub fn presentation(&self, thresholds: &HeaderThresholds) -> HeaderPresentation {
        header_presentation(self.offset, thresholds)
    }

    fn clamp(&self, offset: f64) -> f64 {
        let offset = if offset.is_nan() { 0.0 } else { offset.max(0.0) };
        match self.max_offset {
            Some(max) => offset.min(max.max(0.0)),
            None => offset,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrolledTo(offset) => {
                self.offset = self.clamp(offset);
            }
            Message::ScrolledBy(delta) => {
                self.offset = self.clamp(self.offset + delta);
            }
            Message::ContentResized { max_offset } => {
                self.max_offset = Some(max_offset);
                self.offset = self.clamp(self.offset);
            }
            Message::Reset => {
                *self = Self::default();
            }
        }
    }
}
