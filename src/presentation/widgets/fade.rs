use ratatui::prelude::*;

/// Approximate an opacity on a terminal: `None` when fully transparent
///
/// Terminals have no alpha channel, so opacity is quantised into three steps:
/// dimmed gray, dimmed color, full color.
pub fn faded(color: Color, opacity: f64) -> Option<Style> {
    if opacity.is_nan() || opacity <= 0.0 {
        None
    } else if opacity < 0.5 {
        Some(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
    } else if opacity < 1.0 {
        Some(Style::default().fg(color).add_modifier(Modifier::DIM))
    } else {
        Some(Style::default().fg(color))
    }
}
