//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering `AppState`
//! - Reusable widgets
//! - Screen geometry shared with mouse hit-testing

pub mod components;
pub mod layout;
pub mod widgets;
