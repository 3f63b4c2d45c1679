//! Interaction models
//!
//! Self-contained Elm-style state holders. Each owns its state and changes it
//! only through `update`; none of them performs I/O.

pub mod chat_list;
pub mod gesture;
pub mod header;
pub mod interpolate;
pub mod permission;
pub mod selection;
pub mod status_bar;
