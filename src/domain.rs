//! Domain logic
//!
//! This module contains domain types shared by every layer:
//! - Chat and call rows
//! - Text processing utilities

pub mod row;
pub mod text;
