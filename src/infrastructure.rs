//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Layered configuration
//! - Row storage, device capabilities and navigation

pub mod cli;
pub mod config;
pub mod device;
pub mod navigation;
pub mod row_source;
pub mod tui;
