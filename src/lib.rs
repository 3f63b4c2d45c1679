//! # Chatshell - a swipeable chat list for the terminal
//!
//! A chat/call list screen built with Rust and Ratatui. Rows are dragged with
//! the mouse to pin, archive or delete them; the large screen title collapses
//! into the top bar as the list scrolls.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`model`, `core::state`): state changed only through messages
//! - **Message** (`core::msg`): past-tense events that can change the state
//! - **Update** (`core::update`): pure function from message and state to new state
//! - **Command** (`core::cmd`): side effects (storage, haptics, navigation)
//! - **View** (`presentation`): stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use chatshell::core::{msg::{system::SystemMsg, Msg}, state::AppState, update::update};
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::System(SystemMsg::Resize(80, 24)), state);
//!
//! assert_eq!(state.system.width, 80);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Swipe, header, list and permission interaction models
//! - [`core`] - Messages, commands, state and the update function
//! - [`infrastructure`] - Terminal, config, row storage and device services
//! - [`integration`] - The event loop
//! - [`presentation`] - Components and widgets

#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
