//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages and commands
//! - Application state management
//! - Update logic and command execution
//! - Translation of terminal events into messages

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod state;
pub mod translator;
pub mod update;
