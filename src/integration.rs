//! Event loop wiring
//!
//! - `runtime`: state, message queue and command execution
//! - `renderer`: draws the state through a `TuiLike` host
//! - `app_runner`: the loop that ties host events to the runtime

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
