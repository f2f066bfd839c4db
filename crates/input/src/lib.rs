//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s. The quiz is
//! turn-based, so there is no repeat handling: one key press is one intent.

pub mod map;

pub use natty_types as types;

pub use map::{handle_key_event, should_quit};
