//! Terminal input module (engine-facing).
//!
//! Input arrives as a byte stream. [`InputSource`] yields one byte at a time
//! with a bounded wait, [`InputDecoder`] turns bytes into
//! [`crate::types::Command`]s using a [`KeyBindings`] table.

pub mod bindings;
pub mod decoder;
pub mod source;

pub use duel_tetris_types as types;

pub use bindings::{ArrowKey, KeyBindings, PlayerKeys};
pub use decoder::InputDecoder;
pub use source::{encode_key, InputSource, ScriptedInput, TerminalInput};
