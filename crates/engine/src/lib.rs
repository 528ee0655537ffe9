//! Game engine: drives a `core::Session` from an input source and a clock,
//! and draws it after every step.
//!
//! The loop is generic over its collaborators so it runs the same way on a
//! real terminal and on scripted input with a manual clock.

pub mod clock;
pub mod game_loop;

pub use duel_tetris_core as core;
pub use duel_tetris_input as input;
pub use duel_tetris_term as term;
pub use duel_tetris_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game_loop::{GameLoop, Step};
