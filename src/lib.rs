//! Duel Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name:
//! `duel_tetris::{core,engine,input,term,types}`.

pub use duel_tetris_core as core;
pub use duel_tetris_engine as engine;
pub use duel_tetris_input as input;
pub use duel_tetris_term as term;
pub use duel_tetris_types as types;
