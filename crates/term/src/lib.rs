//! Terminal rendering for the game.
//!
//! The game view draws against the small [`Surface`] trait; the crossterm
//! backend queues commands into a buffer and flushes them to stdout, and the
//! recording backend keeps a character grid for tests.

pub mod game_view;
pub mod renderer;
pub mod surface;

pub use duel_tetris_core as core;
pub use duel_tetris_types as types;

pub use game_view::{Layout, PlayerLayout, SessionView};
pub use renderer::{term_color, CrosstermSurface, TerminalGuard, GAME_OVER_X, GAME_OVER_Y};
pub use surface::{RecordingSurface, Surface};
