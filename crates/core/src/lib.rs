//! Core game logic - pure, deterministic and testable
//!
//! This crate contains the rules of the head-to-head game: shapes, pieces,
//! packed playfields, collision, line clears, garbage exchange and the
//! session state tying both players together. It performs no I/O and never
//! reads a clock; callers pass the current time in.
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7-shape catalog with pre-rotated orientation encodings
//! - [`piece`]: a live piece and its placement arithmetic
//! - [`playfield`]: 20 bit-packed rows, flattening and line clearing
//! - [`collision`]: placement validity and guarded moves
//! - [`attack`]: pending garbage rows per player
//! - [`rng`]: seeded LCG shared by piece rolls and garbage gaps
//! - [`scoring`]: classic-mode scoreboard and gravity acceleration
//! - [`player`]: one player's board, pieces and gravity clock
//! - [`session`]: both players plus the global state and the lock sequence
//!
//! # Example
//!
//! ```
//! use duel_tetris_core::{Session, SessionConfig, StepOutcome};
//! use duel_tetris_types::{PlayerAction, PlayerId};
//!
//! let mut session = Session::new(SessionConfig::new(12345));
//!
//! session.apply_action(PlayerId::One, PlayerAction::MoveRight, 0);
//! session.apply_action(PlayerId::One, PlayerAction::Rotate, 0);
//! let outcome = session.apply_action(PlayerId::One, PlayerAction::HardDrop, 0);
//!
//! assert!(matches!(outcome, StepOutcome::Locked(_)));
//! assert_eq!(session.player(PlayerId::One).unwrap().playfield().filled_cells(), 4);
//! ```

pub mod attack;
pub mod collision;
pub mod piece;
pub mod player;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use duel_tetris_types as types;

// Re-export commonly used types for convenience
pub use attack::AttackQueue;
pub use collision::{position_ok, try_move, MoveOutcome};
pub use piece::{Piece, Placement};
pub use player::PlayerState;
pub use playfield::{line_complete, Playfield, Row};
pub use rng::SimpleRng;
pub use scoring::Scoreboard;
pub use session::{
    DisplayFlags, LockReport, Session, SessionConfig, SessionStatus, StepOutcome,
};
pub use shapes::{shape, PieceCells, Shape, CATALOG};
