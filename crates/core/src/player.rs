//! Player module - everything one player owns
//!
//! Both players share this one implementation; the only per-player data is
//! the [`PlayerId`] and the state below.

use crate::attack::AttackQueue;
use crate::collision::{position_ok, try_move, MoveOutcome};
use crate::piece::Piece;
use crate::playfield::Playfield;
use crate::rng::SimpleRng;
use crate::types::PlayerId;

/// One player's board, pieces, incoming garbage and gravity clock
#[derive(Debug, Clone)]
pub struct PlayerState {
    id: PlayerId,
    playfield: Playfield,
    current: Piece,
    next: Piece,
    attacks: AttackQueue,
    /// Time (µs since session start) gravity was last reset for this player.
    last_drop_us: u64,
}

impl PlayerState {
    /// Create a player with an empty playfield
    ///
    /// Rolls a piece, spawns it as current and pre-rolls the next one.
    pub fn new(id: PlayerId, rng: &mut SimpleRng) -> Self {
        let current = Piece::roll(rng).at_spawn();
        let next = Piece::roll(rng);
        Self {
            id,
            playfield: Playfield::new(),
            current,
            next,
            attacks: AttackQueue::new(),
            last_drop_us: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn attacks(&self) -> &AttackQueue {
        &self.attacks
    }

    pub fn attacks_mut(&mut self) -> &mut AttackQueue {
        &mut self.attacks
    }

    pub fn last_drop_us(&self) -> u64 {
        self.last_drop_us
    }

    /// Next forced gravity step for a given interval
    pub fn gravity_deadline_us(&self, delay_us: u64) -> u64 {
        self.last_drop_us.saturating_add(delay_us)
    }

    pub(crate) fn reset_gravity(&mut self, now_us: u64) {
        self.last_drop_us = now_us;
    }

    /// Replace the active piece, e.g. to stage a test scenario
    pub fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// Replace the preview piece
    pub fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }

    /// Whether the active piece's committed placement is valid
    pub fn current_fits(&self) -> bool {
        position_ok(&self.current, &self.playfield, None)
    }

    /// Guarded move of the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8, drot: u8) -> MoveOutcome {
        try_move(&mut self.current, &self.playfield, dx, dy, drot)
    }

    /// Merge the active piece and clear lines; returns the cleared count
    pub(crate) fn settle(&mut self) -> u32 {
        self.playfield.flatten(&self.current);
        self.playfield.process_complete_lines()
    }

    /// Inject pending garbage into this player's playfield
    pub(crate) fn receive_garbage(&mut self, rng: &mut SimpleRng) -> u32 {
        self.attacks.drain_into(&mut self.playfield, rng)
    }

    /// Promote the preview piece, roll a new preview and check the spawn
    ///
    /// Returns false when the new active piece does not fit.
    pub(crate) fn spawn_next(&mut self, rng: &mut SimpleRng) -> bool {
        self.current = self.next.at_spawn();
        self.next = Piece::roll(rng);
        self.current_fits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeKind};

    #[test]
    fn test_new_player_spawns_at_top_center() {
        let mut rng = SimpleRng::new(3);
        let player = PlayerState::new(PlayerId::Two, &mut rng);
        assert_eq!(player.id(), PlayerId::Two);
        assert_eq!((player.current().x, player.current().y), (3, 0));
        assert_eq!((player.next().x, player.next().y), (0, 0));
        assert!(player.current_fits());
        assert!(player.playfield().is_empty());
    }

    #[test]
    fn test_spawn_next_promotes_preview() {
        let mut rng = SimpleRng::new(3);
        let mut player = PlayerState::new(PlayerId::One, &mut rng);
        let preview = *player.next();

        assert!(player.spawn_next(&mut rng));
        assert_eq!(player.current().kind, preview.kind);
        assert_eq!(player.current().orientation, preview.orientation);
        assert_eq!(player.current().color, preview.color);
        assert_eq!((player.current().x, player.current().y), (3, 0));
    }

    #[test]
    fn test_spawn_next_reports_blocked_spawn() {
        let mut rng = SimpleRng::new(3);
        let mut player = PlayerState::new(PlayerId::One, &mut rng);
        player.set_next(Piece::new(ShapeKind::Square, 0, Color::Red));
        player.playfield_mut().set_cell(4, 0, 1);
        assert!(!player.spawn_next(&mut rng));
    }

    #[test]
    fn test_settle_merges_active_piece() {
        let mut rng = SimpleRng::new(3);
        let mut player = PlayerState::new(PlayerId::One, &mut rng);
        player.set_current(Piece::new(ShapeKind::Line, 1, Color::Green).at_spawn());

        assert_eq!(player.settle(), 0);
        assert_eq!(player.playfield().filled_cells(), 4);
    }

    #[test]
    fn test_gravity_deadline_tracks_last_reset() {
        let mut rng = SimpleRng::new(3);
        let mut player = PlayerState::new(PlayerId::One, &mut rng);
        assert_eq!(player.gravity_deadline_us(1_000), 1_000);
        player.reset_gravity(250);
        assert_eq!(player.gravity_deadline_us(1_000), 1_250);
    }
}
