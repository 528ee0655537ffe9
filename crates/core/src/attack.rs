//! Attack module - garbage rows owed to a player
//!
//! Clearing lines credits the opponent's queue. A player's own queue is
//! drained into their playfield right before their next spawn check.

use tracing::debug;

use crate::playfield::Playfield;
use crate::rng::SimpleRng;
use crate::types::PLAYFIELD_W;

/// Pending garbage rows for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackQueue {
    pending: u32,
}

impl AttackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently owed
    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Add `rows` incoming garbage rows
    pub fn credit(&mut self, rows: u32) {
        self.pending = self.pending.saturating_add(rows);
    }

    /// Inject every pending row into `playfield` and return how many were applied
    ///
    /// Each row pushes the stack up by one and has a single hole in a column
    /// chosen uniformly at random.
    pub fn drain_into(&mut self, playfield: &mut Playfield, rng: &mut SimpleRng) -> u32 {
        let mut applied = 0;
        while self.pending > 0 {
            let gap = rng.next_below(PLAYFIELD_W as usize);
            playfield.push_garbage(gap);
            self.pending -= 1;
            applied += 1;
        }
        if applied > 0 {
            debug!(rows = applied, "garbage injected");
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playfield::row_cell;

    #[test]
    fn test_credit_accumulates() {
        let mut queue = AttackQueue::new();
        queue.credit(2);
        queue.credit(3);
        assert_eq!(queue.pending(), 5);
    }

    #[test]
    fn test_drain_empty_queue_is_noop() {
        let mut queue = AttackQueue::new();
        let mut field = Playfield::new();
        let mut rng = SimpleRng::new(1);
        assert_eq!(queue.drain_into(&mut field, &mut rng), 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_drain_injects_rows_with_single_gap() {
        let mut queue = AttackQueue::new();
        let mut field = Playfield::new();
        let mut rng = SimpleRng::new(9);
        queue.credit(3);

        assert_eq!(queue.drain_into(&mut field, &mut rng), 3);
        assert_eq!(queue.pending(), 0);
        assert_eq!(field.filled_cells(), 27);

        for y in 17..20 {
            let row = field.row(y).unwrap();
            let holes = (0..PLAYFIELD_W as usize)
                .filter(|&x| row_cell(row, x) == 0)
                .count();
            assert_eq!(holes, 1, "row {}", y);
        }
    }
}
