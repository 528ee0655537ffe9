//! Piece module - a live tetromino instance
//!
//! A piece is a catalog shape plus a mutable placement (origin and
//! orientation) and a color. Cell coordinates are always returned by value.

use crate::rng::SimpleRng;
use crate::shapes::{shape, PieceCells, Shape};
use crate::types::{Color, ShapeKind, SPAWN_X, SPAWN_Y};

/// Origin and orientation of a piece, committed or hypothetical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i8,
    pub y: i8,
    pub orientation: u8,
}

/// Active or preview piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub orientation: u8,
    pub x: i8,
    pub y: i8,
    pub color: Color,
}

impl Piece {
    /// Create a piece with its origin at (0, 0), as used by the next-piece preview
    pub fn new(kind: ShapeKind, orientation: u8, color: Color) -> Self {
        let orientation = orientation % shape(kind).symmetry();
        Self {
            kind,
            orientation,
            x: 0,
            y: 0,
            color,
        }
    }

    /// Roll a random shape, color and orientation (in that order)
    pub fn roll(rng: &mut SimpleRng) -> Self {
        let kind = ShapeKind::ALL[rng.next_below(ShapeKind::ALL.len())];
        let color = Color::ALL[rng.next_below(Color::ALL.len())];
        let orientation = rng.next_below(shape(kind).symmetry() as usize) as u8;
        Self::new(kind, orientation, color)
    }

    /// The same piece moved to the spawn origin, keeping its orientation
    pub fn at_spawn(self) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            ..self
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape(self.kind)
    }

    pub fn symmetry(&self) -> u8 {
        self.shape().symmetry()
    }

    /// Current committed placement
    pub fn placement(&self) -> Placement {
        Placement {
            x: self.x,
            y: self.y,
            orientation: self.orientation,
        }
    }

    /// Placement reached by a relative move; orientation wraps modulo the symmetry
    pub fn shifted(&self, dx: i8, dy: i8, drot: u8) -> Placement {
        let symmetry = self.symmetry() as u16;
        Placement {
            x: self.x + dx,
            y: self.y + dy,
            orientation: ((self.orientation as u16 + drot as u16) % symmetry) as u8,
        }
    }

    /// Replace the committed placement
    pub fn commit(&mut self, placement: Placement) {
        self.x = placement.x;
        self.y = placement.y;
        self.orientation = placement.orientation;
    }

    /// Absolute cells of the committed placement
    pub fn cells(&self) -> PieceCells {
        self.cells_for(None)
    }

    /// Absolute cells of `candidate` if given, otherwise of the committed placement
    pub fn cells_for(&self, candidate: Option<Placement>) -> PieceCells {
        let p = candidate.unwrap_or_else(|| self.placement());
        let mut cells = self.shape().offsets(p.orientation);
        for cell in cells.iter_mut() {
            cell.0 += p.x;
            cell.1 += p.y;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_is_at_origin() {
        let piece = Piece::new(ShapeKind::T, 2, Color::Red);
        assert_eq!((piece.x, piece.y, piece.orientation), (0, 0, 2));
    }

    #[test]
    fn test_new_piece_wraps_orientation() {
        let piece = Piece::new(ShapeKind::Square, 3, Color::Red);
        assert_eq!(piece.orientation, 0);
    }

    #[test]
    fn test_at_spawn_keeps_orientation() {
        let piece = Piece::new(ShapeKind::L, 3, Color::Blue).at_spawn();
        assert_eq!((piece.x, piece.y, piece.orientation), (3, 0, 3));
    }

    #[test]
    fn test_cells_for_override_does_not_commit() {
        let piece = Piece::new(ShapeKind::Square, 0, Color::Cyan).at_spawn();
        let mut probe = piece.cells_for(Some(Placement {
            x: 0,
            y: 10,
            orientation: 0,
        }));
        probe.sort();
        assert_eq!(probe, [(1, 10), (1, 11), (2, 10), (2, 11)]);
        assert_eq!(piece.placement(), Placement { x: 3, y: 0, orientation: 0 });
    }

    #[test]
    fn test_shifted_wraps_rotation() {
        let piece = Piece::new(ShapeKind::Line, 1, Color::Green);
        assert_eq!(piece.shifted(0, 0, 1).orientation, 0);
        assert_eq!(piece.shifted(1, 2, 0), Placement { x: 1, y: 2, orientation: 1 });
    }

    #[test]
    fn test_rotating_symmetry_times_is_identity() {
        for kind in ShapeKind::ALL {
            let mut piece = Piece::new(kind, 0, Color::White);
            let start = piece.orientation;
            for _ in 0..piece.symmetry() {
                let next = piece.shifted(0, 0, 1);
                piece.commit(next);
            }
            assert_eq!(piece.orientation, start, "{:?}", kind);
        }
    }

    #[test]
    fn test_roll_is_deterministic_for_seed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..50 {
            let pa = Piece::roll(&mut a);
            assert_eq!(pa, Piece::roll(&mut b));
            assert!(pa.orientation < pa.symmetry());
        }
    }
}
