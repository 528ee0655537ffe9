//! Collision module - placement validity and guarded moves
//!
//! All movement goes through [`try_move`], which probes the candidate
//! placement with [`position_ok`] before committing it.

use crate::piece::{Piece, Placement};
use crate::playfield::Playfield;

/// Result of a guarded move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The candidate placement was valid and is now committed
    Applied,
    /// A horizontal or rotation move was rejected; nothing changes
    Blocked,
    /// A downward move was rejected; the piece must lock
    Landed,
}

/// Check that every cell of `candidate` (or of the committed placement when
/// `candidate` is `None`) lies inside the playfield on an empty cell
pub fn position_ok(piece: &Piece, playfield: &Playfield, candidate: Option<Placement>) -> bool {
    piece
        .cells_for(candidate)
        .iter()
        .all(|&(x, y)| playfield.is_free(x, y))
}

/// Move by `(dx, dy)` and rotate by `drot` steps if the result is valid
pub fn try_move(piece: &mut Piece, playfield: &Playfield, dx: i8, dy: i8, drot: u8) -> MoveOutcome {
    let candidate = piece.shifted(dx, dy, drot);
    if position_ok(piece, playfield, Some(candidate)) {
        piece.commit(candidate);
        MoveOutcome::Applied
    } else if dy == 0 {
        MoveOutcome::Blocked
    } else {
        MoveOutcome::Landed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ShapeKind};

    fn line_piece() -> Piece {
        // Vertical line in local column 1.
        Piece::new(ShapeKind::Line, 0, Color::Cyan).at_spawn()
    }

    #[test]
    fn test_position_ok_on_empty_field() {
        let field = Playfield::new();
        assert!(position_ok(&line_piece(), &field, None));
    }

    #[test]
    fn test_position_ok_rejects_out_of_bounds() {
        let field = Playfield::new();
        let piece = line_piece();
        let left = Placement { x: -2, y: 0, orientation: 0 };
        let below = Placement { x: 3, y: 17, orientation: 0 };
        assert!(!position_ok(&piece, &field, Some(left)));
        assert!(!position_ok(&piece, &field, Some(below)));
        assert!(position_ok(&piece, &field, Some(Placement { x: -1, y: 16, orientation: 0 })));
    }

    #[test]
    fn test_position_ok_rejects_occupied_cell() {
        let mut field = Playfield::new();
        field.set_cell(4, 3, 2);
        assert!(!position_ok(&line_piece(), &field, None));
    }

    #[test]
    fn test_try_move_commits_valid_move() {
        let field = Playfield::new();
        let mut piece = line_piece();
        assert_eq!(try_move(&mut piece, &field, 1, 0, 0), MoveOutcome::Applied);
        assert_eq!(piece.x, 4);
        assert_eq!(try_move(&mut piece, &field, 0, 1, 0), MoveOutcome::Applied);
        assert_eq!(piece.y, 1);
        assert_eq!(try_move(&mut piece, &field, 0, 0, 1), MoveOutcome::Applied);
        assert_eq!(piece.orientation, 1);
    }

    #[test]
    fn test_blocked_horizontal_move_leaves_piece_untouched() {
        let field = Playfield::new();
        let mut piece = line_piece();
        piece.x = -1;
        let before = piece;
        assert_eq!(try_move(&mut piece, &field, -1, 0, 0), MoveOutcome::Blocked);
        assert_eq!(piece, before);
    }

    #[test]
    fn test_blocked_rotation_is_not_a_landing() {
        let field = Playfield::new();
        let mut piece = line_piece();
        // Vertical line hugging the left wall cannot turn horizontal.
        piece.x = -1;
        assert_eq!(try_move(&mut piece, &field, 0, 0, 1), MoveOutcome::Blocked);
        assert_eq!(piece.orientation, 0);
    }

    #[test]
    fn test_blocked_downward_move_lands() {
        let field = Playfield::new();
        let mut piece = line_piece();
        piece.y = 16;
        let before = piece;
        assert_eq!(try_move(&mut piece, &field, 0, 1, 0), MoveOutcome::Landed);
        assert_eq!(piece, before);
    }
}
