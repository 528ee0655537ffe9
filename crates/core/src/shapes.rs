//! Shapes module - the tetromino catalog
//!
//! Every shape stores its orientations pre-rotated, so rotating a piece is only
//! a matter of picking another index. An orientation is a 16-bit word holding
//! four cell offsets of 4 bits each: cell `i` sits at
//! `dx = (word >> 4i) & 3`, `dy = (word >> (4i + 2)) & 3` from the piece origin.

use crate::types::ShapeKind;

/// Offset of a single cell relative to the piece origin (or an absolute cell)
pub type CellOffset = (i8, i8);

/// The four cells of a piece
pub type PieceCells = [CellOffset; 4];

/// A tetromino definition: its kind plus one encoding per distinct orientation
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    orientations: &'static [u16],
}

impl Shape {
    /// Number of distinct orientations the shape cycles through (1, 2 or 4)
    pub fn symmetry(&self) -> u8 {
        self.orientations.len() as u8
    }

    /// Raw encoding of an orientation; indices wrap around the symmetry
    fn encoding(&self, orientation: u8) -> u16 {
        self.orientations[orientation as usize % self.orientations.len()]
    }

    /// Cell offsets for an orientation
    pub fn offsets(&self, orientation: u8) -> PieceCells {
        decode(self.encoding(orientation))
    }
}

/// The seven shapes, indexed by [`ShapeKind::index`]
pub static CATALOG: [Shape; 7] = [
    Shape {
        kind: ShapeKind::Square,
        orientations: &[0x1256],
    },
    Shape {
        kind: ShapeKind::Line,
        orientations: &[0x159d, 0x4567],
    },
    Shape {
        kind: ShapeKind::S,
        orientations: &[0x4512, 0x0459],
    },
    Shape {
        kind: ShapeKind::Z,
        orientations: &[0x0156, 0x1548],
    },
    Shape {
        kind: ShapeKind::L,
        orientations: &[0x159a, 0x8456, 0x0159, 0x2654],
    },
    Shape {
        kind: ShapeKind::J,
        orientations: &[0x1598, 0x0456, 0x2159, 0xa654],
    },
    Shape {
        kind: ShapeKind::T,
        orientations: &[0x1456, 0x1596, 0x4569, 0x4159],
    },
];

/// Look up the catalog entry for a shape kind
pub fn shape(kind: ShapeKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Unpack an orientation word into its four cell offsets
#[inline]
pub fn decode(encoding: u16) -> PieceCells {
    let mut cells = [(0, 0); 4];
    for (i, cell) in cells.iter_mut().enumerate() {
        let nibble = (encoding >> (4 * i)) & 0xf;
        *cell = ((nibble & 3) as i8, ((nibble >> 2) & 3) as i8);
    }
    cells
}
