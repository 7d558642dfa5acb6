//! Tetromino catalog: literal pre-rotated offset tables.
//!
//! Every rotation state of every shape is stored as 4 explicit cell offsets
//! from the piece anchor, so rotation is a table lookup rather than matrix
//! math and there is no wall-kick search to get wrong. Shapes with 2-fold
//! symmetry (I, S, Z) repeat their two variants; O repeats one.

use crate::types::PieceKind;

/// Offset of a single block relative to the piece anchor, in cell units.
pub type BlockOffset = (i8, i8);

/// One orientation of a piece: 4 block offsets.
pub type PieceShape = [BlockOffset; 4];

/// Number of pre-enumerated rotation states per shape.
pub const ROTATIONS: u8 = 4;

const SHAPES: [[PieceShape; 4]; 7] = [
    // O
    [
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
    ],
    // I
    [
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // T
    [
        [(0, 0), (1, 0), (2, 0), (1, 1)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(1, 0), (1, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 0), (1, 0), (0, 1), (0, 2)],
        [(0, 0), (1, 0), (2, 0), (2, 1)],
    ],
    // L
    [
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(0, 0), (1, 0), (2, 0), (0, 1)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(2, 0), (0, 1), (1, 1), (2, 1)],
    ],
];

/// Look up the 4 block offsets for a shape and rotation state.
///
/// Pure and total: rotation indices wrap modulo [`ROTATIONS`].
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    SHAPES[kind.index()][(rotation % ROTATIONS) as usize]
}

/// Next rotation state, wrapping back to 0 after the last.
pub fn next_rotation(rotation: u8) -> u8 {
    (rotation + 1) % ROTATIONS
}
