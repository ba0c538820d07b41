//! Tetromino shape tables and wall-kick offsets.
//!
//! Shapes are stored as four mino offsets from the piece origin (top-left of
//! the bounding box), one table entry per orientation. The tables are derived
//! from the classic reference matrices (I in a 4x4 box, O in 2x2, the rest in
//! 3x3) rotated clockwise, so looking up `Rotation::East` is identical to
//! rotating the spawn matrix once.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece origin.
pub type MinoOffset = (i16, i16);

/// Shape of a piece: four mino offsets.
pub type PieceShape = [MinoOffset; 4];

/// Horizontal wall-kick offsets, tried in order during rotation.
///
/// Zero first (rotate in place), then one cell either side, then two cells
/// either side to rescue wide bounding boxes (the I piece) against a wall.
pub const KICK_OFFSETS: [i16; 5] = [0, 1, -1, 2, -2];

const SHAPES_I: [PieceShape; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const SHAPES_J: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const SHAPES_L: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

// O occupies its whole 2x2 box; rotation is the identity.
const SHAPES_O: [PieceShape; 4] = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];

const SHAPES_S: [PieceShape; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const SHAPES_T: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const SHAPES_Z: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Mino offsets for a piece kind at a given orientation.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let table = match kind {
        PieceKind::I => &SHAPES_I,
        PieceKind::J => &SHAPES_J,
        PieceKind::L => &SHAPES_L,
        PieceKind::O => &SHAPES_O,
        PieceKind::S => &SHAPES_S,
        PieceKind::T => &SHAPES_T,
        PieceKind::Z => &SHAPES_Z,
    };
    table[rotation.index()]
}

/// Width of the bounding box the shape tables are defined in.
pub const fn box_width(kind: PieceKind) -> i16 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Spawn column: bounding box horizontally centered on the playfield.
///
/// `floor(cols / 2) - ceil(box_width / 2)`, matching the classic placement
/// (x = 3 for most pieces on a 10-wide field, x = 4 for O).
pub fn spawn_x(kind: PieceKind, cols: usize) -> i16 {
    cols as i16 / 2 - (box_width(kind) + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_shape_has_four_minos_inside_its_box() {
        for kind in PieceKind::ALL {
            let w = box_width(kind);
            for rotation in ROTATIONS {
                for (x, y) in shape(kind, rotation) {
                    assert!(
                        (0..w).contains(&x) && (0..4).contains(&y),
                        "{:?} {:?} mino ({}, {}) escapes its box",
                        kind,
                        rotation,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn shapes_within_one_kind_are_distinct_except_o() {
        for kind in PieceKind::ALL {
            if kind == PieceKind::O {
                continue;
            }
            // North and East always differ for non-O pieces.
            assert_ne!(shape(kind, Rotation::North), shape(kind, Rotation::East));
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        for rotation in ROTATIONS {
            assert_eq!(shape(PieceKind::O, rotation), shape(PieceKind::O, Rotation::North));
        }
    }

    #[test]
    fn spawn_x_centers_bounding_box() {
        // On a standard 10-wide field: 5 - ceil(w/2).
        assert_eq!(spawn_x(PieceKind::I, 10), 3);
        assert_eq!(spawn_x(PieceKind::T, 10), 3);
        assert_eq!(spawn_x(PieceKind::O, 10), 4);
    }

    #[test]
    fn kick_order_prefers_smallest_offset() {
        assert_eq!(KICK_OFFSETS, [0, 1, -1, 2, -2]);
    }
}
