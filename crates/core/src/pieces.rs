//! Pieces module - tetromino catalog and block enumeration
//!
//! Every rotation is a 16-bit mask over a 4x4 grid, scanned row-major with
//! bit `0x8000` at column 0, row 0. The filled cells of a rotation always lie
//! inside the shape's `size x size` bounding box.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Absolute `(col, row)` position of one block
pub type BlockPos = (i16, i16);

/// The four blocks of a placed piece
pub type Blocks = ArrayVec<BlockPos, 4>;

/// Immutable description of one tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pub kind: PieceKind,
    /// Side of the bounding box (2, 3 or 4)
    pub size: u8,
    /// Rotation masks indexed by [`Rotation::index`]
    pub rotations: [u16; 4],
    /// Display color tag
    pub color: &'static str,
}

impl PieceShape {
    pub fn mask(&self, rotation: Rotation) -> u16 {
        self.rotations[rotation.index()]
    }
}

pub const I_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::I,
    size: 4,
    rotations: [0x0F00, 0x2222, 0x00F0, 0x4444],
    color: "cyan",
};

pub const J_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::J,
    size: 3,
    rotations: [0x44C0, 0x8E00, 0x6440, 0x0E20],
    color: "blue",
};

pub const L_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::L,
    size: 3,
    rotations: [0x4460, 0x0E80, 0xC440, 0x2E00],
    color: "orange",
};

pub const O_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::O,
    size: 2,
    rotations: [0xCC00, 0xCC00, 0xCC00, 0xCC00],
    color: "yellow",
};

pub const S_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::S,
    size: 3,
    rotations: [0x06C0, 0x8C40, 0x6C00, 0x4620],
    color: "green",
};

pub const T_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::T,
    size: 3,
    rotations: [0x0E40, 0x4C40, 0x4E00, 0x4640],
    color: "purple",
};

pub const Z_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::Z,
    size: 3,
    rotations: [0x0C60, 0x4C80, 0xC600, 0x2640],
    color: "red",
};

/// Catalog in [`PieceKind::ALL`] order
pub const SHAPES: [PieceShape; 7] = [
    I_SHAPE, J_SHAPE, L_SHAPE, O_SHAPE, S_SHAPE, T_SHAPE, Z_SHAPE,
];

/// Look up the catalog entry for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static PieceShape {
    &SHAPES[kind.index()]
}

/// Offsets of the filled cells of one rotation, relative to the piece origin
pub fn block_offsets(kind: PieceKind, rotation: Rotation) -> Blocks {
    blocks_of(kind, 0, 0, rotation)
}

/// Absolute block positions of a piece placed at `(x, y)`
///
/// Always yields exactly four positions, in row-major mask order.
pub fn blocks_of(kind: PieceKind, x: i16, y: i16, rotation: Rotation) -> Blocks {
    let mask = get_shape(kind).mask(rotation);
    let mut blocks = Blocks::new();
    for i in 0..16u16 {
        if mask & (0x8000 >> i) != 0 {
            let col = (i % 4) as i16;
            let row = (i / 4) as i16;
            blocks.push((x + col, y + row));
        }
    }
    blocks
}

/// Leftmost and rightmost filled column offsets for a rotation
pub fn column_span(kind: PieceKind, rotation: Rotation) -> (i16, i16) {
    let offsets = block_offsets(kind, rotation);
    let min = offsets.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
    let max = offsets.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rotation_has_four_cells_inside_its_box() {
        for shape in SHAPES.iter() {
            for rotation in Rotation::ALL {
                assert_eq!(shape.mask(rotation).count_ones(), 4, "{:?}", shape.kind);
                for (dx, dy) in block_offsets(shape.kind, rotation) {
                    assert!(dx >= 0 && dx < shape.size as i16, "{:?} {:?}", shape.kind, rotation);
                    assert!(dy >= 0 && dy < shape.size as i16, "{:?} {:?}", shape.kind, rotation);
                }
            }
        }
    }

    #[test]
    fn i_piece_north_is_second_row() {
        let blocks = blocks_of(PieceKind::I, 0, 0, Rotation::North);
        assert_eq!(blocks.as_slice(), &[(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn blocks_are_translated_by_origin() {
        let blocks = blocks_of(PieceKind::O, 4, 7, Rotation::South);
        assert_eq!(blocks.as_slice(), &[(4, 7), (5, 7), (4, 8), (5, 8)]);
    }

    #[test]
    fn catalog_lookup_matches_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).kind, kind);
        }
    }

    #[test]
    fn column_span_of_vertical_i() {
        assert_eq!(column_span(PieceKind::I, Rotation::East), (2, 2));
        assert_eq!(column_span(PieceKind::I, Rotation::North), (0, 3));
        assert_eq!(column_span(PieceKind::J, Rotation::North), (0, 1));
    }
}
