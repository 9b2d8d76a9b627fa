//! Pieces tests - rotation masks and block enumeration

use heuristic_tetris::core::pieces::{block_offsets, SHAPES};
use heuristic_tetris::core::{blocks_of, column_span, get_shape};
use heuristic_tetris::types::{PieceKind, Rotation};

// ============== Catalog ==============

#[test]
fn test_catalog_masks() {
    assert_eq!(get_shape(PieceKind::I).rotations, [0x0F00, 0x2222, 0x00F0, 0x4444]);
    assert_eq!(get_shape(PieceKind::J).rotations, [0x44C0, 0x8E00, 0x6440, 0x0E20]);
    assert_eq!(get_shape(PieceKind::L).rotations, [0x4460, 0x0E80, 0xC440, 0x2E00]);
    assert_eq!(get_shape(PieceKind::O).rotations, [0xCC00; 4]);
    assert_eq!(get_shape(PieceKind::S).rotations, [0x06C0, 0x8C40, 0x6C00, 0x4620]);
    assert_eq!(get_shape(PieceKind::T).rotations, [0x0E40, 0x4C40, 0x4E00, 0x4640]);
    assert_eq!(get_shape(PieceKind::Z).rotations, [0x0C60, 0x4C80, 0xC600, 0x2640]);
}

#[test]
fn test_catalog_sizes_and_colors() {
    let expected = [
        (PieceKind::I, 4, "cyan"),
        (PieceKind::J, 3, "blue"),
        (PieceKind::L, 3, "orange"),
        (PieceKind::O, 2, "yellow"),
        (PieceKind::S, 3, "green"),
        (PieceKind::T, 3, "purple"),
        (PieceKind::Z, 3, "red"),
    ];
    for (kind, size, color) in expected {
        let shape = get_shape(kind);
        assert_eq!(shape.size, size, "{:?}", kind);
        assert_eq!(shape.color, color, "{:?}", kind);
    }
    assert_eq!(SHAPES.len(), 7);
}

// ============== Blocks ==============

#[test]
fn test_i_piece_blocks() {
    assert_eq!(
        block_offsets(PieceKind::I, Rotation::North).as_slice(),
        &[(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        block_offsets(PieceKind::I, Rotation::East).as_slice(),
        &[(2, 0), (2, 1), (2, 2), (2, 3)]
    );
    assert_eq!(
        block_offsets(PieceKind::I, Rotation::South).as_slice(),
        &[(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    assert_eq!(
        block_offsets(PieceKind::I, Rotation::West).as_slice(),
        &[(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn test_t_piece_blocks() {
    // 0x0E40: second row three wide, stem below the middle.
    assert_eq!(
        block_offsets(PieceKind::T, Rotation::North).as_slice(),
        &[(0, 1), (1, 1), (2, 1), (1, 2)]
    );
    // 0x4E00: stem above.
    assert_eq!(
        block_offsets(PieceKind::T, Rotation::South).as_slice(),
        &[(1, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_blocks_are_row_major() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let blocks = block_offsets(kind, rotation);
            assert_eq!(blocks.len(), 4);
            for pair in blocks.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!((a.1, a.0) < (b.1, b.0), "{:?} {:?}", kind, rotation);
            }
        }
    }
}

#[test]
fn test_blocks_translate_with_origin() {
    let base = block_offsets(PieceKind::S, Rotation::East);
    let moved = blocks_of(PieceKind::S, -2, 7, Rotation::East);
    for (b, m) in base.iter().zip(moved.iter()) {
        assert_eq!((b.0 - 2, b.1 + 7), *m);
    }
}

#[test]
fn test_o_piece_same_in_every_rotation() {
    let north = block_offsets(PieceKind::O, Rotation::North);
    for rotation in Rotation::ALL {
        assert_eq!(block_offsets(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_column_spans() {
    assert_eq!(column_span(PieceKind::O, Rotation::North), (0, 1));
    assert_eq!(column_span(PieceKind::I, Rotation::West), (1, 1));
    assert_eq!(column_span(PieceKind::Z, Rotation::West), (1, 2));
    assert_eq!(column_span(PieceKind::L, Rotation::East), (0, 2));
}
