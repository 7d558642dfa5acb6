//! Collision and placement: pure feasibility checks plus the lock write.
//!
//! Coordinate contract: columns collide at the field edges (`x < 0` or
//! `x >= width`), the floor collides one row beyond the last visible row
//! (`y >= height`), and rows above the visible top (`y < 0`) are allowed
//! and only column-checked. This is the single authoritative boundary rule;
//! there is no wall-kick search anywhere.

use crate::core::board::Board;
use crate::core::pieces::shape;
use crate::types::PieceKind;

/// Absolute cell positions of a piece variant at anchor `(x, y)`.
pub fn piece_cells(kind: PieceKind, rotation: u8, x: i8, y: i8) -> [(i8, i8); 4] {
    let mut cells = shape(kind, rotation);
    for cell in &mut cells {
        cell.0 += x;
        cell.1 += y;
    }
    cells
}

/// True iff the piece variant fits at anchor `(x, y)`: every cell inside the
/// side walls, above the floor, and not overlapping a locked cell.
pub fn can_place(board: &Board, kind: PieceKind, rotation: u8, x: i8, y: i8) -> bool {
    piece_cells(kind, rotation, x, y).iter().all(|&(px, py)| {
        if px < 0 || px >= board.width() as i8 {
            return false;
        }
        if py >= board.height() as i8 {
            return false;
        }
        // Above the visible top: allowed, nothing to overlap.
        py < 0 || !board.is_occupied(px, py)
    })
}

/// Commit a piece's cells into the board.
///
/// Cells above the visible top (`y < 0`) are not recorded, matching the
/// spawn-above-the-field allowance.
pub fn lock_piece(board: &mut Board, kind: PieceKind, rotation: u8, x: i8, y: i8) {
    for (px, py) in piece_cells(kind, rotation, x, y) {
        if py >= 0 {
            board.set(px, py, Some(kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_side_walls() {
        let board = Board::new(10, 20);
        // Horizontal I spans columns x..x+3.
        assert!(can_place(&board, PieceKind::I, 1, 0, 0));
        assert!(can_place(&board, PieceKind::I, 1, 6, 0));
        assert!(!can_place(&board, PieceKind::I, 1, -1, 0));
        assert!(!can_place(&board, PieceKind::I, 1, 7, 0));
    }

    #[test]
    fn floor_collides_one_row_past_the_last_visible_row() {
        let board = Board::new(10, 20);
        // O occupies rows y and y+1; the deepest legal anchor is 18.
        assert!(can_place(&board, PieceKind::O, 0, 5, 18));
        assert!(!can_place(&board, PieceKind::O, 0, 5, 19));
    }

    #[test]
    fn rejects_overlap_with_locked_cells() {
        let mut board = Board::new(10, 20);
        board.set(5, 10, Some(PieceKind::T));
        assert!(!can_place(&board, PieceKind::O, 0, 5, 10));
        assert!(!can_place(&board, PieceKind::O, 0, 4, 9));
        assert!(can_place(&board, PieceKind::O, 0, 7, 10));
    }

    #[test]
    fn rows_above_the_top_are_allowed() {
        let board = Board::new(10, 20);
        // Vertical I at anchor y = -3 keeps one cell visible.
        assert!(can_place(&board, PieceKind::I, 0, 3, -3));
        assert!(can_place(&board, PieceKind::O, 0, 3, -1));
        // Columns are still checked above the top.
        assert!(!can_place(&board, PieceKind::O, 0, 9, -1));
    }

    #[test]
    fn lock_writes_exactly_the_visible_cells() {
        let mut board = Board::new(10, 20);
        lock_piece(&mut board, PieceKind::O, 0, 5, -1);
        // Row -1 is dropped, row 0 is recorded.
        assert_eq!(board.get(5, 0), Some(Some(PieceKind::O)));
        assert_eq!(board.get(6, 0), Some(Some(PieceKind::O)));
        assert!((0..10).all(|x| board.get(x, 1) == Some(None)));
    }

    #[test]
    fn lock_then_query_is_occupied() {
        let mut board = Board::new(10, 20);
        lock_piece(&mut board, PieceKind::T, 2, 4, 10);
        for (px, py) in piece_cells(PieceKind::T, 2, 4, 10) {
            assert!(board.is_occupied(px, py));
        }
    }
}
