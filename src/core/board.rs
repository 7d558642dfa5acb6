//! Board: the playfield grid of locked cells.
//!
//! Row-major storage, coordinates `(x, y)` with x growing rightward and y
//! growing downward. A cell is non-empty iff a locked block occupies it;
//! still-falling pieces are never written here. Dimensions are fixed at
//! construction.

use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (`y * width + x`).
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get the cell at `(x, y)`; `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set the cell at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a locked block.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// In bounds and empty.
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff every playable column of row `y` is occupied.
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= self.height as i8 {
            return false;
        }
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and return how many were cleared.
    ///
    /// Walks top to bottom; each full row is replaced by shifting every row
    /// above it down one and emptying the topmost row. The immediate shift
    /// only moves rows above the hit, so rows below that have not been
    /// scanned yet are unaffected and a single pass is correct for multiple
    /// simultaneous full rows.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..self.height as i8 {
            if self.is_row_full(y) {
                self.collapse_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Drop every row above `y` down one and empty the top row.
    fn collapse_row(&mut self, y: i8) {
        let width = self.width as usize;
        for row in (1..=y as usize).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Empty the whole board.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill an entire row with one kind. Test/setup helper.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..self.width as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn set_get_roundtrip() {
        let mut board = Board::new(10, 20);
        assert!(board.set(5, 10, Some(PieceKind::T)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert!(board.set(5, 10, None));
        assert_eq!(board.get(5, 10), Some(None));
    }

    #[test]
    fn out_of_bounds_reads_and_writes() {
        let mut board = Board::new(10, 20);
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, 20), None);
        assert!(!board.set(10, 0, Some(PieceKind::I)));
        assert!(!board.is_occupied(-1, 5));
        assert!(!board.is_valid(10, 5));
    }

    #[test]
    fn row_full_detection() {
        let mut board = Board::new(10, 20);
        assert!(!board.is_row_full(19));
        board.fill_row(19, PieceKind::I);
        assert!(board.is_row_full(19));
        board.set(4, 19, None);
        assert!(!board.is_row_full(19));
        // Out-of-range rows are never full.
        assert!(!board.is_row_full(-1));
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn collapse_shifts_rows_above_only() {
        let mut board = Board::new(4, 6);
        board.set(0, 2, Some(PieceKind::J));
        board.set(3, 4, Some(PieceKind::L));
        board.fill_row(3, PieceKind::I);

        assert_eq!(board.clear_full_rows(), 1);
        // Row 2 content moved down to row 3.
        assert_eq!(board.get(0, 3), Some(Some(PieceKind::J)));
        assert_eq!(board.get(0, 2), Some(None));
        // Row 4, below the cleared row, is untouched.
        assert_eq!(board.get(3, 4), Some(Some(PieceKind::L)));
        // Top row is empty.
        assert!((0..4).all(|x| board.get(x, 0) == Some(None)));
    }
}
