//! Playfield grid: settled cells, row scanning and line clearing.
//!
//! The grid is sized at construction time (standard 10x20) and never changes
//! shape afterwards. Cells are stored in a flat row-major vector for cache
//! locality; coordinates are `(x, y)` with `y = 0` at the top (spawn side).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// The settled playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// Panics if either dimension is zero; non-positive dimensions are a
    /// programmer error, not a runtime condition.
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "grid dimensions must be positive");
        assert!(
            cols <= i16::MAX as usize && rows <= i16::MAX as usize,
            "grid dimensions must fit signed 16-bit coordinates"
        );
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Every cell of row `y` is filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        let start = y * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above it down and refilling
    /// the top with empty rows.
    ///
    /// Returns the cleared row indices in bottom-to-top order. Handles
    /// non-contiguous full rows in a single pass; a lock can complete at most
    /// four rows (the height of a piece), hence the fixed capacity.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut write = self.rows;

        for read in (0..self.rows).rev() {
            if self.is_row_full(read) {
                cleared.push(read);
            } else {
                write -= 1;
                if write != read {
                    let src = read * self.cols;
                    let dst = write * self.cols;
                    self.cells.copy_within(src..src + self.cols, dst);
                }
            }
        }

        for cell in &mut self.cells[..write * self.cols] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Fill an entire row with one kind. Test and scenario setup helper.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        assert!(y < self.rows);
        let start = y * self.cols;
        for cell in &mut self.cells[start..start + self.cols] {
            *cell = Some(kind);
        }
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.rows(), 20);
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn zero_dimension_panics() {
        let _ = Grid::new(0, 20);
    }

    #[test]
    fn get_set_roundtrip_and_bounds() {
        let mut grid = Grid::new(10, 20);

        assert!(grid.set(5, 10, Some(PieceKind::T)));
        assert_eq!(grid.get(5, 10), Some(Some(PieceKind::T)));

        assert!(!grid.set(-1, 0, Some(PieceKind::I)));
        assert!(!grid.set(10, 0, Some(PieceKind::I)));
        assert!(!grid.set(0, 20, Some(PieceKind::I)));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    fn row_full_detection() {
        let mut grid = Grid::new(10, 20);
        assert!(!grid.is_row_full(19));

        grid.fill_row(19, PieceKind::I);
        assert!(grid.is_row_full(19));

        grid.set(3, 19, None);
        assert!(!grid.is_row_full(19));
    }

    #[test]
    fn clear_single_row_shifts_above() {
        let mut grid = Grid::new(10, 20);
        grid.fill_row(19, PieceKind::I);
        grid.set(0, 18, Some(PieceKind::T));

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);

        // The partial row above lands on the floor; the top is empty again.
        assert_eq!(grid.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(grid.get(0, 18), Some(None));
    }

    #[test]
    fn clear_non_contiguous_rows_in_one_pass() {
        let mut grid = Grid::new(10, 20);
        grid.fill_row(5, PieceKind::S);
        grid.fill_row(9, PieceKind::Z);
        grid.set(2, 7, Some(PieceKind::O));
        grid.set(4, 0, Some(PieceKind::L));

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[9, 5]);

        // Row 7 was below one cleared row (5), so it shifts down by one;
        // row 0 was above both, so it shifts down by two.
        assert_eq!(grid.get(2, 8), Some(Some(PieceKind::O)));
        assert_eq!(grid.get(4, 2), Some(Some(PieceKind::L)));
        assert_eq!(grid.get(2, 7), Some(None));
        assert_eq!(grid.get(4, 0), Some(None));
        assert!(!grid.is_row_full(5));
        assert!(!grid.is_row_full(9));
    }

    #[test]
    fn clear_four_contiguous_rows() {
        let mut grid = Grid::new(10, 20);
        for y in 16..20 {
            grid.fill_row(y, PieceKind::I);
        }

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), 4);
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }
}
