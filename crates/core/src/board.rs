//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of color ids stored in a flat array for cache
//! locality. Coordinates are (x, y) with x in 0..10 left to right and y in
//! 0..20 top to bottom. Only [`Board::merge`] and [`Board::clear_full_lines`]
//! change the grid during play.

use crate::pieces::PieceShape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, COLOR_COUNT, EMPTY};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major grid contents, as exposed in snapshots
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from row-major grid contents.
    ///
    /// Values above the color range are clamped to the last color id so the
    /// `[0, 7]` cell invariant holds.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = cell.min(COLOR_COUNT);
            }
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    ///
    /// Returns false (and leaves the grid untouched) if the position is out of
    /// bounds or the value is not a valid color id.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > COLOR_COUNT {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Whether `shape` placed with its top-left corner at (`x`, `y`) collides.
    ///
    /// A cell collides when it leaves the side walls, reaches below the floor,
    /// or lands on a settled block. Cells above the top edge (`y < 0`) only
    /// check the side walls, so a piece can enter from above.
    pub fn collision(&self, shape: &PieceShape, x: i8, y: i8) -> bool {
        shape.offsets().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `color` into every grid cell covered by `shape` at (`x`, `y`).
    ///
    /// The caller must have checked [`Board::collision`] first. Cells above
    /// the top edge have nowhere to go and are dropped.
    pub fn merge(&mut self, shape: &PieceShape, x: i8, y: i8, color: Cell) {
        debug_assert!(!self.collision(shape, x, y));
        for (dx, dy) in shape.offsets() {
            self.set(x + dx, y + dy, color);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&c| c != EMPTY)
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top.
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(EMPTY);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. After a removal the same index is
    /// checked again, since the row shifted into it may be full too.
    pub fn clear_full_lines(&mut self) -> u8 {
        let mut removed = 0u8;
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                removed += 1;
            } else {
                y -= 1;
            }
        }
        removed
    }

    /// Cells of row `y` (left to right). Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Number of non-empty cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major array.
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_for;
    use crate::types::TetrominoKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_set_rejects_invalid_color() {
        let mut board = Board::new();
        assert!(!board.set(0, 0, COLOR_COUNT + 1));
        assert_eq!(board.get(0, 0), Some(EMPTY));
        assert!(board.set(0, 0, COLOR_COUNT));
    }

    #[test]
    fn test_from_grid_clamps_colors() {
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        grid[3][4] = 42;
        let board = Board::from_grid(&grid);
        assert_eq!(board.get(4, 3), Some(COLOR_COUNT));
    }

    #[test]
    fn test_collision_above_top_checks_walls_only() {
        let mut board = Board::new();
        let i = shape_for(TetrominoKind::I).rotated(); // vertical, 4 tall
        board.set(0, 0, 1);

        // Three cells above the grid and one on the occupied (0, 0).
        assert!(board.collision(&i, 0, -3));
        // Entirely above the grid in column 1: no collision.
        assert!(!board.collision(&i, 1, -4));
        // Above the grid but past the side wall: still a collision.
        assert!(board.collision(&i, -1, -4));
        assert!(board.collision(&i, BOARD_WIDTH as i8, -4));
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        board.set(2, 17, 3);
        board.set(5, 18, 4);
        board.clear_row(18);
        assert_eq!(board.get(2, 18), Some(3));
        assert_eq!(board.get(5, 18), Some(EMPTY));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(9, 19, 7);
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_grid(&mut grid);
        assert_eq!(grid[19][9], 7);
        assert_eq!(Board::from_grid(&grid), board);
    }
}
