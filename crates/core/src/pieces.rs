//! Pieces module - tetromino shape matrices and the rotation transform
//!
//! Shapes are small boolean matrices (at most 4x4) rather than offset lists,
//! so a rotation is a pure matrix transform: an R x C shape becomes a C x R
//! shape with `rotated[x][R - 1 - y] = shape[y][x]`. There is no wall-kick
//! table; a rotation that collides is simply rejected by the caller.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{TetrominoKind, BOARD_WIDTH};

/// Largest extent of any catalog shape in either direction
pub const MAX_SHAPE_DIM: usize = 4;

/// Row every piece spawns on
pub const SPAWN_Y: i8 = 0;

/// An immutable tetromino matrix.
///
/// Only the top-left `rows x cols` corner of `cells` is meaningful; the rest
/// is always `false`, which keeps equality and hashing well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PieceShape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl PieceShape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty, ragged or oversized matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_core::pieces::PieceShape;
    ///
    /// let t = PieceShape::from_matrix(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(PieceShape::from_matrix(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_matrix(matrix: &[&[u8]]) -> Option<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if rows == 0 || cols == 0 || rows > MAX_SHAPE_DIM || cols > MAX_SHAPE_DIM {
            return None;
        }
        if matrix.iter().any(|r| r.len() != cols) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in matrix.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Some(Self {
            rows: rows as u8,
            cols: cols as u8,
            cells,
        })
    }

    /// Number of rows (height in cells)
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns (width in cells)
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (`row`, `col`) is occupied.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets `(dx, dy)` of every occupied cell, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Count of occupied cells (4 for every catalog shape)
    pub fn filled_count(&self) -> usize {
        self.offsets().count()
    }

    /// Rotate 90° clockwise into a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use brick_tetris_core::pieces::PieceShape;
    ///
    /// let i = PieceShape::from_matrix(&[&[1, 1, 1, 1]]).unwrap();
    /// let vertical = i.rotated();
    /// assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    /// assert_eq!(vertical.rotated().rotated().rotated().rotated(), vertical);
    /// ```
    pub fn rotated(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..r {
            for x in 0..c {
                cells[x][r - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Catalog shapes are at most two rows tall in spawn orientation.
const fn catalog(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_DIM]; 2]) -> PieceShape {
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut y = 0;
    while y < 2 {
        let mut x = 0;
        while x < MAX_SHAPE_DIM {
            cells[y][x] = bits[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    PieceShape { rows, cols, cells }
}

const I_SHAPE: PieceShape = catalog(1, 4, [[1, 1, 1, 1], [0, 0, 0, 0]]);
const O_SHAPE: PieceShape = catalog(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0]]);
const T_SHAPE: PieceShape = catalog(2, 3, [[1, 1, 1, 0], [0, 1, 0, 0]]);
const L_SHAPE: PieceShape = catalog(2, 3, [[1, 1, 1, 0], [1, 0, 0, 0]]);
const J_SHAPE: PieceShape = catalog(2, 3, [[1, 1, 1, 0], [0, 0, 1, 0]]);
const Z_SHAPE: PieceShape = catalog(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0]]);
const S_SHAPE: PieceShape = catalog(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0]]);

/// Spawn matrix for a catalog kind.
pub fn shape_for(kind: TetrominoKind) -> PieceShape {
    match kind {
        TetrominoKind::I => I_SHAPE,
        TetrominoKind::O => O_SHAPE,
        TetrominoKind::T => T_SHAPE,
        TetrominoKind::L => L_SHAPE,
        TetrominoKind::J => J_SHAPE,
        TetrominoKind::Z => Z_SHAPE,
        TetrominoKind::S => S_SHAPE,
    }
}

/// Column a shape spawns at: horizontally centered, biased left.
pub fn spawn_x(shape: &PieceShape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

/// The lookahead piece: shape and color drawn, not yet on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NextPiece {
    pub kind: TetrominoKind,
    pub shape: PieceShape,
    pub color: u8,
}

impl NextPiece {
    pub fn new(kind: TetrominoKind, color: u8) -> Self {
        Self {
            kind,
            shape: shape_for(kind),
            color,
        }
    }
}

/// The falling piece.
///
/// `x`/`y` locate the top-left corner of the shape matrix on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActivePiece {
    pub kind: TetrominoKind,
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
    pub color: u8,
}

impl ActivePiece {
    /// Place a lookahead piece at the spawn position.
    ///
    /// The caller must test collision immediately: a collision here means the
    /// stack reached the top and the game is over.
    pub fn spawn(next: NextPiece) -> Self {
        Self {
            kind: next.kind,
            shape: next.shape,
            x: spawn_x(&next.shape),
            y: SPAWN_Y,
            color: next.color,
        }
    }

    /// Same piece moved by (`dx`, `dy`).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its shape rotated clockwise in place.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_have_four_cells() {
        for kind in TetrominoKind::ALL {
            assert_eq!(shape_for(kind).filled_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotation_matches_transform() {
        // 1 1 1      0 1
        // 0 1 0  ->  1 1
        //            0 1
        let t = shape_for(TetrominoKind::T).rotated();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        let expected = PieceShape::from_matrix(&[&[0, 1], &[1, 1], &[0, 1]]).unwrap();
        assert_eq!(t, expected);
    }

    #[test]
    fn four_rotations_restore_every_shape() {
        for kind in TetrominoKind::ALL {
            let s = shape_for(kind);
            assert_eq!(s.rotated().rotated().rotated().rotated(), s);
        }
    }

    #[test]
    fn spawn_x_centers_by_width() {
        assert_eq!(spawn_x(&shape_for(TetrominoKind::I)), 3);
        assert_eq!(spawn_x(&shape_for(TetrominoKind::O)), 4);
        assert_eq!(spawn_x(&shape_for(TetrominoKind::T)), 4);
    }

    #[test]
    fn catalog_matches_matrix_literals() {
        let z = PieceShape::from_matrix(&[&[1, 1, 0], &[0, 1, 1]]).unwrap();
        assert_eq!(shape_for(TetrominoKind::Z), z);
        let i = PieceShape::from_matrix(&[&[1, 1, 1, 1]]).unwrap();
        assert_eq!(shape_for(TetrominoKind::I), i);
    }

    #[test]
    fn from_matrix_rejects_oversized() {
        assert!(PieceShape::from_matrix(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(PieceShape::from_matrix(&[]).is_none());
        assert!(PieceShape::from_matrix(&[&[]]).is_none());
    }

    #[test]
    fn is_filled_reads_out_of_range_as_empty() {
        let o = shape_for(TetrominoKind::O);
        assert!(o.is_filled(1, 1));
        assert!(!o.is_filled(2, 0));
        assert!(!o.is_filled(0, 2));
    }
}
