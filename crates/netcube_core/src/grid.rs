use std::fmt;
use std::ops::{Index, IndexMut};

use strum::VariantArray;

use crate::{Face, GridError, PuzzleSize};

/// Highest value a cell may hold. `0` is an empty cell and `1..=6` are
/// colors.
pub const MAX_CELL_VALUE: u8 = 6;

/// Position of a cell in the net.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Row, counting from the top.
    pub row: usize,
    /// Column, counting from the left.
    pub col: usize,
}

impl Cell {
    /// Constructs a cell position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Unfolded sticker net of a cube: a square matrix of color IDs, stored
/// row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: PuzzleSize,
    cells: Box<[u8]>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({}) [", self.size)?;
        for row in self.rows() {
            writeln!(f, "    {row:?}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Grid {
    /// Draws the net with one digit per sticker and `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &value in row {
                match value {
                    0 => write!(f, ".")?,
                    v => write!(f, "{v}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Index<Cell> for Grid {
    type Output = u8;

    fn index(&self, cell: Cell) -> &u8 {
        &self.cells[self.flat_index(cell)]
    }
}

impl IndexMut<Cell> for Grid {
    fn index_mut(&mut self, cell: Cell) -> &mut u8 {
        let i = self.flat_index(cell);
        &mut self.cells[i]
    }
}

impl Grid {
    /// Constructs a solved net: each face block filled with its color and the
    /// empty corner blocks left at `0`.
    pub(crate) fn new_solved(size: PuzzleSize) -> Self {
        let mut grid = Self {
            size,
            cells: vec![0; size.cell_count()].into_boxed_slice(),
        };
        for &face in Face::VARIANTS {
            for cell in grid.face_block_cells(face) {
                grid[cell] = face.color();
            }
        }
        grid
    }

    /// Constructs a net from its row-major bytes.
    pub(crate) fn from_bytes(size: PuzzleSize, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = size.cell_count();
        if bytes.len() != expected {
            return Err(GridError::WrongLength {
                expected,
                actual: bytes.len(),
            });
        }
        if let Some(i) = bytes.iter().position(|&v| v > MAX_CELL_VALUE) {
            return Err(GridError::ValueOutOfRange {
                row: i / size.side(),
                col: i % size.side(),
                value: bytes[i],
            });
        }
        Ok(Self {
            size,
            cells: bytes.into(),
        })
    }

    fn flat_index(&self, cell: Cell) -> usize {
        assert!(
            cell.row < self.side() && cell.col < self.side(),
            "{cell:?} is outside the {0}x{0} grid",
            self.side(),
        );
        cell.row * self.side() + cell.col
    }

    /// Returns the size of the cube.
    pub fn size(&self) -> PuzzleSize {
        self.size
    }
    /// Returns the number of cells along each side of the grid.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Returns the value at `(row, col)`, or `None` if it is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.side() && col < self.side()).then(|| self[Cell::new(row, col)])
    }

    /// Returns an iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.side())
    }

    /// Returns the row-major bytes of the grid, one byte per cell.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the positions of the cells in a face's block, row-major.
    pub fn face_block_cells(&self, face: Face) -> impl Iterator<Item = Cell> + use<> {
        block_cells(self.size.n(), face.block())
    }

    /// Returns the values in a face's block, row-major.
    pub fn face_values(&self, face: Face) -> impl Iterator<Item = u8> + '_ {
        self.face_block_cells(face).map(|cell| self[cell])
    }

    /// Returns the positions of the cells in the corner blocks of the net that
    /// hold no face.
    pub fn empty_block_cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let n = self.size.n();
        EMPTY_BLOCKS
            .into_iter()
            .flat_map(move |block| block_cells(n, block))
    }
}

/// Blocks of the net that hold no face.
const EMPTY_BLOCKS: [(usize, usize); 3] = [(0, 0), (0, 2), (2, 0)];

fn block_cells(n: usize, (block_row, block_col): (usize, usize)) -> impl Iterator<Item = Cell> {
    (0..n).flat_map(move |r| (0..n).map(move |c| Cell::new(block_row * n + r, block_col * n + c)))
}
