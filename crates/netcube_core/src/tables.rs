//! Move tables generated from the adjacency of faces in the net.
//!
//! Each outer face is surrounded by a ring of four strips of `n` cells, one
//! strip on each neighboring face. [`ring()`] lists those strips in the order
//! that stickers flow during a clockwise turn; every ring permutation is
//! derived from it, for every size.

use smallvec::SmallVec;

use crate::{Cell, Edge, Face, Grid, Layer, Move, PuzzleSize, TwistDirection};

/// Row or column of a face block along one of its edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Strip {
    face: Face,
    edge: Edge,
    /// Whether cells run right-to-left or bottom-to-top.
    reversed: bool,
}

const fn fwd(face: Face, edge: Edge) -> Strip {
    Strip {
        face,
        edge,
        reversed: false,
    }
}
const fn rev(face: Face, edge: Edge) -> Strip {
    Strip {
        face,
        edge,
        reversed: true,
    }
}

/// Returns the boundary ring of an outer face. During a clockwise turn, the
/// stickers on strip `k` move to strip `k + 1`.
fn ring(face: Face) -> [Strip; 4] {
    use Edge::{Bottom, Left, Right, Top};
    use Face::{B, D, F, L, R, U};
    match face {
        U => [fwd(F, Top), fwd(L, Top), rev(B, Top), fwd(R, Top)],
        D => [fwd(L, Bottom), fwd(F, Bottom), fwd(R, Bottom), rev(B, Bottom)],
        L => [fwd(U, Left), fwd(F, Left), fwd(D, Left), rev(B, Left)],
        R => [fwd(F, Right), fwd(U, Right), rev(B, Right), fwd(D, Right)],
        F => [fwd(U, Bottom), fwd(R, Left), rev(D, Top), rev(L, Right)],
        B => [fwd(U, Top), rev(L, Left), rev(D, Bottom), fwd(R, Right)],
    }
}

impl Strip {
    /// Returns the cells of the strip `depth` cells in from its edge.
    fn cells(self, n: usize, depth: usize) -> SmallVec<[Cell; 3]> {
        let (block_row, block_col) = self.face.block();
        let (row0, col0) = (block_row * n, block_col * n);
        let mut cells: SmallVec<[Cell; 3]> = (0..n)
            .map(|i| match self.edge {
                Edge::Top => Cell::new(row0 + depth, col0 + i),
                Edge::Bottom => Cell::new(row0 + n - 1 - depth, col0 + i),
                Edge::Left => Cell::new(row0 + i, col0 + depth),
                Edge::Right => Cell::new(row0 + i, col0 + n - 1 - depth),
            })
            .collect();
        if self.reversed {
            cells.reverse();
        }
        cells
    }
}

/// Quarter turn of a face block within the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BlockRotation {
    /// Face whose block rotates.
    pub face: Face,
    /// Whether the block turns clockwise as drawn in the grid, so that its
    /// top row becomes its right column.
    pub grid_clockwise: bool,
}

impl BlockRotation {
    fn apply(self, grid: &mut Grid) {
        let n = grid.size().n();
        let cells: SmallVec<[Cell; 9]> = grid.face_block_cells(self.face).collect();
        let old: SmallVec<[u8; 9]> = cells.iter().map(|&cell| grid[cell]).collect();
        for i in 0..n {
            for j in 0..n {
                let (src_row, src_col) = if self.grid_clockwise {
                    (n - 1 - j, i)
                } else {
                    (j, n - 1 - i)
                };
                grid[cells[i * n + j]] = old[src_row * n + src_col];
            }
        }
    }
}

/// Precomputed effect of one move on a grid of a particular size.
///
/// Applying the table performs `grid[dest[k]] = old_grid[source[k]]` for all
/// `k` simultaneously, then rotates the turned face's block if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTable {
    /// Move that this table implements.
    pub mv: Move,
    /// Cells read, in the same order as `dest`.
    pub source: Vec<Cell>,
    /// Cells written.
    pub dest: Vec<Cell>,
    /// Rotation of the turned face, or `None` for a middle layer.
    pub block: Option<BlockRotation>,
}

impl MoveTable {
    /// Builds the table for `mv`, or returns `None` if `mv` is not a move of a
    /// cube of the given size.
    pub fn build(size: PuzzleSize, mv: Move) -> Option<Self> {
        if !size.supports(mv) {
            return None;
        }
        let n = size.n();
        let face = mv.layer.reference_face();
        let (depth, skip) = match mv.layer.face() {
            Some(_) => (0, None),
            // The middle cell of each strip is a face center.
            None => ((n - 1) / 2, Some(n / 2)),
        };

        let strips: SmallVec<[SmallVec<[Cell; 3]>; 4]> = ring(face)
            .into_iter()
            .map(|strip| {
                let mut cells = strip.cells(n, depth);
                if let Some(i) = skip {
                    cells.remove(i);
                }
                cells
            })
            .collect();

        let mut source = vec![];
        let mut dest = vec![];
        for k in 0..4 {
            let (from, to) = match mv.direction {
                TwistDirection::Cw => (&strips[k], &strips[(k + 1) % 4]),
                TwistDirection::Ccw => (&strips[(k + 1) % 4], &strips[k]),
            };
            source.extend_from_slice(from);
            dest.extend_from_slice(to);
        }

        let block = mv.layer.face().map(|face| BlockRotation {
            face,
            grid_clockwise: (mv.direction == TwistDirection::Cw) != face.is_mirrored(),
        });

        Some(Self {
            mv,
            source,
            dest,
            block,
        })
    }

    /// Applies the move to a grid.
    pub(crate) fn apply(&self, grid: &mut Grid) {
        let values: SmallVec<[u8; 12]> = self.source.iter().map(|&cell| grid[cell]).collect();
        for (&cell, value) in self.dest.iter().zip(values) {
            grid[cell] = value;
        }
        if let Some(block) = self.block {
            block.apply(grid);
        }
    }
}

/// All move tables for one puzzle size.
#[derive(Debug)]
pub struct MoveTables {
    /// Indexed by [`Move::index()`].
    tables: Vec<Option<MoveTable>>,
}

impl MoveTables {
    fn build(size: PuzzleSize) -> Self {
        let tables = Layer::ALL
            .into_iter()
            .flat_map(|layer| [Move::cw(layer), Move::ccw(layer)])
            .map(|mv| MoveTable::build(size, mv))
            .collect();
        log::debug!("built move tables for {size}");
        Self { tables }
    }

    /// Returns the table for a move, or `None` if the move does not exist on
    /// this puzzle.
    pub fn get(&self, mv: Move) -> Option<&MoveTable> {
        self.tables.get(mv.index())?.as_ref()
    }

    /// Returns the tables of every move of this puzzle.
    pub fn iter(&self) -> impl Iterator<Item = &MoveTable> {
        self.tables.iter().flatten()
    }
}

lazy_static! {
    static ref TABLES_2: MoveTables = MoveTables::build(PuzzleSize::TWO);
    static ref TABLES_3: MoveTables = MoveTables::build(PuzzleSize::THREE);
}

/// Returns the shared move tables for a puzzle size.
pub fn move_tables(size: PuzzleSize) -> &'static MoveTables {
    if size == PuzzleSize::TWO {
        &TABLES_2
    } else {
        &TABLES_3
    }
}
