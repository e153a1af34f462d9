use std::fmt;

use rand::Rng;
use strum::VariantArray;

use crate::tables::move_tables;
use crate::{Face, Grid, GridError, Layer, Move, MoveError, PuzzleSize, TwistDirection, moves};

/// Deterministic identity of a cube state: the raw row-major bytes of its
/// grid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(Box<[u8]>);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl Fingerprint {
    /// Returns the bytes of the fingerprint.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// State of a 2x2x2 or 3x3x3 cube, stored as an unfolded sticker net.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    grid: Grid,
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

impl CubeState {
    /// Constructs a solved cube.
    pub fn new_solved(size: PuzzleSize) -> Self {
        Self {
            grid: Grid::new_solved(size),
        }
    }

    /// Restores a cube from the row-major bytes of its grid.
    ///
    /// The bytes are taken verbatim; they are only checked for length and
    /// for values in `0..=6`.
    pub fn from_saved(size: PuzzleSize, bytes: &[u8]) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::from_bytes(size, bytes)?,
        })
    }

    /// Returns the size of the cube.
    pub fn size(&self) -> PuzzleSize {
        self.grid.size()
    }

    /// Returns a read-only view of the net.
    pub fn grid_view(&self) -> &Grid {
        &self.grid
    }

    /// Applies a move.
    ///
    /// Returns an error without modifying the cube if `mv` turns a middle
    /// layer and the cube has none.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let size = self.size();
        let table = move_tables(size)
            .get(mv)
            .ok_or(MoveError::NoMiddleLayer { mv, size })?;
        log::trace!("applying {mv} to {size} cube");
        table.apply(&mut self.grid);
        Ok(())
    }

    /// Turns an outer face. Every cube has all six, so this never fails.
    pub fn twist(&mut self, face: Face, direction: TwistDirection) {
        let mv = Move::new(Layer::from(face), direction);
        if let Some(table) = move_tables(self.size()).get(mv) {
            log::trace!("applying {mv} to {} cube", self.size());
            table.apply(&mut self.grid);
        }
    }

    /// Applies a sequence of moves.
    ///
    /// All moves are checked before any is applied, so the cube is left
    /// unmodified on error.
    pub fn apply_all(&mut self, moves: &[Move]) -> Result<(), MoveError> {
        let size = self.size();
        if let Some(&mv) = moves.iter().find(|&&mv| !size.supports(mv)) {
            return Err(MoveError::NoMiddleLayer { mv, size });
        }
        for &mv in moves {
            self.apply(mv)?;
        }
        Ok(())
    }

    /// Applies one of the numbered outer-face moves listed in
    /// [`moves::NUMBERED`].
    pub fn apply_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let mv = *moves::NUMBERED
            .get(index)
            .ok_or(MoveError::IndexOutOfRange(index))?;
        self.apply(mv)?;
        Ok(mv)
    }

    /// Applies `count` outer-face moves chosen uniformly at random, with
    /// replacement, and returns them.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) -> Vec<Move> {
        log::debug!("shuffling {} cube with {count} moves", self.size());
        (0..count)
            .map(|_| {
                let mv = moves::NUMBERED[rng.random_range(0..moves::NUMBERED.len())];
                self.twist(mv.layer.reference_face(), mv.direction);
                mv
            })
            .collect()
    }

    /// Returns the deterministic identity of this state.
    ///
    /// Two states have equal fingerprints iff their grids are identical.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.grid.as_bytes().into())
    }

    /// Returns whether every face block holds a single color.
    pub fn is_solved(&self) -> bool {
        Face::VARIANTS.iter().all(|&face| {
            let mut values = self.grid.face_values(face);
            let first = values.next();
            values.all(|v| Some(v) == first)
        })
    }

    /// Returns the number of cells holding each value, indexed by value.
    pub fn color_counts(&self) -> [usize; 7] {
        let mut counts = [0; 7];
        for &value in self.grid.as_bytes() {
            if let Some(count) = counts.get_mut(usize::from(value)) {
                *count += 1;
            }
        }
        counts
    }

    /// Returns whether the empty blocks of the net are empty and every color
    /// appears once per sticker of a face.
    ///
    /// This holds for every state reachable from a solved cube.
    pub fn is_well_formed(&self) -> bool {
        let n2 = self.size().stickers_per_face();
        let counts = self.color_counts();
        self.grid.empty_block_cells().all(|cell| self.grid[cell] == 0)
            && counts[1..].iter().all(|&count| count == n2)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_solved_state() {
        for size in PuzzleSize::ALL {
            let cube = CubeState::new_solved(size);
            assert!(cube.is_solved());
            assert!(cube.is_well_formed());
            let n2 = size.stickers_per_face();
            assert_eq!(cube.color_counts(), [3 * n2, n2, n2, n2, n2, n2, n2]);
        }
    }

    #[test]
    fn test_middle_layer_rejected_on_2x2() {
        let mut cube = CubeState::new_solved(PuzzleSize::TWO);
        let mv = Move::cw(Layer::M);
        assert_eq!(
            cube.apply(mv),
            Err(MoveError::NoMiddleLayer {
                mv,
                size: PuzzleSize::TWO,
            }),
        );
        assert!(cube.is_solved());
    }

    #[test]
    fn test_apply_all_is_checked_up_front() {
        let mut cube = CubeState::new_solved(PuzzleSize::TWO);
        let err = cube.apply_all(&[moves::R, moves::U, Move::ccw(Layer::E)]);
        assert!(err.is_err());
        assert_eq!(cube, CubeState::new_solved(PuzzleSize::TWO));
    }

    #[test]
    fn test_apply_index() {
        let mut cube = CubeState::new_solved(PuzzleSize::THREE);
        assert_eq!(cube.apply_index(2), Ok(moves::L_PRIME));
        assert_eq!(cube.apply_index(3), Ok(moves::L));
        assert!(cube.is_solved());
        assert_eq!(cube.apply_index(12), Err(MoveError::IndexOutOfRange(12)));
    }

    #[test]
    fn test_twist_matches_apply() {
        let mut a = CubeState::new_solved(PuzzleSize::THREE);
        let mut b = a.clone();
        a.twist(Face::B, TwistDirection::Ccw);
        b.apply(moves::B_PRIME).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_solved());
    }

    #[test]
    fn test_shuffle_is_reproducible() {
        let mut a = CubeState::new_solved(PuzzleSize::TWO);
        let mut b = a.clone();
        let moves_a = a.shuffle(30, &mut ChaCha12Rng::seed_from_u64(7));
        let moves_b = b.shuffle(30, &mut ChaCha12Rng::seed_from_u64(7));
        assert_eq!(moves_a.len(), 30);
        assert_eq!(moves_a, moves_b);
        assert_eq!(a, b);

        let mut c = CubeState::new_solved(PuzzleSize::TWO);
        c.apply_all(&moves_a).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_fingerprint_hex() {
        let cube = CubeState::new_solved(PuzzleSize::TWO);
        let hex = cube.fingerprint().to_string();
        assert_eq!(hex.len(), 72);
        assert!(hex.starts_with("000001010000"));
    }
}
