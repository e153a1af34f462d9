use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Layer, Move, SizeError, TwistDirection};

/// Edge length of a supported cube, in stickers.
///
/// An `n`×`n`×`n` cube unfolds into a net of `3n`×`3n` cells.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct PuzzleSize(u8);

impl PuzzleSize {
    /// 2x2x2 cube.
    pub const TWO: Self = Self(2);
    /// 3x3x3 cube.
    pub const THREE: Self = Self(3);
    /// All supported sizes.
    pub const ALL: [Self; 2] = [Self::TWO, Self::THREE];

    /// Returns the size for an `n`×`n`×`n` cube, or an error if `n` is not
    /// supported.
    pub fn new(n: u8) -> Result<Self, SizeError> {
        Self::ALL
            .into_iter()
            .find(|size| size.0 == n)
            .ok_or(SizeError::Unsupported(n))
    }

    /// Returns the number of stickers along each edge of the cube.
    pub fn n(self) -> usize {
        usize::from(self.0)
    }
    /// Returns the number of cells along each side of the net.
    pub fn side(self) -> usize {
        3 * self.n()
    }
    /// Returns the number of cells in the net, including empty corners.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }
    /// Returns the number of stickers on each face.
    pub fn stickers_per_face(self) -> usize {
        self.n() * self.n()
    }

    /// Returns whether the cube has a middle layer between each pair of
    /// opposite faces.
    pub fn has_middle_layer(self) -> bool {
        self.0 % 2 == 1
    }

    /// Returns whether `mv` is one of this puzzle's moves.
    pub fn supports(self, mv: Move) -> bool {
        !mv.layer.is_middle() || self.has_middle_layer()
    }

    /// Returns every move of this puzzle, outer faces first.
    pub fn moves(self) -> impl Iterator<Item = Move> {
        Layer::ALL
            .into_iter()
            .flat_map(|layer| {
                [TwistDirection::Cw, TwistDirection::Ccw].map(|dir| Move::new(layer, dir))
            })
            .filter(move |&mv| self.supports(mv))
    }
}

impl TryFrom<u8> for PuzzleSize {
    type Error = SizeError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PuzzleSize> for u8 {
    fn from(size: PuzzleSize) -> Self {
        size.0
    }
}

impl fmt::Display for PuzzleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        write!(f, "{n}x{n}x{n}")
    }
}

impl FromStr for PuzzleSize {
    type Err = SizeError;

    /// Parses `3`, `3x3` or `3x3x3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('x');
        let first = parts.next().unwrap_or_default();
        let n: u8 = first
            .parse()
            .map_err(|_| SizeError::InvalidString(s.to_owned()))?;
        if parts.any(|part| part != first) {
            return Err(SizeError::InvalidString(s.to_owned()));
        }
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_validation() {
        assert_eq!(PuzzleSize::new(2), Ok(PuzzleSize::TWO));
        assert_eq!(PuzzleSize::new(3), Ok(PuzzleSize::THREE));
        assert_eq!(PuzzleSize::new(4), Err(SizeError::Unsupported(4)));
        assert_eq!(PuzzleSize::new(0), Err(SizeError::Unsupported(0)));
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("3".parse(), Ok(PuzzleSize::THREE));
        assert_eq!("2x2x2".parse(), Ok(PuzzleSize::TWO));
        assert_eq!("3x3".parse(), Ok(PuzzleSize::THREE));
        assert!("3x2".parse::<PuzzleSize>().is_err());
        assert!("cube".parse::<PuzzleSize>().is_err());
        assert_eq!(PuzzleSize::THREE.to_string(), "3x3x3");
    }

    #[test]
    fn test_move_counts() {
        assert_eq!(PuzzleSize::TWO.moves().count(), 12);
        assert_eq!(PuzzleSize::THREE.moves().count(), 18);
        assert_eq!(PuzzleSize::THREE.side(), 9);
        assert_eq!(PuzzleSize::TWO.cell_count(), 36);
    }
}
