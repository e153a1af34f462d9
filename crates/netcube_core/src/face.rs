//! Faces of the cube and their blocks in the unfolded net.
//!
//! ```text
//!         [ U ]
//!  [ L ]  [ F ]  [ R ]
//!         [ D ]  [ B ]
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

/// Face of the cube.
///
/// Variants are listed in order of their solved color ID.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Display,
    EnumString,
    VariantArray,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Face {
    /// Up (white).
    U,
    /// Left (orange).
    L,
    /// Front (green).
    F,
    /// Right (red).
    R,
    /// Down (yellow).
    D,
    /// Back (blue).
    B,
}

impl Face {
    /// Returns the color ID that fills this face on a solved cube, in the
    /// range `1..=6`.
    pub fn color(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the face whose solved color is `color`, or `None` if `color`
    /// is `0` or out of range.
    pub fn from_color(color: u8) -> Option<Self> {
        Self::VARIANTS.get(usize::from(color).checked_sub(1)?).copied()
    }

    /// Returns the human-friendly name of the face's solved color.
    pub fn color_name(self) -> &'static str {
        match self {
            Face::U => "white",
            Face::L => "orange",
            Face::F => "green",
            Face::R => "red",
            Face::D => "yellow",
            Face::B => "blue",
        }
    }

    /// Returns the `(row, column)` of this face's block in the net, where each
    /// coordinate is in `0..3` and counts blocks, not cells.
    pub fn block(self) -> (usize, usize) {
        match self {
            Face::U => (0, 1),
            Face::L => (1, 0),
            Face::F => (1, 1),
            Face::R => (1, 2),
            Face::D => (2, 1),
            Face::B => (2, 2),
        }
    }

    /// Returns whether the face's block is drawn mirrored in the net.
    ///
    /// Every face is drawn as seen from outside the cube except the back
    /// face, which is drawn as seen through the cube from the front: its top
    /// row touches U and its right column touches R.
    pub fn is_mirrored(self) -> bool {
        self == Face::B
    }
}

/// Edge of a face block in the net.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top row.
    Top,
    /// Bottom row.
    Bottom,
    /// Leftmost column.
    Left,
    /// Rightmost column.
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_colors() {
        let colors: Vec<u8> = Face::VARIANTS.iter().map(|f| f.color()).collect();
        assert_eq!(colors, [1, 2, 3, 4, 5, 6]);
        for &face in Face::VARIANTS {
            assert_eq!(Face::from_color(face.color()), Some(face));
        }
        assert_eq!(Face::from_color(0), None);
        assert_eq!(Face::from_color(7), None);
    }

    #[test]
    fn test_blocks_are_distinct() {
        let mut blocks: Vec<_> = Face::VARIANTS.iter().map(|f| f.block()).collect();
        blocks.sort();
        blocks.dedup();
        assert_eq!(blocks.len(), 6);
        assert!(!blocks.contains(&(0, 0)));
        assert!(!blocks.contains(&(0, 2)));
        assert!(!blocks.contains(&(2, 0)));
    }
}
