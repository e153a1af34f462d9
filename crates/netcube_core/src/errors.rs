use thiserror::Error;

use crate::{Move, PuzzleSize};

/// Error produced when constructing a [`PuzzleSize`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SizeError {
    /// Size is not 2 or 3
    #[error("unsupported puzzle size {0}; expected 2 or 3")]
    Unsupported(u8),
    /// String is not a size
    #[error("invalid puzzle size {0:?}")]
    InvalidString(String),
}

/// Error produced when decoding a saved grid.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GridError {
    /// Byte length does not match the puzzle size
    #[error("expected {expected} bytes but got {actual}")]
    WrongLength {
        /// Cell count of the expected grid.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
    /// Cell holds a value that is not a color ID
    #[error("cell ({row}, {col}) holds {value}, which is not in 0..=6")]
    ValueOutOfRange {
        /// Row of the bad cell.
        row: usize,
        /// Column of the bad cell.
        col: usize,
        /// Value found.
        value: u8,
    },
}

/// Error produced when a move cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Middle-layer move requested on a cube without a middle layer
    #[error("{mv} is not a move of the {size} cube, which has no middle layer")]
    NoMiddleLayer {
        /// Move requested.
        mv: Move,
        /// Size of the cube.
        size: PuzzleSize,
    },
    /// Numbered move outside `0..12`
    #[error("move index {0} is out of range; expected 0..12")]
    IndexOutOfRange(usize),
}

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Token does not start with a layer letter
    #[error("unknown layer in {0:?}")]
    UnknownLayer(String),
    /// Token has trailing characters that are not a direction or repeat count
    #[error("invalid suffix in {0:?}; expected ', i, or 2")]
    InvalidSuffix(String),
}

/// Error produced when saving or loading a cube state.
#[derive(Error, Debug)]
pub enum PersistError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File contents are not a valid grid
    #[error("corrupted cube state: {0}")]
    CorruptedState(#[from] GridError),
}
