//! Sticker-net simulator backend for 2x2x2 and 3x3x3 cubes.
//!
//! A cube is stored as the unfolded net of its stickers, a square [`Grid`] of
//! color IDs. Each move permutes a ring of cells around the turned layer and,
//! for outer faces, rotates that face's block of the net.

#[macro_use]
extern crate lazy_static;

mod errors;
mod face;
mod grid;
mod notation;
mod persist;
mod scramble;
mod size;
mod state;
pub mod tables;
mod twist;


pub use errors::*;
pub use face::{Edge, Face};
pub use grid::{Cell, Grid, MAX_CELL_VALUE};
pub use notation::{format_moves, invert_moves, parse_moves};
pub use scramble::{ScrambleParams, ScrambledCube};
pub use size::PuzzleSize;
pub use state::{CubeState, Fingerprint};
pub use twist::{Layer, Move, TwistDirection, moves};

/// Number of random moves in a default shuffle.
pub const DEFAULT_SHUFFLE_LENGTH: u32 = 50;
