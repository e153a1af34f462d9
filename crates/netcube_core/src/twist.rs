//! Layers, directions, and moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Face;

/// Rotation direction when looking at the face being turned; clockwise or
/// counterclockwise.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}

impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::Cw => Ok(()),
            TwistDirection::Ccw => write!(f, "'"),
        }
    }
}

impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }
}

/// Layer of the cube that can be turned.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Display,
    EnumString,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Layer {
    /// Up face.
    U,
    /// Down face.
    D,
    /// Left face.
    L,
    /// Right face.
    R,
    /// Front face.
    F,
    /// Back face.
    B,
    /// Middle layer between L and R, turning in the same direction as L.
    M,
    /// Middle layer between U and D, turning in the same direction as D.
    E,
    /// Middle layer between F and B, turning in the same direction as F.
    S,
}

impl Layer {
    /// All layers, outer faces first.
    pub const ALL: [Self; 9] = [
        Self::U,
        Self::D,
        Self::L,
        Self::R,
        Self::F,
        Self::B,
        Self::M,
        Self::E,
        Self::S,
    ];

    /// Returns the face turned by this layer, or `None` for a middle layer.
    pub fn face(self) -> Option<Face> {
        match self {
            Layer::U => Some(Face::U),
            Layer::D => Some(Face::D),
            Layer::L => Some(Face::L),
            Layer::R => Some(Face::R),
            Layer::F => Some(Face::F),
            Layer::B => Some(Face::B),
            Layer::M | Layer::E | Layer::S => None,
        }
    }

    /// Returns whether this is a middle layer.
    pub fn is_middle(self) -> bool {
        self.face().is_none()
    }

    /// Returns the outer face whose boundary ring and turning direction this
    /// layer shares.
    pub fn reference_face(self) -> Face {
        match self {
            Layer::U => Face::U,
            Layer::D | Layer::E => Face::D,
            Layer::L | Layer::M => Face::L,
            Layer::R => Face::R,
            Layer::F | Layer::S => Face::F,
            Layer::B => Face::B,
        }
    }
}

impl From<Face> for Layer {
    fn from(face: Face) -> Self {
        match face {
            Face::U => Layer::U,
            Face::D => Layer::D,
            Face::L => Layer::L,
            Face::R => Layer::R,
            Face::F => Layer::F,
            Face::B => Layer::B,
        }
    }
}

/// Quarter turn of a single layer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    /// Layer to turn.
    pub layer: Layer,
    /// Direction to turn it.
    pub direction: TwistDirection,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.layer, self.direction)
    }
}

impl Move {
    /// Constructs a move.
    pub const fn new(layer: Layer, direction: TwistDirection) -> Self {
        Self { layer, direction }
    }
    /// Constructs a clockwise move.
    pub const fn cw(layer: Layer) -> Self {
        Self::new(layer, TwistDirection::Cw)
    }
    /// Constructs a counterclockwise move.
    pub const fn ccw(layer: Layer) -> Self {
        Self::new(layer, TwistDirection::Ccw)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.layer, self.direction.rev())
    }

    /// Returns a dense index in `0..18`, unique to each move.
    pub(crate) fn index(self) -> usize {
        let layer = Layer::ALL
            .iter()
            .position(|&l| l == self.layer)
            .unwrap_or_default();
        layer * 2 + self.direction as usize
    }
}

/// Pre-baked moves.
pub mod moves {
    use super::{Layer, Move};

    /// Turn the right face clockwise 90 degrees.
    pub const R: Move = Move::cw(Layer::R);
    /// Turn the right face counterclockwise 90 degrees.
    pub const R_PRIME: Move = Move::ccw(Layer::R);
    /// Turn the left face clockwise 90 degrees.
    pub const L: Move = Move::cw(Layer::L);
    /// Turn the left face counterclockwise 90 degrees.
    pub const L_PRIME: Move = Move::ccw(Layer::L);
    /// Turn the top face clockwise 90 degrees.
    pub const U: Move = Move::cw(Layer::U);
    /// Turn the top face counterclockwise 90 degrees.
    pub const U_PRIME: Move = Move::ccw(Layer::U);
    /// Turn the bottom face clockwise 90 degrees.
    pub const D: Move = Move::cw(Layer::D);
    /// Turn the bottom face counterclockwise 90 degrees.
    pub const D_PRIME: Move = Move::ccw(Layer::D);
    /// Turn the front face clockwise 90 degrees.
    pub const F: Move = Move::cw(Layer::F);
    /// Turn the front face counterclockwise 90 degrees.
    pub const F_PRIME: Move = Move::ccw(Layer::F);
    /// Turn the back face clockwise 90 degrees.
    pub const B: Move = Move::cw(Layer::B);
    /// Turn the back face counterclockwise 90 degrees.
    pub const B_PRIME: Move = Move::ccw(Layer::B);

    /// Outer-face moves in the order used by move indices and by shuffling.
    ///
    /// **Changing this will break seeded scramble compatibility.**
    pub const NUMBERED: [Move; 12] = [
        R, R_PRIME, L_PRIME, L, U_PRIME, U, D, D_PRIME, F, F_PRIME, B_PRIME, B,
    ];
}
