//! Standard move notation: `R`, `R'` (or `Ri`), and `R2`.

use std::str::FromStr;

use itertools::Itertools;

use crate::{Layer, Move, ParseMoveError, TwistDirection};

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a single quarter turn such as `U` or `U'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            (mv, 1) => Ok(mv),
            _ => Err(ParseMoveError::InvalidSuffix(s.to_owned())),
        }
    }
}

/// Parses a token into a quarter turn and a repeat count.
fn parse_token(token: &str) -> Result<(Move, usize), ParseMoveError> {
    let unknown_layer = || ParseMoveError::UnknownLayer(token.to_owned());
    let (letter, suffix) = token.split_at_checked(1).ok_or_else(unknown_layer)?;
    let layer: Layer = letter.parse().map_err(|_| unknown_layer())?;
    let (direction, count) = match suffix {
        "" => (TwistDirection::Cw, 1),
        "'" | "i" => (TwistDirection::Ccw, 1),
        // A half turn is the same in either direction.
        "2" | "2'" => (TwistDirection::Cw, 2),
        _ => return Err(ParseMoveError::InvalidSuffix(token.to_owned())),
    };
    Ok((Move::new(layer, direction), count))
}

/// Parses a whitespace-separated move sequence, expanding half turns into two
/// quarter turns.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, ParseMoveError> {
    let mut moves = vec![];
    for token in text.split_whitespace() {
        let (mv, count) = parse_token(token)?;
        moves.extend(std::iter::repeat_n(mv, count));
    }
    Ok(moves)
}

/// Formats a move sequence, separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

/// Returns the sequence that undoes `moves`.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::moves;

    #[test]
    fn test_parse_single_moves() {
        assert_eq!("R".parse(), Ok(moves::R));
        assert_eq!("R'".parse(), Ok(moves::R_PRIME));
        assert_eq!("Ri".parse(), Ok(moves::R_PRIME));
        assert_eq!("M'".parse(), Ok(Move::ccw(Layer::M)));
        assert_eq!(
            "R2".parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix("R2".to_owned())),
        );
        assert_eq!(
            "X".parse::<Move>(),
            Err(ParseMoveError::UnknownLayer("X".to_owned())),
        );
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_moves("R U2  F'\tBi S2'").unwrap(),
            vec![
                moves::R,
                moves::U,
                moves::U,
                moves::F_PRIME,
                moves::B_PRIME,
                Move::cw(Layer::S),
                Move::cw(Layer::S),
            ],
        );
        assert_eq!(parse_moves("  ").unwrap(), vec![]);
        assert_eq!(
            parse_moves("R U''"),
            Err(ParseMoveError::InvalidSuffix("U''".to_owned())),
        );
        assert_eq!(
            parse_moves("r"),
            Err(ParseMoveError::UnknownLayer("r".to_owned())),
        );
    }

    #[test]
    fn test_format_and_invert() {
        let seq = parse_moves("R U R' U'").unwrap();
        assert_eq!(format_moves(&seq), "R U R' U'");
        assert_eq!(format_moves(&invert_moves(&seq)), "U R U' R'");
        let seq = parse_moves("F2 E'").unwrap();
        assert_eq!(format_moves(&seq), "F F E'");
        assert_eq!(format_moves(&invert_moves(&seq)), "E F' F'");
    }
}
