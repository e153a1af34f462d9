use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{CubeState, DEFAULT_SHUFFLE_LENGTH, Move, PuzzleSize};

/// Parameters to deterministically generate a move sequence to scramble a
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of moves to apply.
    pub length: u32,
    /// Random seed, probably sourced from the thread RNG.
    pub seed: String,
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_LENGTH)
    }
}

impl ScrambleParams {
    /// Generates new scramble parameters with a random seed.
    pub fn new(length: u32) -> Self {
        let seed = rand::rng().random::<u64>().to_string();
        Self::with_seed(length, seed)
    }

    /// Constructs scramble parameters with a specific seed.
    pub fn with_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    /// Returns the RNG that produces the scramble.
    ///
    /// **Changing this will break seeded scramble compatibility.**
    pub fn rng(&self) -> ChaCha12Rng {
        let digest = Sha256::new()
            .chain_update(self.seed.len().to_le_bytes())
            .chain_update(self.seed.as_bytes())
            .finalize();
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        ChaCha12Rng::from_seed(seed)
    }
}

/// Output of scrambling a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble moves applied.
    pub moves: Vec<Move>,
    /// State of the cube after scrambling.
    pub state: CubeState,
}

impl CubeState {
    /// Constructs a solved cube and scrambles it.
    pub fn new_scrambled(size: PuzzleSize, params: &ScrambleParams) -> ScrambledCube {
        let mut state = Self::new_solved(size);
        let moves = state.shuffle(params.length, &mut params.rng());
        log::debug!(
            "scrambled {size} cube with seed {:?}: {}",
            params.seed,
            crate::format_moves(&moves),
        );
        ScrambledCube {
            params: params.clone(),
            moves,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_scramble_is_deterministic() {
        let params = ScrambleParams::with_seed(25, "netcube");
        let a = CubeState::new_scrambled(PuzzleSize::THREE, &params);
        let b = CubeState::new_scrambled(PuzzleSize::THREE, &params);
        assert_eq!(a, b);
        assert_eq!(a.moves.len(), 25);
        assert!(a.state.is_well_formed());

        let mut replay = CubeState::new_solved(PuzzleSize::THREE);
        replay.apply_all(&a.moves).unwrap();
        assert_eq!(replay, a.state);
    }

    #[test]
    fn test_seeds_differ() {
        let a = ScrambleParams::with_seed(40, "a");
        let b = ScrambleParams::with_seed(40, "b");
        let a = CubeState::new_scrambled(PuzzleSize::TWO, &a);
        let b = CubeState::new_scrambled(PuzzleSize::TWO, &b);
        assert_ne!(a.moves, b.moves);
    }

    #[test]
    fn test_zero_length_scramble() {
        let params = ScrambleParams::new(0);
        let scrambled = CubeState::new_scrambled(PuzzleSize::TWO, &params);
        assert!(scrambled.moves.is_empty());
        assert!(scrambled.state.is_solved());
    }

    #[test]
    fn test_params_serialize() {
        let params = ScrambleParams::with_seed(50, "1234");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"length":50,"seed":"1234"}"#);
    }
}
