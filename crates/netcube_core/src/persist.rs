//! Raw grid dumps: one byte per cell, row-major, with no header.
//!
//! The file does not record the size of the cube, so the caller must supply
//! it when loading.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{CubeState, PersistError, PuzzleSize};

impl CubeState {
    /// Returns the bytes written by [`CubeState::save()`].
    pub fn to_bytes(&self) -> Vec<u8> {
        self.grid_view().as_bytes().to_vec()
    }

    /// Writes the grid to `writer`.
    pub fn save_to(&self, mut writer: impl Write) -> Result<(), PersistError> {
        writer.write_all(self.grid_view().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the grid to a file, replacing it if it exists. The parent
    /// directory must already exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        self.save_to(BufWriter::new(File::create(path)?))?;
        log::info!("saved {} cube to {}", self.size(), path.display());
        Ok(())
    }

    /// Reads a grid of the given size from `reader`.
    pub fn load_from(mut reader: impl Read, size: PuzzleSize) -> Result<Self, PersistError> {
        let mut bytes = Vec::with_capacity(size.cell_count());
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_saved(size, &bytes)?)
    }

    /// Reads a grid of the given size from a file.
    pub fn load(path: impl AsRef<Path>, size: PuzzleSize) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let state = Self::load_from(BufReader::new(File::open(path)?), size)?;
        log::info!("loaded {size} cube from {}", path.display());
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridError, moves};

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube_120000.cube");

        let mut cube = CubeState::new_solved(PuzzleSize::THREE);
        cube.apply_all(&[moves::R, moves::U_PRIME, moves::B]).unwrap();
        cube.save(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), cube.to_bytes());
        assert_eq!(CubeState::load(&path, PuzzleSize::THREE).unwrap(), cube);
    }

    #[test]
    fn test_load_wrong_size() {
        let bytes = CubeState::new_solved(PuzzleSize::THREE).to_bytes();
        let err = CubeState::load_from(&bytes[..], PuzzleSize::TWO).unwrap_err();
        assert!(matches!(
            err,
            PersistError::CorruptedState(GridError::WrongLength {
                expected: 36,
                actual: 81,
            }),
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CubeState::load(dir.path().join("missing.cube"), PuzzleSize::TWO).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }

    #[test]
    fn test_save_to_writer() {
        let cube = CubeState::new_solved(PuzzleSize::TWO);
        let mut buf = vec![];
        cube.save_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 36);
        assert_eq!(CubeState::load_from(buf.as_slice(), PuzzleSize::TWO).unwrap(), cube);
    }
}
