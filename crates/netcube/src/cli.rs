use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use netcube_core::{CubeState, PuzzleSize, ScrambleParams, format_moves, parse_moves};
use netcube_prefs::Preferences;
use serde::Serialize;

/// Netcube command-line interface
///
/// Cubes are saved as raw sticker nets. The size of a saved cube is inferred
/// from the length of its file unless `--size` is given.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Cube size, such as `2` or `3x3x3`.
    #[arg(short, long, global = true)]
    pub size: Option<PuzzleSize>,
    /// Draw nets with face letters instead of colors.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Create a shuffled cube and save it.
    New {
        /// File to save to. Defaults to a new timestamped file in the save
        /// directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of random moves.
        #[arg(short, long)]
        count: Option<u32>,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<String>,
    },
    /// Draw the net of a saved cube.
    Show {
        /// Saved cube.
        file: PathBuf,
    },
    /// Apply moves to a saved cube, such as `R U R' U'`.
    Apply {
        /// Saved cube, overwritten with the result.
        file: PathBuf,
        /// Moves to apply.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Shuffle a saved cube and print the moves applied.
    Shuffle {
        /// Saved cube, overwritten with the result.
        file: PathBuf,
        /// Number of random moves.
        #[arg(short, long)]
        count: Option<u32>,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<String>,
    },
    /// Print the fingerprint of a saved cube in hexadecimal.
    Fingerprint {
        /// Saved cube.
        file: PathBuf,
    },
    /// Print information about a saved cube as JSON.
    Info {
        /// Saved cube.
        file: PathBuf,
    },
    /// Print preferences as JSON.
    Prefs {
        /// Also write them to the preferences file.
        #[arg(long)]
        write: bool,
    },
}

/// Summary of a saved cube.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct CubeInfo {
    file: PathBuf,
    size: PuzzleSize,
    solved: bool,
    well_formed: bool,
    fingerprint: String,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let Args {
        size,
        plain,
        subcommand,
    } = args;
    let prefs = Preferences::load();

    match subcommand {
        Subcommand::New {
            output,
            count,
            seed,
        } => {
            let params = scramble_params(&prefs, count, seed);
            let scrambled = CubeState::new_scrambled(size.unwrap_or(prefs.puzzle_size), &params);
            let path = match output {
                Some(path) => path,
                None => netcube_paths::timestamped_save_file(
                    &prefs.save_dir()?,
                    netcube_paths::now(),
                ),
            };
            save(&scrambled.state, &path)?;
            println!("{}", path.display());
            show(&scrambled.state, plain);
            Ok(())
        }

        Subcommand::Show { file } => {
            show(&load_or_fallback(&file, size, &prefs), plain);
            Ok(())
        }

        Subcommand::Apply { file, moves } => {
            let moves = parse_moves(&moves.join(" ")).context("error parsing moves")?;
            let mut cube = load_for_overwrite(&file, size, &prefs)?;
            cube.apply_all(&moves)?;
            save(&cube, &file)?;
            show(&cube, plain);
            Ok(())
        }

        Subcommand::Shuffle { file, count, seed } => {
            let params = scramble_params(&prefs, count, seed);
            let mut cube = load_for_overwrite(&file, size, &prefs)?;
            let moves = cube.shuffle(params.length, &mut params.rng());
            save(&cube, &file)?;
            println!("{}", format_moves(&moves));
            show(&cube, plain);
            Ok(())
        }

        Subcommand::Fingerprint { file } => {
            println!("{}", load(&file, size)?.fingerprint());
            Ok(())
        }

        Subcommand::Info { file } => {
            let cube = load(&file, size)?;
            write_json_output(&cube_info(file, &cube))
        }

        Subcommand::Prefs { write } => {
            if write {
                prefs.save()?;
            }
            write_json_output(&prefs)
        }
    }
}

fn scramble_params(prefs: &Preferences, count: Option<u32>, seed: Option<String>) -> ScrambleParams {
    let length = count.unwrap_or(prefs.shuffle_length);
    match seed {
        Some(seed) => ScrambleParams::with_seed(length, seed),
        None => ScrambleParams::new(length),
    }
}

fn cube_info(file: PathBuf, cube: &CubeState) -> CubeInfo {
    CubeInfo {
        file,
        size: cube.size(),
        solved: cube.is_solved(),
        well_formed: cube.is_well_formed(),
        fingerprint: cube.fingerprint().to_string(),
    }
}

/// Returns the size of the cube saved in `path`, judging by its length.
fn infer_size(path: &Path) -> Result<PuzzleSize> {
    let len = std::fs::metadata(path)
        .wrap_err_with(|| format!("error reading {}", path.display()))?
        .len();
    PuzzleSize::ALL
        .into_iter()
        .find(|size| size.cell_count() as u64 == len)
        .ok_or_else(|| eyre!("{} holds {len} bytes, which is not a saved cube", path.display()))
}

fn load(path: &Path, size: Option<PuzzleSize>) -> Result<CubeState> {
    let size = match size {
        Some(size) => size,
        None => infer_size(path)?,
    };
    CubeState::load(path, size).wrap_err_with(|| format!("error loading {}", path.display()))
}

/// Loads a saved cube, or shuffles a new one if it cannot be loaded.
fn load_or_fallback(path: &Path, size: Option<PuzzleSize>, prefs: &Preferences) -> CubeState {
    load(path, size).unwrap_or_else(|e| {
        log::warn!("{e:#}; using a new shuffled cube instead");
        fallback_cube(size, prefs)
    })
}

/// Like [`load_or_fallback()`], for a file that is about to be overwritten.
/// An existing file that cannot be loaded is moved to a backup first.
fn load_for_overwrite(
    path: &Path,
    size: Option<PuzzleSize>,
    prefs: &Preferences,
) -> Result<CubeState> {
    match load(path, size) {
        Ok(cube) => Ok(cube),
        Err(e) => {
            log::warn!("{e:#}; using a new shuffled cube instead");
            if path.exists() {
                netcube_paths::move_to_backup_file(path)
                    .wrap_err_with(|| format!("error backing up {}", path.display()))?;
            }
            Ok(fallback_cube(size, prefs))
        }
    }
}

fn fallback_cube(size: Option<PuzzleSize>, prefs: &Preferences) -> CubeState {
    let params = ScrambleParams::new(prefs.shuffle_length);
    CubeState::new_scrambled(size.unwrap_or(prefs.puzzle_size), &params).state
}

fn save(cube: &CubeState, path: &Path) -> Result<()> {
    netcube_paths::ensure_parent_dir(path)?;
    cube.save(path)
        .wrap_err_with(|| format!("error saving {}", path.display()))
}

fn show(cube: &CubeState, plain: bool) {
    let grid = cube.grid_view();
    if plain {
        print!("{}", crate::render::plain_net(grid));
    } else {
        print!("{}", crate::render::colored_net(grid));
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use netcube_core::moves;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_args() {
        use clap::Parser;

        let args = Args::try_parse_from(["netcube", "apply", "a.cube", "R", "U'", "-s", "2"]).unwrap();
        assert_eq!(args.size, Some(PuzzleSize::TWO));
        match args.subcommand {
            Subcommand::Apply { file, moves } => {
                assert_eq!(file, Path::new("a.cube"));
                assert_eq!(moves, ["R", "U'"]);
            }
            other => panic!("unexpected subcommand {other:?}"),
        }
        assert!(Args::try_parse_from(["netcube", "show", "a.cube", "--size", "4"]).is_err());
    }

    #[test]
    fn test_load_infers_size() {
        let dir = tempfile::tempdir().unwrap();
        for size in PuzzleSize::ALL {
            let path = dir.path().join(format!("{}.cube", size.n()));
            let mut cube = CubeState::new_solved(size);
            cube.apply(moves::F).unwrap();
            save(&cube, &path).unwrap();
            assert_eq!(load(&path, None).unwrap(), cube);
        }
    }

    #[test]
    fn test_load_rejects_bad_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.cube");
        std::fs::write(&path, [0_u8; 40]).unwrap();
        assert!(load(&path, None).is_err());
        assert!(load(&path, Some(PuzzleSize::THREE)).is_err());
    }

    #[test]
    fn test_failed_load_falls_back_to_shuffled_cube() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            puzzle_size: PuzzleSize::TWO,
            shuffle_length: 20,
            save_dir: None,
        };
        let cube = load_or_fallback(&dir.path().join("missing.cube"), None, &prefs);
        assert_eq!(cube.size(), PuzzleSize::TWO);
        assert!(cube.is_well_formed());

        let cube = load_or_fallback(
            &dir.path().join("missing.cube"),
            Some(PuzzleSize::THREE),
            &prefs,
        );
        assert_eq!(cube.size(), PuzzleSize::THREE);
    }

    fn test_prefs() -> Preferences {
        Preferences {
            puzzle_size: PuzzleSize::TWO,
            shuffle_length: 20,
            save_dir: None,
        }
    }

    #[test]
    fn test_overwriting_unreadable_file_keeps_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.cube");
        let original = [7_u8; 40];
        std::fs::write(&path, original).unwrap();

        let cube = load_for_overwrite(&path, None, &test_prefs()).unwrap();
        save(&cube, &path).unwrap();

        let backups: Vec<PathBuf> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| *p != path)
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(std::fs::read(&backups[0]).unwrap(), original);
        assert_eq!(load(&path, None).unwrap(), cube);
    }

    #[test]
    fn test_overwriting_with_wrong_size_keeps_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three.cube");
        let mut original = CubeState::new_solved(PuzzleSize::THREE);
        original.apply(moves::R).unwrap();
        save(&original, &path).unwrap();

        let cube = load_for_overwrite(&path, Some(PuzzleSize::TWO), &test_prefs()).unwrap();
        assert_eq!(cube.size(), PuzzleSize::TWO);
        save(&cube, &path).unwrap();

        let backup = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .find(|p| *p != path)
            .unwrap();
        assert_eq!(load(&backup, None).unwrap(), original);
    }

    #[test]
    fn test_overwriting_readable_file_makes_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.cube");
        let original = CubeState::new_solved(PuzzleSize::TWO);
        save(&original, &path).unwrap();

        assert_eq!(load_for_overwrite(&path, None, &test_prefs()).unwrap(), original);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let missing = dir.path().join("missing.cube");
        let cube = load_for_overwrite(&missing, None, &test_prefs()).unwrap();
        assert_eq!(cube.size(), PuzzleSize::TWO);
        assert!(!missing.exists());
    }

    #[test]
    fn test_cube_info() {
        let cube = CubeState::new_solved(PuzzleSize::TWO);
        let info = cube_info(PathBuf::from("a.cube"), &cube);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["solved"], true);
        assert_eq!(json["fingerprint"].as_str().unwrap().len(), 72);
    }
}
