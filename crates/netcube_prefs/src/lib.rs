//! User preferences.
//!
//! Preferences are layered from built-in defaults, then the user's YAML file,
//! then `NETCUBE_*` environment variables.

use std::path::{Path, PathBuf};

use eyre::Result;
use netcube_core::{DEFAULT_SHUFFLE_LENGTH, PuzzleSize};
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "NETCUBE";

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    /// Size of newly created cubes.
    pub puzzle_size: PuzzleSize,
    /// Number of random moves in a shuffle.
    pub shuffle_length: u32,
    /// Root directory for save files, overriding the standard location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            puzzle_size: PuzzleSize::THREE,
            shuffle_length: DEFAULT_SHUFFLE_LENGTH,
            save_dir: None,
        }
    }
}

impl Preferences {
    /// Loads preferences from the user's preferences file and the
    /// environment.
    ///
    /// If the preferences file cannot be loaded, it is backed up (if
    /// possible) and the defaults are used instead.
    pub fn load() -> Self {
        let user_file = match netcube_paths::prefs_file() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Error loading user preferences: {e}");
                None
            }
        };
        let env = config::Environment::with_prefix(ENV_PREFIX).try_parsing(true);
        Self::load_from(user_file.as_deref(), Some(env))
    }

    fn load_from(user_file: Option<&Path>, env: Option<config::Environment>) -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).required(false));
        }
        if let Some(env) = env {
            config = config.add_source(env);
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                if let Some(path) = user_file.filter(|p| p.exists()) {
                    if let Err(e) = netcube_paths::move_to_backup_file(path) {
                        log::warn!("Unable to back up {}: {e}", path.display());
                    }
                }
                Self::default()
            })
    }

    /// Saves preferences to the user's preferences file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&netcube_paths::prefs_file()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        netcube_paths::ensure_parent_dir(path)?;
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the root directory for save files.
    pub fn save_dir(&self) -> Result<PathBuf> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => netcube_paths::save_dir(),
        }
    }
}
