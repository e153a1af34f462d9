//! Paths for Netcube save files and preferences.
//!
//! In portable mode, everything lives next to the executable. Placing a file
//! named `nonportable` in that directory switches to the platform's data and
//! config directories instead.

#[macro_use]
extern crate lazy_static;

use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::Result;
use time::OffsetDateTime;

/// Whether this is an official release build.
pub const IS_OFFICIAL_BUILD: bool = option_env!("NETCUBE_OFFICIAL_BUILD").is_some();

const NONPORTABLE_MARKER_FILE_NAME: &str = "nonportable";
const SAVE_DIR_NAME: &str = "savefiles";
const SAVE_FILE_EXTENSION: &str = "cube";
const PREFS_FILE_NAME: &str = "netcube";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref LOCAL_DIR: Result<PathBuf, PathError> = (|| Some(
        // IIFE to mimic `try_block`
        std::env::current_exe()
            .ok()?
            .canonicalize()
            .ok()?
            .parent()?
            .to_owned()
    ))()
    .ok_or(PathError::NoExecutablePath);
    static ref NONPORTABLE: bool = {
        if IS_OFFICIAL_BUILD && cfg!(target_os = "macos") {
            // macOS app bundles cannot hold user files.
            true
        } else if let Ok(dir) = &*LOCAL_DIR {
            dir.join(NONPORTABLE_MARKER_FILE_NAME).exists()
        } else {
            false
        }
    };
    static ref PROJECT_DIRS: Option<ProjectDirs> = ProjectDirs::from("", "", "Netcube");
    static ref DATA_DIR: Result<PathBuf, PathError> = if *NONPORTABLE {
        log::info!("Using non-portable data path");
        project_dirs().map(|dirs| dirs.data_dir().to_owned())
    } else {
        log::info!("Using portable data path");
        LOCAL_DIR.clone()
    };
    static ref CONFIG_DIR: Result<PathBuf, PathError> = if *NONPORTABLE {
        project_dirs().map(|dirs| dirs.config_dir().to_owned())
    } else {
        LOCAL_DIR.clone()
    };
}

fn project_dirs() -> Result<&'static ProjectDirs, PathError> {
    PROJECT_DIRS.as_ref().ok_or(PathError::NoProjectDirs)
}

/// Error produced when a standard directory cannot be found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The executable's own path is unknown.
    NoExecutablePath,
    /// The platform has no home directory for the current user.
    NoProjectDirs,
}
impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NoExecutablePath => write!(f, "unable to get executable file path"),
            PathError::NoProjectDirs => write!(f, "unable to get user data directory"),
        }
    }
}
impl std::error::Error for PathError {}

/// Returns whether the portable data directory is in use.
pub fn is_portable() -> bool {
    !*NONPORTABLE
}

/// Returns the directory holding all of Netcube's data.
pub fn data_dir() -> Result<PathBuf> {
    Ok(DATA_DIR.clone()?)
}

/// Returns the root directory for saved cubes.
pub fn save_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join(SAVE_DIR_NAME))
}

/// Returns the path of the preferences file.
pub fn prefs_file() -> Result<PathBuf> {
    Ok(CONFIG_DIR
        .clone()?
        .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")))
}

/// Returns the path of a save file under `root` named after `now`:
/// `root/YYYYMMDD/cube_HHMMSS.cube`.
pub fn timestamped_save_file(root: &Path, now: OffsetDateTime) -> PathBuf {
    let day = format!(
        "{:04}{:02}{:02}",
        now.year(),
        now.month() as u8,
        now.day(),
    );
    let file = format!(
        "cube_{:02}{:02}{:02}.{SAVE_FILE_EXTENSION}",
        now.hour(),
        now.minute(),
        now.second(),
    );
    root.join(day).join(file)
}

/// Returns the current local time, or UTC if the local offset is unknown.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Creates the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Returns the path that [`move_to_backup_file()`] would move `path` to at
/// time `now`.
pub fn backup_path(path: &Path, now: OffsetDateTime) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let mut name = format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    );
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// Moves a file out of the way so that it will not be loaded again, and
/// returns where it went.
pub fn move_to_backup_file(path: impl AsRef<Path>) -> std::io::Result<PathBuf> {
    let path = path.as_ref();
    let backup = backup_path(path, now());
    std::fs::rename(path, &backup)?;
    log::info!("Backup of {} stored at {}", path.display(), backup.display());
    Ok(backup)
}
