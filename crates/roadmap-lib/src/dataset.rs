use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the key point file inside a data directory.
pub const KEY_POINTS_FILENAME: &str = "keyPoints.txt";
/// Default filename for the road file inside a data directory.
pub const ROADS_FILENAME: &str = "roads.txt";

/// Environment variable overriding the key point file path.
pub const KEY_POINTS_ENV: &str = "ROADMAP_KEY_POINTS";
/// Environment variable overriding the road file path.
pub const ROADS_ENV: &str = "ROADMAP_ROADS";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ROADMAP_DATA_DIR";

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub key_points: PathBuf,
    pub roads: PathBuf,
}

impl DatasetPaths {
    /// Paths for the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            key_points: dir.join(KEY_POINTS_FILENAME),
            roads: dir.join(ROADS_FILENAME),
        }
    }
}

/// Explicit locations supplied by the caller (typically CLI flags).
#[derive(Debug, Clone, Default)]
pub struct DatasetOverrides {
    pub key_points: Option<PathBuf>,
    pub roads: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "roadmap", "roadmap").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve both input files.
///
/// Each file is taken from, in order: its explicit override, its environment
/// variable, or the data directory (explicit, `ROADMAP_DATA_DIR`, then the
/// platform default) joined with the default file name.
pub fn resolve_dataset_paths(overrides: &DatasetOverrides) -> Result<DatasetPaths> {
    resolve_with_env(overrides, |name| env::var_os(name))
}

fn resolve_with_env<F>(overrides: &DatasetOverrides, lookup: F) -> Result<DatasetPaths>
where
    F: Fn(&str) -> Option<OsString>,
{
    let from_env = |name: &str| lookup(name).filter(|value| !value.is_empty()).map(PathBuf::from);

    let key_points = overrides.key_points.clone().or_else(|| from_env(KEY_POINTS_ENV));
    let roads = overrides.roads.clone().or_else(|| from_env(ROADS_ENV));

    if let (Some(key_points), Some(roads)) = (&key_points, &roads) {
        return Ok(DatasetPaths {
            key_points: key_points.clone(),
            roads: roads.clone(),
        });
    }

    let data_dir = match overrides.data_dir.clone().or_else(|| from_env(DATA_DIR_ENV)) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "resolving road map files");

    let defaults = DatasetPaths::in_dir(&data_dir);
    Ok(DatasetPaths {
        key_points: key_points.unwrap_or(defaults.key_points),
        roads: roads.unwrap_or(defaults.roads),
    })
}
