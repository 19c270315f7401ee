//! On-disk layout and JSON file helpers.

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{PowerError, Result};

pub const BATTING_FILE: &str = "kbo_batting_stats_by_season_1982-2025.json";
pub const PITCHING_FILE: &str = "kbo_pitching_stats_by_season_1982-2025.json";
pub const TEAM_SEASON_FILE: &str = "team-season.json";

/// Locations of the two raw inputs and the derived output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub batting: PathBuf,
    pub pitching: PathBuf,
    pub team_seasons: PathBuf,
}

impl DataPaths {
    /// `{root}/raw/<batting>`, `{root}/raw/<pitching>`, `{root}/derived/team-season.json`
    pub fn from_root(root: &Path) -> Self {
        let raw = root.join("raw");
        Self {
            batting: raw.join(BATTING_FILE),
            pitching: raw.join(PITCHING_FILE),
            team_seasons: root.join("derived").join(TEAM_SEASON_FILE),
        }
    }
}

/// Read a whole file and parse it as a JSON array.
///
/// Errors carry the offending path.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|source| PowerError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| PowerError::DatasetParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a string to file, creating parent directories.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `value` as pretty JSON and replace `path` in one step.
///
/// The JSON goes to a sibling `.tmp` file first and is renamed over the
/// target, so readers never see a half-written file and a failure leaves the
/// previous contents in place.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = temp_path(path);

    if let Err(e) = write_string(&tmp, &json).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
