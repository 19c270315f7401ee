//! Build command: raw player seasons in, ranked team seasons out.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    dataset::{read_json_array, write_json_atomic, DataPaths},
    stats::{build_team_seasons, BatterSeasonRecord, PitcherSeasonRecord, TeamSeason},
    Result,
};

/// Parameters for the build command
#[derive(Debug, Clone)]
pub struct BuildParams {
    pub data_dir: PathBuf,
    pub batting: Option<PathBuf>,
    pub pitching: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl BuildParams {
    /// Input and output locations after applying the per-file overrides.
    pub fn paths(&self) -> DataPaths {
        let defaults = DataPaths::from_root(&self.data_dir);
        DataPaths {
            batting: self.batting.clone().unwrap_or(defaults.batting),
            pitching: self.pitching.clone().unwrap_or(defaults.pitching),
            team_seasons: self.output.clone().unwrap_or(defaults.team_seasons),
        }
    }
}

/// Counts reported after a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub batting_rows: usize,
    pub pitching_rows: usize,
    pub team_seasons: usize,
    pub output: PathBuf,
}

/// Read both raw files, run the pipeline and replace the output file.
///
/// Any read, parse or validation failure returns before the output is
/// touched, so a previously good file survives a bad build.
pub fn handle_build(params: BuildParams) -> Result<BuildSummary> {
    let paths = params.paths();

    println!("Loading raw season data...");
    let batters: Vec<BatterSeasonRecord> = read_json_array(&paths.batting)?;
    let pitchers: Vec<PitcherSeasonRecord> = read_json_array(&paths.pitching)?;
    println!("Batting records: {}", batters.len());
    println!("Pitching records: {}", pitchers.len());

    let seasons = build_team_seasons(&batters, &pitchers)?;
    println!("Team seasons: {}", seasons.len());

    write_output(&paths.team_seasons, &seasons)?;
    println!("✓ Saved to {}", paths.team_seasons.display());

    Ok(BuildSummary {
        batting_rows: batters.len(),
        pitching_rows: pitchers.len(),
        team_seasons: seasons.len(),
        output: paths.team_seasons,
    })
}

fn write_output(path: &Path, seasons: &[TeamSeason]) -> Result<()> {
    write_json_atomic(path, seasons)?;
    info!(path = %path.display(), records = seasons.len(), "wrote team seasons");
    Ok(())
}
