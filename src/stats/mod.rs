//! Season aggregation and power ranking
//!
//! The pipeline runs in one direction:
//! - `batting`: batter rows -> one batting line per team-season
//! - `pitching`: pitcher rows -> one pitching line per team-season
//! - `ranking`: union of both key sets -> merged team-seasons ranked per year
//!
//! Supporting pieces live in `records` (raw rows), `keys` (the team-season
//! key), `rounding` and `types` (output records).

pub mod batting;
pub mod keys;
pub mod pitching;
pub mod ranking;
pub mod records;
pub mod rounding;
pub mod types;

pub use batting::aggregate_batting;
pub use keys::TeamYearKey;
pub use pitching::aggregate_pitching;
pub use ranking::rank_team_seasons;
pub use records::{BatterSeasonRecord, PitcherSeasonRecord};
pub use types::{BattingLine, PitchingLine, TeamSeason};

use tracing::info;

use crate::Result;

/// Run the whole pipeline over fully loaded raw rows.
///
/// Both datasets are validated first; a row with a blank team or a zero
/// year aborts the run before anything is aggregated.
pub fn build_team_seasons(
    batters: &[BatterSeasonRecord],
    pitchers: &[PitcherSeasonRecord],
) -> Result<Vec<TeamSeason>> {
    records::validate_rows("batting", batters)?;
    records::validate_rows("pitching", pitchers)?;

    let batting = aggregate_batting(batters);
    info!(rows = batters.len(), team_seasons = batting.len(), "aggregated batting");

    let pitching = aggregate_pitching(pitchers);
    info!(rows = pitchers.len(), team_seasons = pitching.len(), "aggregated pitching");

    let seasons = rank_team_seasons(&batting, &pitching);
    info!(team_seasons = seasons.len(), "ranked team seasons");

    Ok(seasons)
}
