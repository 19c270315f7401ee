//! Merge batting and pitching lines into team-seasons and rank them per year.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::debug;

use super::{
    keys::TeamYearKey,
    rounding::round_to,
    types::{BattingLine, PitchingLine, TeamSeason},
};
use crate::cli::types::Year;


/// Share of batting WAR in the power score.
pub const BATTING_WEIGHT: f64 = 0.55;
/// Share of pitching WAR in the power score.
pub const PITCHING_WEIGHT: f64 = 0.45;

/// `battingWar + pitchingWar`, summed from the already-rounded sides.
pub fn total_war(batting: &BattingLine, pitching: &PitchingLine) -> f64 {
    round_to(batting.batting_war + pitching.pitching_war, 2)
}

pub fn power_score(batting: &BattingLine, pitching: &PitchingLine) -> f64 {
    round_to(
        batting.batting_war * BATTING_WEIGHT + pitching.pitching_war * PITCHING_WEIGHT,
        2,
    )
}

/// Build an unranked team-season. Absent sides count as all-zero lines.
pub fn merge_team_season(
    key: &TeamYearKey,
    batting: Option<&BattingLine>,
    pitching: Option<&PitchingLine>,
) -> TeamSeason {
    let batting = batting.copied().unwrap_or_default();
    let pitching = pitching.copied().unwrap_or_default();

    TeamSeason {
        year: key.year,
        team: key.team.clone(),
        batting,
        pitching,
        total_war: total_war(&batting, &pitching),
        power_score: power_score(&batting, &pitching),
        power_rank: 0,
    }
}

/// Higher power score first; equal scores fall back to team name ascending.
fn power_order(a: &TeamSeason, b: &TeamSeason) -> Ordering {
    b.power_score
        .partial_cmp(&a.power_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.team.cmp(&b.team))
}

/// Sort one year's team-seasons and number them `1..=N`.
pub fn assign_ranks(seasons: &mut [TeamSeason]) {
    seasons.sort_by(power_order);
    for (index, season) in seasons.iter_mut().enumerate() {
        season.power_rank = index as u32 + 1;
    }
}

/// Join both sides on every team-season key seen in either, then rank per year.
///
/// The result is ordered by year ascending, then power rank ascending.
pub fn rank_team_seasons(
    batting: &BTreeMap<TeamYearKey, BattingLine>,
    pitching: &BTreeMap<TeamYearKey, PitchingLine>,
) -> Vec<TeamSeason> {
    let keys: BTreeSet<&TeamYearKey> = batting.keys().chain(pitching.keys()).collect();

    let mut by_year: BTreeMap<Year, Vec<TeamSeason>> = BTreeMap::new();
    for key in keys {
        let season = merge_team_season(key, batting.get(key), pitching.get(key));
        by_year.entry(key.year).or_default().push(season);
    }

    by_year.par_iter_mut().for_each(|(year, seasons)| {
        assign_ranks(seasons);
        debug!(year = year.as_u16(), teams = seasons.len(), "ranked season");
    });

    by_year.into_values().flatten().collect()
}
