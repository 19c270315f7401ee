//! Read-only lookups over derived team-season records.
//!
//! All functions take the materialized records and return owned results, so
//! they work the same on a cached `Arc<Vec<TeamSeason>>` or a freshly built
//! pipeline output. A missing team or year yields an empty result or `None`;
//! callers decide what "not found" means for them.

use std::collections::BTreeSet;

use crate::{cli::types::Year, stats::TeamSeason, PowerError, Result};


/// Every distinct team name, sorted.
pub fn teams(seasons: &[TeamSeason]) -> Vec<String> {
    seasons
        .iter()
        .map(|s| s.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every distinct year, ascending.
pub fn years(seasons: &[TeamSeason]) -> Vec<Year> {
    seasons
        .iter()
        .map(|s| s.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// All seasons of one team, oldest first.
pub fn team_seasons(seasons: &[TeamSeason], team: &str) -> Vec<TeamSeason> {
    let mut rows: Vec<TeamSeason> = seasons.iter().filter(|s| s.team == team).cloned().collect();
    rows.sort_by_key(|s| s.year);
    rows
}

/// All teams of one year, best power rank first.
pub fn year_seasons(seasons: &[TeamSeason], year: Year) -> Vec<TeamSeason> {
    let mut rows: Vec<TeamSeason> = seasons.iter().filter(|s| s.year == year).cloned().collect();
    rows.sort_by_key(|s| s.power_rank);
    rows
}

/// Names of the teams that played in `year`, sorted.
pub fn teams_in_year(seasons: &[TeamSeason], year: Year) -> Vec<String> {
    let mut names: Vec<String> = seasons
        .iter()
        .filter(|s| s.year == year)
        .map(|s| s.team.clone())
        .collect();
    names.sort();
    names
}

/// Distinct teams that played in any year of `from..=to`, sorted.
pub fn teams_in_year_range(seasons: &[TeamSeason], from: Year, to: Year) -> Result<Vec<String>> {
    if from > to {
        return Err(PowerError::InvalidYearRange {
            from: from.as_u16(),
            to: to.as_u16(),
        });
    }

    Ok(seasons
        .iter()
        .filter(|s| s.year >= from && s.year <= to)
        .map(|s| s.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect())
}

/// Keep only the given teams that exist in `year`, preserving their order.
pub fn filter_teams_by_year(seasons: &[TeamSeason], teams: &[String], year: Year) -> Vec<String> {
    let available: BTreeSet<&str> = seasons
        .iter()
        .filter(|s| s.year == year)
        .map(|s| s.team.as_str())
        .collect();

    teams
        .iter()
        .filter(|team| available.contains(team.as_str()))
        .cloned()
        .collect()
}

/// The single record for `(team, year)`, if that team played that year.
pub fn team_season<'a>(seasons: &'a [TeamSeason], team: &str, year: Year) -> Option<&'a TeamSeason> {
    seasons.iter().find(|s| s.team == team && s.year == year)
}
