//! Lookups over raw player rows, shared by batters and pitchers.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{cli::types::Year, stats::records::SeasonRow};

/// Number of players returned by `top_players` when no limit is given.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Players with positive WAR for one team-season, highest WAR first.
pub fn top_players<R>(rows: &[R], team: &str, year: Year, limit: usize) -> Vec<R>
where
    R: SeasonRow + Clone,
{
    let mut players: Vec<R> = rows
        .iter()
        .filter(|r| r.team() == team && r.year() == year && r.war() > 0.0)
        .cloned()
        .collect();
    players.sort_by(|a, b| b.war().partial_cmp(&a.war()).unwrap_or(Ordering::Equal));
    players.truncate(limit);
    players
}

/// Rows whose player name contains `needle`.
pub fn search_by_name<R>(rows: &[R], needle: &str) -> Vec<R>
where
    R: SeasonRow + Clone,
{
    rows.iter()
        .filter(|r| r.name().is_some_and(|name| name.contains(needle)))
        .cloned()
        .collect()
}

/// Every season of the player named exactly `name`, oldest first.
pub fn player_seasons<R>(rows: &[R], name: &str) -> Vec<R>
where
    R: SeasonRow + Clone,
{
    let mut seasons: Vec<R> = rows
        .iter()
        .filter(|r| r.name() == Some(name))
        .cloned()
        .collect();
    seasons.sort_by_key(|r| r.year());
    seasons
}

/// Distinct player names, sorted.
pub fn player_names<R: SeasonRow>(rows: &[R]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.name())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct names of the players on one team-season, sorted.
pub fn roster<R: SeasonRow>(rows: &[R], year: Year, team: &str) -> Vec<String> {
    rows.iter()
        .filter(|r| r.year() == year && r.team() == team)
        .filter_map(|r| r.name())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
