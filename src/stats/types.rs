//! Team-season output records.
//!
//! Field names serialize in camelCase (`battingWar`, `powerRank`, ...) to
//! stay compatible with consumers of `team-season.json`.

use serde::{Deserialize, Serialize};

use crate::cli::types::Year;

/// Team batting line for one season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingLine {
    pub ops: f64,
    pub hr: u32,
    pub batting_war: f64,
    pub wrc_plus: f64,
}

/// Team pitching line for one season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingLine {
    pub era: f64,
    pub fip: f64,
    pub whip: f64,
    pub pitching_war: f64,
    pub ip: f64,
}

/// One team's season with its power score and within-year rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSeason {
    pub year: Year,
    pub team: String,
    pub batting: BattingLine,
    pub pitching: PitchingLine,
    pub total_war: f64,
    pub power_score: f64,
    /// 1-based, dense within `year`.
    pub power_rank: u32,
}
