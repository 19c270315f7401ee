//! Team-season metrics selectable for trajectories and formatting.

use std::fmt;

/// A single numeric column of a team-season record.
///
/// Batting and pitching WAR are exposed as `batting-war` / `pitching-war`
/// on the command line even though the record fields are named
/// `battingWar` / `pitchingWar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Metric {
    PowerRank,
    PowerScore,
    TotalWar,
    Ops,
    BattingWar,
    WrcPlus,
    Era,
    Fip,
    Whip,
    Ip,
    PitchingWar,
}

impl Metric {
    /// Number of decimals this metric is displayed with.
    pub fn decimals(&self) -> usize {
        match self {
            Metric::PowerRank => 0,
            Metric::PowerScore | Metric::TotalWar | Metric::BattingWar | Metric::PitchingWar => 2,
            Metric::Ops => 3,
            Metric::WrcPlus | Metric::Ip => 1,
            Metric::Era | Metric::Fip | Metric::Whip => 2,
        }
    }

    /// Whether the integer part is grouped with thousands separators.
    pub fn thousands_separator(&self) -> bool {
        matches!(self, Metric::Ip)
    }
}

/// Metric keys as used by trajectory output, e.g. `batting.war`.
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::PowerRank => "powerRank",
            Metric::PowerScore => "powerScore",
            Metric::TotalWar => "totalWar",
            Metric::Ops => "batting.ops",
            Metric::BattingWar => "batting.war",
            Metric::WrcPlus => "batting.wrcPlus",
            Metric::Era => "pitching.era",
            Metric::Fip => "pitching.fip",
            Metric::Whip => "pitching.whip",
            Metric::Ip => "pitching.ip",
            Metric::PitchingWar => "pitching.war",
        };
        write!(f, "{}", label)
    }
}
