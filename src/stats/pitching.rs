//! Pitching side of the team-season pipeline.

use std::collections::BTreeMap;

use super::{
    keys::TeamYearKey,
    records::PitcherSeasonRecord,
    rounding::{ratio_or_zero, round_to},
    types::PitchingLine,
};


/// Running sums for one team-season's staff.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchingTotals {
    pub ip: f64,
    pub er: f64,
    pub h: f64,
    pub bb: f64,
    pub war: f64,
    /// Sum of `FIP * IP`.
    pub fip_weighted: f64,
}

impl PitchingTotals {
    pub fn add(&mut self, record: &PitcherSeasonRecord) {
        self.ip += record.ip;
        self.er += record.er;
        self.h += record.h;
        self.bb += record.bb;
        self.war += record.war;
        self.fip_weighted += record.fip * record.ip;
    }

    /// `ER * 9 / IP`.
    pub fn era(&self) -> f64 {
        ratio_or_zero(self.er * 9.0, self.ip)
    }

    /// Innings-weighted FIP.
    pub fn fip(&self) -> f64 {
        ratio_or_zero(self.fip_weighted, self.ip)
    }

    /// `(H + BB) / IP`.
    pub fn whip(&self) -> f64 {
        ratio_or_zero(self.h + self.bb, self.ip)
    }

    pub fn to_line(&self) -> PitchingLine {
        PitchingLine {
            era: round_to(self.era(), 2),
            fip: round_to(self.fip(), 2),
            whip: round_to(self.whip(), 3),
            pitching_war: round_to(self.war, 2),
            ip: round_to(self.ip, 1),
        }
    }
}

/// Sum pitcher rows into one bucket per team-season.
pub fn sum_pitching(records: &[PitcherSeasonRecord]) -> BTreeMap<TeamYearKey, PitchingTotals> {
    let mut grouped: BTreeMap<TeamYearKey, PitchingTotals> = BTreeMap::new();
    for record in records {
        grouped
            .entry(TeamYearKey::new(record.year, record.team.as_str()))
            .or_default()
            .add(record);
    }
    grouped
}

/// Aggregate pitcher rows into team pitching lines keyed by team-season.
pub fn aggregate_pitching(
    records: &[PitcherSeasonRecord],
) -> BTreeMap<TeamYearKey, PitchingLine> {
    sum_pitching(records)
        .into_iter()
        .map(|(key, totals)| (key, totals.to_line()))
        .collect()
}
