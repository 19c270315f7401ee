//! Batting side of the team-season pipeline.

use std::collections::BTreeMap;

use super::{
    keys::TeamYearKey,
    records::BatterSeasonRecord,
    rounding::{ratio_or_zero, round_to},
    types::BattingLine,
};


/// Running sums for one team-season.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BattingTotals {
    pub h: f64,
    pub bb: f64,
    pub hp: f64,
    pub ab: f64,
    pub sf: f64,
    pub tb: f64,
    pub hr: f64,
    pub war: f64,
    pub pa: f64,
    /// Sum of `wRC+ * PA`.
    pub wrc_plus_weighted: f64,
}

impl BattingTotals {
    pub fn add(&mut self, record: &BatterSeasonRecord) {
        self.h += record.h;
        self.bb += record.bb;
        self.hp += record.hp;
        self.ab += record.ab;
        self.sf += record.sf;
        self.tb += record.tb;
        self.hr += record.hr;
        self.war += record.war;
        self.pa += record.pa;
        self.wrc_plus_weighted += record.wrc_plus * record.pa;
    }

    /// `(H + BB + HP) / (AB + BB + HP + SF)`.
    pub fn obp(&self) -> f64 {
        ratio_or_zero(
            self.h + self.bb + self.hp,
            self.ab + self.bb + self.hp + self.sf,
        )
    }

    /// `TB / AB`.
    pub fn slg(&self) -> f64 {
        ratio_or_zero(self.tb, self.ab)
    }

    /// Built from the summed components, never from averaged player OPS.
    pub fn ops(&self) -> f64 {
        self.obp() + self.slg()
    }

    /// Plate-appearance weighted wRC+.
    pub fn wrc_plus(&self) -> f64 {
        ratio_or_zero(self.wrc_plus_weighted, self.pa)
    }

    pub fn to_line(&self) -> BattingLine {
        BattingLine {
            ops: round_to(self.ops(), 3),
            hr: self.hr as u32,
            batting_war: round_to(self.war, 2),
            wrc_plus: round_to(self.wrc_plus(), 1),
        }
    }
}

/// Sum batter rows into one bucket per team-season.
pub fn sum_batting(records: &[BatterSeasonRecord]) -> BTreeMap<TeamYearKey, BattingTotals> {
    let mut grouped: BTreeMap<TeamYearKey, BattingTotals> = BTreeMap::new();
    for record in records {
        grouped
            .entry(TeamYearKey::new(record.year, record.team.as_str()))
            .or_default()
            .add(record);
    }
    grouped
}

/// Aggregate batter rows into team batting lines keyed by team-season.
pub fn aggregate_batting(records: &[BatterSeasonRecord]) -> BTreeMap<TeamYearKey, BattingLine> {
    sum_batting(records)
        .into_iter()
        .map(|(key, totals)| (key, totals.to_line()))
        .collect()
}
