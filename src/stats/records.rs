//! Raw per-player season rows as they appear in the source JSON files.
//!
//! Column names follow the raw files exactly (`Year`, `Team`, `wRC+`, ...).
//! Every statistic is optional in the source: an absent or `null` value is
//! read as `0.0`, so a sparse row still contributes to its team-season.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{cli::types::Year, PowerError, Result};

/// Read an optional number, mapping `null` to zero.
fn stat<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One batter's line for one team in one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatterSeasonRecord {
    #[serde(rename = "Year")]
    pub year: Year,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "PA", default, deserialize_with = "stat")]
    pub pa: f64,
    #[serde(rename = "AB", default, deserialize_with = "stat")]
    pub ab: f64,
    #[serde(rename = "H", default, deserialize_with = "stat")]
    pub h: f64,
    #[serde(rename = "BB", default, deserialize_with = "stat")]
    pub bb: f64,
    #[serde(rename = "HP", default, deserialize_with = "stat")]
    pub hp: f64,
    #[serde(rename = "SF", default, deserialize_with = "stat")]
    pub sf: f64,
    #[serde(rename = "TB", default, deserialize_with = "stat")]
    pub tb: f64,
    #[serde(rename = "HR", default, deserialize_with = "stat")]
    pub hr: f64,
    /// Individual OPS. Not used for the team figure, which is rebuilt from components.
    #[serde(rename = "OPS", default, deserialize_with = "stat")]
    pub ops: f64,
    #[serde(rename = "wRC+", default, deserialize_with = "stat")]
    pub wrc_plus: f64,
    #[serde(rename = "WAR", default, deserialize_with = "stat")]
    pub war: f64,
}

/// One pitcher's line for one team in one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitcherSeasonRecord {
    #[serde(rename = "Year")]
    pub year: Year,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Innings pitched, fractional.
    #[serde(rename = "IP", default, deserialize_with = "stat")]
    pub ip: f64,
    #[serde(rename = "ER", default, deserialize_with = "stat")]
    pub er: f64,
    #[serde(rename = "H", default, deserialize_with = "stat")]
    pub h: f64,
    #[serde(rename = "BB", default, deserialize_with = "stat")]
    pub bb: f64,
    #[serde(rename = "ERA", default, deserialize_with = "stat")]
    pub era: f64,
    #[serde(rename = "FIP", default, deserialize_with = "stat")]
    pub fip: f64,
    #[serde(rename = "WHIP", default, deserialize_with = "stat")]
    pub whip: f64,
    #[serde(rename = "WAR", default, deserialize_with = "stat")]
    pub war: f64,
}

/// Rows that carry a team-season identity.
pub trait SeasonRow {
    fn year(&self) -> Year;
    fn team(&self) -> &str;
    fn name(&self) -> Option<&str>;
    fn war(&self) -> f64;

    /// Why a statistic on this row cannot be aggregated, if it cannot.
    fn stat_problem(&self) -> Option<String> {
        None
    }
}

impl SeasonRow for BatterSeasonRecord {
    fn year(&self) -> Year {
        self.year
    }

    fn team(&self) -> &str {
        &self.team
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn war(&self) -> f64 {
        self.war
    }

    fn stat_problem(&self) -> Option<String> {
        if self.hr < 0.0 || self.hr.fract() != 0.0 {
            return Some(format!("HR must be a non-negative whole number, got {}", self.hr));
        }
        None
    }
}

impl SeasonRow for PitcherSeasonRecord {
    fn year(&self) -> Year {
        self.year
    }

    fn team(&self) -> &str {
        &self.team
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn war(&self) -> f64 {
        self.war
    }
}

/// Reject rows whose team-season key would be malformed.
///
/// A blank `Team` or a zero `Year` cannot be grouped, and a row whose
/// counting stats cannot be summed as-is is refused too.
pub fn validate_rows<R: SeasonRow>(dataset: &str, rows: &[R]) -> Result<()> {
    for (index, row) in rows.iter().enumerate() {
        if row.team().trim().is_empty() {
            return Err(PowerError::InvalidRecord {
                dataset: dataset.to_string(),
                index,
                reason: "blank Team".to_string(),
            });
        }
        if row.year().as_u16() == 0 {
            return Err(PowerError::InvalidRecord {
                dataset: dataset.to_string(),
                index,
                reason: "Year must be non-zero".to_string(),
            });
        }
        if let Some(reason) = row.stat_problem() {
            return Err(PowerError::InvalidRecord {
                dataset: dataset.to_string(),
                index,
                reason,
            });
        }
    }
    Ok(())
}
