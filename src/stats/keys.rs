//! Team-season grouping key.

use std::fmt;

use crate::cli::types::Year;

/// Composite `(year, team)` identity used to group player rows and to join
/// batting with pitching.
///
/// Team names are taken verbatim: a renamed franchise is a different key.
/// Ordering is year first, then team name, which gives the merged key set a
/// stable iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamYearKey {
    pub year: Year,
    pub team: String,
}

impl TeamYearKey {
    pub fn new(year: Year, team: impl Into<String>) -> Self {
        Self {
            year,
            team: team.into(),
        }
    }
}

impl fmt::Display for TeamYearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.team)
    }
}
