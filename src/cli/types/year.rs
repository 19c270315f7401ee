//! Season year type.

use crate::error::{PowerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years.
///
/// The default is year `0`, which no real row carries and which validation
/// rejects.
///
/// Serializes as a bare number, so it matches the `Year` column of the raw
/// files and the `year` field of the derived team-season file.
///
/// # Examples
///
/// ```rust
/// use kbo_power::Year;
///
/// let year: Year = "1995".parse().unwrap();
/// assert_eq!(year.as_u16(), 1995);
/// assert_eq!(year.to_string(), "1995");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
