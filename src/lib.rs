//! KBO Team-Season Power Rankings Library
//!
//! Turns per-player, per-season KBO batting and pitching rows into one
//! record per team and season, with team rate stats rebuilt from summed
//! components and a within-year power rank.
//!
//! ## Features
//!
//! - **Aggregation**: OBP/SLG/OPS from summed components, PA-weighted wRC+,
//!   ERA/WHIP from summed components, IP-weighted FIP
//! - **Power Ranking**: 55/45 blend of batting and pitching WAR, ranked per year
//! - **Queries**: teams, years, team histories, season tables, metric trajectories
//! - **Player Lookups**: top players by WAR, name search, rosters
//! - **Caching**: time-boxed in-memory cache of loaded datasets
//!
//! ## Quick Start
//!
//! ```rust
//! use kbo_power::{stats::build_team_seasons, BatterSeasonRecord, Year};
//!
//! let batters = vec![BatterSeasonRecord {
//!     year: Year::new(2020),
//!     team: "NC".to_string(),
//!     ab: 400.0,
//!     h: 120.0,
//!     tb: 200.0,
//!     war: 3.5,
//!     ..Default::default()
//! }];
//!
//! let seasons = build_team_seasons(&batters, &[]).unwrap();
//! assert_eq!(seasons[0].power_rank, 1);
//! assert_eq!(seasons[0].batting.ops, 0.8);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a data directory containing `raw/` and `derived/`:
//! ```bash
//! export KBO_POWER_DATA_DIR=/path/to/src/data
//! ```

pub mod cli;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Metric, Year};
pub use error::{PowerError, Result};
pub use stats::{BatterSeasonRecord, PitcherSeasonRecord, TeamSeason, TeamYearKey};

pub const DATA_DIR_ENV_VAR: &str = "KBO_POWER_DATA_DIR";

/// Data directory used when neither the flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "src/data";
