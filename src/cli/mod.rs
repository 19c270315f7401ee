//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{Metric, Year};

use crate::dataset::players::DEFAULT_TOP_LIMIT;

#[derive(Debug, Subcommand)]
pub enum QueryCmd {
    /// List every team in the derived data
    Teams,

    /// List every season year in the derived data
    Years,

    /// All seasons of one team, oldest first
    Team {
        /// Team name exactly as it appears in the data (e.g. `LG`)
        team: String,
    },

    /// All teams of one year, ordered by power rank
    Year {
        year: Year,
    },

    /// A single team-season
    Season {
        team: String,
        year: Year,
    },

    /// Teams that played at any point between two years (inclusive)
    Range {
        from: Year,
        to: Year,
    },

    /// One metric per team across a range of years
    Trajectory {
        /// Team to include (repeatable): `-t LG -t Doosan`.
        #[clap(long = "team", short = 't', required = true)]
        teams: Vec<String>,

        #[clap(long)]
        from: Year,

        #[clap(long)]
        to: Year,

        #[clap(long, short, value_enum, default_value_t = Metric::PowerRank)]
        metric: Metric,
    },

    /// Highest-WAR batters of a team-season
    TopBatters {
        team: String,
        year: Year,

        #[clap(long, short, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },

    /// Highest-WAR pitchers of a team-season
    TopPitchers {
        team: String,
        year: Year,

        #[clap(long, short, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },

    /// Look up a player's seasons by name
    Player {
        name: String,

        /// Search pitchers instead of batters.
        #[clap(long)]
        pitcher: bool,

        /// Match the name as a substring instead of exactly.
        #[clap(long)]
        search: bool,
    },

    /// Names of the players on a team-season
    Roster {
        team: String,
        year: Year,

        /// List pitchers instead of batters.
        #[clap(long)]
        pitcher: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Aggregate raw player seasons into ranked team seasons and write the output file
    Build {
        /// Batter season file (default: `<data-dir>/raw/...batting...json`).
        #[clap(long)]
        batting: Option<PathBuf>,

        /// Pitcher season file (default: `<data-dir>/raw/...pitching...json`).
        #[clap(long)]
        pitching: Option<PathBuf>,

        /// Output file (default: `<data-dir>/derived/team-season.json`).
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Query the derived team seasons or the raw player data
    Query {
        /// Output results as JSON instead of text lines.
        #[clap(long, global = true)]
        json: bool,

        /// Seconds a loaded dataset stays cached.
        #[clap(long, global = true, default_value_t = 300)]
        cache_ttl_secs: u64,

        #[clap(subcommand)]
        cmd: QueryCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "kbo-power", about = "KBO team-season power rankings")]
pub struct PowerCli {
    /// Data directory holding `raw/` and `derived/` (or set `KBO_POWER_DATA_DIR`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log pipeline progress at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = PowerCli::try_parse_from([
            "kbo-power",
            "--data-dir",
            "/data",
            "build",
            "--output",
            "/tmp/out.json",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/data")));
        match cli.command {
            Commands::Build {
                batting, output, ..
            } => {
                assert!(batting.is_none());
                assert_eq!(output, Some(PathBuf::from("/tmp/out.json")));
            }
            _ => panic!("Expected Build"),
        }
    }

    #[test]
    fn test_parse_query_with_global_json() {
        let cli =
            PowerCli::try_parse_from(["kbo-power", "query", "season", "LG", "1994", "--json"])
                .unwrap();

        match cli.command {
            Commands::Query {
                json,
                cache_ttl_secs,
                cmd: QueryCmd::Season { team, year },
            } => {
                assert!(json);
                assert_eq!(cache_ttl_secs, 300);
                assert_eq!(team, "LG");
                assert_eq!(year, Year::new(1994));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_trajectory() {
        let cli = PowerCli::try_parse_from([
            "kbo-power", "query", "trajectory", "-t", "LG", "-t", "Doosan", "--from", "2010",
            "--to", "2020", "--metric", "total-war",
        ])
        .unwrap();

        match cli.command {
            Commands::Query {
                cmd:
                    QueryCmd::Trajectory {
                        teams,
                        from,
                        to,
                        metric,
                    },
                ..
            } => {
                assert_eq!(teams, vec!["LG", "Doosan"]);
                assert_eq!(from, Year::new(2010));
                assert_eq!(to, Year::new(2020));
                assert_eq!(metric, Metric::TotalWar);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_top_batters_default_limit() {
        let cli =
            PowerCli::try_parse_from(["kbo-power", "query", "top-batters", "KIA", "2017"]).unwrap();

        match cli.command {
            Commands::Query {
                cmd: QueryCmd::TopBatters { limit, .. },
                ..
            } => assert_eq!(limit, DEFAULT_TOP_LIMIT),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_year() {
        assert!(PowerCli::try_parse_from(["kbo-power", "query", "year", "nineteen"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        PowerCli::command().debug_assert();
    }
}
