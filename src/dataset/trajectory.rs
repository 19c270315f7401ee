//! Per-team metric series across a range of years.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::{
    cli::types::{Metric, Year},
    stats::TeamSeason,
};

/// One year of one team's series. `value` is `None` when the team did not
/// play that year, so a chart can break the line instead of plotting zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: Year,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeries {
    pub team: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub metric: String,
    pub years: Vec<Year>,
    pub series: Vec<TeamSeries>,
}

/// Read one metric off a team-season.
pub fn metric_value(season: &TeamSeason, metric: Metric) -> f64 {
    match metric {
        Metric::PowerRank => season.power_rank as f64,
        Metric::PowerScore => season.power_score,
        Metric::TotalWar => season.total_war,
        Metric::Ops => season.batting.ops,
        Metric::BattingWar => season.batting.batting_war,
        Metric::WrcPlus => season.batting.wrc_plus,
        Metric::Era => season.pitching.era,
        Metric::Fip => season.pitching.fip,
        Metric::Whip => season.pitching.whip,
        Metric::Ip => season.pitching.ip,
        Metric::PitchingWar => season.pitching.pitching_war,
    }
}

/// Build one series per requested team over the years in `from..=to` that
/// appear in `seasons`.
pub fn build_trajectory(
    seasons: &[TeamSeason],
    teams: &[String],
    from: Year,
    to: Year,
    metric: Metric,
) -> Trajectory {
    let years: Vec<Year> = seasons
        .iter()
        .map(|s| s.year)
        .filter(|y| *y >= from && *y <= to)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let by_team_year: HashMap<(&str, Year), &TeamSeason> = seasons
        .iter()
        .map(|s| ((s.team.as_str(), s.year), s))
        .collect();

    let series = teams
        .iter()
        .map(|team| TeamSeries {
            team: team.clone(),
            points: years
                .iter()
                .map(|&year| SeriesPoint {
                    year,
                    value: by_team_year
                        .get(&(team.as_str(), year))
                        .map(|s| metric_value(s, metric)),
                })
                .collect(),
        })
        .collect();

    Trajectory {
        metric: metric.to_string(),
        years,
        series,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a metric value for display.
///
/// Uses the metric's decimals, trims trailing zeros, groups thousands for
/// innings and prints `-` for a missing or non-finite value.
pub fn format_metric(value: Option<f64>, metric: Metric) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "-".to_string();
    };

    let mut formatted = format!("{:.*}", metric.decimals(), value);
    if formatted.contains('.') {
        formatted = formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    if metric.thousands_separator() {
        let (sign, rest) = match formatted.strip_prefix('-') {
            Some(rest) => ("-", rest.to_string()),
            None => ("", formatted.clone()),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i.to_string(), format!(".{}", f)),
            None => (rest.clone(), String::new()),
        };
        formatted = format!("{}{}{}", sign, group_thousands(&int_part), frac_part);
    }

    formatted
}
