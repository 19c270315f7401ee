//! Query command: read-only lookups rendered as text or JSON.

use serde::Serialize;

use crate::{
    cli::{
        types::{Metric, Year},
        QueryCmd,
    },
    dataset::{
        players::{player_seasons, roster, search_by_name, top_players},
        queries,
        trajectory::{build_trajectory, format_metric, Trajectory},
        DatasetCache,
    },
    stats::{records::SeasonRow, TeamSeason},
    PowerError, Result,
};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One display line per team-season.
pub fn season_line(s: &TeamSeason) -> String {
    format!(
        "{:>2}. {} {:<12} power {:>6} | WAR {:>6} (bat {}, pit {}) | OPS {} wRC+ {} HR {} | ERA {} FIP {} WHIP {} IP {}",
        s.power_rank,
        s.year,
        s.team,
        format_metric(Some(s.power_score), Metric::PowerScore),
        format_metric(Some(s.total_war), Metric::TotalWar),
        format_metric(Some(s.batting.batting_war), Metric::BattingWar),
        format_metric(Some(s.pitching.pitching_war), Metric::PitchingWar),
        format_metric(Some(s.batting.ops), Metric::Ops),
        format_metric(Some(s.batting.wrc_plus), Metric::WrcPlus),
        s.batting.hr,
        format_metric(Some(s.pitching.era), Metric::Era),
        format_metric(Some(s.pitching.fip), Metric::Fip),
        format_metric(Some(s.pitching.whip), Metric::Whip),
        format_metric(Some(s.pitching.ip), Metric::Ip),
    )
}

fn render_seasons(seasons: &[TeamSeason], as_json: bool) -> Result<String> {
    if as_json {
        return to_json(seasons);
    }
    Ok(seasons.iter().map(season_line).collect::<Vec<_>>().join("\n"))
}

fn render_names(names: &[String], as_json: bool) -> Result<String> {
    if as_json {
        return to_json(names);
    }
    Ok(names.join("\n"))
}

fn render_players<R: SeasonRow + Serialize>(rows: &[R], as_json: bool) -> Result<String> {
    if as_json {
        return to_json(rows);
    }
    Ok(rows
        .iter()
        .map(|r| {
            format!(
                "{} {:<12} {:<20} WAR {}",
                r.year(),
                r.team(),
                r.name().unwrap_or("-"),
                format_metric(Some(r.war()), Metric::TotalWar)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

fn render_trajectory(trajectory: &Trajectory, metric: Metric, as_json: bool) -> Result<String> {
    if as_json {
        return to_json(trajectory);
    }

    let mut lines = vec![format!(
        "{:<12} {}",
        trajectory.metric,
        trajectory
            .years
            .iter()
            .map(|y| format!("{:>8}", y))
            .collect::<Vec<_>>()
            .join("")
    )];
    for series in &trajectory.series {
        let values: String = series
            .points
            .iter()
            .map(|p| format!("{:>8}", format_metric(p.value, metric)))
            .collect();
        lines.push(format!("{:<12} {}", series.team, values));
    }
    Ok(lines.join("\n"))
}

/// Run one query against the cached datasets and render the result.
///
/// A `season` lookup that finds nothing is not an error: it renders a
/// not-found line (or `null` in JSON).
pub fn handle_query(cache: &DatasetCache, cmd: &QueryCmd, as_json: bool) -> Result<String> {
    match cmd {
        QueryCmd::Teams => {
            let seasons = cache.team_seasons()?;
            render_names(&queries::teams(&seasons), as_json)
        }
        QueryCmd::Years => {
            let seasons = cache.team_seasons()?;
            let years: Vec<Year> = queries::years(&seasons);
            if as_json {
                return to_json(&years);
            }
            Ok(years
                .iter()
                .map(|y| y.to_string())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        QueryCmd::Team { team } => {
            let seasons = cache.team_seasons()?;
            render_seasons(&queries::team_seasons(&seasons, team), as_json)
        }
        QueryCmd::Year { year } => {
            let seasons = cache.team_seasons()?;
            render_seasons(&queries::year_seasons(&seasons, *year), as_json)
        }
        QueryCmd::Season { team, year } => {
            let seasons = cache.team_seasons()?;
            let found = queries::team_season(&seasons, team, *year);
            match (found, as_json) {
                (found, true) => to_json(&found),
                (Some(s), false) => Ok(season_line(s)),
                (None, false) => Ok(PowerError::NotFound {
                    what: format!("{} {}", team, year),
                }
                .to_string()),
            }
        }
        QueryCmd::Range { from, to } => {
            let seasons = cache.team_seasons()?;
            render_names(&queries::teams_in_year_range(&seasons, *from, *to)?, as_json)
        }
        QueryCmd::Trajectory {
            teams,
            from,
            to,
            metric,
        } => {
            if from > to {
                return Err(PowerError::InvalidYearRange {
                    from: from.as_u16(),
                    to: to.as_u16(),
                });
            }
            let seasons = cache.team_seasons()?;
            let trajectory = build_trajectory(&seasons, teams, *from, *to, *metric);
            render_trajectory(&trajectory, *metric, as_json)
        }
        QueryCmd::TopBatters { team, year, limit } => {
            let batters = cache.batters()?;
            render_players(&top_players(&batters, team, *year, *limit), as_json)
        }
        QueryCmd::TopPitchers { team, year, limit } => {
            let pitchers = cache.pitchers()?;
            render_players(&top_players(&pitchers, team, *year, *limit), as_json)
        }
        QueryCmd::Player {
            name,
            pitcher,
            search,
        } => {
            if *pitcher {
                let pitchers = cache.pitchers()?;
                let rows = if *search {
                    search_by_name(&pitchers, name)
                } else {
                    player_seasons(&pitchers, name)
                };
                render_players(&rows, as_json)
            } else {
                let batters = cache.batters()?;
                let rows = if *search {
                    search_by_name(&batters, name)
                } else {
                    player_seasons(&batters, name)
                };
                render_players(&rows, as_json)
            }
        }
        QueryCmd::Roster {
            team,
            year,
            pitcher,
        } => {
            let names = if *pitcher {
                roster(&cache.pitchers()?, *year, team)
            } else {
                roster(&cache.batters()?, *year, team)
            };
            render_names(&names, as_json)
        }
    }
}
