//! Integration tests for command handlers

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use kbo_power::{
    cli::QueryCmd,
    commands::{
        build::{handle_build, BuildParams},
        query::handle_query,
    },
    dataset::{DataPaths, DatasetCache},
    Metric, PowerError, TeamSeason, Year,
};
use serde_json::json;
use tempfile::TempDir;

fn write_raw(paths: &DataPaths, batting: serde_json::Value, pitching: serde_json::Value) {
    fs::create_dir_all(paths.batting.parent().unwrap()).unwrap();
    fs::write(&paths.batting, batting.to_string()).unwrap();
    fs::write(&paths.pitching, pitching.to_string()).unwrap();
}

fn sample_batting() -> serde_json::Value {
    json!([
        {"Year": 1994, "Team": "LG", "Name": "Seo", "PA": 500, "AB": 450, "H": 140, "BB": 40, "HP": 4, "SF": 6, "TB": 210, "HR": 15, "OPS": 0.8, "wRC+": 135, "WAR": 5.0},
        {"Year": 1994, "Team": "LG", "Name": "Yoo", "PA": 450, "AB": 400, "H": 115, "BB": 40, "HP": 2, "SF": 8, "TB": 160, "HR": 5, "OPS": 0.7, "wRC+": 110, "WAR": 2.5},
        {"Year": 1994, "Team": "Taepyungyang", "Name": "Kim", "PA": 500, "AB": 460, "H": 120, "BB": 30, "HP": 5, "SF": 5, "TB": 170, "HR": 12, "wRC+": 100, "WAR": 1.5},
        {"Year": 1995, "Team": "LG", "Name": "Seo", "PA": 520, "AB": 470, "H": 130, "BB": 45, "HP": 3, "SF": 2, "TB": 190, "HR": 14, "wRC+": 120, "WAR": 3.4},
        {"Year": 1995, "Team": "OB", "Name": "Kim", "PA": 540, "AB": 480, "H": 150, "BB": 50, "HP": 5, "SF": 5, "TB": 240, "HR": 25, "wRC+": 150, "WAR": 6.0}
    ])
}

fn sample_pitching() -> serde_json::Value {
    json!([
        {"Year": 1994, "Team": "LG", "Name": "Lee", "IP": 180.1, "ER": 55, "H": 160, "BB": 50, "FIP": 3.5, "WAR": 4.0},
        {"Year": 1994, "Team": "Taepyungyang", "Name": "Jung", "IP": 200, "ER": 60, "H": 170, "BB": 60, "FIP": 3.1, "WAR": 5.5},
        {"Year": 1995, "Team": "OB", "Name": "Kwon", "IP": 170, "ER": 50, "H": 150, "BB": 40, "FIP": 3.8, "WAR": 3.0}
    ])
}

fn setup() -> (TempDir, DataPaths) {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::from_root(dir.path());
    write_raw(&paths, sample_batting(), sample_pitching());
    (dir, paths)
}

fn params(dir: &TempDir) -> BuildParams {
    BuildParams {
        data_dir: dir.path().to_path_buf(),
        batting: None,
        pitching: None,
        output: None,
    }
}

fn read_output(path: &PathBuf) -> Vec<TeamSeason> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_build_writes_ranked_team_seasons() {
    let (dir, paths) = setup();

    let summary = handle_build(params(&dir)).unwrap();
    assert_eq!(summary.batting_rows, 5);
    assert_eq!(summary.pitching_rows, 3);
    assert_eq!(summary.team_seasons, 4);
    assert_eq!(summary.output, paths.team_seasons);

    let seasons = read_output(&paths.team_seasons);
    assert_eq!(seasons.len(), 4);
    assert_eq!(seasons[0].year, Year::new(1994));
    assert_eq!(seasons[0].power_rank, 1);

    // LG 1994: batting 7.5, pitching 4.0 -> 4.125 + 1.8
    let lg = seasons
        .iter()
        .find(|s| s.team == "LG" && s.year == Year::new(1994))
        .unwrap();
    assert_eq!(lg.total_war, 11.5);
    assert_eq!(lg.batting.hr, 20);

    // LG 1995 has no pitching rows
    let lg_1995 = seasons
        .iter()
        .find(|s| s.team == "LG" && s.year == Year::new(1995))
        .unwrap();
    assert_eq!(lg_1995.pitching.ip, 0.0);
    assert_eq!(lg_1995.power_rank, 2);
}

#[test]
fn test_build_output_uses_camel_case_fields() {
    let (dir, paths) = setup();
    handle_build(params(&dir)).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.team_seasons).unwrap()).unwrap();
    let first = &raw[0];
    for field in ["year", "team", "batting", "pitching", "totalWar", "powerScore", "powerRank"] {
        assert!(first.get(field).is_some(), "missing {}", field);
    }
    assert!(first["batting"].get("battingWar").is_some());
    assert!(first["batting"].get("wrcPlus").is_some());
    assert!(first["pitching"].get("pitchingWar").is_some());
}

#[test]
fn test_build_with_malformed_input_keeps_previous_output() {
    let (dir, paths) = setup();
    handle_build(params(&dir)).unwrap();
    let before = fs::read_to_string(&paths.team_seasons).unwrap();

    fs::write(&paths.pitching, "[{\"Year\": 1994, \"Team\": ").unwrap();
    let result = handle_build(params(&dir));
    assert!(matches!(result, Err(PowerError::DatasetParse { .. })));

    let after = fs::read_to_string(&paths.team_seasons).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_build_with_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::from_root(dir.path());

    let result = handle_build(params(&dir));
    assert!(matches!(result, Err(PowerError::DatasetRead { .. })));
    assert!(!paths.team_seasons.exists());
}

#[test]
fn test_build_with_invalid_record_writes_nothing() {
    let (dir, paths) = setup();
    write_raw(
        &paths,
        json!([{"Year": 1994, "Team": " ", "WAR": 1.0}]),
        sample_pitching(),
    );

    let result = handle_build(params(&dir));
    assert!(matches!(result, Err(PowerError::InvalidRecord { .. })));
    assert!(!paths.team_seasons.exists());
}

#[test]
fn test_build_with_file_overrides() {
    let (dir, paths) = setup();
    let output = dir.path().join("elsewhere").join("ranked.json");

    let summary = handle_build(BuildParams {
        data_dir: PathBuf::from("/nonexistent"),
        batting: Some(paths.batting.clone()),
        pitching: Some(paths.pitching.clone()),
        output: Some(output.clone()),
    })
    .unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(read_output(&output).len(), 4);
}

fn built_cache() -> (TempDir, DatasetCache) {
    let (dir, paths) = setup();
    handle_build(params(&dir)).unwrap();
    (dir, DatasetCache::with_ttl(paths, Duration::from_secs(60)))
}

#[test]
fn test_query_teams_and_years() {
    let (_dir, cache) = built_cache();

    let teams = handle_query(&cache, &QueryCmd::Teams, false).unwrap();
    assert_eq!(teams, "LG\nOB\nTaepyungyang");

    let years = handle_query(&cache, &QueryCmd::Years, true).unwrap();
    let years: Vec<u16> = serde_json::from_str(&years).unwrap();
    assert_eq!(years, vec![1994, 1995]);
}

#[test]
fn test_query_year_ordered_by_rank() {
    let (_dir, cache) = built_cache();

    let out = handle_query(
        &cache,
        &QueryCmd::Year {
            year: Year::new(1995),
        },
        true,
    )
    .unwrap();
    let seasons: Vec<TeamSeason> = serde_json::from_str(&out).unwrap();
    let teams: Vec<&str> = seasons.iter().map(|s| s.team.as_str()).collect();
    assert_eq!(teams, vec!["OB", "LG"]);
}

#[test]
fn test_query_team_history() {
    let (_dir, cache) = built_cache();

    let out = handle_query(
        &cache,
        &QueryCmd::Team {
            team: "LG".to_string(),
        },
        false,
    )
    .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1994"));
    assert!(lines[1].contains("1995"));
}

#[test]
fn test_query_missing_season_is_not_an_error() {
    let (_dir, cache) = built_cache();
    let cmd = QueryCmd::Season {
        team: "Ssangbangwool".to_string(),
        year: Year::new(1994),
    };

    let text = handle_query(&cache, &cmd, false).unwrap();
    assert!(text.contains("Not found"));

    let json_out = handle_query(&cache, &cmd, true).unwrap();
    assert_eq!(json_out, "null");
}

#[test]
fn test_query_trajectory() {
    let (_dir, cache) = built_cache();
    let cmd = QueryCmd::Trajectory {
        teams: vec!["OB".to_string(), "LG".to_string()],
        from: Year::new(1994),
        to: Year::new(1995),
        metric: Metric::PowerRank,
    };

    let out = handle_query(&cache, &cmd, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["metric"], "powerRank");
    assert_eq!(value["series"][0]["team"], "OB");
    assert!(value["series"][0]["points"][0]["value"].is_null());
    assert_eq!(value["series"][0]["points"][1]["value"], 1.0);

    let text = handle_query(&cache, &cmd, false).unwrap();
    assert!(text.lines().nth(1).unwrap().contains('-'));
}

#[test]
fn test_query_reversed_range_is_an_error() {
    let (_dir, cache) = built_cache();
    let cmd = QueryCmd::Range {
        from: Year::new(1995),
        to: Year::new(1994),
    };
    assert!(matches!(
        handle_query(&cache, &cmd, false),
        Err(PowerError::InvalidYearRange { .. })
    ));
}

#[test]
fn test_query_players() {
    let (_dir, cache) = built_cache();

    let top = handle_query(
        &cache,
        &QueryCmd::TopBatters {
            team: "LG".to_string(),
            year: Year::new(1994),
            limit: 1,
        },
        false,
    )
    .unwrap();
    assert!(top.contains("Seo"));
    assert!(!top.contains("Yoo"));

    let seasons = handle_query(
        &cache,
        &QueryCmd::Player {
            name: "Kim".to_string(),
            pitcher: false,
            search: false,
        },
        true,
    )
    .unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&seasons).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Team"], "Taepyungyang");
    assert_eq!(rows[1]["Team"], "OB");

    let roster = handle_query(
        &cache,
        &QueryCmd::Roster {
            team: "Taepyungyang".to_string(),
            year: Year::new(1994),
            pitcher: true,
        },
        false,
    )
    .unwrap();
    assert_eq!(roster, "Jung");
}
