#[path = "../common/mod.rs"]
mod common;

use common::init_test_env;
use nemestats_processor::{
    database::{HistoryError, HistorySnapshot, HistorySource},
    model::{players_with_nemesis, structures::achievement_level::AchievementLevel, DateRangeFilter}
};
use serial_test::serial;

const SNAPSHOT: &str = r#"{
    "gaming_groups": [{ "id": 1, "name": "Board Game Night" }],
    "players": [
        { "id": 1, "name": "Ann", "active": true, "gaming_group_id": 1, "application_user_id": "user-ann" },
        { "id": 2, "name": "Bob", "active": true, "gaming_group_id": 1 },
        { "id": 3, "name": "Cy", "active": false, "gaming_group_id": 2 }
    ],
    "game_definitions": [{ "id": 10, "name": "Azul", "gaming_group_id": 1, "champion_id": 100 }],
    "champions": [
        { "id": 100, "game_definition_id": 10, "player_id": 2, "number_of_wins": 2, "number_of_games": 2 }
    ],
    "results": [
        {
            "player_id": 1, "played_game_id": 1, "game_definition_id": 10, "game_definition_name": "Azul",
            "gaming_group_id": 1, "game_rank": 2, "points_awarded": 3, "duration_bonus_points": 1,
            "date_played": "2024-03-01T19:00:00+01:00", "number_of_players": 2
        },
        {
            "player_id": 2, "played_game_id": 1, "game_definition_id": 10, "game_definition_name": "Azul",
            "gaming_group_id": 1, "game_rank": 1, "points_awarded": 10, "weight_bonus_points": 2,
            "date_played": "2024-03-01T19:00:00+01:00", "number_of_players": 2
        }
    ],
    "achievements": [
        { "player_id": 2, "achievement_id": 5, "achievement_level": 3, "date_created": "2024-03-02T00:00:00Z" }
    ]
}"#;

#[test]
fn test_snapshot_from_json() {
    init_test_env();
    let snapshot = HistorySnapshot::from_json_str(SNAPSHOT).unwrap();

    assert_eq!(snapshot.player(1).map(|p| p.is_registered()), Some(true));
    assert_eq!(snapshot.player(2).map(|p| p.is_registered()), Some(false));
    assert!(snapshot.player(4).is_none());
    assert_eq!(snapshot.gaming_group(1).map(|g| g.name), Some("Board Game Night".to_string()));
    assert_eq!(snapshot.players_in_group(1).len(), 2);
    assert_eq!(snapshot.results_for_group(1).len(), 2);
    assert_eq!(snapshot.results_for_player(1)[0].duration_bonus_points, 1);
    assert_eq!(snapshot.results_for_player(1)[0].weight_bonus_points, 0);
    assert_eq!(snapshot.achievements_for_player(2)[0].achievement_level, AchievementLevel::Gold);
    assert_eq!(snapshot.champions_for_player(2).len(), 1);
}

#[test]
fn test_missing_sections_default_to_empty() {
    let snapshot = HistorySnapshot::from_json_str(r#"{ "players": [] }"#).unwrap();

    assert!(snapshot.results.is_empty());
    assert!(snapshot.results_for_group(1).is_empty());
}

#[test]
fn test_malformed_json_is_an_error() {
    let result = HistorySnapshot::from_json_str(r#"{ "players": [ { "id": "one" } ] }"#);

    assert!(matches!(result, Err(HistoryError::Json(_))));
}

#[test]
#[serial]
fn test_snapshot_from_path() {
    init_test_env();
    let path = std::env::temp_dir().join(format!("nemestats-history-{}.json", std::process::id()));
    std::fs::write(&path, SNAPSHOT).unwrap();

    let snapshot = HistorySnapshot::from_path(&path);
    std::fs::remove_file(&path).ok();
    let snapshot = snapshot.unwrap();

    let listing = players_with_nemesis(&snapshot, 1, &DateRangeFilter::all_time());
    let bob = listing.iter().find(|row| row.player_id == 2).unwrap();
    let ann = listing.iter().find(|row| row.player_id == 1).unwrap();

    assert_eq!(listing[0].player_id, 2);
    assert_eq!(bob.total_championed_games, 1);
    assert_eq!(bob.points_summary.unwrap().total_points, 12);
    assert_eq!(bob.achievements_per_level[&AchievementLevel::Gold], 1);
    assert_eq!(ann.nemesis_player_name.as_deref(), Some("Bob"));
    assert_eq!(ann.points_summary.unwrap().total_points, 4);
}

#[test]
#[serial]
fn test_missing_file_is_an_io_error() {
    let result = HistorySnapshot::from_path("/nonexistent/nemestats/history.json");

    assert!(matches!(result, Err(HistoryError::Io(_))));
}
