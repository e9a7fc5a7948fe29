#[path = "../common/mod.rs"]
mod common;

use common::init_test_env;
use nemestats_processor::{
    database::{HistorySnapshot, HistorySource},
    model::{
        player_details, players_with_nemesis, ranking::compare_rankings, streak::longest_winning_streak,
        DateRangeFilter, StatsError
    },
    utils::test_utils::{generate_random_history, generate_timestamp}
};
use serial_test::serial;
use std::{cmp::Ordering, path::PathBuf, process::Command};

fn player_ids(history: &HistorySnapshot) -> Vec<i32> {
    history.players.iter().map(|p| p.id).collect()
}

#[test]
fn test_totals_add_up_for_every_player() {
    init_test_env();
    let history = generate_random_history(1, 8, 120);

    for player_id in player_ids(&history) {
        let details = player_details(&history, player_id, 10).unwrap();
        let stats = &details.player_stats;

        assert_eq!(stats.total_games, stats.total_games_won + stats.total_games_lost);
        assert_eq!(stats.total_games as usize, history.results_for_player(player_id).len());
        assert_eq!(
            stats.total_games,
            details.player_game_summaries.iter().map(|t| t.games_played()).sum::<i32>()
        );
        assert_eq!(
            details.points_summary.total_points,
            details.points_summary.base_points
                + details.points_summary.duration_bonus_points
                + details.points_summary.weight_bonus_points
        );
        assert!(details.player_game_results.len() <= 10);
    }
}

#[test]
fn test_minion_flags_match_nemeses() {
    init_test_env();
    let history = generate_random_history(2, 7, 150);
    let ids = player_ids(&history);
    let details: Vec<_> = ids.iter().map(|id| player_details(&history, *id, 5).unwrap()).collect();

    for subject in &details {
        for versus in &subject.player_versus_players_statistics {
            let opponent = details.iter().find(|d| d.id == versus.opposing_player_id).unwrap();

            assert_eq!(versus.is_minion, opponent.current_nemesis.is_nemesis(subject.id));
            assert_eq!(versus.is_nemesis, subject.current_nemesis.is_nemesis(opponent.id));
        }

        for minion in &subject.minions {
            let minion_details = details.iter().find(|d| d.id == minion.id).unwrap();
            assert_eq!(minion_details.current_nemesis.nemesis_player_id(), Some(subject.id));
        }
    }
}

#[test]
fn test_nemesis_has_worst_loss_ratio() {
    init_test_env();
    let history = generate_random_history(3, 6, 100);

    for player_id in player_ids(&history) {
        let details = player_details(&history, player_id, 0).unwrap();
        let Some(nemesis) = details.current_nemesis.record() else {
            assert!(details
                .player_versus_players_statistics
                .iter()
                .all(|v| v.number_of_games_lost_versus_this_player == 0));
            continue;
        };

        for versus in &details.player_versus_players_statistics {
            let lost = versus.number_of_games_lost_versus_this_player as i64;
            let played = versus.number_of_games_played_versus_this_player as i64;
            let ordering = (lost * nemesis.number_of_games_played as i64).cmp(&(nemesis.number_of_games_lost as i64 * played));

            assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal && lost > 0 {
                assert!(nemesis.nemesis_player_id <= versus.opposing_player_id);
            }
        }
    }
}

#[test]
fn test_recomputing_is_idempotent() {
    init_test_env();
    let history = generate_random_history(4, 8, 80);

    for player_id in player_ids(&history) {
        assert_eq!(player_details(&history, player_id, 10), player_details(&history, player_id, 10));
    }

    let range = DateRangeFilter::new(Some(generate_timestamp(5)), Some(generate_timestamp(30))).unwrap();
    assert_eq!(
        players_with_nemesis(&history, 1, &range),
        players_with_nemesis(&history, 1, &range)
    );
}

#[test]
fn test_group_listing_is_ranked() {
    init_test_env();
    let history = generate_random_history(5, 10, 200);
    let listing = players_with_nemesis(&history, 1, &DateRangeFilter::all_time());

    assert_eq!(listing.len(), history.players.len());
    for pair in listing.windows(2) {
        assert_ne!(compare_rankings(&pair[0], &pair[1]), Ordering::Greater);
    }
}

#[test]
fn test_streak_grows_with_appended_wins() {
    let history = generate_random_history(6, 4, 40);
    let mut results = history.results_for_player(1);
    let before = longest_winning_streak(&results);

    let mut next_game_id = 1_000;
    for day in 100..103 {
        let mut win = history.results[0].clone();
        win.player_id = 1;
        win.played_game_id = next_game_id;
        win.game_rank = 1;
        win.date_played = generate_timestamp(day);
        results.push(win);
        next_game_id += 1;
    }

    assert!(longest_winning_streak(&results) >= before.max(3));
}

#[test]
fn test_unknown_player_and_bad_range() {
    let history = generate_random_history(7, 4, 10);

    assert_eq!(player_details(&history, 404, 10), Err(StatsError::NotFound(404)));
    assert!(matches!(
        DateRangeFilter::new(Some(generate_timestamp(2)), Some(generate_timestamp(1))),
        Err(StatsError::InvalidRange { .. })
    ));
}

fn write_history(name: &str, history: &HistorySnapshot) -> PathBuf {
    let path = std::env::temp_dir().join(format!("nemestats-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, serde_json::to_string(history).unwrap()).unwrap();
    path
}

/// The binary prints the player's details as JSON
#[test]
#[serial]
fn test_binary_prints_player_details() {
    let history = generate_random_history(8, 5, 30);
    let path = write_history("details", &history);

    let output = Command::new(env!("CARGO_BIN_EXE_nemestats-processor"))
        .args(["--history", path.to_str().unwrap(), "--player", "1"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], 1);
    assert!(json["current_nemesis"]["kind"].is_string());
    assert!(json["player_stats"]["average_points_per_game"].is_number());
    assert!(json["player_stats"]["average_points_per_player"].is_number());
}

/// The binary exits with an error when the snapshot cannot be read
#[test]
#[serial]
fn test_binary_exits_on_missing_history() {
    let output = Command::new(env!("CARGO_BIN_EXE_nemestats-processor"))
        .args(["--history", "/nonexistent/history.json", "--player", "1"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success(), "Process should fail without a history file");
    assert_eq!(output.status.code(), Some(1));
}

/// The binary rejects an inverted date range before loading anything
#[test]
#[serial]
fn test_binary_rejects_inverted_range() {
    let output = Command::new(env!("CARGO_BIN_EXE_nemestats-processor"))
        .args([
            "--history",
            "/nonexistent/history.json",
            "--gaming-group",
            "1",
            "--from",
            "2024-02-01T00:00:00Z",
            "--to",
            "2024-01-01T00:00:00Z",
        ])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");

    assert_eq!(output.status.code(), Some(1));
}

/// The binary prints the ranked group listing keyed by player id
#[test]
#[serial]
fn test_binary_prints_group_listing() {
    let history = generate_random_history(9, 6, 40);
    let path = write_history("group", &history);

    let output = Command::new(env!("CARGO_BIN_EXE_nemestats-processor"))
        .args(["--history", path.to_str().unwrap(), "--gaming-group", "1"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listing = json.as_object().unwrap();
    assert_eq!(listing.len(), history.players.len());

    for player_id in player_ids(&history) {
        assert_eq!(listing[&player_id.to_string()]["player_id"], player_id);
    }
    assert!(listing.values().all(|row| row["points_summary"].is_object()));
}

/// With a user the binary prints the quick stats, then the players to create
#[test]
#[serial]
fn test_binary_prints_user_quick_stats_and_players_to_create() {
    let mut history = generate_random_history(10, 6, 40);
    history.players[0].application_user_id = Some("user-cli".to_string());
    history.players[0].active = true;
    let player_id = history.players[0].id;
    let path = write_history("user", &history);

    let output = Command::new(env!("CARGO_BIN_EXE_nemestats-processor"))
        .args(["--history", path.to_str().unwrap(), "--gaming-group", "1", "--user", "user-cli"])
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute processor");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&output.stdout)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(documents.len(), 2);

    let quick_stats = &documents[0];
    assert_eq!(quick_stats["player_id"], player_id);
    assert_eq!(
        quick_stats["total_games_played"],
        history.results_for_player(player_id).len() as i64
    );

    let to_create = &documents[1];
    assert_eq!(to_create["user_player"]["player_id"], player_id);
    assert!(to_create["recent_players"].is_array());
    assert!(to_create["other_players"].is_array());
}
