use crate::{
    database::{
        db_structs::{Champion, GameDefinition, GameResult, GamingGroup, Player, PlayerAchievement},
        history::HistorySnapshot
    },
    model::structures::achievement_level::AchievementLevel
};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Midnight UTC on 2024-01-01 shifted by `day` days
pub fn generate_timestamp(day: i64) -> DateTime<FixedOffset> {
    let base = FixedOffset::east_opt(0)
        .and_then(|utc| utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single())
        .expect("2024-01-01T00:00:00Z is a valid timestamp");

    base + Duration::days(day)
}

pub fn generate_player(id: i32, gaming_group_id: i32, name: &str, active: bool) -> Player {
    Player {
        id,
        name: name.to_string(),
        active,
        gaming_group_id,
        application_user_id: None
    }
}

pub fn generate_game_definition(id: i32, name: &str) -> GameDefinition {
    GameDefinition {
        id,
        name: name.to_string(),
        gaming_group_id: 1,
        champion_id: None
    }
}

/// A single result in group 1 for game definition 1, with no points awarded.
pub fn generate_result(player_id: i32, played_game_id: i32, game_rank: i32, date: DateTime<FixedOffset>) -> GameResult {
    GameResult {
        player_id,
        played_game_id,
        game_definition_id: 1,
        game_definition_name: "Game 1".to_string(),
        gaming_group_id: 1,
        game_rank,
        points_awarded: 0,
        duration_bonus_points: 0,
        weight_bonus_points: 0,
        date_played: date,
        number_of_players: 2
    }
}

/// All results of one played game. `placements` holds `(player_id, rank)` pairs.
pub fn generate_played_game(
    played_game_id: i32,
    gaming_group_id: i32,
    game_definition_id: i32,
    date: DateTime<FixedOffset>,
    placements: &[(i32, i32)]
) -> Vec<GameResult> {
    placements
        .iter()
        .map(|(player_id, rank)| GameResult {
            player_id: *player_id,
            played_game_id,
            game_definition_id,
            game_definition_name: format!("Game {}", game_definition_id),
            gaming_group_id,
            game_rank: *rank,
            points_awarded: 0,
            duration_bonus_points: 0,
            weight_bonus_points: 0,
            date_played: date,
            number_of_players: placements.len() as i32
        })
        .collect()
}

/// A reproducible history for one gaming group (id 1).
///
/// Every played game has between 2 and 5 distinct participants with unique ranks.
/// Points are awarded the way NemePoints scale: more for better ranks.
pub fn generate_random_history(seed: u64, n_players: i32, n_games: i32) -> HistorySnapshot {
    if n_players < 2 {
        panic!("A history needs at least 2 players");
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let players: Vec<Player> = (1..=n_players)
        .map(|id| {
            let mut player = generate_player(id, 1, &format!("Player {}", id), rng.random_bool(0.85));
            if rng.random_bool(0.3) {
                player.application_user_id = Some(format!("user-{}", id));
            }
            player
        })
        .collect();

    let n_definitions = 4;
    let mut game_definitions: Vec<GameDefinition> =
        (1..=n_definitions).map(|id| generate_game_definition(id, &format!("Game {}", id))).collect();

    let player_ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    let mut results = Vec::new();

    for played_game_id in 1..=n_games {
        let n_participants = rng.random_range(2..=n_players.min(5)) as usize;
        let mut participants = player_ids.clone();
        participants.shuffle(&mut rng);
        participants.truncate(n_participants);

        let game_definition_id = rng.random_range(1..=n_definitions);
        // Several games may share a day so the played game id tie-break is exercised
        let date = generate_timestamp(rng.random_range(0..(n_games as i64 / 2 + 1)));

        for (i, player_id) in participants.iter().enumerate() {
            let rank = i as i32 + 1;
            let mut result = generate_played_game(played_game_id, 1, game_definition_id, date, &[(*player_id, rank)])
                .remove(0);
            result.number_of_players = n_participants as i32;
            result.points_awarded = (n_participants as i32 - i as i32) * 5;
            result.duration_bonus_points = rng.random_range(0..3);
            result.weight_bonus_points = rng.random_range(0..3);
            results.push(result);
        }
    }

    let mut champions = Vec::new();
    for (i, definition) in game_definitions.iter_mut().enumerate() {
        let champion_id = i as i32 + 1;
        let player_id = player_ids[rng.random_range(0..player_ids.len())];
        champions.push(Champion {
            id: champion_id,
            game_definition_id: definition.id,
            player_id,
            number_of_wins: rng.random_range(1..10),
            number_of_games: 10
        });
        definition.champion_id = Some(champion_id);
    }

    let levels = [AchievementLevel::Bronze, AchievementLevel::Silver, AchievementLevel::Gold];
    let achievements: Vec<PlayerAchievement> = (1..=n_players * 2)
        .map(|achievement_id| PlayerAchievement {
            player_id: player_ids[rng.random_range(0..player_ids.len())],
            achievement_id,
            achievement_level: levels[rng.random_range(0..levels.len())],
            date_created: generate_timestamp(rng.random_range(0..30))
        })
        .collect();

    HistorySnapshot::new(
        vec![GamingGroup {
            id: 1,
            name: "Random Group".to_string()
        }],
        players,
        game_definitions,
        champions,
        results,
        achievements
    )
}
