use itertools::Itertools;

use crate::{
    database::db_structs::GameResult,
    model::{
        stats_utils::{average, percentage},
        structures::game_definition_totals::{GameDefinitionTotal, TopLevelTotals}
    }
};

/// Wins and losses per game definition, ordered by game definition name then id.
pub fn game_definition_totals(results: &[GameResult]) -> Vec<GameDefinitionTotal> {
    results
        .iter()
        .into_group_map_by(|r| r.game_definition_id)
        .into_iter()
        .map(|(game_definition_id, group)| {
            GameDefinitionTotal {
                game_definition_id,
                game_definition_name: group[0].game_definition_name.clone(),
                games_won: group.iter().filter(|r| r.is_win()).count() as i32,
                games_lost: group.iter().filter(|r| r.is_loss()).count() as i32
            }
        })
        .sorted_by(|a, b| {
            a.game_definition_name
                .cmp(&b.game_definition_name)
                .then(a.game_definition_id.cmp(&b.game_definition_id))
        })
        .collect()
}

pub fn top_level_totals(totals: &[GameDefinitionTotal]) -> TopLevelTotals {
    let total_games_won: i32 = totals.iter().map(|t| t.games_won).sum();
    let total_games_lost: i32 = totals.iter().map(|t| t.games_lost).sum();

    TopLevelTotals {
        total_games: total_games_won + total_games_lost,
        total_games_won,
        total_games_lost
    }
}

/// Truncated whole-number win percentage, 0 without games.
pub fn win_percentage(totals: &TopLevelTotals) -> i32 {
    percentage(totals.total_games_won, totals.total_games)
}

/// Mean number of players across the distinct played games in `results`.
pub fn average_players_per_game(results: &[GameResult]) -> f32 {
    average(
        results
            .iter()
            .unique_by(|r| r.played_game_id)
            .map(|r| r.number_of_players)
    )
}
