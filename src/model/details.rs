use std::collections::HashMap;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    database::{
        db_structs::{GameDefinition, GameResult, Player},
        history::HistorySource
    },
    model::{
        achievements::{championed_games, former_championed_games, recent_achievements},
        date_range::DateRangeFilter,
        error::StatsError,
        nemesis::GroupAggregation,
        points::points_summary,
        streak::longest_winning_streak,
        structures::{player_details::PlayerDetails, player_statistics::PlayerStatistics},
        totals::{average_players_per_game, game_definition_totals, top_level_totals, win_percentage},
        versus::versus_player_statistics
    }
};

/// All-time statistics over one player's results.
pub fn player_statistics(results: &[GameResult]) -> PlayerStatistics {
    let definition_totals = game_definition_totals(results);
    let totals = top_level_totals(&definition_totals);

    PlayerStatistics {
        game_definition_totals: definition_totals,
        total_games: totals.total_games,
        total_games_won: totals.total_games_won,
        total_games_lost: totals.total_games_lost,
        win_percentage: win_percentage(&totals),
        points_summary: points_summary(results, &DateRangeFilter::all_time()),
        average_players_per_game: average_players_per_game(results),
        ..Default::default()
    }
    .with_averages()
}

/// The `count` most recent results, newest first. Same-day games fall back to played game id.
pub fn recent_results(results: &[GameResult], count: usize) -> Vec<GameResult> {
    results
        .iter()
        .sorted_by(|a, b| {
            b.date_played
                .cmp(&a.date_played)
                .then(b.played_game_id.cmp(&a.played_game_id))
        })
        .take(count)
        .cloned()
        .collect()
}

/// Builds the full details aggregate for `player_id`.
///
/// Every row is fetched from `source` up front so that all parts of the result
/// describe the same history. The group's nemesis replay runs once.
pub fn player_details(
    source: &impl HistorySource,
    player_id: i32,
    number_of_recent_games: usize
) -> Result<PlayerDetails, StatsError> {
    let player = source.player(player_id).ok_or_else(|| {
        warn!("Player {} does not exist", player_id);
        StatsError::NotFound(player_id)
    })?;

    let gaming_group_id = player.gaming_group_id;
    let player_results = source.results_for_player(player_id);
    let group_results = source.results_for_group(gaming_group_id);
    let group_players = source.players_in_group(gaming_group_id);
    let gaming_group_name = source.gaming_group(gaming_group_id).map(|g| g.name);
    let champions = source.champions_for_player(player_id);
    let achievements = source.achievements_for_player(player_id);
    let definitions: Vec<GameDefinition> = champions
        .iter()
        .map(|c| c.game_definition_id)
        .unique()
        .filter_map(|id| source.game_definition(id))
        .collect();

    debug!(
        "Building details for player {} from {} player results and {} group results",
        player_id,
        player_results.len(),
        group_results.len()
    );

    let (aggregation, (player_stats, (longest_winning_streak, player_game_results))) = rayon::join(
        || GroupAggregation::build(&group_results),
        || {
            rayon::join(
                || player_statistics(&player_results),
                || {
                    (
                        longest_winning_streak(&player_results),
                        recent_results(&player_results, number_of_recent_games)
                    )
                }
            )
        }
    );

    let player_names: HashMap<i32, String> = group_players.iter().map(|p| (p.id, p.name.clone())).collect();
    let snapshot = aggregation.nemeses.snapshot(player_id);
    let minion_ids = aggregation.nemeses.minion_set(player_id);

    let minions: Vec<Player> = group_players
        .iter()
        .filter(|p| minion_ids.contains(&p.id))
        .sorted_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)))
        .cloned()
        .collect();

    let player_versus_players_statistics = match aggregation.ledger.records_for(player_id) {
        Some(records) => versus_player_statistics(records, &snapshot.current, &minion_ids, &player_names),
        None => Vec::new()
    };

    Ok(PlayerDetails {
        id: player.id,
        registered: player.is_registered(),
        name: player.name,
        active: player.active,
        gaming_group_id,
        gaming_group_name,
        player_game_results,
        player_game_summaries: player_stats.game_definition_totals.clone(),
        points_summary: player_stats.points_summary,
        player_stats,
        current_nemesis: snapshot.current,
        previous_nemesis: snapshot.previous,
        minions,
        championed_games: championed_games(&champions, &definitions),
        former_championed_games: former_championed_games(&champions, &definitions),
        player_versus_players_statistics,
        longest_winning_streak,
        achievements: recent_achievements(&achievements)
    })
}
