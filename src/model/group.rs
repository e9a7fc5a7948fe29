use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::info;

use crate::{
    database::{
        db_structs::{Champion, GameDefinition, GameResult, Player, PlayerAchievement},
        history::HistorySource
    },
    model::{
        achievements::{achievements_per_level, championed_games},
        date_range::DateRangeFilter,
        nemesis::GroupAggregation,
        points::points_summaries_by_player,
        ranking::rank_players,
        structures::{nemesis::NemesisRelationship, player_details::PlayerWithNemesis, player_ranking::PlayerRanking}
    }
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WinLoss {
    games_won: i32,
    games_lost: i32
}

fn win_loss_by_player(results: &[GameResult], range: &DateRangeFilter) -> HashMap<i32, WinLoss> {
    let mut counts: HashMap<i32, WinLoss> = HashMap::new();

    for result in results.iter().filter(|r| range.contains(&r.date_played)) {
        let entry = counts.entry(result.player_id).or_default();
        if result.is_win() {
            entry.games_won += 1;
        } else if result.is_loss() {
            entry.games_lost += 1;
        }
    }

    counts
}

/// Rows fetched once per listing
struct GroupRows {
    players: Vec<Player>,
    results: Vec<GameResult>,
    champions: HashMap<i32, Vec<Champion>>,
    definitions: Vec<GameDefinition>,
    achievements: HashMap<i32, Vec<PlayerAchievement>>
}

impl GroupRows {
    fn fetch(source: &impl HistorySource, gaming_group_id: i32) -> GroupRows {
        let players = source.players_in_group(gaming_group_id);
        let results = source.results_for_group(gaming_group_id);
        let champions: HashMap<i32, Vec<Champion>> =
            players.iter().map(|p| (p.id, source.champions_for_player(p.id))).collect();
        let definitions = champions
            .values()
            .flatten()
            .map(|c| c.game_definition_id)
            .unique()
            .filter_map(|id| source.game_definition(id))
            .collect();
        let achievements = players
            .iter()
            .map(|p| (p.id, source.achievements_for_player(p.id)))
            .collect();

        GroupRows {
            players,
            results,
            champions,
            definitions,
            achievements
        }
    }
}

/// Every player of the group with their nemeses, record and points inside `range`,
/// ordered by [`rank_players`].
///
/// Nemeses are resolved over the group's full history regardless of `range`.
pub fn players_with_nemesis(
    source: &impl HistorySource,
    gaming_group_id: i32,
    range: &DateRangeFilter
) -> Vec<PlayerWithNemesis> {
    let rows = GroupRows::fetch(source, gaming_group_id);
    let aggregation = GroupAggregation::build(&rows.results);
    let points = points_summaries_by_player(&rows.results, range);
    let win_loss = win_loss_by_player(&rows.results, range);
    let names: HashMap<i32, &str> = rows.players.iter().map(|p| (p.id, p.name.as_str())).collect();

    let nemesis_name = |relationship: NemesisRelationship| -> Option<String> {
        relationship
            .nemesis_player_id()
            .and_then(|id| names.get(&id))
            .map(|name| name.to_string())
    };

    let listing: Vec<PlayerWithNemesis> = rows
        .players
        .par_iter()
        .map(|player| {
            let snapshot = aggregation.nemeses.snapshot(player.id);
            let record = win_loss.get(&player.id).copied().unwrap_or_default();
            let champions = rows.champions.get(&player.id).map(Vec::as_slice).unwrap_or_default();
            let achievements = rows.achievements.get(&player.id).map(Vec::as_slice).unwrap_or_default();

            PlayerWithNemesis {
                player_id: player.id,
                player_name: player.name.clone(),
                player_active: player.active,
                player_registered: player.is_registered(),
                application_user_id: player.application_user_id.clone(),
                gaming_group_id: player.gaming_group_id,
                nemesis_player_id: snapshot.current.nemesis_player_id(),
                nemesis_player_name: nemesis_name(snapshot.current),
                previous_nemesis_player_id: snapshot.previous.nemesis_player_id(),
                previous_nemesis_player_name: nemesis_name(snapshot.previous),
                games_won: record.games_won,
                games_lost: record.games_lost,
                total_championed_games: championed_games(champions, &rows.definitions).len() as i32,
                points_summary: Some(points.get(&player.id).copied().unwrap_or_default()),
                achievements_per_level: achievements_per_level(achievements)
            }
        })
        .collect();

    info!(
        "Listed {} players of gaming group {} over {} game results",
        listing.len(),
        gaming_group_id,
        rows.results.len()
    );

    rank_players(listing)
}

/// Keys an already ranked listing by player id, keeping its order.
pub fn index_by_player(listing: Vec<PlayerWithNemesis>) -> IndexMap<i32, PlayerWithNemesis> {
    listing.into_iter().map(|row| (row.player_id, row)).collect()
}

/// Lightweight ranking of the group's players over `range`.
///
/// Players without results in the range carry no points summary.
pub fn player_rankings(
    source: &impl HistorySource,
    gaming_group_id: i32,
    range: &DateRangeFilter
) -> Vec<PlayerRanking> {
    let results = source.results_for_group(gaming_group_id);
    let points = points_summaries_by_player(&results, range);
    let win_loss = win_loss_by_player(&results, range);

    let rankings = source
        .players_in_group(gaming_group_id)
        .into_iter()
        .map(|player| PlayerRanking {
            player_id: player.id,
            points_summary: points.get(&player.id).copied(),
            games_won: win_loss.get(&player.id).map_or(0, |r| r.games_won),
            player_name: player.name,
            active: player.active
        })
        .collect();

    rank_players(rankings)
}
