use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    database::{db_structs::Player, history::HistorySource},
    model::{
        constants::MAX_NUMBER_OF_RECENT_PLAYERS,
        date_range::DateRangeFilter,
        error::StatsError,
        points::points_summary,
        structures::player_details::{PlayerInfo, PlayerQuickStats, PlayersToCreate}
    }
};

/// Players of the group, active first, then by name.
pub fn all_players(source: &impl HistorySource, gaming_group_id: i32, include_inactive: bool) -> Vec<Player> {
    source
        .players_in_group(gaming_group_id)
        .into_iter()
        .filter(|p| include_inactive || p.active)
        .sorted_by(|a, b| {
            b.active
                .cmp(&a.active)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        })
        .collect()
}

fn user_player(source: &impl HistorySource, application_user_id: &str, gaming_group_id: i32) -> Option<Player> {
    source
        .players_in_group(gaming_group_id)
        .into_iter()
        .find(|p| p.application_user_id.as_deref() == Some(application_user_id))
}

/// All-time headline numbers for the user's player in the group.
///
/// A user without a player in the group gets all zeros and no player id.
pub fn player_quick_stats(source: &impl HistorySource, application_user_id: &str, gaming_group_id: i32) -> PlayerQuickStats {
    let Some(player) = user_player(source, application_user_id, gaming_group_id) else {
        debug!("User {} has no player in gaming group {}", application_user_id, gaming_group_id);
        return PlayerQuickStats::default();
    };

    let results = source.results_for_player(player.id);

    PlayerQuickStats {
        player_id: Some(player.id),
        points_summary: points_summary(&results, &DateRangeFilter::all_time()),
        total_games_played: results.len() as i32,
        total_games_won: results.iter().filter(|r| r.is_win()).count() as i32
    }
}

fn player_info(player: &Player) -> PlayerInfo {
    PlayerInfo {
        player_id: player.id,
        player_name: player.name.clone(),
        gaming_group_id: player.gaming_group_id
    }
}

/// Active players split for recording a new game: the user's own player, the
/// players most recently played with, and everyone else by name.
pub fn players_to_create(source: &impl HistorySource, application_user_id: &str, gaming_group_id: i32) -> PlayersToCreate {
    let mut last_played: HashMap<i32, DateTime<FixedOffset>> = HashMap::new();
    for result in source.results_for_group(gaming_group_id) {
        let latest = last_played.entry(result.player_id).or_insert(result.date_played);
        *latest = (*latest).max(result.date_played);
    }

    // Descending, and `None` is the smallest key so players who never played come last
    let ordered = source
        .players_in_group(gaming_group_id)
        .into_iter()
        .filter(|p| p.active)
        .sorted_by(|a, b| {
            last_played
                .get(&b.id)
                .cmp(&last_played.get(&a.id))
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });

    let mut players_to_create = PlayersToCreate::default();

    for player in ordered {
        if player.application_user_id.as_deref() == Some(application_user_id) {
            players_to_create.user_player = Some(player_info(&player));
        } else if players_to_create.recent_players.len() < MAX_NUMBER_OF_RECENT_PLAYERS {
            players_to_create.recent_players.push(player_info(&player));
        } else {
            players_to_create.other_players.push(player_info(&player));
        }
    }

    players_to_create.other_players.sort_by(by_name);

    players_to_create
}

fn by_name(a: &PlayerInfo, b: &PlayerInfo) -> std::cmp::Ordering {
    a.player_name.cmp(&b.player_name).then(a.player_id.cmp(&b.player_id))
}

/// Players offered when editing an existing played game: its participants as
/// recent players, the rest of the group's active players as other players.
/// Both lists are ordered by name and there is never a user player.
pub fn players_for_editing_played_game(
    source: &impl HistorySource,
    played_game_id: i32
) -> Result<PlayersToCreate, StatsError> {
    let results = source.results_for_played_game(played_game_id);
    let Some(gaming_group_id) = results.first().map(|r| r.gaming_group_id) else {
        warn!("Played game {} has no results", played_game_id);
        return Err(StatsError::PlayedGameNotFound(played_game_id));
    };

    let participant_ids: Vec<i32> = results.iter().map(|r| r.player_id).unique().collect();

    let recent_players: Vec<PlayerInfo> = participant_ids
        .iter()
        .filter_map(|id| source.player(*id))
        .map(|player| PlayerInfo {
            gaming_group_id,
            ..player_info(&player)
        })
        .sorted_by(by_name)
        .collect();

    let other_players: Vec<PlayerInfo> = source
        .players_in_group(gaming_group_id)
        .iter()
        .filter(|p| p.active && !participant_ids.contains(&p.id))
        .map(player_info)
        .sorted_by(by_name)
        .collect();

    Ok(PlayersToCreate {
        user_player: None,
        recent_players,
        other_players
    })
}
