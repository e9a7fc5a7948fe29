use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::{
    stats_utils::percentage,
    structures::{
        nemesis::NemesisRelationship,
        versus::{VersusPlayerStatistics, VersusRecord}
    }
};

/// One entry per opponent the subject has played against, ordered by opponent name then id.
///
/// `player_names` maps player ids to display names; unknown opponents get an empty name.
pub fn versus_player_statistics(
    records: &BTreeMap<i32, VersusRecord>,
    nemesis: &NemesisRelationship,
    minions: &HashSet<i32>,
    player_names: &HashMap<i32, String>
) -> Vec<VersusPlayerStatistics> {
    let mut statistics: Vec<VersusPlayerStatistics> = records
        .iter()
        .map(|(opponent_id, record)| VersusPlayerStatistics {
            opposing_player_id: *opponent_id,
            opposing_player_name: player_names.get(opponent_id).cloned().unwrap_or_default(),
            number_of_games_played_versus_this_player: record.games_played,
            number_of_games_won_versus_this_player: record.games_won,
            number_of_games_lost_versus_this_player: record.games_lost,
            win_percentage_versus_this_player: percentage(record.games_won, record.games_played),
            is_nemesis: nemesis.is_nemesis(*opponent_id),
            is_minion: minions.contains(opponent_id)
        })
        .collect();

    // Stable, and `records` is already ascending by id
    statistics.sort_by(|a, b| a.opposing_player_name.cmp(&b.opposing_player_name));

    statistics
}
