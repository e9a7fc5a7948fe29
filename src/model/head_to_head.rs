use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{database::db_structs::GameResult, model::structures::versus::VersusRecord};

/// Head-to-head counters for every ordered pair of players who shared a played game.
///
/// Keyed by subject then opponent; both levels iterate in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHeadLedger {
    records: BTreeMap<i32, BTreeMap<i32, VersusRecord>>
}

impl HeadToHeadLedger {
    pub fn new() -> HeadToHeadLedger {
        HeadToHeadLedger {
            records: BTreeMap::new()
        }
    }

    pub fn from_results(results: &[GameResult]) -> HeadToHeadLedger {
        let mut ledger = HeadToHeadLedger::new();
        for played_game in played_games_chronologically(results) {
            ledger.record_played_game(&played_game);
        }

        ledger
    }

    /// Records one played game. `results` must all belong to the same played game.
    pub fn record_played_game(&mut self, results: &[&GameResult]) {
        for subject in results {
            let subject_won = subject.is_win();
            let opponents = self.records.entry(subject.player_id).or_default();

            for opponent in results.iter().filter(|o| o.player_id != subject.player_id) {
                let record = opponents.entry(opponent.player_id).or_default();
                record.games_played += 1;

                if subject_won {
                    record.games_won += 1;
                }

                if opponent.is_win() {
                    record.games_lost += 1;
                }
            }
        }
    }

    /// Records against every opponent of `player_id`, ascending by opponent id.
    pub fn records_for(&self, player_id: i32) -> Option<&BTreeMap<i32, VersusRecord>> {
        self.records.get(&player_id)
    }

    pub fn record(&self, player_id: i32, opponent_id: i32) -> VersusRecord {
        self.records
            .get(&player_id)
            .and_then(|opponents| opponents.get(&opponent_id))
            .copied()
            .unwrap_or_default()
    }

    pub fn players(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.keys().copied()
    }
}

/// Groups results by played game, ordered by date played then played game id.
pub fn played_games_chronologically(results: &[GameResult]) -> Vec<Vec<&GameResult>> {
    results
        .iter()
        .into_group_map_by(|r| r.played_game_id)
        .into_values()
        .sorted_by_key(|game| (game[0].date_played, game[0].played_game_id))
        .collect()
}
