use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use crate::{
    database::db_structs::GameResult,
    model::{
        constants::{NEMESIS_MINIMUM_GAMES_LOST, NEMESIS_MINIMUM_GAMES_PLAYED},
        head_to_head::{played_games_chronologically, HeadToHeadLedger},
        stats_utils::percentage,
        structures::{
            nemesis::{NemesisRecord, NemesisRelationship, NemesisSnapshot},
            versus::VersusRecord
        }
    },
    utils::progress_utils::{finish, progress_bar}
};

/// Picks the opponent the player loses to most often.
///
/// Only opponents with enough games played and at least one loss qualify.
/// Loss ratios are compared exactly; equal ratios go to the lowest opponent id.
pub fn resolve_nemesis(records: &BTreeMap<i32, VersusRecord>) -> NemesisRelationship {
    let mut best: Option<(i32, &VersusRecord)> = None;

    // Ascending id order, so keeping the incumbent on a tie keeps the lowest id
    for (opponent_id, record) in records.iter().filter(|(_, r)| qualifies(r)) {
        match best {
            Some((_, incumbent)) if !loses_more(record, incumbent) => {}
            _ => best = Some((*opponent_id, record))
        }
    }

    match best {
        Some((nemesis_player_id, record)) => NemesisRelationship::Nemesis(NemesisRecord {
            nemesis_player_id,
            number_of_games_lost: record.games_lost,
            number_of_games_played: record.games_played,
            loss_percentage: percentage(record.games_lost, record.games_played)
        }),
        None => NemesisRelationship::NoNemesis
    }
}

fn qualifies(record: &VersusRecord) -> bool {
    record.games_played >= NEMESIS_MINIMUM_GAMES_PLAYED && record.games_lost >= NEMESIS_MINIMUM_GAMES_LOST
}

/// `a.lost / a.played > b.lost / b.played` without rounding
fn loses_more(a: &VersusRecord, b: &VersusRecord) -> bool {
    a.games_lost as i64 * b.games_played as i64 > b.games_lost as i64 * a.games_played as i64
}

/// Replaces the current nemesis. The old one becomes the previous nemesis only
/// when it pointed at a different opponent.
pub fn supersede(snapshot: &mut NemesisSnapshot, resolved: NemesisRelationship) {
    if snapshot.current.has_nemesis() && snapshot.current.nemesis_player_id() != resolved.nemesis_player_id() {
        snapshot.previous = snapshot.current;
    }

    snapshot.current = resolved;
}

/// Current and previous nemesis of every player in a group, plus the inverse minion relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NemesisBook {
    snapshots: HashMap<i32, NemesisSnapshot>,
    // nemesis id -> minion ids, ascending
    minions: HashMap<i32, Vec<i32>>
}

impl NemesisBook {
    pub fn from_snapshots(snapshots: HashMap<i32, NemesisSnapshot>) -> NemesisBook {
        let minions = snapshots
            .iter()
            .filter_map(|(player_id, snapshot)| snapshot.current.nemesis_player_id().map(|n| (n, *player_id)))
            .into_group_map()
            .into_iter()
            .map(|(nemesis_id, mut minion_ids)| {
                minion_ids.sort_unstable();
                (nemesis_id, minion_ids)
            })
            .collect();

        NemesisBook { snapshots, minions }
    }

    pub fn snapshot(&self, player_id: i32) -> NemesisSnapshot {
        self.snapshots.get(&player_id).copied().unwrap_or_default()
    }

    pub fn current_nemesis(&self, player_id: i32) -> NemesisRelationship {
        self.snapshot(player_id).current
    }

    pub fn previous_nemesis(&self, player_id: i32) -> NemesisRelationship {
        self.snapshot(player_id).previous
    }

    /// Players whose current nemesis is `player_id`
    pub fn minions_of(&self, player_id: i32) -> &[i32] {
        self.minions.get(&player_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn minion_set(&self, player_id: i32) -> HashSet<i32> {
        self.minions_of(player_id).iter().copied().collect()
    }
}

/// Everything derived from replaying a gaming group's played games once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupAggregation {
    pub ledger: HeadToHeadLedger,
    pub nemeses: NemesisBook
}

impl GroupAggregation {
    /// Replays the group's played games in chronological order, re-resolving the
    /// nemesis of every participant after each game so supersession is tracked.
    pub fn build(results: &[GameResult]) -> GroupAggregation {
        let played_games = played_games_chronologically(results);
        let bar = progress_bar(played_games.len() as u64, "Resolving nemeses".to_string());

        let mut ledger = HeadToHeadLedger::new();
        let mut snapshots: HashMap<i32, NemesisSnapshot> = HashMap::new();

        for played_game in &played_games {
            ledger.record_played_game(played_game);

            for player_id in played_game.iter().map(|r| r.player_id).unique() {
                let resolved = ledger
                    .records_for(player_id)
                    .map(resolve_nemesis)
                    .unwrap_or_default();

                supersede(snapshots.entry(player_id).or_default(), resolved);
            }

            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }
        finish(&bar);

        debug!(
            "Resolved nemeses for {} players over {} played games",
            snapshots.len(),
            played_games.len()
        );

        GroupAggregation {
            ledger,
            nemeses: NemesisBook::from_snapshots(snapshots)
        }
    }
}
