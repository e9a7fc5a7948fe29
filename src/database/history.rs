use super::db_structs::{Champion, GameDefinition, GameResult, GamingGroup, Player, PlayerAchievement};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to read history snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse history snapshot: {0}")]
    Json(#[from] serde_json::Error)
}

/// Read contract for the game-result history.
///
/// Implementations must hand back rows from one consistent version of the
/// history for the duration of a single aggregation call. Rows are expected to
/// be pre-filtered for authorization; nothing here checks access.
pub trait HistorySource: Sync {
    fn player(&self, player_id: i32) -> Option<Player>;

    fn gaming_group(&self, gaming_group_id: i32) -> Option<GamingGroup>;

    fn game_definition(&self, game_definition_id: i32) -> Option<GameDefinition>;

    /// Active and inactive players of the group
    fn players_in_group(&self, gaming_group_id: i32) -> Vec<Player>;

    fn results_for_player(&self, player_id: i32) -> Vec<GameResult>;

    fn results_for_group(&self, gaming_group_id: i32) -> Vec<GameResult>;

    /// Every participant's result in one played game
    fn results_for_played_game(&self, played_game_id: i32) -> Vec<GameResult>;

    /// Every champion record the player has ever held
    fn champions_for_player(&self, player_id: i32) -> Vec<Champion>;

    fn achievements_for_player(&self, player_id: i32) -> Vec<PlayerAchievement>;
}

/// An in-memory copy of the history, loadable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub gaming_groups: Vec<GamingGroup>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub game_definitions: Vec<GameDefinition>,
    #[serde(default)]
    pub champions: Vec<Champion>,
    #[serde(default)]
    pub results: Vec<GameResult>,
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,

    #[serde(skip)]
    index: SnapshotIndex
}

#[derive(Debug, Clone, Default)]
struct SnapshotIndex {
    players: HashMap<i32, usize>,
    results_by_player: HashMap<i32, Vec<usize>>,
    results_by_group: HashMap<i32, Vec<usize>>,
    results_by_played_game: HashMap<i32, Vec<usize>>
}

impl HistorySnapshot {
    pub fn new(
        gaming_groups: Vec<GamingGroup>,
        players: Vec<Player>,
        game_definitions: Vec<GameDefinition>,
        champions: Vec<Champion>,
        results: Vec<GameResult>,
        achievements: Vec<PlayerAchievement>
    ) -> HistorySnapshot {
        let mut snapshot = HistorySnapshot {
            gaming_groups,
            players,
            game_definitions,
            champions,
            results,
            achievements,
            index: SnapshotIndex::default()
        };
        snapshot.reindex();

        snapshot
    }

    pub fn from_json_str(json: &str) -> Result<HistorySnapshot, HistoryError> {
        let mut snapshot: HistorySnapshot = serde_json::from_str(json)?;
        snapshot.reindex();

        Ok(snapshot)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<HistorySnapshot, HistoryError> {
        let path = path.as_ref();
        info!("Loading history snapshot from {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let mut snapshot: HistorySnapshot = serde_json::from_reader(reader)?;
        snapshot.reindex();

        info!(
            "History snapshot loaded: {} players, {} game results",
            snapshot.players.len(),
            snapshot.results.len()
        );

        Ok(snapshot)
    }

    fn reindex(&mut self) {
        let mut index = SnapshotIndex::default();

        for (i, player) in self.players.iter().enumerate() {
            index.players.insert(player.id, i);
        }

        for (i, result) in self.results.iter().enumerate() {
            index.results_by_player.entry(result.player_id).or_default().push(i);
            index.results_by_group.entry(result.gaming_group_id).or_default().push(i);
            index.results_by_played_game.entry(result.played_game_id).or_default().push(i);
        }

        self.index = index;
    }

    fn results_at(&self, positions: Option<&Vec<usize>>) -> Vec<GameResult> {
        positions
            .map(|p| p.iter().map(|&i| self.results[i].clone()).collect())
            .unwrap_or_default()
    }
}

impl HistorySource for HistorySnapshot {
    fn player(&self, player_id: i32) -> Option<Player> {
        self.index.players.get(&player_id).map(|&i| self.players[i].clone())
    }

    fn gaming_group(&self, gaming_group_id: i32) -> Option<GamingGroup> {
        self.gaming_groups.iter().find(|g| g.id == gaming_group_id).cloned()
    }

    fn game_definition(&self, game_definition_id: i32) -> Option<GameDefinition> {
        self.game_definitions
            .iter()
            .find(|d| d.id == game_definition_id)
            .cloned()
    }

    fn players_in_group(&self, gaming_group_id: i32) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.gaming_group_id == gaming_group_id)
            .cloned()
            .collect()
    }

    fn results_for_player(&self, player_id: i32) -> Vec<GameResult> {
        self.results_at(self.index.results_by_player.get(&player_id))
    }

    fn results_for_group(&self, gaming_group_id: i32) -> Vec<GameResult> {
        self.results_at(self.index.results_by_group.get(&gaming_group_id))
    }

    fn results_for_played_game(&self, played_game_id: i32) -> Vec<GameResult> {
        self.results_at(self.index.results_by_played_game.get(&played_game_id))
    }

    fn champions_for_player(&self, player_id: i32) -> Vec<Champion> {
        self.champions
            .iter()
            .filter(|c| c.player_id == player_id)
            .cloned()
            .collect()
    }

    fn achievements_for_player(&self, player_id: i32) -> Vec<PlayerAchievement> {
        self.achievements
            .iter()
            .filter(|a| a.player_id == player_id)
            .cloned()
            .collect()
    }
}
