use super::{
    achievement_level::AchievementLevel, game_definition_totals::GameDefinitionTotal, nemesis::NemesisRelationship,
    player_statistics::PlayerStatistics, points_summary::PointsSummary, versus::VersusPlayerStatistics
};
use crate::database::db_structs::{Champion, GameDefinition, GameResult, Player, PlayerAchievement};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything shown about a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetails {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub registered: bool,
    pub gaming_group_id: i32,
    pub gaming_group_name: Option<String>,
    /// Most recent first
    pub player_game_results: Vec<GameResult>,
    pub player_stats: PlayerStatistics,
    pub current_nemesis: NemesisRelationship,
    pub previous_nemesis: NemesisRelationship,
    pub minions: Vec<Player>,
    pub player_game_summaries: Vec<GameDefinitionTotal>,
    pub championed_games: Vec<Champion>,
    pub former_championed_games: Vec<GameDefinition>,
    pub player_versus_players_statistics: Vec<VersusPlayerStatistics>,
    pub longest_winning_streak: i32,
    pub points_summary: PointsSummary,
    /// Most recently unlocked first
    pub achievements: Vec<PlayerAchievement>
}

/// One row of the gaming group's player listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerWithNemesis {
    pub player_id: i32,
    pub player_name: String,
    pub player_active: bool,
    pub player_registered: bool,
    pub application_user_id: Option<String>,
    pub gaming_group_id: i32,
    pub nemesis_player_id: Option<i32>,
    pub nemesis_player_name: Option<String>,
    pub previous_nemesis_player_id: Option<i32>,
    pub previous_nemesis_player_name: Option<String>,
    pub games_won: i32,
    pub games_lost: i32,
    pub total_championed_games: i32,
    pub points_summary: Option<PointsSummary>,
    pub achievements_per_level: IndexMap<AchievementLevel, i32>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuickStats {
    pub player_id: Option<i32>,
    pub points_summary: PointsSummary,
    pub total_games_played: i32,
    pub total_games_won: i32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player_id: i32,
    pub player_name: String,
    pub gaming_group_id: i32
}

/// Players offered when recording a new played game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayersToCreate {
    pub user_player: Option<PlayerInfo>,
    pub recent_players: Vec<PlayerInfo>,
    pub other_players: Vec<PlayerInfo>
}
