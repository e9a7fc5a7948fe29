use crate::model::structures::achievement_level::AchievementLevel;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamingGroup {
    pub id: i32,
    pub name: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub gaming_group_id: i32,
    /// Present when a registered user has claimed this player
    #[serde(default)]
    pub application_user_id: Option<String>
}

impl Player {
    pub fn is_registered(&self) -> bool {
        self.application_user_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    pub id: i32,
    pub name: String,
    pub gaming_group_id: i32,
    /// Id of the [`Champion`] record currently holding this game
    #[serde(default)]
    pub champion_id: Option<i32>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    pub id: i32,
    pub game_definition_id: i32,
    pub player_id: i32,
    pub number_of_wins: i32,
    pub number_of_games: i32
}

/// One player's outcome in one played game, already joined with the
/// played game and game definition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub player_id: i32,
    pub played_game_id: i32,
    pub game_definition_id: i32,
    pub game_definition_name: String,
    pub gaming_group_id: i32,
    /// 1 is a win
    pub game_rank: i32,
    pub points_awarded: i32,
    #[serde(default)]
    pub duration_bonus_points: i32,
    #[serde(default)]
    pub weight_bonus_points: i32,
    pub date_played: DateTime<FixedOffset>,
    pub number_of_players: i32
}

impl GameResult {
    pub fn is_win(&self) -> bool {
        self.game_rank == 1
    }

    /// Ranks below 1 are neither a win nor a loss
    pub fn is_loss(&self) -> bool {
        self.game_rank > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAchievement {
    pub player_id: i32,
    pub achievement_id: i32,
    pub achievement_level: AchievementLevel,
    pub date_created: DateTime<FixedOffset>
}
