use super::{game_definition_totals::GameDefinitionTotal, points_summary::PointsSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub game_definition_totals: Vec<GameDefinitionTotal>,
    pub total_games: i32,
    pub total_games_won: i32,
    pub total_games_lost: i32,
    pub win_percentage: i32,
    pub points_summary: PointsSummary,
    pub average_players_per_game: f32,
    pub average_points_per_game: f32,
    pub average_points_per_player: f32
}

impl PlayerStatistics {
    /// Fills both point averages from the totals already set.
    ///
    /// Points per game is 0 without games. Points per player is 0 when either
    /// points per game or players per game is 0.
    pub fn with_averages(mut self) -> PlayerStatistics {
        self.average_points_per_game = if self.total_games == 0 {
            0.0
        } else {
            self.points_summary.total_points as f32 / self.total_games as f32
        };
        self.average_points_per_player = if self.average_players_per_game == 0.0 {
            0.0
        } else {
            self.average_points_per_game / self.average_players_per_game
        };

        self
    }
}
