use serde::{Deserialize, Serialize};

/// Head-to-head counters from the subject's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersusRecord {
    pub games_played: i32,
    /// Games where the subject finished first
    pub games_won: i32,
    /// Games where the opponent finished first
    pub games_lost: i32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersusPlayerStatistics {
    pub opposing_player_id: i32,
    pub opposing_player_name: String,
    pub number_of_games_played_versus_this_player: i32,
    pub number_of_games_won_versus_this_player: i32,
    pub number_of_games_lost_versus_this_player: i32,
    pub win_percentage_versus_this_player: i32,
    pub is_nemesis: bool,
    pub is_minion: bool
}
