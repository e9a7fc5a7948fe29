use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinitionTotal {
    pub game_definition_id: i32,
    pub game_definition_name: String,
    pub games_won: i32,
    pub games_lost: i32
}

impl GameDefinitionTotal {
    pub fn games_played(&self) -> i32 {
        self.games_won + self.games_lost
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLevelTotals {
    pub total_games: i32,
    pub total_games_won: i32,
    pub total_games_lost: i32
}
