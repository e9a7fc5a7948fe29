use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NemesisRecord {
    pub nemesis_player_id: i32,
    pub number_of_games_lost: i32,
    pub number_of_games_played: i32,
    /// Truncated integer percentage of games lost to the nemesis
    pub loss_percentage: i32
}

/// A player's nemesis, or the explicit absence of one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NemesisRelationship {
    #[default]
    NoNemesis,
    Nemesis(NemesisRecord)
}

impl NemesisRelationship {
    pub fn nemesis_player_id(&self) -> Option<i32> {
        match self {
            NemesisRelationship::NoNemesis => None,
            NemesisRelationship::Nemesis(record) => Some(record.nemesis_player_id)
        }
    }

    pub fn record(&self) -> Option<&NemesisRecord> {
        match self {
            NemesisRelationship::NoNemesis => None,
            NemesisRelationship::Nemesis(record) => Some(record)
        }
    }

    pub fn has_nemesis(&self) -> bool {
        matches!(self, NemesisRelationship::Nemesis(_))
    }

    pub fn is_nemesis(&self, player_id: i32) -> bool {
        self.nemesis_player_id() == Some(player_id)
    }
}

/// Current and previous nemesis of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NemesisSnapshot {
    pub current: NemesisRelationship,
    pub previous: NemesisRelationship
}
