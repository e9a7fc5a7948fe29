use super::points_summary::PointsSummary;
use serde::{Deserialize, Serialize};

/// Sort-only view of a player within a gaming group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub player_id: i32,
    pub player_name: String,
    pub active: bool,
    pub points_summary: Option<PointsSummary>,
    pub games_won: i32
}
