use crate::database::db_structs::GameResult;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// NemePoints earned by a player: base points plus the two bonus components.
///
/// Sums saturate at the `i32` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsSummary {
    pub base_points: i32,
    pub duration_bonus_points: i32,
    pub weight_bonus_points: i32,
    pub total_points: i32
}

impl PointsSummary {
    pub fn new(base_points: i32, duration_bonus_points: i32, weight_bonus_points: i32) -> PointsSummary {
        PointsSummary {
            base_points,
            duration_bonus_points,
            weight_bonus_points,
            total_points: base_points
                .saturating_add(duration_bonus_points)
                .saturating_add(weight_bonus_points)
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == PointsSummary::default()
    }
}

impl AddAssign<&GameResult> for PointsSummary {
    fn add_assign(&mut self, result: &GameResult) {
        *self = PointsSummary::new(
            self.base_points.saturating_add(result.points_awarded),
            self.duration_bonus_points.saturating_add(result.duration_bonus_points),
            self.weight_bonus_points.saturating_add(result.weight_bonus_points)
        );
    }
}
