use std::cmp::Ordering;

use crate::model::structures::{player_details::PlayerWithNemesis, player_ranking::PlayerRanking};

/// The keys a player listing is ordered by.
pub trait Ranked {
    fn is_active(&self) -> bool;

    /// Absent points rank as 0
    fn total_points(&self) -> i32;

    fn games_won(&self) -> i32;

    fn player_name(&self) -> &str;
}

/// Active first, then total points, then games won (both descending), then name ascending.
pub fn compare_rankings<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.is_active()
        .cmp(&a.is_active())
        .then_with(|| b.total_points().cmp(&a.total_points()))
        .then_with(|| b.games_won().cmp(&a.games_won()))
        .then_with(|| a.player_name().cmp(b.player_name()))
}

/// Orders `players` with a single stable sort on the composite key.
pub fn rank_players<T: Ranked>(mut players: Vec<T>) -> Vec<T> {
    players.sort_by(compare_rankings);
    players
}

impl Ranked for PlayerRanking {
    fn is_active(&self) -> bool {
        self.active
    }

    fn total_points(&self) -> i32 {
        self.points_summary.map(|p| p.total_points).unwrap_or(0)
    }

    fn games_won(&self) -> i32 {
        self.games_won
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}

impl Ranked for PlayerWithNemesis {
    fn is_active(&self) -> bool {
        self.player_active
    }

    fn total_points(&self) -> i32 {
        self.points_summary.map(|p| p.total_points).unwrap_or(0)
    }

    fn games_won(&self) -> i32 {
        self.games_won
    }

    fn player_name(&self) -> &str {
        &self.player_name
    }
}
