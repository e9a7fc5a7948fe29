pub mod achievements;
pub mod constants;
pub mod date_range;
pub mod details;
pub mod error;
pub mod group;
pub mod head_to_head;
pub mod nemesis;
pub mod players;
pub mod points;
pub mod ranking;
pub mod stats_utils;
pub mod streak;
pub mod structures;
pub mod totals;
pub mod versus;

pub use date_range::DateRangeFilter;
pub use details::player_details;
pub use error::StatsError;
pub use group::{player_rankings, players_with_nemesis};
pub use nemesis::GroupAggregation;
pub use players::{all_players, player_quick_stats, players_for_editing_played_game, players_to_create};
