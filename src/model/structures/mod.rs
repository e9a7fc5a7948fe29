pub mod achievement_level;
pub mod game_definition_totals;
pub mod nemesis;
pub mod player_details;
pub mod player_ranking;
pub mod player_statistics;
pub mod points_summary;
pub mod versus;
