// Listing constants
pub const MAX_NUMBER_OF_RECENT_PLAYERS: usize = 5;
pub const DEFAULT_NUMBER_OF_RECENT_GAMES: usize = 10;
// Percentages are whole numbers, truncated
pub const PERCENTAGE_SCALE: i64 = 100;
// Nemesis qualification
pub const NEMESIS_MINIMUM_GAMES_PLAYED: i32 = 1;
pub const NEMESIS_MINIMUM_GAMES_LOST: i32 = 1;
