use chrono::{DateTime, FixedOffset};
use clap::Parser;
use std::path::PathBuf;

use crate::model::constants::DEFAULT_NUMBER_OF_RECENT_GAMES;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "NemeStats Processor",
    author = "NemeStats",
    long_about = "Computes player statistics, nemeses and rankings from a NemeStats game history"
)]
pub struct Args {
    /// JSON snapshot holding gaming groups, players, game definitions,
    /// champions, game results and achievements.
    #[arg(short = 'H', long, env = "NEMESTATS_HISTORY", help = "Path to the history snapshot")]
    pub history: PathBuf,

    /// Prints the full details of this player
    #[arg(short, long, env = "NEMESTATS_PLAYER")]
    pub player: Option<i32>,

    /// Prints the ranked player listing of this gaming group
    #[arg(short, long, env = "NEMESTATS_GAMING_GROUP")]
    pub gaming_group: Option<i32>,

    /// Application user id. Together with a gaming group, prints the user's
    /// quick stats and the players offered when recording a new game.
    #[arg(short, long, env = "NEMESTATS_USER")]
    pub user: Option<String>,

    /// Inclusive lower bound for points and records in the group listing
    #[arg(long, env = "NEMESTATS_FROM", value_parser = DateTime::parse_from_rfc3339, help = "RFC 3339 timestamp")]
    pub from: Option<DateTime<FixedOffset>>,

    /// Inclusive upper bound for points and records in the group listing
    #[arg(long, env = "NEMESTATS_TO", value_parser = DateTime::parse_from_rfc3339, help = "RFC 3339 timestamp")]
    pub to: Option<DateTime<FixedOffset>>,

    #[arg(
        short,
        long,
        env = "NEMESTATS_RECENT_GAMES",
        default_value_t = DEFAULT_NUMBER_OF_RECENT_GAMES,
        help = "Number of recent game results included in player details"
    )]
    pub recent_games: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
