use chrono::{DateTime, FixedOffset};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Could not find player with Id: {0}")]
    NotFound(i32),

    #[error("Could not find played game with Id: {0}")]
    PlayedGameNotFound(i32),

    #[error("Invalid date range: {to} is before {from}")]
    InvalidRange {
        from: DateTime<FixedOffset>,
        to: DateTime<FixedOffset>
    }
}
