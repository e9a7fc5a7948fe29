use std::collections::HashMap;

use crate::{
    database::db_structs::GameResult,
    model::{date_range::DateRangeFilter, structures::points_summary::PointsSummary}
};

/// Sums the NemePoints components of `results` played inside `range`.
///
/// The caller is responsible for handing in a single player's results.
/// No matching results yields an all-zero summary.
pub fn points_summary(results: &[GameResult], range: &DateRangeFilter) -> PointsSummary {
    let mut summary = PointsSummary::default();

    for result in results.iter().filter(|r| range.contains(&r.date_played)) {
        summary += result;
    }

    summary
}

/// Group-wide variant of [`points_summary`]: one pass over the results, keyed by player.
///
/// Players without results in the range have no entry.
pub fn points_summaries_by_player(results: &[GameResult], range: &DateRangeFilter) -> HashMap<i32, PointsSummary> {
    let mut summaries: HashMap<i32, PointsSummary> = HashMap::new();

    for result in results.iter().filter(|r| range.contains(&r.date_played)) {
        *summaries.entry(result.player_id).or_default() += result;
    }

    summaries
}
