use itertools::Itertools;

use crate::database::db_structs::GameResult;

/// Longest run of consecutive first-place finishes.
///
/// Results are ordered by date played, then by played game id so that games
/// on the same day have a stable order.
pub fn longest_winning_streak(results: &[GameResult]) -> i32 {
    let mut best = 0;
    let mut current = 0;

    for result in results
        .iter()
        .sorted_by_key(|r| (r.date_played, r.played_game_id))
    {
        if result.is_win() {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::longest_winning_streak;
    use crate::{
        database::db_structs::GameResult,
        utils::test_utils::{generate_result, generate_timestamp}
    };

    fn chronological(ranks: &[i32]) -> Vec<GameResult> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| generate_result(1, i as i32 + 1, *rank, generate_timestamp(i as i64)))
            .collect()
    }

    #[test]
    fn test_no_results() {
        assert_eq!(longest_winning_streak(&[]), 0);
    }

    #[test]
    fn test_single_result() {
        assert_eq!(longest_winning_streak(&chronological(&[1])), 1);
        assert_eq!(longest_winning_streak(&chronological(&[2])), 0);
    }

    #[test]
    fn test_loss_resets_streak() {
        assert_eq!(longest_winning_streak(&chronological(&[1, 1, 2, 1])), 2);
        assert_eq!(longest_winning_streak(&chronological(&[2, 1, 1, 1, 3, 1, 1])), 3);
    }

    #[test]
    fn test_appending_wins_never_decreases_streak() {
        let mut ranks = vec![1, 2, 1];
        let mut previous = longest_winning_streak(&chronological(&ranks));

        for _ in 0..5 {
            ranks.push(1);
            let streak = longest_winning_streak(&chronological(&ranks));
            assert!(streak >= previous);
            previous = streak;
        }

        assert_eq!(previous, 6);
    }

    #[test]
    fn test_orders_chronologically() {
        // Supplied out of order: chronologically this is win, win, loss, win
        let mut results = chronological(&[1, 1, 2, 1]);
        results.reverse();

        assert_eq!(longest_winning_streak(&results), 2);
    }

    #[test]
    fn test_same_day_ordered_by_played_game_id() {
        let day = generate_timestamp(0);
        let results = vec![
            generate_result(1, 3, 1, day),
            generate_result(1, 1, 1, day),
            generate_result(1, 2, 2, day),
        ];

        // Ordered 1 (win), 2 (loss), 3 (win)
        assert_eq!(longest_winning_streak(&results), 1);
    }
}
