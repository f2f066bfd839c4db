//! Scoring module - running totals from round outcomes
//!
//! Scoring is a pure fold over outcomes: the session calls [`record`] exactly
//! once per revealed round and replaces its score with the result.

use crate::types::Score;

/// Fold one round outcome into the prior score.
///
/// - `total` always increases by one
/// - `correct` increases by one only when the guess was right
/// - `streak` extends on a hit and drops to zero on a miss
///
/// Counters saturate at `u32::MAX`.
pub fn record(outcome: bool, prior: Score) -> Score {
    if outcome {
        Score {
            correct: prior.correct.saturating_add(1),
            total: prior.total.saturating_add(1),
            streak: prior.streak.saturating_add(1),
        }
    } else {
        Score {
            correct: prior.correct,
            total: prior.total.saturating_add(1),
            streak: 0,
        }
    }
}

/// Replay a whole outcome sequence from a zero score.
pub fn replay<I: IntoIterator<Item = bool>>(outcomes: I) -> Score {
    outcomes
        .into_iter()
        .fold(Score::default(), |score, outcome| record(outcome, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailing_hits(outcomes: &[bool]) -> u32 {
        outcomes.iter().rev().take_while(|&&hit| hit).count() as u32
    }

    #[test]
    fn hit_increments_everything() {
        assert_eq!(record(true, Score::new(3, 5, 2)), Score::new(4, 6, 3));
    }

    #[test]
    fn miss_resets_streak_only() {
        assert_eq!(record(false, Score::new(3, 5, 2)), Score::new(3, 6, 0));
    }

    #[test]
    fn total_always_advances_by_one() {
        let prior = Score::new(1, 1, 1);
        for outcome in [true, false] {
            assert_eq!(record(outcome, prior).total, prior.total + 1);
        }
    }

    #[test]
    fn streak_is_trailing_run_of_hits() {
        let sequences: [&[bool]; 6] = [
            &[],
            &[false],
            &[true, true, true],
            &[true, false, true, true],
            &[true, true, false],
            &[false, true, false, true, true, true, false, true],
        ];

        for outcomes in sequences {
            let score = replay(outcomes.iter().copied());
            assert_eq!(score.streak, trailing_hits(outcomes), "{outcomes:?}");
            assert_eq!(score.total as usize, outcomes.len());
            assert_eq!(
                score.correct as usize,
                outcomes.iter().filter(|&&hit| hit).count()
            );
            assert!(score.correct <= score.total);
        }
    }

    #[test]
    fn counters_saturate() {
        let prior = Score::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(record(true, prior), prior);
    }
}
