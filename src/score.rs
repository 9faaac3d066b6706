//! Round settlement and cumulative totals.
//!
//! A won round credits the winner with the sum of every other seat's
//! remaining pips. A blocked round credits the seat with the smallest pip
//! sum; ties keep the first minimum in seating order (a defined,
//! deterministic policy rather than an official rule — see DESIGN.md).

use serde::{Deserialize, Serialize};

use crate::round::RoundOutcome;

/// Points awarded for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub winner: String,
    pub points: u32,
    /// True when the round ended blocked rather than by an emptied hand.
    pub blocked: bool,
}

/// Cumulative per-seat totals, in seating order. Persists across rounds
/// until explicitly reset or reseeded with a new roster.
#[derive(Clone, Debug, Default)]
pub struct ScoreKeeper {
    totals: Vec<(String, u32)>,
}

impl ScoreKeeper {
    pub fn new(names: &[String]) -> Self {
        Self {
            totals: names.iter().map(|name| (name.clone(), 0)).collect(),
        }
    }

    pub fn totals(&self) -> &[(String, u32)] {
        &self.totals
    }

    /// Zeroes every total, keeping the roster.
    pub fn reset(&mut self) {
        for (_, points) in &mut self.totals {
            *points = 0;
        }
    }

    /// Replaces the roster and starts all totals from zero.
    pub fn reseed(&mut self, names: &[String]) {
        self.totals = names.iter().map(|name| (name.clone(), 0)).collect();
    }

    /// Settles one round given its outcome and every seat's final pip sum
    /// (in seating order), and updates the cumulative totals.
    pub fn settle_round(
        &mut self,
        outcome: &RoundOutcome,
        pip_sums: &[(String, u32)],
    ) -> RoundScore {
        let (winner, blocked) = match outcome {
            RoundOutcome::Won { winner } => (winner.clone(), false),
            RoundOutcome::Blocked => (Self::lowest_pip_seat(pip_sums), true),
        };
        let points = pip_sums
            .iter()
            .filter(|(name, _)| *name != winner)
            .map(|(_, pips)| pips)
            .sum();
        if let Some(entry) = self.totals.iter_mut().find(|(name, _)| *name == winner) {
            entry.1 += points;
        }
        RoundScore {
            winner,
            points,
            blocked,
        }
    }

    /// First seated minimum wins ties (`min_by_key` keeps the first of
    /// several equal minima).
    fn lowest_pip_seat(pip_sums: &[(String, u32)]) -> String {
        debug_assert!(!pip_sums.is_empty());
        pip_sums
            .iter()
            .min_by_key(|(_, pips)| *pips)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sums(list: &[(&str, u32)]) -> Vec<(String, u32)> {
        list.iter().map(|(n, p)| (n.to_string(), *p)).collect()
    }

    #[test]
    fn winner_collects_everyone_elses_pips() {
        let mut keeper = ScoreKeeper::new(&names(&["Ana", "Beto", "Carla"]));
        let score = keeper.settle_round(
            &RoundOutcome::Won {
                winner: "Ana".to_string(),
            },
            &sums(&[("Ana", 0), ("Beto", 12), ("Carla", 5)]),
        );
        assert_eq!(score.winner, "Ana");
        assert_eq!(score.points, 17);
        assert!(!score.blocked);
        assert_eq!(keeper.totals()[0], ("Ana".to_string(), 17));
    }

    #[test]
    fn blocked_round_goes_to_lowest_pip_sum_first_seat_on_tie() {
        let mut keeper = ScoreKeeper::new(&names(&["Ana", "Beto", "Carla"]));
        let score = keeper.settle_round(
            &RoundOutcome::Blocked,
            &sums(&[("Ana", 4), ("Beto", 9), ("Carla", 4)]),
        );
        assert_eq!(score.winner, "Ana", "first seated minimum wins the tie");
        assert_eq!(score.points, 13);
        assert!(score.blocked);
        assert_eq!(keeper.totals()[0], ("Ana".to_string(), 13));
        assert_eq!(keeper.totals()[2], ("Carla".to_string(), 0));
    }

    #[test]
    fn totals_accumulate_and_reset() {
        let mut keeper = ScoreKeeper::new(&names(&["Ana", "Beto"]));
        keeper.settle_round(
            &RoundOutcome::Won {
                winner: "Beto".to_string(),
            },
            &sums(&[("Ana", 10), ("Beto", 0)]),
        );
        keeper.settle_round(
            &RoundOutcome::Won {
                winner: "Beto".to_string(),
            },
            &sums(&[("Ana", 7), ("Beto", 0)]),
        );
        assert_eq!(keeper.totals()[1], ("Beto".to_string(), 17));
        keeper.reset();
        assert_eq!(keeper.totals()[1], ("Beto".to_string(), 0));
        keeper.reseed(&names(&["Dana", "Eli"]));
        assert_eq!(keeper.totals()[0], ("Dana".to_string(), 0));
    }
}
