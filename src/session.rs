use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::provider::DecisionProvider;
use crate::round::{RoundEngine, RoundOutcome};
use crate::score::{RoundScore, ScoreKeeper};
use crate::tile::{MAX_PLAYERS, MIN_PLAYERS};

/// Everything the driver needs to report one finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub score: RoundScore,
    /// Final pip sums per seat, in seating order.
    pub pip_sums: Vec<(String, u32)>,
}

/// Multi-round driver: owns the roster, the cumulative scores, and the
/// session RNG that seeds each round's shuffle. Performs no I/O; replay,
/// reset, and reconfigure decisions come from whoever drives it.
pub struct GameSession {
    names: Vec<String>,
    scores: ScoreKeeper,
    rng: StdRng,
}

impl GameSession {
    /// New session with an entropy-seeded RNG, so shuffles vary run to run.
    pub fn new(names: Vec<String>) -> Result<Self, GameError> {
        Self::with_rng(names, StdRng::from_entropy())
    }

    /// Reproducible session for tests and simulations.
    pub fn with_seed(names: Vec<String>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(names, StdRng::seed_from_u64(seed))
    }

    fn with_rng(names: Vec<String>, rng: StdRng) -> Result<Self, GameError> {
        Self::validate_roster(&names)?;
        let scores = ScoreKeeper::new(&names);
        Ok(Self { names, scores, rng })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn totals(&self) -> &[(String, u32)] {
        self.scores.totals()
    }

    /// Plays one full round and settles it into the cumulative totals.
    /// `providers` must hold one provider per seat, in seating order.
    pub fn play_round(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<RoundReport, GameError> {
        // A fresh seed per round keeps shuffles independent across rounds.
        let seed = self.rng.next_u64();
        let mut round = RoundEngine::new(self.names.clone(), seed)?;
        let outcome = round.run(providers)?;
        let pip_sums = round.pip_sums();
        let score = self.scores.settle_round(&outcome, &pip_sums);
        Ok(RoundReport {
            outcome,
            score,
            pip_sums,
        })
    }

    /// Zeroes every total, keeping the current roster.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Replaces the roster and clears all totals.
    pub fn reconfigure(&mut self, names: Vec<String>) -> Result<(), GameError> {
        Self::validate_roster(&names)?;
        self.scores.reseed(&names);
        self.names = names;
        Ok(())
    }

    fn validate_roster(names: &[String]) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidConfiguration(
                "player count must be between 2 and 4",
            ));
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(GameError::InvalidConfiguration(
                "player names must not be empty",
            ));
        }
        Ok(())
    }
}
