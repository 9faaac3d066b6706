use rand::Rng;
use rand::seq::SliceRandom;

use crate::play::{Placement, PlayChoice};
use crate::provider::DecisionProvider;
use crate::state::TurnView;

/// Non-interactive provider that picks uniformly among the legal
/// placements. Used by the batch simulator and tests; it never passes
/// voluntarily.
pub struct RandomProvider<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DecisionProvider for RandomProvider<R> {
    fn choose_play(&mut self, _view: &TurnView, legal: &[Placement]) -> PlayChoice {
        let placement = legal
            .choose(&mut self.rng)
            .expect("engine must supply at least one option");
        PlayChoice::Place {
            tile_index: placement.tile_index,
            end: placement.end,
        }
    }
}
