use crate::play::{Placement, PlayChoice};
use crate::state::TurnView;

/// The decision seam between the engine and whoever is playing a seat.
///
/// `legal` is never empty when this is called: the engine has already drawn
/// from the pool until the hand holds a playable tile, or resolved the turn
/// as a forced pass without consulting the provider. Implementations own all
/// input validation and re-prompt loops; the engine only accepts a placement
/// out of `legal` or an explicit pass.
pub trait DecisionProvider {
    fn choose_play(&mut self, view: &TurnView, legal: &[Placement]) -> PlayChoice;
}
