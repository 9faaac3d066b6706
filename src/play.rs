use serde::{Deserialize, Serialize};

use crate::board::End;

/// Zero-based seat index within a round, in seating order.
pub type SeatId = usize;

/// One legal way to attach a hand tile to the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub tile_index: usize,
    pub end: End,
}

/// What a decision provider answers when asked for a play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayChoice {
    /// Attach the hand tile at `tile_index` to the given board end.
    Place { tile_index: usize, end: End },
    /// Pass the turn. Always permitted, even when legal placements exist.
    Pass,
}

/// How a turn resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Played,
    Passed,
}
