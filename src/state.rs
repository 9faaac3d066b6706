use serde::{Deserialize, Serialize};

use crate::play::SeatId;
use crate::tile::Tile;

/// Portion of a seat's state every player may observe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub name: String,
    pub hand_len: usize,
    pub is_current: bool,
}

/// Snapshot of the round from the acting player's perspective, handed to
/// decision providers and renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub seat: SeatId,
    pub name: String,
    pub hand: Vec<Tile>,
    pub board: Vec<Tile>,
    /// `None` while the board is empty.
    pub open_ends: Option<(u8, u8)>,
    pub pool_len: usize,
    pub seats: Vec<SeatPublic>,
    pub pass_streak: usize,
}
