use thiserror::Error;

use crate::play::SeatId;

/// Errors that can occur when driving a round or session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("seat index {0} is out of range")]
    InvalidSeat(SeatId),
    #[error("round is already over")]
    RoundOver,
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Rejected placement attempts. Recovered locally by choosing again; the
/// board is never mutated on rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("tile index {0} is out of range")]
    TileIndex(usize),
    #[error("neither pip of the tile matches the open end {open}")]
    EndMismatch { open: u8 },
}
