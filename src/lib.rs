//! Draw-dominoes game engine with pluggable decision providers.
//!
//! The engine is I/O free: a [`RoundEngine`] owns the board, the pool, and
//! every seat's hand, and asks a [`DecisionProvider`] per seat for plays. An
//! outer driver (see `src/bin/play.rs`) supplies the console interaction and
//! decides when to replay rounds or reset scores.

pub mod board;
pub mod display;
pub mod error;
pub mod hand;
pub mod play;
pub mod pool;
pub mod provider;
pub mod providers;
pub mod round;
pub mod score;
pub mod session;
pub mod state;
pub mod tile;

pub use crate::board::{Board, End};
pub use crate::display::{describe_placement, render_board, render_hand, render_view};
pub use crate::error::{GameError, InvalidMove};
pub use crate::hand::Hand;
pub use crate::play::{MoveOutcome, Placement, PlayChoice, SeatId};
pub use crate::pool::Pool;
pub use crate::provider::DecisionProvider;
pub use crate::providers::{ConsoleProvider, RandomProvider};
pub use crate::round::{RoundBuilder, RoundEngine, RoundOutcome};
pub use crate::score::{RoundScore, ScoreKeeper};
pub use crate::session::{GameSession, RoundReport};
pub use crate::state::{SeatPublic, TurnView};
pub use crate::tile::{
    HAND_TILES, MAX_PIP, MAX_PLAYERS, MIN_PLAYERS, TILE_SET_SIZE, Tile, full_set,
};
