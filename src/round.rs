use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, End};
use crate::error::{GameError, InvalidMove};
use crate::hand::Hand;
use crate::play::{MoveOutcome, Placement, PlayChoice, SeatId};
use crate::pool::Pool;
use crate::provider::DecisionProvider;
use crate::state::{SeatPublic, TurnView};
use crate::tile::{HAND_TILES, MAX_PLAYERS, MIN_PLAYERS, Tile};

const DEFAULT_SEED: u64 = 0xD0_D0_D0_D0_D0_D0;

/// Terminal result of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Somebody emptied their hand.
    Won { winner: String },
    /// Every seat passed in a row with the pool exhausted; no winner by play.
    Blocked,
}

/// Builder for a round. Supports injecting an unshuffled pool (dealt from
/// the back) or a full synthetic mid-round state for tests and scripted
/// scenarios.
pub struct RoundBuilder {
    names: Vec<String>,
    seed: Option<u64>,
    pool: Option<Vec<Tile>>,
    hands: Option<Vec<Vec<Tile>>>,
    board: Vec<Tile>,
}

impl RoundBuilder {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            seed: None,
            pool: None,
            hands: None,
            board: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use this exact pool instead of a shuffled set. Tiles are drawn and
    /// dealt from the back.
    pub fn with_pool(mut self, tiles: Vec<Tile>) -> Self {
        self.pool = Some(tiles);
        self
    }

    /// Skip dealing and start every seat with the given hand. The pool
    /// defaults to empty unless `with_pool` is also set.
    pub fn with_hands(mut self, hands: Vec<Vec<Tile>>) -> Self {
        self.hands = Some(hands);
        self
    }

    /// Start with these tiles already chained on the board, in order.
    pub fn with_board(mut self, tiles: Vec<Tile>) -> Self {
        self.board = tiles;
        self
    }

    pub fn build(self) -> Result<RoundEngine, GameError> {
        RoundEngine::from_builder(self)
    }
}

/// One round of draw dominoes: owns the board, the pool, and every seat's
/// hand for the round's duration, and sequences turns until the round is won
/// or blocked.
pub struct RoundEngine {
    seats: Vec<Seat>,
    board: Board,
    pool: Pool,
    current: SeatId,
    pass_streak: usize,
    outcome: Option<RoundOutcome>,
    tile_budget: usize,
}

struct Seat {
    name: String,
    hand: Hand,
}

impl RoundEngine {
    pub fn builder(names: Vec<String>) -> RoundBuilder {
        RoundBuilder::new(names)
    }

    /// Standard round: shuffle with `seed`, deal seven tiles per seat.
    pub fn new(names: Vec<String>, seed: u64) -> Result<Self, GameError> {
        RoundBuilder::new(names).with_seed(seed).build()
    }

    fn from_builder(builder: RoundBuilder) -> Result<Self, GameError> {
        let RoundBuilder {
            names,
            seed,
            pool,
            hands,
            board,
        } = builder;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidConfiguration(
                "player count must be between 2 and 4",
            ));
        }

        let mut chain = Board::new();
        for tile in board {
            chain
                .place(tile, End::Right)
                .map_err(|_| GameError::InvalidConfiguration("board tiles do not chain"))?;
        }

        let mut seats: Vec<Seat> = names
            .into_iter()
            .map(|name| Seat {
                name,
                hand: Hand::new(),
            })
            .collect();

        let mut pool = match (&hands, pool) {
            (_, Some(tiles)) => Pool::from_tiles(tiles),
            (Some(_), None) => Pool::empty(),
            (None, None) => {
                let mut rng = StdRng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED));
                Pool::shuffled(&mut rng)
            }
        };

        match hands {
            Some(hands) => {
                if hands.len() != seats.len() {
                    return Err(GameError::InvalidConfiguration(
                        "one hand per seat required",
                    ));
                }
                for (seat, tiles) in seats.iter_mut().zip(hands) {
                    for tile in tiles {
                        seat.hand.add(tile);
                    }
                }
            }
            None => {
                // Round-robin deal, stopping mid-cycle if the pool empties.
                'deal: for _ in 0..HAND_TILES {
                    for seat in &mut seats {
                        match pool.draw() {
                            Some(tile) => seat.hand.add(tile),
                            None => break 'deal,
                        }
                    }
                }
            }
        }

        let mut engine = Self {
            seats,
            board: chain,
            pool,
            current: 0,
            pass_streak: 0,
            outcome: None,
            tile_budget: 0,
        };
        engine.tile_budget = engine.total_tiles();
        Ok(engine)
    }

    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    pub fn seat_names(&self) -> Vec<String> {
        self.seats.iter().map(|seat| seat.name.clone()).collect()
    }

    pub fn hand_len(&self, seat: SeatId) -> Result<usize, GameError> {
        self.seats
            .get(seat)
            .map(|s| s.hand.len())
            .ok_or(GameError::InvalidSeat(seat))
    }

    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn board_len(&self) -> usize {
        self.board.len()
    }

    /// Pool plus hands plus board; equals the count recorded at build time
    /// (28 for a standard deal) at every step.
    pub fn total_tiles(&self) -> usize {
        self.pool.len()
            + self.board.len()
            + self.seats.iter().map(|seat| seat.hand.len()).sum::<usize>()
    }

    /// Remaining pips per seat, in seating order. Scoring input.
    pub fn pip_sums(&self) -> Vec<(String, u32)> {
        self.seats
            .iter()
            .map(|seat| (seat.name.clone(), seat.hand.pip_sum()))
            .collect()
    }

    /// Snapshot from the acting seat's perspective.
    pub fn view(&self) -> TurnView {
        let acting = &self.seats[self.current];
        TurnView {
            seat: self.current,
            name: acting.name.clone(),
            hand: acting.hand.iter().copied().collect(),
            board: self.board.iter().copied().collect(),
            open_ends: self.board.open_ends(),
            pool_len: self.pool.len(),
            seats: self
                .seats
                .iter()
                .enumerate()
                .map(|(id, seat)| SeatPublic {
                    name: seat.name.clone(),
                    hand_len: seat.hand.len(),
                    is_current: id == self.current,
                })
                .collect(),
            pass_streak: self.pass_streak,
        }
    }

    /// Every legal attachment for the acting seat's current hand. On an
    /// empty board every tile is listed for both ends.
    pub fn legal_placements(&self) -> Vec<Placement> {
        let hand = &self.seats[self.current].hand;
        let mut legal = Vec::new();
        match self.board.open_ends() {
            None => {
                for tile_index in 0..hand.len() {
                    legal.push(Placement {
                        tile_index,
                        end: End::Left,
                    });
                    legal.push(Placement {
                        tile_index,
                        end: End::Right,
                    });
                }
            }
            Some((left, right)) => {
                for (tile_index, tile) in hand.iter().enumerate() {
                    if tile.has_pip(left) {
                        legal.push(Placement {
                            tile_index,
                            end: End::Left,
                        });
                    }
                    if tile.has_pip(right) {
                        legal.push(Placement {
                            tile_index,
                            end: End::Right,
                        });
                    }
                }
            }
        }
        legal
    }

    /// Runs one turn for the acting seat and advances to the next.
    ///
    /// Draws from the pool until the hand holds a playable tile; if the pool
    /// empties first the turn is a forced pass and the provider is never
    /// consulted. A voluntary pass from the provider counts the same way.
    pub fn play_turn(
        &mut self,
        provider: &mut dyn DecisionProvider,
    ) -> Result<MoveOutcome, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::RoundOver);
        }

        let ends = self.board.open_ends();
        while !self.seats[self.current].hand.has_play(ends) {
            match self.pool.draw() {
                Some(tile) => self.seats[self.current].hand.add(tile),
                None => break,
            }
        }

        let moved = if !self.seats[self.current].hand.has_play(ends) {
            MoveOutcome::Passed
        } else {
            let legal = self.legal_placements();
            let view = self.view();
            match provider.choose_play(&view, &legal) {
                PlayChoice::Pass => MoveOutcome::Passed,
                PlayChoice::Place { tile_index, end } => {
                    self.apply_placement(tile_index, end)?;
                    MoveOutcome::Played
                }
            }
        };

        match moved {
            MoveOutcome::Played => {
                self.pass_streak = 0;
                if self.seats[self.current].hand.is_empty() {
                    self.outcome = Some(RoundOutcome::Won {
                        winner: self.seats[self.current].name.clone(),
                    });
                }
            }
            MoveOutcome::Passed => {
                self.pass_streak += 1;
                if self.pass_streak >= self.seats.len() {
                    self.outcome = Some(RoundOutcome::Blocked);
                }
            }
        }

        self.current = (self.current + 1) % self.seats.len();
        debug_assert_eq!(self.total_tiles(), self.tile_budget, "tiles not conserved");
        Ok(moved)
    }

    /// Loops `play_turn` until the round is won or blocked. `providers` must
    /// hold one provider per seat, in seating order.
    pub fn run(
        &mut self,
        providers: &mut [Box<dyn DecisionProvider>],
    ) -> Result<RoundOutcome, GameError> {
        if providers.len() != self.seats.len() {
            return Err(GameError::InvalidConfiguration(
                "one provider per seat required",
            ));
        }
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            let acting = self.current;
            self.play_turn(providers[acting].as_mut())?;
        }
    }

    /// The tile leaves the hand only after the board accepts it, so a
    /// rejected placement mutates nothing.
    fn apply_placement(&mut self, tile_index: usize, end: End) -> Result<(), GameError> {
        let hand = &mut self.seats[self.current].hand;
        let tile = *hand
            .get(tile_index)
            .ok_or(InvalidMove::TileIndex(tile_index))?;
        self.board.place(tile, end)?;
        let removed = hand.take(tile_index)?;
        debug_assert_eq!(removed, tile);
        Ok(())
    }
}
