use std::collections::HashMap;

use dominoes::{
    DecisionProvider, End, GameError, GameSession, InvalidMove, MoveOutcome, Placement,
    PlayChoice, RoundEngine, RoundOutcome, TILE_SET_SIZE, Tile, TurnView,
};

/// Deterministic provider: always takes the first legal placement.
struct FirstLegal;

impl DecisionProvider for FirstLegal {
    fn choose_play(&mut self, _view: &TurnView, legal: &[Placement]) -> PlayChoice {
        let placement = legal[0];
        PlayChoice::Place {
            tile_index: placement.tile_index,
            end: placement.end,
        }
    }
}

/// Provider that always passes voluntarily.
struct AlwaysPass;

impl DecisionProvider for AlwaysPass {
    fn choose_play(&mut self, _view: &TurnView, _legal: &[Placement]) -> PlayChoice {
        PlayChoice::Pass
    }
}

/// Provider that must never be consulted; forced passes bypass it.
struct NeverAsked;

impl DecisionProvider for NeverAsked {
    fn choose_play(&mut self, _view: &TurnView, _legal: &[Placement]) -> PlayChoice {
        panic!("provider must not be consulted on a forced pass");
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn dealing_two_players() -> Result<(), GameError> {
    let round = RoundEngine::new(names(&["Ana", "Beto"]), 11)?;
    assert_eq!(round.hand_len(0)?, 7);
    assert_eq!(round.hand_len(1)?, 7);
    assert_eq!(round.pool_len(), 14);
    assert_eq!(round.board_len(), 0);
    assert_eq!(round.total_tiles(), TILE_SET_SIZE);
    assert_eq!(round.current_seat(), 0);
    assert!(!round.is_finished());
    Ok(())
}

#[test]
fn dealing_four_players_empties_the_pool() -> Result<(), GameError> {
    let round = RoundEngine::new(names(&["A", "B", "C", "D"]), 3)?;
    for seat in 0..4 {
        assert_eq!(round.hand_len(seat)?, 7);
    }
    assert_eq!(round.pool_len(), 0);
    assert_eq!(round.total_tiles(), TILE_SET_SIZE);
    Ok(())
}

#[test]
fn rejects_bad_player_counts() {
    assert!(RoundEngine::new(names(&["solo"]), 0).is_err());
    assert!(RoundEngine::new(names(&["a", "b", "c", "d", "e"]), 0).is_err());
}

#[test]
fn rounds_terminate_and_conserve_tiles() -> Result<(), GameError> {
    for (players, seed) in [(2usize, 42u64), (3, 43), (4, 44)] {
        let roster: Vec<String> = (0..players).map(|n| format!("P{n}")).collect();
        let mut round = RoundEngine::new(roster, seed)?;
        assert_eq!(round.total_tiles(), TILE_SET_SIZE);

        // Any window of `players` turns without a play ends the round
        // blocked, and at most 28 tiles can ever be played, so this bound
        // holds for every legal game.
        let max_turns = (TILE_SET_SIZE + 1) * players;
        let mut turns = 0;
        while !round.is_finished() {
            round.play_turn(&mut FirstLegal)?;
            turns += 1;
            assert_eq!(round.total_tiles(), TILE_SET_SIZE, "tiles leaked");
            assert!(turns <= max_turns, "round failed to terminate");
        }
        assert!(round.outcome().is_some());
    }
    Ok(())
}

#[test]
fn first_play_moves_one_tile_from_hand_to_board() -> Result<(), GameError> {
    let mut round = RoundEngine::new(names(&["Ana", "Beto"]), 9)?;
    let pool_before = round.pool_len();
    let moved = round.play_turn(&mut FirstLegal)?;
    assert_eq!(moved, MoveOutcome::Played);
    assert_eq!(round.hand_len(0)?, 6);
    assert_eq!(round.board_len(), 1);
    assert_eq!(round.pool_len(), pool_before, "empty board never forces draws");
    assert_eq!(round.current_seat(), 1);
    Ok(())
}

#[test]
fn draws_until_playable_then_plays() -> Result<(), GameError> {
    // Seat 0 holds nothing that fits the open 6s; the second draw delivers
    // [2|6], which attaches to the left end as-is.
    let mut round = RoundEngine::builder(names(&["Ana", "Beto"]))
        .with_hands(vec![vec![Tile::new(0, 1)], vec![Tile::new(3, 4)]])
        .with_board(vec![Tile::new(6, 6)])
        .with_pool(vec![Tile::new(2, 6), Tile::new(5, 5)])
        .build()?;
    let moved = round.play_turn(&mut FirstLegal)?;
    assert_eq!(moved, MoveOutcome::Played);
    // Drew [5|5] then [2|6], played the latter.
    assert_eq!(round.hand_len(0)?, 2);
    assert_eq!(round.pool_len(), 0);
    assert_eq!(round.board_len(), 2);
    assert_eq!(round.view().open_ends, Some((2, 6)));
    Ok(())
}

#[test]
fn exhausted_pool_resolves_as_forced_pass() -> Result<(), GameError> {
    let mut round = RoundEngine::builder(names(&["Ana", "Beto"]))
        .with_hands(vec![vec![Tile::new(0, 1)], vec![Tile::new(3, 4)]])
        .with_board(vec![Tile::new(6, 6)])
        .with_pool(vec![Tile::new(3, 3)])
        .build()?;
    let moved = round.play_turn(&mut NeverAsked)?;
    assert_eq!(moved, MoveOutcome::Passed);
    // The useless tile was still drawn before passing.
    assert_eq!(round.hand_len(0)?, 2);
    assert_eq!(round.pool_len(), 0);
    assert_eq!(round.board_len(), 1, "a pass never mutates the board");
    Ok(())
}

#[test]
fn full_pass_rotation_blocks_the_round() -> Result<(), GameError> {
    // Nobody holds a 6 and the pool is empty: exactly one rotation of forced
    // passes must end the round blocked.
    let mut round = RoundEngine::builder(names(&["Ana", "Beto", "Carla"]))
        .with_hands(vec![
            vec![Tile::new(0, 1)],
            vec![Tile::new(2, 3)],
            vec![Tile::new(4, 5)],
        ])
        .with_board(vec![Tile::new(6, 6)])
        .build()?;
    for turn in 0..3 {
        assert!(!round.is_finished(), "blocked too early at turn {turn}");
        assert_eq!(round.play_turn(&mut NeverAsked)?, MoveOutcome::Passed);
    }
    assert_eq!(round.outcome(), Some(&RoundOutcome::Blocked));
    assert!(round.play_turn(&mut NeverAsked).is_err());
    Ok(())
}

#[test]
fn voluntary_passes_count_toward_blockage() -> Result<(), GameError> {
    let mut round = RoundEngine::new(names(&["Ana", "Beto"]), 21)?;
    assert_eq!(round.play_turn(&mut AlwaysPass)?, MoveOutcome::Passed);
    assert!(!round.is_finished());
    assert_eq!(round.play_turn(&mut AlwaysPass)?, MoveOutcome::Passed);
    assert_eq!(round.outcome(), Some(&RoundOutcome::Blocked));
    assert_eq!(round.board_len(), 0);
    Ok(())
}

#[test]
fn winning_empties_the_hand() -> Result<(), GameError> {
    // Seat 0 plays its only tile immediately.
    let mut round = RoundEngine::builder(names(&["Ana", "Beto"]))
        .with_hands(vec![
            vec![Tile::new(6, 2)],
            vec![Tile::new(3, 4), Tile::new(0, 0)],
        ])
        .with_board(vec![Tile::new(6, 6)])
        .build()?;
    assert_eq!(round.play_turn(&mut FirstLegal)?, MoveOutcome::Played);
    assert_eq!(
        round.outcome(),
        Some(&RoundOutcome::Won {
            winner: "Ana".to_string()
        })
    );
    assert_eq!(round.hand_len(0)?, 0);
    let sums = round.pip_sums();
    assert_eq!(sums[0], ("Ana".to_string(), 0));
    assert_eq!(sums[1], ("Beto".to_string(), 7));
    Ok(())
}

#[test]
fn malformed_placement_fails_loudly_without_mutation() -> Result<(), GameError> {
    struct OutOfRange;
    impl DecisionProvider for OutOfRange {
        fn choose_play(&mut self, _view: &TurnView, _legal: &[Placement]) -> PlayChoice {
            PlayChoice::Place {
                tile_index: 99,
                end: End::Right,
            }
        }
    }
    let mut round = RoundEngine::new(names(&["Ana", "Beto"]), 5)?;
    let err = round.play_turn(&mut OutOfRange).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidMove(InvalidMove::TileIndex(99))
    ));
    assert_eq!(round.hand_len(0)?, 7);
    assert_eq!(round.board_len(), 0);
    assert_eq!(round.current_seat(), 0, "a failed turn does not advance");
    assert_eq!(round.total_tiles(), TILE_SET_SIZE);
    Ok(())
}

#[test]
fn session_accumulates_scores_across_rounds() -> Result<(), GameError> {
    let mut session = GameSession::with_seed(names(&["Ana", "Beto"]), 77)?;
    let mut providers: Vec<Box<dyn DecisionProvider>> =
        vec![Box::new(FirstLegal), Box::new(FirstLegal)];

    let mut earned: HashMap<String, u32> = HashMap::new();
    for _ in 0..3 {
        let report = session.play_round(&mut providers)?;
        let losers: u32 = report
            .pip_sums
            .iter()
            .filter(|(name, _)| *name != report.score.winner)
            .map(|(_, pips)| pips)
            .sum();
        assert_eq!(report.score.points, losers);
        *earned.entry(report.score.winner).or_default() += report.score.points;
    }
    for (name, points) in session.totals() {
        assert_eq!(earned.get(name).copied().unwrap_or(0), *points);
    }

    session.reset_scores();
    assert!(session.totals().iter().all(|(_, points)| *points == 0));
    session.reconfigure(names(&["Dana", "Eli", "Fio"]))?;
    assert_eq!(session.names().len(), 3);
    assert_eq!(session.totals().len(), 3);
    Ok(())
}
