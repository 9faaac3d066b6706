//! Pure text projections of tiles, boards, hands, and turn snapshots.
//! Side-effect free; any presentation layer may call these.

use std::fmt::Write;

use crate::board::End;
use crate::play::Placement;
use crate::state::TurnView;
use crate::tile::Tile;

/// Renders the chain left to right, e.g. `[6|4][4|4][4|1]`, or `(empty)`.
pub fn render_board(tiles: &[Tile]) -> String {
    if tiles.is_empty() {
        return String::from("(empty)");
    }
    tiles.iter().map(Tile::to_string).collect()
}

/// Renders a hand with its selection indices, one tile per line.
pub fn render_hand(tiles: &[Tile]) -> String {
    let mut out = String::new();
    for (index, tile) in tiles.iter().enumerate() {
        let _ = writeln!(out, "  {index}: {tile}");
    }
    out
}

/// Full turn summary: board, open ends, pool size, opponents, own hand.
pub fn render_view(view: &TurnView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Board: {}", render_board(&view.board));
    match view.open_ends {
        Some((left, right)) => {
            let _ = writeln!(out, "Open ends: {left} ... {right}");
        }
        None => {
            let _ = writeln!(out, "Open ends: none (board is empty)");
        }
    }
    let _ = writeln!(out, "Pool: {} tile(s) left", view.pool_len);
    for seat in &view.seats {
        let marker = if seat.is_current { " <- playing" } else { "" };
        let _ = writeln!(out, "  {}: {} tile(s){marker}", seat.name, seat.hand_len);
    }
    let _ = writeln!(out, "Hand of {} ({}):", view.name, view.hand.len());
    let _ = write!(out, "{}", render_hand(&view.hand));
    out
}

/// One-line description of a placement option, e.g.
/// `play [6|2] on the left end (open 6)`.
pub fn describe_placement(view: &TurnView, placement: &Placement) -> String {
    let tile = match view.hand.get(placement.tile_index) {
        Some(tile) => tile.to_string(),
        None => String::from("<?>"),
    };
    let side = match placement.end {
        End::Left => "left",
        End::Right => "right",
    };
    match view.open_ends {
        Some((left, right)) => {
            let open = match placement.end {
                End::Left => left,
                End::Right => right,
            };
            format!("play {tile} on the {side} end (open {open})")
        }
        None => format!("play {tile} to open the board"),
    }
}
