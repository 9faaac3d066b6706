use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::InvalidMove;
use crate::tile::Tile;

/// Selects one of the board's two open ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

/// The chain of placed tiles on the table.
///
/// Invariant once non-empty: every tile's right pip equals its right
/// neighbor's left pip, so the chain reads as one continuous line. The open
/// ends are the first tile's left pip and the last tile's right pip.
#[derive(Clone, Debug, Default)]
pub struct Board {
    chain: VecDeque<Tile>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.chain.iter()
    }

    /// The two pip values new tiles may attach to, `None` while empty.
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        let first = self.chain.front()?;
        let last = self.chain.back()?;
        Some((first.left(), last.right()))
    }

    /// Attaches `tile` at the requested end, flipping it first when its other
    /// pip is the matching one. Rejects without mutating when neither pip
    /// matches. An empty board accepts any tile as given, at either end.
    pub fn place(&mut self, tile: Tile, end: End) -> Result<(), InvalidMove> {
        let Some((left_open, right_open)) = self.open_ends() else {
            self.chain.push_back(tile);
            return Ok(());
        };
        match end {
            End::Left => {
                if tile.right() == left_open {
                    self.chain.push_front(tile);
                } else if tile.left() == left_open {
                    self.chain.push_front(tile.flipped());
                } else {
                    return Err(InvalidMove::EndMismatch { open: left_open });
                }
            }
            End::Right => {
                if tile.left() == right_open {
                    self.chain.push_back(tile);
                } else if tile.right() == right_open {
                    self.chain.push_back(tile.flipped());
                } else {
                    return Err(InvalidMove::EndMismatch { open: right_open });
                }
            }
        }
        debug_assert!(self.is_linked());
        Ok(())
    }

    fn is_linked(&self) -> bool {
        self.chain
            .iter()
            .zip(self.chain.iter().skip(1))
            .all(|(a, b)| a.right() == b.left())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_accepts_any_tile_as_given() {
        let mut board = Board::new();
        assert_eq!(board.open_ends(), None);
        board.place(Tile::new(5, 2), End::Left).unwrap();
        assert_eq!(board.open_ends(), Some((5, 2)));
    }

    #[test]
    fn appends_matching_tile_without_flip() {
        let mut board = Board::new();
        board.place(Tile::new(5, 2), End::Right).unwrap();
        board.place(Tile::new(2, 6), End::Right).unwrap();
        assert_eq!(board.open_ends(), Some((5, 6)));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn flips_tile_when_other_pip_matches() {
        let mut board = Board::new();
        board.place(Tile::new(5, 2), End::Right).unwrap();
        // [6|2] fits the right end (open 2) only after flipping.
        board.place(Tile::new(6, 2), End::Right).unwrap();
        assert_eq!(board.open_ends(), Some((5, 6)));

        // [3|1] fits the left end (open 5) in neither orientation... and
        // [5|1] needs a flip so the 5 faces the chain.
        board.place(Tile::new(5, 1), End::Left).unwrap();
        assert_eq!(board.open_ends(), Some((1, 6)));
    }

    #[test]
    fn rejection_leaves_board_untouched() {
        let mut board = Board::new();
        board.place(Tile::new(5, 2), End::Right).unwrap();
        let err = board.place(Tile::new(3, 1), End::Right).unwrap_err();
        assert_eq!(err, InvalidMove::EndMismatch { open: 2 });
        assert_eq!(board.len(), 1);
        assert_eq!(board.open_ends(), Some((5, 2)));
    }
}
