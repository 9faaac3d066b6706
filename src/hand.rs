use crate::error::InvalidMove;
use crate::tile::Tile;

/// One player's tiles, in draw order. Index-based selection follows this
/// order; it has no rule significance.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes and returns the tile at `index`.
    pub fn take(&mut self, index: usize) -> Result<Tile, InvalidMove> {
        if index >= self.tiles.len() {
            return Err(InvalidMove::TileIndex(index));
        }
        Ok(self.tiles.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Sum of all pips still held, the round-scoring penalty.
    pub fn pip_sum(&self) -> u32 {
        self.tiles.iter().map(Tile::pip_sum).sum()
    }

    /// Whether any held tile can legally attach to the given open ends.
    /// With an empty board every tile is playable.
    pub fn has_play(&self, open_ends: Option<(u8, u8)>) -> bool {
        match open_ends {
            None => !self.tiles.is_empty(),
            Some((left, right)) => self
                .tiles
                .iter()
                .any(|tile| tile.has_pip(left) || tile.has_pip(right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_removes_exactly_one_tile() {
        let mut hand = Hand::new();
        hand.add(Tile::new(1, 2));
        hand.add(Tile::new(3, 4));
        let taken = hand.take(0).unwrap();
        assert_eq!(taken, Tile::new(1, 2));
        assert_eq!(hand.len(), 1);
        assert!(matches!(hand.take(5), Err(InvalidMove::TileIndex(5))));
    }

    #[test]
    fn has_play_checks_both_ends_and_orientations() {
        let mut hand = Hand::new();
        hand.add(Tile::new(1, 2));
        assert!(hand.has_play(None));
        assert!(hand.has_play(Some((2, 5))));
        assert!(hand.has_play(Some((5, 1))));
        assert!(!hand.has_play(Some((5, 6))));
    }

    #[test]
    fn pip_sum_totals_both_sides() {
        let mut hand = Hand::new();
        hand.add(Tile::new(6, 6));
        hand.add(Tile::new(0, 3));
        assert_eq!(hand.pip_sum(), 15);
    }
}
