use rand::Rng;
use rand::seq::SliceRandom;

use crate::tile::{Tile, full_set};

/// The shuffled remainder of the tile set, drawn from during dealing and
/// whenever a player has no legal tile in hand.
#[derive(Clone, Debug, Default)]
pub struct Pool {
    tiles: Vec<Tile>,
}

impl Pool {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh pool holding the full 28-tile set, uniformly shuffled.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut tiles = full_set();
        tiles.shuffle(rng);
        Self { tiles }
    }

    /// Deterministic pool for tests and scripted setups. Draws pop from the
    /// back, so the last element is the first tile out.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Removes and returns one tile, or `None` when exhausted. An empty pool
    /// is not an error here; the turn logic resolves it as a pass.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TILE_SET_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffled_pool_holds_the_full_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = Pool::shuffled(&mut rng);
        assert_eq!(pool.len(), TILE_SET_SIZE);
        let mut drawn = Vec::new();
        while let Some(tile) = pool.draw() {
            drawn.push(tile);
        }
        assert_eq!(drawn.len(), TILE_SET_SIZE);
        for tile in full_set() {
            assert!(drawn.contains(&tile), "missing {tile}");
        }
        assert!(pool.draw().is_none());
    }
}
