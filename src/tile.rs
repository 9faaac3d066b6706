use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub const MAX_PIP: u8 = 6;
pub const TILE_SET_SIZE: usize = 28;
pub const HAND_TILES: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// A domino tile with two pip ends.
///
/// Orientation (which pip is `left`) matters when attaching the tile to the
/// board, but not for identity: `[3|5]` and `[5|3]` are the same tile.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    pub fn new(left: u8, right: u8) -> Self {
        debug_assert!(left <= MAX_PIP && right <= MAX_PIP);
        Self { left, right }
    }

    #[inline]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> u8 {
        self.right
    }

    /// Sum of both pip values, the unit of round scoring.
    #[inline]
    pub fn pip_sum(&self) -> u32 {
        u32::from(self.left) + u32::from(self.right)
    }

    /// Swaps the two ends in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Returns the same tile with its ends swapped.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// True when either end shows `value`.
    #[inline]
    pub fn has_pip(&self, value: u8) -> bool {
        self.left == value || self.right == value
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Orientation-independent, to stay consistent with PartialEq.
        let (lo, hi) = if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        };
        lo.hash(state);
        hi.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Builds the full 28-tile double-six set in deterministic order (unshuffled).
pub fn full_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_SET_SIZE);
    for left in 0..=MAX_PIP {
        for right in left..=MAX_PIP {
            tiles.push(Tile::new(left, right));
        }
    }
    tiles
}
