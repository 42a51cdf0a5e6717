//! Decoded solver output.

use crate::tile::Tile;

/// A placement found by the solver.
///
/// `tiles` lists every physical tile taken from the rack (a tile placed twice
/// appears twice), `sets` lists the indices of the sets forming the new table,
/// repeated per multiplicity. Both are in ascending order.
///
/// An empty solution means no legal placement was found.
///
/// # Example
///
/// ```
/// use meldforge_core::{Solution, Tile};
///
/// let none = Solution::none();
/// assert!(none.is_empty());
///
/// let solution = Solution::new(vec![Tile::from_index(0)], vec![4]);
/// assert_eq!(solution.tile_count(), 1);
/// assert_eq!(solution.sets(), &[4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    tiles: Vec<Tile>,
    sets: Vec<usize>,
}

impl Solution {
    pub fn new(tiles: Vec<Tile>, sets: Vec<usize>) -> Self {
        Self { tiles, sets }
    }

    /// The "no solution" signal: nothing placed, no sets.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn sets(&self) -> &[usize] {
        &self.sets
    }

    /// Returns true if nothing is placed.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.sets.is_empty()
    }

    /// Number of physical tiles placed from the rack.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Counts placed tiles per count-vector index.
    pub fn tile_counts(&self, tile_count: usize) -> Vec<u32> {
        let mut counts = vec![0; tile_count];
        for tile in &self.tiles {
            if let Some(count) = counts.get_mut(tile.index()) {
                *count += 1;
            }
        }
        counts
    }

    pub fn into_parts(self) -> (Vec<Tile>, Vec<usize>) {
        (self.tiles, self.sets)
    }
}
