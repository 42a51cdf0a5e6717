//! Tile-by-set incidence matrix.

use meldforge_core::TileSet;

/// `tile_count x set_count` matrix where entry `(t, s)` is the number of
/// copies of tile `t` that set `s` needs.
///
/// Stored row-major. Column `s` sums to the length of set `s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    tile_count: usize,
    set_count: usize,
    cells: Vec<u32>,
}

impl IncidenceMatrix {
    /// Accumulates every tile occurrence of every set.
    ///
    /// Tile indices must already be validated against `tile_count`.
    pub(crate) fn from_sets(tile_count: usize, sets: &[TileSet]) -> Self {
        let set_count = sets.len();
        let mut cells = vec![0; tile_count * set_count];
        for (s, set) in sets.iter().enumerate() {
            for &t in set {
                cells[t * set_count + s] += 1;
            }
        }
        Self {
            tile_count,
            set_count,
            cells,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    #[inline]
    pub fn get(&self, tile: usize, set: usize) -> u32 {
        self.cells[tile * self.set_count + set]
    }

    /// Entries of one tile row.
    pub fn row(&self, tile: usize) -> &[u32] {
        let start = tile * self.set_count;
        &self.cells[start..start + self.set_count]
    }

    /// Sum of column `set`, i.e. the number of tiles in that set.
    pub fn column_sum(&self, set: usize) -> u32 {
        (0..self.tile_count).map(|t| self.get(t, set)).sum()
    }

    /// Number of non-zero entries.
    pub fn nonzeros(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// Tile counts needed to lay out `set_counts`: `M @ set_counts`.
    pub fn covered(&self, set_counts: &[u32]) -> Vec<u32> {
        (0..self.tile_count)
            .map(|t| {
                self.row(t)
                    .iter()
                    .zip(set_counts)
                    .map(|(&m, &n)| m * n)
                    .sum()
            })
            .collect()
    }
}
