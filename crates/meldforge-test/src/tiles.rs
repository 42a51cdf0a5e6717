//! Tile name helpers.

use meldforge_core::{Ruleset, Tile};

/// Parses tile names such as `k1` or `j`.
///
/// # Panics
///
/// Panics on a name the ruleset does not know.
pub fn tiles<R: Ruleset + ?Sized>(ruleset: &R, names: &[&str]) -> Vec<Tile> {
    names
        .iter()
        .map(|name| match ruleset.parse_tile(name) {
            Ok(tile) => tile,
            Err(err) => panic!("{err}"),
        })
        .collect()
}

/// Count vector over all tile indices; repeated names count twice.
pub fn counts<R: Ruleset + ?Sized>(ruleset: &R, names: &[&str]) -> Vec<u32> {
    let mut counts = vec![0; ruleset.tile_count()];
    for tile in tiles(ruleset, names) {
        counts[tile.index()] += 1;
    }
    counts
}
