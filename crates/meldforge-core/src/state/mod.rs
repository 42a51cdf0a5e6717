//! Game state: tile counts on the rack and on the table.

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::GameStateError;
use crate::mode::SolverMode;
use crate::ruleset::Ruleset;
use crate::solution::Solution;
use crate::tile::Tile;

/// Where a tile lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Rack,
    Table,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Rack => f.write_str("rack"),
            Location::Table => f.write_str("table"),
        }
    }
}

/// Rack and table tile counts for one player.
///
/// Counts are indexed like the ruleset's tile indices. The combined count of
/// a tile across rack and table never exceeds the number of copies in the
/// game. Edits are all-or-nothing: a failed edit leaves the state untouched.
///
/// # Example
///
/// ```
/// use meldforge_core::{GameState, RuleSetParams, Ruleset, StandardRuleSet};
///
/// let ruleset = StandardRuleSet::new(RuleSetParams::default()).unwrap();
/// let mut state = GameState::new(&ruleset);
/// let r5 = ruleset.parse_tile("r5").unwrap();
///
/// state.add_rack([r5, r5]).unwrap();
/// assert_eq!(state.rack_counts()[r5.index()], 2);
/// assert!(state.add_rack([r5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    rack: Vec<u32>,
    table: Vec<u32>,
    limits: Vec<u32>,
    initial: bool,
}

impl GameState {
    /// Creates an empty state for `ruleset`, before the opening meld.
    pub fn new<R: Ruleset + ?Sized>(ruleset: &R) -> Self {
        let tile_count = ruleset.tile_count();
        Self {
            rack: vec![0; tile_count],
            table: vec![0; tile_count],
            limits: (0..tile_count).map(|t| ruleset.tile_limit(t)).collect(),
            initial: true,
        }
    }

    pub fn rack_counts(&self) -> &[u32] {
        &self.rack
    }

    pub fn table_counts(&self) -> &[u32] {
        &self.table
    }

    /// Returns true until the player has made an opening meld.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    pub fn set_initial(&mut self, initial: bool) {
        self.initial = initial;
    }

    /// `Initial` before the opening meld, `TileCount` afterwards.
    pub fn suggested_mode(&self) -> SolverMode {
        if self.initial {
            SolverMode::Initial
        } else {
            SolverMode::TileCount
        }
    }

    /// Iterates the tiles on the rack, one entry per copy.
    pub fn rack_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        expand(&self.rack)
    }

    /// Iterates the tiles on the table, one entry per copy.
    pub fn table_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        expand(&self.table)
    }

    pub fn add_rack(&mut self, tiles: impl IntoIterator<Item = Tile>) -> Result<(), GameStateError> {
        self.edit(Location::Rack, tiles, true)
    }

    pub fn remove_rack(
        &mut self,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<(), GameStateError> {
        self.edit(Location::Rack, tiles, false)
    }

    pub fn add_table(&mut self, tiles: impl IntoIterator<Item = Tile>) -> Result<(), GameStateError> {
        self.edit(Location::Table, tiles, true)
    }

    pub fn remove_table(
        &mut self,
        tiles: impl IntoIterator<Item = Tile>,
    ) -> Result<(), GameStateError> {
        self.edit(Location::Table, tiles, false)
    }

    /// Moves the tiles of `solution` from the rack to the table.
    ///
    /// Placing anything ends the initial phase.
    pub fn apply(&mut self, solution: &Solution) -> Result<(), GameStateError> {
        if solution.tiles().is_empty() {
            return Ok(());
        }
        let mut next = self.clone();
        next.remove_rack(solution.tiles().iter().copied())?;
        next.add_table(solution.tiles().iter().copied())?;
        next.initial = false;
        *self = next;
        Ok(())
    }

    fn edit(
        &mut self,
        location: Location,
        tiles: impl IntoIterator<Item = Tile>,
        add: bool,
    ) -> Result<(), GameStateError> {
        let mut counts = match location {
            Location::Rack => self.rack.clone(),
            Location::Table => self.table.clone(),
        };
        let other = match location {
            Location::Rack => &self.table,
            Location::Table => &self.rack,
        };

        for tile in tiles {
            let index = tile.index();
            let count = counts
                .get_mut(index)
                .ok_or(GameStateError::UnknownTile(tile))?;
            if add {
                let limit = self.limits[index];
                if *count + other[index] >= limit {
                    return Err(GameStateError::TooMany { tile, limit });
                }
                *count += 1;
            } else {
                if *count == 0 {
                    return Err(GameStateError::NotAvailable { tile, location });
                }
                *count -= 1;
            }
        }

        match location {
            Location::Rack => self.rack = counts,
            Location::Table => self.table = counts,
        }
        Ok(())
    }
}

fn expand(counts: &[u32]) -> impl Iterator<Item = Tile> + '_ {
    counts
        .iter()
        .enumerate()
        .flat_map(|(index, &count)| std::iter::repeat(Tile::from_index(index)).take(count as usize))
}
