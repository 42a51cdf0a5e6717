//! Rulesets: tile identities, legal sets and scoring.
//!
//! A ruleset is consumed read-only by the model builder. Two implementations
//! are provided:
//! - [`StandardRuleSet`] generates groups, runs and their joker variants from
//!   a handful of [`RuleSetParams`].
//! - [`CustomRuleSet`] carries an explicit set list, for variants that do not
//!   follow the standard generation rules.

mod custom;
mod params;
mod standard;

#[cfg(test)]
mod tests;

use smallvec::SmallVec;

use crate::error::RulesetError;
use crate::tile::{Tile, COLOUR_LETTERS, JOKER_NAME};

pub use custom::CustomRuleSet;
pub use params::RuleSetParams;
pub use standard::StandardRuleSet;

/// Tile indices forming one legal set, with repetition.
pub type TileSet = SmallVec<[usize; 6]>;

/// Read-only view of a ruleset.
///
/// Tile indices are 0-based positions in the rack/table count vectors:
/// colour `c` and number `n` live at `c * numbers + n - 1`, and the joker
/// (when `jokers > 0`) takes the last slot.
pub trait Ruleset {
    /// Number of tile colours.
    fn colours(&self) -> usize;

    /// Numbers per colour, `1..=numbers`.
    fn numbers(&self) -> usize;

    /// Copies of each colour/number tile in the game.
    fn repeats(&self) -> usize;

    /// Number of jokers in the game.
    fn jokers(&self) -> usize;

    /// Minimum total set value for the opening meld.
    fn min_initial_value(&self) -> u32;

    /// Legal sets, as tile indices.
    fn sets(&self) -> &[TileSet];

    /// Point value per set, aligned with [`Ruleset::sets`].
    fn set_values(&self) -> &[u32];

    /// Number of distinct tile identities.
    fn tile_count(&self) -> usize {
        self.colours() * self.numbers() + usize::from(self.jokers() > 0)
    }

    /// Index of the joker slot, if the ruleset has jokers.
    fn joker(&self) -> Option<usize> {
        (self.jokers() > 0).then(|| self.colours() * self.numbers())
    }

    /// Face value of the tile at `index`; jokers are worth nothing.
    fn tile_value(&self, index: usize) -> u32 {
        if index < self.colours() * self.numbers() {
            (index % self.numbers() + 1) as u32
        } else {
            0
        }
    }

    /// Maximum copies of the tile at `index` in a game.
    fn tile_limit(&self, index: usize) -> u32 {
        if Some(index) == self.joker() {
            self.jokers() as u32
        } else {
            self.repeats() as u32
        }
    }

    /// Human readable tile name, e.g. `r13` or `j`.
    fn tile_name(&self, tile: Tile) -> String {
        let index = tile.index();
        if Some(index) == self.joker() {
            return JOKER_NAME.to_string();
        }
        let numbers = self.numbers().max(1);
        match COLOUR_LETTERS.get(index / numbers) {
            Some(letter) if index < self.colours() * numbers => {
                format!("{}{}", letter, index % numbers + 1)
            }
            _ => tile.to_string(),
        }
    }

    /// Parses a tile name produced by [`Ruleset::tile_name`].
    fn parse_tile(&self, name: &str) -> Result<Tile, RulesetError> {
        let unknown = || RulesetError::UnknownTile(name.to_string());
        let lower = name.trim().to_ascii_lowercase();
        if lower == JOKER_NAME {
            return self.joker().map(Tile::from_index).ok_or_else(unknown);
        }

        let mut chars = lower.chars();
        let letter = chars.next().ok_or_else(unknown)?;
        let colour = COLOUR_LETTERS
            .iter()
            .take(self.colours())
            .position(|&c| c == letter)
            .ok_or_else(unknown)?;
        let number: usize = chars.as_str().parse().map_err(|_| unknown())?;
        if number == 0 || number > self.numbers() {
            return Err(unknown());
        }
        Ok(Tile::from_index(colour * self.numbers() + number - 1))
    }

    /// Renders a set as space separated tile names.
    fn set_name(&self, set: usize) -> Option<String> {
        let tiles = self.sets().get(set)?;
        let names: Vec<String> = tiles
            .iter()
            .map(|&index| self.tile_name(Tile::from_index(index)))
            .collect();
        Some(names.join(" "))
    }
}
