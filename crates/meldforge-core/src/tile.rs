//! Tile identities.

use std::fmt;

/// Colour letters used in tile names, in colour index order.
pub const COLOUR_LETTERS: [char; 8] = ['k', 'b', 'o', 'r', 'g', 'p', 'y', 'c'];

/// Name used for the joker tile.
pub const JOKER_NAME: &str = "j";

/// A tile identity.
///
/// Identities are 1-based: the tile at index `i` of a ruleset's count vectors
/// has identity `i + 1`. When a ruleset has jokers, the joker is the last
/// identity.
///
/// # Example
///
/// ```
/// use meldforge_core::Tile;
///
/// let tile = Tile::from_index(0);
/// assert_eq!(tile.id(), 1);
/// assert_eq!(tile.index(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tile(u16);

impl Tile {
    /// Creates a tile from its 1-based identity. Returns `None` for `0`.
    pub const fn new(id: u16) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Tile(id))
        }
    }

    /// Creates a tile from a 0-based count-vector index.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Tile(index as u16 + 1)
    }

    /// Returns the 1-based identity.
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Returns the 0-based count-vector index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
