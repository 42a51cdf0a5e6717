//! Error types for MeldForge

use thiserror::Error;

use crate::state::Location;
use crate::tile::Tile;

/// Errors raised while validating a ruleset or building a model from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    /// The ruleset has no legal sets at all.
    #[error("Ruleset defines no sets")]
    NoSets,

    /// A set definition contains no tiles.
    #[error("Set {set} contains no tiles")]
    EmptySet { set: usize },

    /// A set references a tile index that does not exist.
    #[error("Set {set} references tile index {tile}, outside 0..{tile_count}")]
    TileOutOfRange {
        set: usize,
        tile: usize,
        tile_count: usize,
    },

    /// `set_values` is not aligned with `sets`.
    #[error("Ruleset has {values} set values for {sets} sets")]
    ValueCountMismatch { sets: usize, values: usize },

    /// The declared tile count disagrees with colours, numbers and jokers.
    #[error("Ruleset declares {actual} tiles, expected {expected}")]
    TileCountMismatch { expected: usize, actual: usize },

    /// A ruleset parameter is outside its supported range.
    #[error("Invalid ruleset parameter `{name}`: {value} not in {min}..={max}")]
    Parameter {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// A tile name could not be parsed for this ruleset.
    #[error("Unknown tile `{0}`")]
    UnknownTile(String),
}

/// Errors raised when editing a game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameStateError {
    /// The tile identity is not part of the ruleset.
    #[error("Tile {0} is not part of this ruleset")]
    UnknownTile(Tile),

    /// Tried to remove a tile that is not there.
    #[error("Tile {tile} is not available on the {location}")]
    NotAvailable { tile: Tile, location: Location },

    /// Adding the tile would exceed the number of copies in the game.
    #[error("Tile {tile} exceeds the limit of {limit} copies")]
    TooMany { tile: Tile, limit: u32 },
}

/// Main error type for MeldForge operations
#[derive(Debug, Error)]
pub enum MeldForgeError {
    #[error("Ruleset error: {0}")]
    Ruleset(#[from] RulesetError),

    #[error("Game state error: {0}")]
    GameState(#[from] GameStateError),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for MeldForge operations
pub type Result<T> = std::result::Result<T, MeldForgeError>;
