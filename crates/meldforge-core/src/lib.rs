//! MeldForge Core - Core types for tile placement solving
//!
//! This crate provides the fundamental abstractions for MeldForge:
//! - Tile identities and their textual names
//! - The `Ruleset` trait plus the generated standard ruleset
//! - Game state (rack and table tile counts)
//! - Solver modes and decoded solutions

pub mod error;
pub mod mode;
pub mod ruleset;
pub mod solution;
pub mod state;
pub mod tile;

pub use error::{GameStateError, MeldForgeError, Result, RulesetError};
pub use mode::SolverMode;
pub use ruleset::{CustomRuleSet, RuleSetParams, Ruleset, StandardRuleSet, TileSet};
pub use solution::Solution;
pub use state::{GameState, Location};
pub use tile::Tile;
