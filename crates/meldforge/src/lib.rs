//! MeldForge - optimal Rummikub tile placement
//!
//! Build a ruleset, wrap it in a [`RummikubSolver`] and ask which rack tiles
//! can be laid down.
//!
//! # Example
//!
//! ```rust
//! use meldforge::prelude::*;
//!
//! let config = SolverConfig::from_toml_str(
//!     r#"
//!     [ruleset]
//!     colours = 2
//!     numbers = 5
//!     jokers = 0
//!     min_initial_value = 6
//!     "#,
//! )
//! .unwrap();
//! let (ruleset, solver) = meldforge::solver_from_config(&config).unwrap();
//!
//! let mut state = GameState::new(&ruleset);
//! let run = (1..=3).map(|number| Tile::from_index(ruleset.tile_index(0, number)));
//! state.add_rack(run).unwrap();
//! let solution = solver.solve_state(state.suggested_mode(), &state).unwrap();
//! assert_eq!(solution.tile_count(), 3);
//! ```

// Core types
pub use meldforge_core::{
    CustomRuleSet, GameState, GameStateError, Location, MeldForgeError, RuleSetParams, Ruleset,
    RulesetError, Solution, SolverMode, StandardRuleSet, Tile, TileSet,
};

// Configuration
pub use meldforge_config::{ConfigError, MilpBackend, SolverConfig};

// Solving
pub use meldforge_solver::{
    supported_backends, GoodLpOptimizer, Model, Optimizer, RummikubSolver, SolveError,
    SolutionCodec,
};

mod setup;
pub use setup::{load_solver, solver_from_config, SetupError};

/// Colored console logging. Call [`console::init`] once at startup.
#[cfg(feature = "console")]
pub mod console {
    pub use meldforge_console::{init, MeldConsoleLayer};
}

pub mod prelude {
    pub use super::{
        GameState, RuleSetParams, Ruleset, RummikubSolver, Solution, SolverConfig, SolverMode,
        StandardRuleSet, Tile,
    };
}
