//! Building a solver from configuration.

use std::path::Path;

use meldforge_config::{ConfigError, SolverConfig};
use meldforge_core::{RulesetError, StandardRuleSet};
use meldforge_solver::RummikubSolver;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ruleset(#[from] RulesetError),
}

/// Generates the configured standard ruleset and a solver for it.
pub fn solver_from_config(
    config: &SolverConfig,
) -> Result<(StandardRuleSet, RummikubSolver), RulesetError> {
    let ruleset = StandardRuleSet::new(config.ruleset)?;
    let solver = RummikubSolver::with_config(&ruleset, config)?;
    Ok((ruleset, solver))
}

/// Loads a TOML config file and builds a solver from it.
///
/// With the `console` feature, console logging is initialized first.
pub fn load_solver(
    path: impl AsRef<Path>,
) -> Result<(StandardRuleSet, RummikubSolver), SetupError> {
    #[cfg(feature = "console")]
    meldforge_console::init();

    let config = SolverConfig::load(path)?;
    Ok(solver_from_config(&config)?)
}
