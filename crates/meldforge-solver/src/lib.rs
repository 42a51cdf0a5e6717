//! MeldForge Solver
//!
//! This crate turns a ruleset into an integer linear program and game states
//! into placements:
//! - Model builder (incidence matrix, variables, per-mode problems)
//! - Solution codec (parameter binding, rounding, validation, expansion)
//! - Optimizer trait with a `good_lp` implementation
//! - `RummikubSolver`, the entry point combining the three
//!
//! Logging levels:
//! - **INFO**: model construction, solve start/end
//! - **DEBUG**: program sizes, optimizer failures folded into "no solution"
//! - **TRACE**: raw optimizer values

pub mod codec;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod solver;

#[cfg(test)]
mod test_utils;

pub use codec::SolutionCodec;
pub use error::SolveError;
pub use model::{IncidenceMatrix, IntegerProgram, Model, VarId, VariableLayout};
pub use optimizer::{supported_backends, Assignment, GoodLpOptimizer, Optimizer, OptimizerError};
pub use solver::RummikubSolver;
