//! Solver entry point tying a model, a codec and an optimizer together.

use std::time::Instant;

use meldforge_config::SolverConfig;
use meldforge_core::{GameState, Ruleset, RulesetError, Solution, SolverMode};
use tracing::info;

use crate::codec::SolutionCodec;
use crate::error::SolveError;
use crate::model::Model;
use crate::optimizer::{GoodLpOptimizer, Optimizer};

/// Finds tile placements for one ruleset.
///
/// The model is built once at construction and reused by every call. Solving
/// takes `&self` and binds parameters into a fresh program per call, so one
/// solver can serve concurrent callers.
///
/// # Example
///
/// ```
/// use meldforge_core::{GameState, RuleSetParams, Ruleset, SolverMode, StandardRuleSet};
/// use meldforge_solver::RummikubSolver;
///
/// let params = RuleSetParams::default()
///     .with_colours(2)
///     .with_numbers(5)
///     .with_jokers(0)
///     .with_min_initial_value(6);
/// let ruleset = StandardRuleSet::new(params).unwrap();
/// let solver = RummikubSolver::new(&ruleset).unwrap();
///
/// let mut state = GameState::new(&ruleset);
/// let rack: Vec<_> = ["k1", "k2", "k3", "b5"]
///     .iter()
///     .map(|name| ruleset.parse_tile(name).unwrap())
///     .collect();
/// state.add_rack(rack).unwrap();
///
/// let solution = solver.solve_state(SolverMode::Initial, &state).unwrap();
/// assert_eq!(solution.tile_count(), 3);
/// ```
#[derive(Debug)]
pub struct RummikubSolver<O = GoodLpOptimizer> {
    model: Model,
    optimizer: O,
    codec: SolutionCodec,
}

impl RummikubSolver<GoodLpOptimizer> {
    /// Creates a solver using the preferred compiled-in backend.
    pub fn new<R: Ruleset + ?Sized>(ruleset: &R) -> Result<Self, RulesetError> {
        Self::with_optimizer(ruleset, GoodLpOptimizer::default())
    }

    /// Creates a solver with the backend, time limit and tolerance of
    /// `config`. The ruleset section of `config` is not used here; see
    /// [`meldforge_core::StandardRuleSet::new`].
    pub fn with_config<R: Ruleset + ?Sized>(
        ruleset: &R,
        config: &SolverConfig,
    ) -> Result<Self, RulesetError> {
        Ok(
            Self::with_optimizer(ruleset, GoodLpOptimizer::from_config(config))?
                .with_integrality_tolerance(config.integrality_tolerance),
        )
    }
}

impl<O: Optimizer> RummikubSolver<O> {
    /// Creates a solver with a custom optimizer.
    pub fn with_optimizer<R: Ruleset + ?Sized>(
        ruleset: &R,
        optimizer: O,
    ) -> Result<Self, RulesetError> {
        Ok(Self {
            model: Model::build(ruleset)?,
            optimizer,
            codec: SolutionCodec::default(),
        })
    }

    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.codec = SolutionCodec::new(tolerance);
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Finds the best placement of `rack` tiles given the `table` counts.
    ///
    /// Both slices hold one count per tile index. An empty [`Solution`] means
    /// no placement was found.
    pub fn solve(
        &self,
        mode: SolverMode,
        rack: &[u32],
        table: &[u32],
    ) -> Result<Solution, SolveError> {
        let start = Instant::now();
        info!(
            event = "solve_start",
            mode = %mode,
            backend = self.optimizer.name(),
            rack_tiles = rack.iter().sum::<u32>(),
            table_tiles = table.iter().sum::<u32>(),
        );

        let solution = self
            .codec
            .solve(&self.model, &self.optimizer, mode, rack, table)?;

        info!(
            event = "solve_end",
            mode = %mode,
            tiles_placed = solution.tile_count(),
            sets = solution.sets().len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(solution)
    }

    /// Solves using the counts of `state`.
    pub fn solve_state(&self, mode: SolverMode, state: &GameState) -> Result<Solution, SolveError> {
        self.solve(mode, state.rack_counts(), state.table_counts())
    }
}
