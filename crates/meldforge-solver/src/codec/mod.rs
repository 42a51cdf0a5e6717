//! Solution codec.
//!
//! Binds game state counts to a [`Model`], runs an [`Optimizer`] and turns
//! its numeric answer into tile and set selections.
//!
//! Rounding is half away from zero (`f64::round`). A value further than the
//! integrality tolerance from its rounded integer, or a rounded assignment
//! that breaks any bound or constraint, is reported as
//! [`SolveError::Internal`] instead of being truncated into a wrong answer.

#[cfg(test)]
mod tests;

use meldforge_config::DEFAULT_INTEGRALITY_TOLERANCE;
use meldforge_core::{Solution, SolverMode, Tile};
use tracing::{debug, trace};

use crate::error::SolveError;
use crate::model::{Bindings, IntegerProgram, Model};
use crate::optimizer::{Assignment, Optimizer, OptimizerError};

/// Encodes game states into programs and decodes optimizer results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionCodec {
    tolerance: f64,
}

impl Default for SolutionCodec {
    fn default() -> Self {
        Self::new(DEFAULT_INTEGRALITY_TOLERANCE)
    }
}

impl SolutionCodec {
    /// Creates a codec accepting values within `tolerance` of an integer.
    ///
    /// The tolerance is clamped below `0.5`.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.clamp(0.0, 0.499),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Finds the best placement for `mode`.
    ///
    /// In [`SolverMode::Initial`] the table counts are ignored: the opening
    /// meld cannot use tiles already on the table.
    ///
    /// Returns [`Solution::none`] when no placement exists, when the
    /// optimizer fails, or when the best placement puts no rack tile down.
    pub fn solve<O: Optimizer + ?Sized>(
        &self,
        model: &Model,
        optimizer: &O,
        mode: SolverMode,
        rack: &[u32],
        table: &[u32],
    ) -> Result<Solution, SolveError> {
        check_shape("rack", rack, model.tile_count())?;
        check_shape("table", table, model.tile_count())?;

        let zeros;
        let table = if mode == SolverMode::Initial {
            zeros = vec![0; model.tile_count()];
            zeros.as_slice()
        } else {
            table
        };

        let program = model.bind(mode, Bindings { table, rack });
        debug!(
            event = "program_bound",
            mode = %mode,
            variables = program.variables().len(),
            constraints = program.constraints().len(),
        );

        let assignment = match optimizer.optimize(&program) {
            Ok(assignment) => assignment,
            Err(OptimizerError::Backend(reason)) => {
                debug!(
                    backend = optimizer.name(),
                    reason = %reason,
                    "optimizer failed, treating as no solution"
                );
                return Ok(Solution::none());
            }
            Err(err) => {
                trace!(mode = %mode, reason = %err, "no feasible placement");
                return Ok(Solution::none());
            }
        };
        if !assignment.objective.is_finite() {
            trace!(mode = %mode, objective = assignment.objective, "non-finite objective");
            return Ok(Solution::none());
        }

        let solution = self.decode(model, &program, &assignment)?;
        if solution.tiles().is_empty() {
            return Ok(Solution::none());
        }
        Ok(solution)
    }

    /// Rounds `assignment`, checks it against `program` and expands it into
    /// tile identities and set indices.
    pub fn decode(
        &self,
        model: &Model,
        program: &IntegerProgram,
        assignment: &Assignment,
    ) -> Result<Solution, SolveError> {
        let layout = model.layout();
        if assignment.values.len() != layout.len() {
            return Err(SolveError::Internal(format!(
                "optimizer returned {} values for {} variables",
                assignment.values.len(),
                layout.len()
            )));
        }

        let counts = assignment
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| self.round(index, value))
            .collect::<Result<Vec<u32>, SolveError>>()?;

        let rounded: Vec<f64> = counts.iter().map(|&c| f64::from(c)).collect();
        if let Some(violation) = program.violation(&rounded) {
            return Err(SolveError::Internal(violation));
        }

        let (set_counts, tile_counts) = counts.split_at(layout.set_count());
        let tiles = expand(tile_counts).map(Tile::from_index).collect();
        let sets = expand(set_counts).collect();
        Ok(Solution::new(tiles, sets))
    }

    fn round(&self, index: usize, value: f64) -> Result<u32, SolveError> {
        if !value.is_finite() {
            return Err(SolveError::Internal(format!(
                "variable {index} has non-finite value {value}"
            )));
        }
        let rounded = value.round();
        if (value - rounded).abs() > self.tolerance {
            return Err(SolveError::Internal(format!(
                "variable {index} = {value} is not integral"
            )));
        }
        if rounded < 0.0 {
            return Err(SolveError::Internal(format!(
                "variable {index} rounds to negative count {rounded}"
            )));
        }
        Ok(rounded as u32)
    }
}

fn check_shape(name: &'static str, counts: &[u32], expected: usize) -> Result<(), SolveError> {
    if counts.len() == expected {
        Ok(())
    } else {
        Err(SolveError::StateShape {
            name,
            expected,
            actual: counts.len(),
        })
    }
}

/// Repeats each index by its count, skipping zeros.
fn expand(counts: &[u32]) -> impl Iterator<Item = usize> + '_ {
    counts
        .iter()
        .enumerate()
        .flat_map(|(index, &count)| std::iter::repeat(index).take(count as usize))
}
