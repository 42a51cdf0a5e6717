//! Optimizer abstraction.
//!
//! The solver only needs one capability from an integer programming backend:
//! maximize a bound [`IntegerProgram`] and return the variable values, or say
//! why it could not.

mod backend;

pub use backend::{supported_backends, GoodLpOptimizer};

use std::fmt::Debug;

use thiserror::Error;

use crate::model::IntegerProgram;

/// Why an optimizer returned no assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizerError {
    /// No assignment satisfies the constraints.
    #[error("Problem is infeasible")]
    Infeasible,

    /// The objective can grow without limit.
    #[error("Problem is unbounded")]
    Unbounded,

    /// The backend failed (numerical trouble, crash, time limit).
    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Optimal variable values as reported by an optimizer.
///
/// Values are indexed by [`crate::model::VarId::index`] and may carry small
/// floating point residues even for integer variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub objective: f64,
    pub values: Vec<f64>,
}

impl Assignment {
    pub fn new(objective: f64, values: Vec<f64>) -> Self {
        Self { objective, values }
    }
}

/// A mixed-integer programming backend.
pub trait Optimizer: Send + Sync + Debug {
    /// Maximizes `program`.
    fn optimize(&self, program: &IntegerProgram) -> Result<Assignment, OptimizerError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

impl<O: Optimizer + ?Sized> Optimizer for Box<O> {
    fn optimize(&self, program: &IntegerProgram) -> Result<Assignment, OptimizerError> {
        (**self).optimize(program)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
