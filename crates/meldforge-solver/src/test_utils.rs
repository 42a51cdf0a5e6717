//! Test utilities for meldforge-solver
//!
//! Provides a scripted optimizer so the codec can be tested without a real
//! backend, and re-exports the shared ruleset fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::IntegerProgram;
use crate::optimizer::{Assignment, Optimizer, OptimizerError};

pub use meldforge_test::rulesets::{example_ruleset, small_ruleset};
pub use meldforge_test::tiles::{counts, tiles};

type Script = dyn Fn(&IntegerProgram) -> Result<Assignment, OptimizerError> + Send + Sync;

/// An optimizer that answers with a closure and counts its calls.
pub struct ScriptedOptimizer {
    script: Box<Script>,
    calls: AtomicUsize,
}

impl ScriptedOptimizer {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&IntegerProgram) -> Result<Assignment, OptimizerError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always returns `values`, with the objective computed by the program.
    pub fn returning(values: Vec<f64>) -> Self {
        Self::new(move |program| {
            Ok(Assignment::new(
                program.objective_value(&values),
                values.clone(),
            ))
        })
    }

    /// Always fails with `err`.
    pub fn failing(err: OptimizerError) -> Self {
        Self::new(move |_| Err(err.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ScriptedOptimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedOptimizer")
            .field("calls", &self.calls())
            .finish()
    }
}

impl Optimizer for ScriptedOptimizer {
    fn optimize(&self, program: &IntegerProgram) -> Result<Assignment, OptimizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)(program)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
