//! `good_lp` backed optimizer.

use std::time::Duration;

use good_lp::{
    variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable,
};
use meldforge_config::{MilpBackend, SolverConfig};
use tracing::{trace, warn};

use super::{Assignment, Optimizer, OptimizerError};
use crate::model::{IntegerProgram, Relation};

/// Backends compiled into this build, in preference order.
///
/// `microlp` is always available; `highs` and `coin_cbc` depend on crate
/// features.
pub fn supported_backends() -> Vec<MilpBackend> {
    MilpBackend::PREFERENCE
        .into_iter()
        .filter(|&backend| is_compiled(backend))
        .collect()
}

fn is_compiled(backend: MilpBackend) -> bool {
    match backend {
        MilpBackend::Microlp => true,
        MilpBackend::Highs => cfg!(feature = "highs"),
        MilpBackend::CoinCbc => cfg!(feature = "coin_cbc"),
    }
}

/// Solves integer programs through `good_lp`.
///
/// # Example
///
/// ```
/// use meldforge_config::MilpBackend;
/// use meldforge_solver::{GoodLpOptimizer, Optimizer};
///
/// let optimizer = GoodLpOptimizer::new(MilpBackend::Microlp);
/// assert_eq!(optimizer.name(), "microlp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodLpOptimizer {
    backend: MilpBackend,
    time_limit: Option<Duration>,
}

impl Default for GoodLpOptimizer {
    /// Picks the most preferred compiled-in backend.
    fn default() -> Self {
        let backend = supported_backends()
            .first()
            .copied()
            .unwrap_or(MilpBackend::Microlp);
        Self {
            backend,
            time_limit: None,
        }
    }
}

impl GoodLpOptimizer {
    /// Uses `backend`, falling back to the default one if it is not compiled
    /// into this build.
    pub fn new(backend: MilpBackend) -> Self {
        if is_compiled(backend) {
            return Self {
                backend,
                time_limit: None,
            };
        }
        let fallback = Self::default();
        warn!(
            requested = %backend,
            using = %fallback.backend,
            "MILP backend not available, falling back"
        );
        fallback
    }

    pub fn from_config(config: &SolverConfig) -> Self {
        let mut optimizer = Self::new(config.backend);
        optimizer.time_limit = config.time_limit();
        optimizer
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn backend(&self) -> MilpBackend {
        self.backend
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

impl Optimizer for GoodLpOptimizer {
    fn optimize(&self, program: &IntegerProgram) -> Result<Assignment, OptimizerError> {
        match self.backend {
            #[cfg(feature = "highs")]
            MilpBackend::Highs => {
                let limit = self.time_limit;
                run(good_lp::solvers::highs::highs, program, move |model| match limit {
                    Some(limit) => model.set_time_limit(limit.as_secs_f64()),
                    None => model,
                })
            }
            #[cfg(feature = "coin_cbc")]
            MilpBackend::CoinCbc => {
                let limit = self.time_limit;
                run(good_lp::solvers::coin_cbc::coin_cbc, program, move |mut model| {
                    model.set_parameter("log", "0");
                    if let Some(limit) = limit {
                        model.set_parameter("seconds", &limit.as_secs().max(1).to_string());
                    }
                    model
                })
            }
            _ => run(good_lp::solvers::microlp::microlp, program, |model| model),
        }
    }

    fn name(&self) -> &str {
        self.backend.name()
    }
}

fn run<S, F>(solver: S, program: &IntegerProgram, configure: F) -> Result<Assignment, OptimizerError>
where
    S: good_lp::Solver,
    S::Model: SolverModel<Error = ResolutionError>,
    F: FnOnce(S::Model) -> S::Model,
{
    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = program
        .variables()
        .iter()
        .map(|bounds| {
            vars.add(
                variable()
                    .integer()
                    .min(bounds.lower)
                    .max(bounds.upper),
            )
        })
        .collect();

    let mut objective = Expression::with_capacity(program.objective().len());
    for &(var, coef) in program.objective() {
        objective.add_mul(coef, handles[var.index()]);
    }

    let mut model = configure(vars.maximise(objective).using(solver));
    for constraint in program.constraints() {
        let mut lhs = Expression::with_capacity(constraint.terms.len());
        for &(var, coef) in &constraint.terms {
            lhs.add_mul(coef, handles[var.index()]);
        }
        model = model.with(match constraint.relation {
            Relation::Eq => lhs.eq(constraint.rhs),
            Relation::Le => lhs.leq(constraint.rhs),
            Relation::Ge => lhs.geq(constraint.rhs),
        });
    }

    let solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => OptimizerError::Infeasible,
        ResolutionError::Unbounded => OptimizerError::Unbounded,
        other => OptimizerError::Backend(other.to_string()),
    })?;

    let values: Vec<f64> = handles.iter().map(|&h| solution.value(h)).collect();
    let objective = program.objective_value(&values);
    trace!(objective = objective, values = ?values, "optimizer returned");
    Ok(Assignment::new(objective, values))
}
