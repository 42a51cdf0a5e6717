//! Model builder.
//!
//! Translates a ruleset into the static parts of the placement problem:
//! - the incidence matrix,
//! - the `sets` and `tiles` decision variables with their bounds,
//! - the constraints shared by every mode,
//! - one objective (plus extra constraints) per [`SolverMode`].
//!
//! Only the `table` and `rack` parameters change between solves; they are
//! substituted by [`Model::bind`].

mod incidence;
mod program;


use meldforge_core::{Ruleset, RulesetError, SolverMode};
use tracing::info;

pub use incidence::IncidenceMatrix;
pub use program::{
    Bindings, Bounds, IntegerProgram, LinearConstraint, Parameter, ProblemDefinition, Relation,
    Rhs, VarId, VariableLayout,
};

/// The placement problem for one ruleset, ready to be bound and solved.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Model {
    incidence: IncidenceMatrix,
    layout: VariableLayout,
    joker: Option<usize>,
    set_values: Vec<u32>,
    bounds: Vec<Bounds>,
    shared: Vec<LinearConstraint>,
    tile_count_problem: ProblemDefinition,
    total_value_problem: ProblemDefinition,
    initial_problem: ProblemDefinition,
}

impl Model {
    /// Builds the model for `ruleset`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesetError`] if the ruleset has no sets, a set is empty or
    /// references an unknown tile, the set values are not aligned with the
    /// sets, or the tile count disagrees with the colours, numbers and jokers.
    pub fn build<R: Ruleset + ?Sized>(ruleset: &R) -> Result<Self, RulesetError> {
        validate(ruleset)?;

        let tile_count = ruleset.tile_count();
        let sets = ruleset.sets();
        let layout = VariableLayout::new(sets.len(), tile_count);
        let joker = ruleset.joker();
        let incidence = IncidenceMatrix::from_sets(tile_count, sets);

        let repeats = ruleset.repeats() as f64;
        let mut bounds = Vec::with_capacity(layout.len());
        bounds.extend(layout.sets().map(|_| Bounds::new(0.0, repeats)));
        bounds.extend((0..tile_count).map(|t| {
            if Some(t) == joker {
                Bounds::new(0.0, ruleset.jokers() as f64)
            } else {
                Bounds::new(0.0, repeats)
            }
        }));

        let mut shared = Vec::with_capacity(2 * tile_count);
        for t in 0..tile_count {
            // M @ sets - tiles == table
            let mut terms: Vec<(VarId, f64)> = incidence
                .row(t)
                .iter()
                .enumerate()
                .filter(|(_, &m)| m > 0)
                .map(|(s, &m)| (layout.set(s), f64::from(m)))
                .collect();
            terms.push((layout.tile(t), -1.0));
            shared.push(LinearConstraint {
                name: "coverage",
                terms,
                relation: Relation::Eq,
                rhs: Rhs::Param(Parameter::Table, t),
            });
        }
        for t in 0..tile_count {
            shared.push(LinearConstraint {
                name: "rack_limit",
                terms: vec![(layout.tile(t), 1.0)],
                relation: Relation::Le,
                rhs: Rhs::Param(Parameter::Rack, t),
            });
        }

        let tile_count_problem = ProblemDefinition {
            objective: layout.tiles().map(|v| (v, 1.0)).collect(),
            constraints: Vec::new(),
        };

        let total_value_problem = ProblemDefinition {
            objective: (0..tile_count)
                .map(|t| (layout.tile(t), f64::from(ruleset.tile_value(t))))
                .filter(|&(_, value)| value > 0.0)
                .collect(),
            constraints: Vec::new(),
        };

        // Opening meld: set values reach the minimum, jokers don't count.
        let initial_problem = ProblemDefinition {
            objective: (0..tile_count)
                .filter(|&t| Some(t) != joker)
                .map(|t| (layout.tile(t), 1.0))
                .collect(),
            constraints: vec![LinearConstraint {
                name: "initial_value",
                terms: ruleset
                    .set_values()
                    .iter()
                    .enumerate()
                    .map(|(s, &value)| (layout.set(s), f64::from(value)))
                    .collect(),
                relation: Relation::Ge,
                rhs: Rhs::Constant(f64::from(ruleset.min_initial_value())),
            }],
        };

        info!(
            event = "model_built",
            tile_count = tile_count,
            set_count = layout.set_count(),
            nonzeros = incidence.nonzeros(),
            jokers = ruleset.jokers(),
        );

        Ok(Self {
            incidence,
            layout,
            joker,
            set_values: ruleset.set_values().to_vec(),
            bounds,
            shared,
            tile_count_problem,
            total_value_problem,
            initial_problem,
        })
    }

    pub fn incidence(&self) -> &IncidenceMatrix {
        &self.incidence
    }

    pub fn layout(&self) -> &VariableLayout {
        &self.layout
    }

    pub fn tile_count(&self) -> usize {
        self.layout.tile_count()
    }

    pub fn set_count(&self) -> usize {
        self.layout.set_count()
    }

    /// Index of the joker slot, if any.
    pub fn joker(&self) -> Option<usize> {
        self.joker
    }

    pub fn set_values(&self) -> &[u32] {
        &self.set_values
    }

    /// Variable bounds, indexed by [`VarId::index`].
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// Constraints every mode shares.
    pub fn shared_constraints(&self) -> &[LinearConstraint] {
        &self.shared
    }

    pub fn problem(&self, mode: SolverMode) -> &ProblemDefinition {
        match mode {
            SolverMode::TileCount => &self.tile_count_problem,
            SolverMode::TotalValue => &self.total_value_problem,
            SolverMode::Initial => &self.initial_problem,
        }
    }

    /// Substitutes the parameters and returns the program for `mode`.
    ///
    /// Both parameter vectors must have `tile_count` entries.
    pub fn bind(&self, mode: SolverMode, bindings: Bindings<'_>) -> IntegerProgram {
        debug_assert_eq!(bindings.table.len(), self.tile_count());
        debug_assert_eq!(bindings.rack.len(), self.tile_count());

        let problem = self.problem(mode);
        let constraints = self
            .shared
            .iter()
            .chain(&problem.constraints)
            .map(|c| bindings.bind(c))
            .collect();
        IntegerProgram {
            bounds: self.bounds.clone(),
            objective: problem.objective.clone(),
            constraints,
        }
    }
}

fn validate<R: Ruleset + ?Sized>(ruleset: &R) -> Result<(), RulesetError> {
    let sets = ruleset.sets();
    if sets.is_empty() {
        return Err(RulesetError::NoSets);
    }
    if ruleset.set_values().len() != sets.len() {
        return Err(RulesetError::ValueCountMismatch {
            sets: sets.len(),
            values: ruleset.set_values().len(),
        });
    }

    let expected = ruleset.colours() * ruleset.numbers() + usize::from(ruleset.jokers() > 0);
    let tile_count = ruleset.tile_count();
    if tile_count != expected {
        return Err(RulesetError::TileCountMismatch {
            expected,
            actual: tile_count,
        });
    }

    for (s, set) in sets.iter().enumerate() {
        if set.is_empty() {
            return Err(RulesetError::EmptySet { set: s });
        }
        if let Some(&tile) = set.iter().find(|&&t| t >= tile_count) {
            return Err(RulesetError::TileOutOfRange {
                set: s,
                tile,
                tile_count,
            });
        }
    }
    Ok(())
}
