//! Linear program building blocks.
//!
//! A [`ProblemDefinition`] references the `table` and `rack` parameters
//! symbolically. Binding substitutes concrete counts and yields an
//! [`IntegerProgram`] that an optimizer can solve.

use std::fmt;

/// Handle of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Positions of the `sets` and `tiles` variables.
///
/// Set variables come first, followed by one tile variable per tile
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableLayout {
    set_count: usize,
    tile_count: usize,
}

impl VariableLayout {
    pub fn new(set_count: usize, tile_count: usize) -> Self {
        Self {
            set_count,
            tile_count,
        }
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Total number of variables.
    pub fn len(&self) -> usize {
        self.set_count + self.tile_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Variable counting how often set `s` is on the new table.
    #[inline]
    pub fn set(&self, s: usize) -> VarId {
        debug_assert!(s < self.set_count);
        VarId(s)
    }

    /// Variable counting copies of tile `t` placed from the rack.
    #[inline]
    pub fn tile(&self, t: usize) -> VarId {
        debug_assert!(t < self.tile_count);
        VarId(self.set_count + t)
    }

    pub fn sets(&self) -> impl Iterator<Item = VarId> {
        (0..self.set_count).map(VarId)
    }

    pub fn tiles(&self) -> impl Iterator<Item = VarId> {
        let offset = self.set_count;
        (0..self.tile_count).map(move |t| VarId(offset + t))
    }
}

/// Integer parameter vectors bound per solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Tile counts already on the table.
    Table,
    /// Tile counts on the player's rack.
    Rack,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Table => f.write_str("table"),
            Parameter::Rack => f.write_str("rack"),
        }
    }
}

/// Right-hand side of a constraint before binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rhs {
    Constant(f64),
    /// One entry of a parameter vector.
    Param(Parameter, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

impl Relation {
    fn holds(self, lhs: f64, rhs: f64) -> bool {
        const EPS: f64 = 1e-9;
        match self {
            Relation::Eq => (lhs - rhs).abs() <= EPS,
            Relation::Le => lhs <= rhs + EPS,
            Relation::Ge => lhs + EPS >= rhs,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Eq => f.write_str("=="),
            Relation::Le => f.write_str("<="),
            Relation::Ge => f.write_str(">="),
        }
    }
}

/// A linear constraint `sum(coef * var) <relation> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint<R = Rhs> {
    pub name: &'static str,
    pub terms: Vec<(VarId, f64)>,
    pub relation: Relation,
    pub rhs: R,
}

impl<R> LinearConstraint<R> {
    fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }
}

/// Inclusive variable bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Mode-specific part of a problem: objective (maximized) and extra
/// constraints on top of the model's shared constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDefinition {
    pub objective: Vec<(VarId, f64)>,
    pub constraints: Vec<LinearConstraint>,
}

/// Concrete values for the parameter vectors.
#[derive(Debug, Clone, Copy)]
pub struct Bindings<'a> {
    pub table: &'a [u32],
    pub rack: &'a [u32],
}

impl Bindings<'_> {
    fn resolve(&self, rhs: Rhs) -> f64 {
        match rhs {
            Rhs::Constant(value) => value,
            Rhs::Param(Parameter::Table, t) => f64::from(self.table[t]),
            Rhs::Param(Parameter::Rack, t) => f64::from(self.rack[t]),
        }
    }

    pub(crate) fn bind(&self, constraint: &LinearConstraint) -> LinearConstraint<f64> {
        LinearConstraint {
            name: constraint.name,
            terms: constraint.terms.clone(),
            relation: constraint.relation,
            rhs: self.resolve(constraint.rhs),
        }
    }
}

/// A fully bound integer program: maximize `objective` subject to
/// `constraints`, every variable integer within its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerProgram {
    pub(crate) bounds: Vec<Bounds>,
    pub(crate) objective: Vec<(VarId, f64)>,
    pub(crate) constraints: Vec<LinearConstraint<f64>>,
}

impl IntegerProgram {
    pub fn variables(&self) -> &[Bounds] {
        &self.bounds
    }

    pub fn objective(&self) -> &[(VarId, f64)] {
        &self.objective
    }

    pub fn constraints(&self) -> &[LinearConstraint<f64>] {
        &self.constraints
    }

    /// Objective value of an assignment.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .map(|&(var, coef)| coef * values[var.index()])
            .sum()
    }

    /// Describes the first bound or constraint `values` violates, if any.
    pub fn violation(&self, values: &[f64]) -> Option<String> {
        if values.len() != self.bounds.len() {
            return Some(format!(
                "expected {} values, got {}",
                self.bounds.len(),
                values.len()
            ));
        }
        for (index, (bounds, &value)) in self.bounds.iter().zip(values).enumerate() {
            if value < bounds.lower || value > bounds.upper {
                return Some(format!(
                    "{} = {} outside [{}, {}]",
                    VarId(index),
                    value,
                    bounds.lower,
                    bounds.upper
                ));
            }
        }
        self.constraints.iter().find_map(|constraint| {
            let lhs = constraint.lhs(values);
            (!constraint.relation.holds(lhs, constraint.rhs)).then(|| {
                format!(
                    "{}: {} {} {} does not hold",
                    constraint.name, lhs, constraint.relation, constraint.rhs
                )
            })
        })
    }
}
