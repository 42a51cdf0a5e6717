//! Solver objectives.

use std::fmt;

/// Objective used when searching for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverMode {
    /// Place as many tiles as possible.
    #[default]
    TileCount,

    /// Place the highest total face value.
    TotalValue,

    /// Opening meld: the placed sets must reach the ruleset's minimum
    /// initial value, and only non-joker tiles count towards the objective.
    Initial,
}

impl SolverMode {
    /// All modes, in declaration order.
    pub const ALL: [SolverMode; 3] = [
        SolverMode::TileCount,
        SolverMode::TotalValue,
        SolverMode::Initial,
    ];

    /// Returns a short name for logging.
    pub fn name(self) -> &'static str {
        match self {
            SolverMode::TileCount => "tile_count",
            SolverMode::TotalValue => "total_value",
            SolverMode::Initial => "initial",
        }
    }
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
