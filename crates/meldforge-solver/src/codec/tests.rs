//! Tests for the solution codec with a scripted optimizer.

use std::sync::{Arc, Mutex};

use super::*;
use crate::test_utils::{example_ruleset, ScriptedOptimizer};

// example ruleset: tiles 0..6, one set {0, 1, 2}; variables are
// [set 0, tile 0, .., tile 5]
const RUN: [f64; 7] = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
const RACK: [u32; 6] = [1, 1, 1, 0, 0, 0];

fn model() -> Model {
    Model::build(&example_ruleset()).unwrap()
}

fn tiles(ids: &[u16]) -> Vec<Tile> {
    ids.iter().map(|&id| Tile::new(id).unwrap()).collect()
}

#[test]
fn test_decodes_placement() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(RUN.to_vec());
    let solution = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap();

    assert_eq!(solution.tiles(), tiles(&[1, 2, 3]).as_slice());
    assert_eq!(solution.sets(), &[0]);
    assert_eq!(optimizer.calls(), 1);
}

#[test]
fn test_rounds_residues() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(vec![
        0.999_999_9,
        1.000_000_2,
        0.999_999,
        1.0,
        1e-9,
        -1e-9,
        0.0,
    ]);
    let solution = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap();
    assert_eq!(solution.tiles(), tiles(&[1, 2, 3]).as_slice());
    assert_eq!(solution.sets(), &[0]);
}

#[test]
fn test_infeasible_is_no_solution() {
    let model = model();
    for err in [
        OptimizerError::Infeasible,
        OptimizerError::Unbounded,
        OptimizerError::Backend("numerical trouble".to_string()),
    ] {
        let optimizer = ScriptedOptimizer::failing(err);
        let solution = SolutionCodec::default()
            .solve(&model, &optimizer, SolverMode::Initial, &RACK, &[0; 6])
            .unwrap();
        assert!(solution.is_empty());
    }
}

#[test]
fn test_non_finite_objective_is_no_solution() {
    let model = model();
    let optimizer =
        ScriptedOptimizer::new(|_| Ok(Assignment::new(f64::NEG_INFINITY, RUN.to_vec())));
    let solution = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap();
    assert_eq!(solution, Solution::none());
}

#[test]
fn test_nothing_placed_is_no_solution() {
    let model = model();
    // the table already holds the run; keeping it placed needs no rack tile
    let optimizer = ScriptedOptimizer::returning(vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let solution = SolutionCodec::default()
        .solve(
            &model,
            &optimizer,
            SolverMode::TileCount,
            &[0; 6],
            &[1, 1, 1, 0, 0, 0],
        )
        .unwrap();
    assert!(solution.is_empty());
}

#[test]
fn test_initial_ignores_table() {
    let model = model();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);
    let optimizer = ScriptedOptimizer::new(move |program| {
        let rhs: Vec<f64> = program.constraints()[..6].iter().map(|c| c.rhs).collect();
        captured.lock().unwrap().push(rhs);
        Err(OptimizerError::Infeasible)
    });
    let codec = SolutionCodec::default();
    let table = [1, 1, 1, 0, 0, 0];

    codec
        .solve(&model, &optimizer, SolverMode::Initial, &RACK, &table)
        .unwrap();
    codec
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &table)
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0], vec![0.0; 6]);
    assert_eq!(seen[1], vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_rebinding_does_not_leak() {
    let model = model();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&seen);
    let optimizer = ScriptedOptimizer::new(move |program| {
        let rack: Vec<f64> = program.constraints()[6..12].iter().map(|c| c.rhs).collect();
        captured.lock().unwrap().push(rack);
        Err(OptimizerError::Infeasible)
    });
    let codec = SolutionCodec::default();

    codec
        .solve(&model, &optimizer, SolverMode::TileCount, &[2, 0, 0, 0, 0, 1], &[0; 6])
        .unwrap();
    codec
        .solve(&model, &optimizer, SolverMode::TileCount, &[0; 6], &[0; 6])
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0], vec![2.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    assert_eq!(seen[1], vec![0.0; 6]);
}

#[test]
fn test_rejects_wrong_shape() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(RUN.to_vec());
    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &[1, 1, 1], &[0; 6])
        .unwrap_err();
    assert_eq!(
        err,
        SolveError::StateShape {
            name: "rack",
            expected: 6,
            actual: 3
        }
    );
    assert_eq!(optimizer.calls(), 0);

    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[])
        .unwrap_err();
    assert!(matches!(err, SolveError::StateShape { name: "table", .. }));
}

#[test]
fn test_fractional_value_is_internal_error() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(vec![0.5, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap_err();
    assert!(matches!(err, SolveError::Internal(ref m) if m.contains("not integral")));
}

#[test]
fn test_negative_count_is_internal_error() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(vec![1.0, 1.0, 1.0, 1.0, -1.0, 0.0, 0.0]);
    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap_err();
    assert!(matches!(err, SolveError::Internal(ref m) if m.contains("negative")));
}

#[test]
fn test_broken_coverage_is_internal_error() {
    let model = model();
    // two tiles placed but the set needs three
    let optimizer = ScriptedOptimizer::returning(vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap_err();
    assert!(matches!(err, SolveError::Internal(ref m) if m.starts_with("coverage")));
}

#[test]
fn test_tile_not_on_rack_is_internal_error() {
    let model = model();
    let optimizer = ScriptedOptimizer::returning(RUN.to_vec());
    let err = SolutionCodec::default()
        .solve(
            &model,
            &optimizer,
            SolverMode::TileCount,
            &[1, 1, 0, 0, 0, 0],
            &[0; 6],
        )
        .unwrap_err();
    assert!(matches!(err, SolveError::Internal(ref m) if m.starts_with("rack_limit")));
}

#[test]
fn test_wrong_value_count_is_internal_error() {
    let model = model();
    let optimizer = ScriptedOptimizer::new(|_| Ok(Assignment::new(2.0, vec![1.0, 1.0])));
    let err = SolutionCodec::default()
        .solve(&model, &optimizer, SolverMode::TileCount, &RACK, &[0; 6])
        .unwrap_err();
    assert!(matches!(err, SolveError::Internal(_)));
}

#[test]
fn test_expands_multiplicities() {
    let ruleset = meldforge_core::CustomRuleSet {
        repeats: 2,
        ..example_ruleset()
    };
    let model = Model::build(&ruleset).unwrap();
    let optimizer = ScriptedOptimizer::returning(vec![2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 0.0]);
    let solution = SolutionCodec::default()
        .solve(
            &model,
            &optimizer,
            SolverMode::TileCount,
            &[2, 2, 2, 0, 0, 0],
            &[0; 6],
        )
        .unwrap();
    assert_eq!(solution.tiles(), tiles(&[1, 1, 2, 2, 3, 3]).as_slice());
    assert_eq!(solution.sets(), &[0, 0]);
}

#[test]
fn test_tolerance_is_clamped() {
    assert_eq!(SolutionCodec::new(0.9).tolerance(), 0.499);
    assert_eq!(SolutionCodec::default().tolerance(), DEFAULT_INTEGRALITY_TOLERANCE);
}
