use super::*;
use crate::ruleset::{RuleSetParams, StandardRuleSet};

fn ruleset() -> StandardRuleSet {
    StandardRuleSet::new(
        RuleSetParams::default()
            .with_colours(2)
            .with_numbers(5)
            .with_jokers(1),
    )
    .unwrap()
}

fn tiles(ruleset: &StandardRuleSet, names: &[&str]) -> Vec<Tile> {
    names.iter().map(|n| ruleset.parse_tile(n).unwrap()).collect()
}

#[test]
fn test_new_state() {
    let ruleset = ruleset();
    let state = GameState::new(&ruleset);
    assert_eq!(state.rack_counts(), &[0; 11]);
    assert_eq!(state.table_counts(), &[0; 11]);
    assert!(state.is_initial());
    assert_eq!(state.suggested_mode(), SolverMode::Initial);
}

#[test]
fn test_add_and_remove() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    state.add_rack(tiles(&ruleset, &["k1", "k1", "b3", "j"])).unwrap();
    assert_eq!(state.rack_tiles().count(), 4);
    assert_eq!(state.rack_counts()[0], 2);

    state.remove_rack(tiles(&ruleset, &["k1"])).unwrap();
    assert_eq!(state.rack_counts()[0], 1);

    let err = state.remove_table(tiles(&ruleset, &["k1"])).unwrap_err();
    assert_eq!(
        err,
        GameStateError::NotAvailable {
            tile: Tile::from_index(0),
            location: Location::Table
        }
    );
}

#[test]
fn test_limits_span_rack_and_table() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    let k1 = tiles(&ruleset, &["k1"]);
    state.add_table(k1.clone()).unwrap();
    state.add_rack(k1.clone()).unwrap();
    assert_eq!(
        state.add_rack(k1).unwrap_err(),
        GameStateError::TooMany {
            tile: Tile::from_index(0),
            limit: 2
        }
    );

    let joker = tiles(&ruleset, &["j"]);
    state.add_rack(joker.clone()).unwrap();
    assert!(state.add_table(joker).is_err());
}

#[test]
fn test_failed_edit_is_atomic() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    let before = state.clone();
    assert!(state.add_rack(tiles(&ruleset, &["b2", "b2", "b2"])).is_err());
    assert_eq!(state, before);
}

#[test]
fn test_unknown_tile() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    let stray = Tile::from_index(40);
    assert_eq!(
        state.add_rack([stray]).unwrap_err(),
        GameStateError::UnknownTile(stray)
    );
}

#[test]
fn test_apply_solution() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    let run = tiles(&ruleset, &["k1", "k2", "k3"]);
    state.add_rack(run.clone()).unwrap();
    state.add_rack(tiles(&ruleset, &["b5"])).unwrap();

    state.apply(&Solution::new(run, vec![0])).unwrap();
    assert!(!state.is_initial());
    assert_eq!(state.suggested_mode(), SolverMode::TileCount);
    assert_eq!(state.rack_tiles().count(), 1);
    assert_eq!(state.table_tiles().count(), 3);
}

#[test]
fn test_apply_empty_solution_keeps_initial() {
    let ruleset = ruleset();
    let mut state = GameState::new(&ruleset);
    state.apply(&Solution::none()).unwrap();
    assert!(state.is_initial());
}
