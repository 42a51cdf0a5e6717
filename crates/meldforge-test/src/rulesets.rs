//! Ruleset fixtures.

use meldforge_core::{CustomRuleSet, RuleSetParams, StandardRuleSet};
use smallvec::smallvec;

/// Two colours of three numbers, one copy each, and a single run
/// `k1 k2 k3` worth 6.
///
/// Tile indices 0..=2 are the run; indices 3..=5 appear in no set.
pub fn example_ruleset() -> CustomRuleSet {
    CustomRuleSet {
        colours: 2,
        numbers: 3,
        repeats: 1,
        jokers: 0,
        min_initial_value: 6,
        sets: vec![smallvec![0, 1, 2]],
        set_values: vec![6],
    }
}

/// Generated ruleset with two colours of six numbers, two copies of each
/// tile, sets of at least three tiles and an opening threshold of 10.
///
/// With two colours no group can reach three tiles, so every set is a run.
pub fn small_ruleset(jokers: usize) -> StandardRuleSet {
    let params = RuleSetParams::default()
        .with_colours(2)
        .with_numbers(6)
        .with_repeats(2)
        .with_jokers(jokers)
        .with_min_len(3)
        .with_min_initial_value(10);
    match StandardRuleSet::new(params) {
        Ok(ruleset) => ruleset,
        Err(err) => panic!("small ruleset with {jokers} jokers is invalid: {err}"),
    }
}
