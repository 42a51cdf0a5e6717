//! Tests for ruleset generation and tile naming.

use super::*;

fn small_params() -> RuleSetParams {
    RuleSetParams::default()
        .with_colours(2)
        .with_numbers(4)
        .with_repeats(1)
        .with_jokers(0)
}

#[test]
fn test_default_params() {
    let params = RuleSetParams::default();
    assert_eq!(params.numbers, 13);
    assert_eq!(params.colours, 4);
    assert_eq!(params.repeats, 2);
    assert_eq!(params.jokers, 2);
    assert_eq!(params.min_len, 3);
    assert_eq!(params.min_initial_value, 30);
    assert!(params.validate().is_ok());
}

#[test]
fn test_invalid_params() {
    let err = RuleSetParams::default().with_colours(9).validate().unwrap_err();
    assert_eq!(
        err,
        RulesetError::Parameter {
            name: "colours",
            value: 9,
            min: 1,
            max: 8
        }
    );
    assert!(RuleSetParams::default().with_min_len(1).validate().is_err());
    assert!(RuleSetParams::default().with_jokers(5).validate().is_err());
}

#[test]
fn test_runs_without_groups() {
    // two colours can never form a group of three
    let ruleset = StandardRuleSet::new(small_params()).unwrap();
    assert_eq!(ruleset.tile_count(), 8);
    assert_eq!(ruleset.joker(), None);

    // per colour: 1-2-3, 2-3-4, 1-2-3-4
    assert_eq!(ruleset.sets().len(), 6);
    let first = &ruleset.sets()[0];
    assert_eq!(first.as_slice(), &[0, 1, 2]);
    assert_eq!(ruleset.set_values()[0], 6);
    assert!(ruleset
        .sets()
        .iter()
        .any(|set| set.as_slice() == [4, 5, 6, 7]));
}

#[test]
fn test_runs_are_capped() {
    let ruleset = StandardRuleSet::new(RuleSetParams::default().with_jokers(0)).unwrap();
    let longest = ruleset.sets().iter().map(|s| s.len()).max().unwrap();
    assert_eq!(longest, 5);
}

#[test]
fn test_groups() {
    let params = RuleSetParams::default()
        .with_colours(3)
        .with_numbers(2)
        .with_jokers(0);
    let ruleset = StandardRuleSet::new(params).unwrap();
    // one group of three per number, numbers too few for runs
    assert_eq!(ruleset.sets().len(), 2);
    assert_eq!(ruleset.sets()[0].as_slice(), &[0, 2, 4]);
    assert_eq!(ruleset.set_values(), &[3, 6]);
}

#[test]
fn test_joker_variants() {
    let ruleset = StandardRuleSet::new(small_params().with_jokers(1)).unwrap();
    let joker = ruleset.joker().unwrap();
    assert_eq!(joker, 8);
    assert_eq!(ruleset.tile_count(), 9);

    // joker always sorts last and never replaces every tile
    for set in ruleset.sets() {
        assert!(set.iter().filter(|&&t| t == joker).count() <= 1);
        assert!(set.iter().any(|&t| t != joker));
        assert!(set.windows(2).all(|w| w[0] <= w[1]));
    }

    // 2 and 3 with a joker is either 1-2-3 or 2-3-4; keeps the higher value
    let pos = ruleset
        .sets()
        .iter()
        .position(|set| set.as_slice() == [1, 2, joker])
        .unwrap();
    assert_eq!(ruleset.set_values()[pos], 9);
}

#[test]
fn test_sets_are_unique() {
    let ruleset = StandardRuleSet::new(RuleSetParams::default()).unwrap();
    let unique: std::collections::HashSet<_> = ruleset.sets().iter().collect();
    assert_eq!(unique.len(), ruleset.sets().len());
    assert_eq!(ruleset.sets().len(), ruleset.set_values().len());
}

#[test]
fn test_min_len_bounded_by_shape() {
    let params = RuleSetParams::default()
        .with_colours(2)
        .with_numbers(2)
        .with_min_len(3);
    assert!(matches!(
        StandardRuleSet::new(params),
        Err(RulesetError::Parameter { name: "min_len", .. })
    ));
}

#[test]
fn test_tile_values() {
    let ruleset = StandardRuleSet::new(RuleSetParams::default()).unwrap();
    assert_eq!(ruleset.tile_value(0), 1);
    assert_eq!(ruleset.tile_value(12), 13);
    assert_eq!(ruleset.tile_value(13), 1);
    assert_eq!(ruleset.tile_value(52), 0);
    assert_eq!(ruleset.tile_limit(0), 2);
    assert_eq!(ruleset.tile_limit(52), 2);
}

#[test]
fn test_tile_names() {
    let ruleset = StandardRuleSet::new(RuleSetParams::default()).unwrap();
    let r13 = Tile::from_index(ruleset.tile_index(3, 13));
    assert_eq!(ruleset.tile_name(r13), "r13");
    assert_eq!(ruleset.parse_tile("R13").unwrap(), r13);
    assert_eq!(ruleset.tile_name(Tile::from_index(0)), "k1");
    assert_eq!(ruleset.parse_tile("j").unwrap(), Tile::from_index(52));

    assert!(ruleset.parse_tile("g1").is_err());
    assert!(ruleset.parse_tile("k14").is_err());
    assert!(ruleset.parse_tile("k0").is_err());
    assert!(ruleset.parse_tile("").is_err());
}

#[test]
fn test_joker_name_requires_jokers() {
    let ruleset = StandardRuleSet::new(small_params()).unwrap();
    assert_eq!(
        ruleset.parse_tile("j").unwrap_err(),
        RulesetError::UnknownTile("j".to_string())
    );
}

#[test]
fn test_set_name() {
    let ruleset = StandardRuleSet::new(small_params()).unwrap();
    assert_eq!(ruleset.set_name(0).as_deref(), Some("k1 k2 k3"));
    assert_eq!(ruleset.set_name(100), None);
}
