use super::{Ruleset, TileSet};

/// A ruleset with an explicit list of sets.
///
/// No validation happens here; the model builder rejects malformed sets.
///
/// # Example
///
/// ```
/// use meldforge_core::{CustomRuleSet, Ruleset};
/// use smallvec::smallvec;
///
/// let ruleset = CustomRuleSet {
///     colours: 2,
///     numbers: 3,
///     repeats: 1,
///     jokers: 0,
///     min_initial_value: 6,
///     sets: vec![smallvec![0, 1, 2]],
///     set_values: vec![6],
/// };
/// assert_eq!(ruleset.tile_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRuleSet {
    pub colours: usize,
    pub numbers: usize,
    pub repeats: usize,
    pub jokers: usize,
    pub min_initial_value: u32,
    pub sets: Vec<TileSet>,
    pub set_values: Vec<u32>,
}

impl Ruleset for CustomRuleSet {
    fn colours(&self) -> usize {
        self.colours
    }

    fn numbers(&self) -> usize {
        self.numbers
    }

    fn repeats(&self) -> usize {
        self.repeats
    }

    fn jokers(&self) -> usize {
        self.jokers
    }

    fn min_initial_value(&self) -> u32 {
        self.min_initial_value
    }

    fn sets(&self) -> &[TileSet] {
        &self.sets
    }

    fn set_values(&self) -> &[u32] {
        &self.set_values
    }
}
