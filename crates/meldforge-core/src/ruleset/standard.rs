//! Generated standard ruleset.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::{RuleSetParams, Ruleset, TileSet};
use crate::error::RulesetError;

/// A ruleset whose sets are generated from [`RuleSetParams`].
///
/// Legal sets are:
/// - groups: one number in `min_len..=colours` distinct colours;
/// - runs: `min_len..=2 * min_len - 1` consecutive numbers of one colour
///   (anything longer splits into two shorter runs);
/// - joker variants of both, replacing up to `jokers` tiles (never all of
///   them) with the joker.
///
/// A set's value is the sum of the numbers it represents, with a joker
/// counting as the tile it stands in for. When two base sets produce the
/// same joker variant, the variant keeps the higher value.
///
/// # Example
///
/// ```
/// use meldforge_core::{RuleSetParams, Ruleset, StandardRuleSet};
///
/// let ruleset = StandardRuleSet::new(RuleSetParams::default()).unwrap();
/// assert_eq!(ruleset.tile_count(), 53);
/// assert_eq!(ruleset.joker(), Some(52));
/// ```
#[derive(Debug, Clone)]
pub struct StandardRuleSet {
    params: RuleSetParams,
    sets: Vec<TileSet>,
    set_values: Vec<u32>,
}

impl StandardRuleSet {
    /// Validates `params` and generates the legal sets.
    pub fn new(params: RuleSetParams) -> Result<Self, RulesetError> {
        params.validate()?;
        let (sets, set_values) = SetCatalog::generate(&params);
        if sets.is_empty() {
            return Err(RulesetError::NoSets);
        }
        Ok(Self {
            params,
            sets,
            set_values,
        })
    }

    pub fn params(&self) -> &RuleSetParams {
        &self.params
    }

    /// Index of the tile with the given 0-based colour and 1-based number.
    pub fn tile_index(&self, colour: usize, number: usize) -> usize {
        tile_index(&self.params, colour, number)
    }
}

impl Ruleset for StandardRuleSet {
    fn colours(&self) -> usize {
        self.params.colours
    }

    fn numbers(&self) -> usize {
        self.params.numbers
    }

    fn repeats(&self) -> usize {
        self.params.repeats
    }

    fn jokers(&self) -> usize {
        self.params.jokers
    }

    fn min_initial_value(&self) -> u32 {
        self.params.min_initial_value
    }

    fn sets(&self) -> &[TileSet] {
        &self.sets
    }

    fn set_values(&self) -> &[u32] {
        &self.set_values
    }
}

fn tile_index(params: &RuleSetParams, colour: usize, number: usize) -> usize {
    colour * params.numbers + number - 1
}

// Deduplicating accumulator; keeps first-seen order.
#[derive(Default)]
struct SetCatalog {
    sets: Vec<TileSet>,
    values: Vec<u32>,
    index: HashMap<TileSet, usize>,
}

impl SetCatalog {
    fn generate(params: &RuleSetParams) -> (Vec<TileSet>, Vec<u32>) {
        let mut bases: Vec<(TileSet, u32)> = Vec::new();

        if params.colours >= params.min_len {
            for number in 1..=params.numbers {
                for len in params.min_len..=params.colours {
                    for colours in combinations(params.colours, len) {
                        let set = colours
                            .iter()
                            .map(|&colour| tile_index(params, colour, number))
                            .collect();
                        bases.push((set, (number * len) as u32));
                    }
                }
            }
        }

        let max_run = (2 * params.min_len - 1).min(params.numbers);
        for colour in 0..params.colours {
            for len in params.min_len..=max_run {
                for start in 1..=params.numbers + 1 - len {
                    let numbers = start..start + len;
                    let set = numbers
                        .clone()
                        .map(|number| tile_index(params, colour, number))
                        .collect();
                    bases.push((set, numbers.sum::<usize>() as u32));
                }
            }
        }

        let mut catalog = SetCatalog::default();
        for (set, value) in &bases {
            catalog.insert(set.clone(), *value);
        }

        if params.jokers > 0 {
            let joker = params.colours * params.numbers;
            for (set, value) in &bases {
                let max_jokers = params.jokers.min(set.len() - 1);
                for count in 1..=max_jokers {
                    for positions in combinations(set.len(), count) {
                        let mut variant: TileSet = set
                            .iter()
                            .enumerate()
                            .filter(|(pos, _)| !positions.contains(pos))
                            .map(|(_, &tile)| tile)
                            .collect();
                        variant.extend(std::iter::repeat(joker).take(count));
                        catalog.insert(variant, *value);
                    }
                }
            }
        }

        (catalog.sets, catalog.values)
    }

    fn insert(&mut self, mut set: TileSet, value: u32) {
        set.sort_unstable();
        match self.index.get(&set) {
            Some(&existing) => {
                self.values[existing] = self.values[existing].max(value);
            }
            None => {
                self.index.insert(set.clone(), self.sets.len());
                self.sets.push(set);
                self.values.push(value);
            }
        }
    }
}

/// All `k`-element subsets of `0..n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<SmallVec<[usize; 8]>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut current: SmallVec<[usize; 8]> = (0..k).collect();
    loop {
        out.push(current.clone());
        // rightmost position that can still advance
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            return out;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
}
