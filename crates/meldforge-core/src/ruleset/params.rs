use crate::error::RulesetError;

/// Parameters of a standard ruleset.
///
/// Defaults describe the classic game: four colours of thirteen numbers, two
/// copies of each tile, two jokers, sets of at least three tiles and an
/// opening meld worth at least 30 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct RuleSetParams {
    pub numbers: usize,
    pub repeats: usize,
    pub colours: usize,
    pub jokers: usize,
    pub min_len: usize,
    pub min_initial_value: u32,
}

impl Default for RuleSetParams {
    fn default() -> Self {
        Self {
            numbers: 13,
            repeats: 2,
            colours: 4,
            jokers: 2,
            min_len: 3,
            min_initial_value: 30,
        }
    }
}

impl RuleSetParams {
    pub fn with_numbers(mut self, numbers: usize) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_colours(mut self, colours: usize) -> Self {
        self.colours = colours;
        self
    }

    pub fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_min_initial_value(mut self, value: u32) -> Self {
        self.min_initial_value = value;
        self
    }

    /// Checks every parameter against its supported range.
    pub fn validate(&self) -> Result<(), RulesetError> {
        check("colours", self.colours, 1, 8)?;
        check("numbers", self.numbers, 1, 26)?;
        check("repeats", self.repeats, 1, 4)?;
        check("jokers", self.jokers, 0, 4)?;
        check("min_len", self.min_len, 2, self.colours.max(self.numbers))
    }
}

fn check(name: &'static str, value: usize, min: usize, max: usize) -> Result<(), RulesetError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(RulesetError::Parameter {
            name,
            value,
            min,
            max,
        })
    }
}
