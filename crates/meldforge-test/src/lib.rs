//! Shared test fixtures for MeldForge crates.
//!
//! - [`rulesets`] - small rulesets whose optimal placements are easy to
//!   reason about by hand
//! - [`tiles`] - turning tile names into identities and count vectors
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! meldforge-test = { workspace = true }
//! ```
//!
//! ```
//! use meldforge_test::rulesets::small_ruleset;
//! use meldforge_test::tiles::counts;
//!
//! let ruleset = small_ruleset(1);
//! let rack = counts(&ruleset, &["k1", "k2", "j"]);
//! assert_eq!(rack.iter().sum::<u32>(), 3);
//! ```

pub mod rulesets;
pub mod tiles;

pub use rulesets::{example_ruleset, small_ruleset};
