//! Solve errors.

use thiserror::Error;

/// Errors returned by a solve call.
///
/// Infeasibility and optimizer failures are not errors: they yield an empty
/// [`meldforge_core::Solution`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A count vector does not have one entry per tile identity.
    #[error("Expected {expected} {name} counts, got {actual}")]
    StateShape {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The decoded result breaks a hard constraint of the model.
    #[error("Internal consistency violation: {0}")]
    Internal(String),
}
