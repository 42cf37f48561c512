//! Error types for chance.

use thiserror::Error;

/// Raised when an entry cannot be registered because of its probability.
///
/// The dispatcher is left exactly as it was before the rejected call, so
/// callers may retry with different values.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidProbability {
    /// Adding the entry would push the sum of exact probabilities past 1.
    #[error("sum of exact probabilities would be {sum}, which is greater than 1")]
    ExceedsOne {
        /// The rejected sum, including the new entry.
        sum: f64,
    },

    /// A single probability is negative, non-finite, or an exact share above 1.
    #[error("probability {value} is outside the allowed range")]
    OutOfRange {
        /// The offending value.
        value: f64,
    },
}
