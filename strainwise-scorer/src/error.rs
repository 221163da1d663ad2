//! Error types raised while configuring the ranking scorer.

use thiserror::Error;

/// Errors raised by [`RankingWeights::validate`](crate::RankingWeights::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingWeightsError {
    /// A component weight was negative or not finite.
    #[error("ranking weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending component.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The avoid multiplier would not reduce the score.
    #[error("avoid penalty must be between 0.0 and 1.0, got {value}")]
    InvalidPenalty {
        /// Rejected value.
        value: f32,
    },
}
