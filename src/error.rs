//! Errors raised by the sampler and its collaborators.

use thiserror::Error;

/// Errors returned by [`crate::metropolis_hastings`] and the plotting helpers.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The proposal width must be a finite, strictly positive number.
    #[error("proposal width must be finite and positive, got {0}")]
    InvalidProposalWidth(f64),

    /// A step count taken from a signed source was negative.
    #[error("number of steps must be non-negative, got {0}")]
    NegativeStepCount(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
