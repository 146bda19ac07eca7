/*!
Run configuration for a single Metropolis–Hastings chain.

The defaults reproduce the canonical demo run: proposal width `1.0`, starting at
`0.0`, for `10_000` steps, seeded from entropy.

```rust
use metro_walk::config::SamplerConfig;

let config = SamplerConfig::default().set_seed(42);
assert_eq!(config.n_steps, 10_000);
assert_eq!(config.seed, Some(42));
assert!(config.validate().is_ok());
```
*/

use num_traits::Float;

use crate::error::SamplerError;

pub const DEFAULT_PROPOSAL_WIDTH: f64 = 1.0;
pub const DEFAULT_INITIAL_STATE: f64 = 0.0;
pub const DEFAULT_N_STEPS: usize = 10_000;

/// Everything needed to run one chain besides the target and proposal themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig<S, T> {
    /// Spread of the proposal distribution, constant for the whole run.
    pub proposal_width: T,
    /// First element of the produced sequence.
    pub initial_state: S,
    /// Number of chain transitions to attempt.
    pub n_steps: usize,
    /// Seed for the chain's random number generator; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig<f64, f64> {
    fn default() -> Self {
        Self {
            proposal_width: DEFAULT_PROPOSAL_WIDTH,
            initial_state: DEFAULT_INITIAL_STATE,
            n_steps: DEFAULT_N_STEPS,
            seed: None,
        }
    }
}

impl<S, T: Float> SamplerConfig<S, T> {
    pub fn new(initial_state: S, proposal_width: T, n_steps: usize) -> Self {
        Self {
            proposal_width,
            initial_state,
            n_steps,
            seed: None,
        }
    }

    /// Builds a configuration from a signed step count, as handed over by callers
    /// that do not track counts as `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::NegativeStepCount`] if `n_steps < 0`.
    pub fn from_signed_steps(
        initial_state: S,
        proposal_width: T,
        n_steps: i64,
    ) -> Result<Self, SamplerError> {
        let n_steps = usize::try_from(n_steps).map_err(|_| SamplerError::NegativeStepCount(n_steps))?;
        Ok(Self::new(initial_state, proposal_width, n_steps))
    }

    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn set_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    pub fn set_proposal_width(mut self, proposal_width: T) -> Self {
        self.proposal_width = proposal_width;
        self
    }

    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidProposalWidth`] if the width is not finite and positive.
    pub fn validate(&self) -> Result<(), SamplerError> {
        check_width(self.proposal_width)
    }
}

/// Rejects widths that are NaN, infinite, zero or negative.
pub(crate) fn check_width<T: Float>(width: T) -> Result<(), SamplerError> {
    if width.is_finite() && width > T::zero() {
        Ok(())
    } else {
        Err(SamplerError::InvalidProposalWidth(
            width.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_run() {
        let config = SamplerConfig::default();
        assert_eq!(config.proposal_width, 1.0);
        assert_eq!(config.initial_state, 0.0);
        assert_eq!(config.n_steps, 10_000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn negative_steps_are_rejected() {
        let err = SamplerConfig::from_signed_steps(0.0, 1.0, -3).unwrap_err();
        assert!(matches!(err, SamplerError::NegativeStepCount(-3)));
    }

    #[test]
    fn signed_steps_are_accepted() {
        let config = SamplerConfig::from_signed_steps(vec![0.0f32], 0.5f32, 12).unwrap();
        assert_eq!(config.n_steps, 12);
    }

    #[test]
    fn invalid_widths_fail_validation() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SamplerConfig::default().set_proposal_width(width);
            assert!(
                matches!(config.validate(), Err(SamplerError::InvalidProposalWidth(_))),
                "width {width} should be rejected"
            );
        }
    }

    #[test]
    fn builder_setters() {
        let config = SamplerConfig::default()
            .set_seed(7)
            .set_n_steps(3)
            .set_proposal_width(0.1);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.n_steps, 3);
        assert_eq!(config.proposal_width, 0.1);
    }
}
