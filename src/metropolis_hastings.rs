/*!
# Metropolis–Hastings Sampler

This module implements the random-walk Metropolis–Hastings sampler for any target
density `D` and proposal distribution `Q` implementing the traits [`Target`] and
[`Proposal`]. At every step a candidate is proposed around the current state and
accepted with probability `min(p(candidate) / p(current), 1)`; a rejected step
repeats the current state. The proposal is assumed to be symmetric, so no
Hastings correction for the proposal density enters the acceptance ratio.

Two entry points share the same transition:

- [`metropolis_hastings`] runs a chain with a caller-supplied random number
  generator and returns the visited states.
- [`MetropolisHastings`] owns its state and a seeded [`SmallRng`], implements
  [`MarkovChain`], and can be stepped or run repeatedly.

## Example Usage

```rust
use metro_walk::distributions::{GaussianProposal, StandardGaussian};
use metro_walk::metropolis_hastings::MetropolisHastings;

let mut mh = MetropolisHastings::new(StandardGaussian, GaussianProposal, 1.0, 0.0_f64).set_seed(42);
let samples = mh.run(1_000).unwrap();

// The initial state is kept as the first sample.
assert_eq!(samples.len(), 1_001);
assert_eq!(samples[0], 0.0);
```
*/

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, trace};
use num_traits::Float;
use rand::prelude::*;
use rand::RngCore;
use rand_distr::{Distribution, Standard};

use crate::config::{check_width, SamplerConfig};
use crate::core::{run_chain, run_chain_progress, MarkovChain};
use crate::distributions::{Proposal, Target};
use crate::error::SamplerError;

/**
Computes the probability of accepting a move, given the target density at the
candidate and at the current state.

Well-behaved densities give `min(candidate / current, 1)`. Densities that break
the contract never produce a move:

- a NaN, infinite or negative density at either state gives `0`,
- a zero density at both states gives `0`,
- a zero density at the current state and a positive one at the candidate gives `1`.

# Examples

```rust
use metro_walk::metropolis_hastings::acceptance_probability;

assert_eq!(acceptance_probability(0.5, 1.0), 0.5);
assert_eq!(acceptance_probability(2.0, 1.0), 1.0);
assert_eq!(acceptance_probability(f64::NAN, 1.0), 0.0);
assert_eq!(acceptance_probability(1.0, 0.0), 1.0);
```
*/
pub fn acceptance_probability<T: Float>(candidate_density: T, current_density: T) -> T {
    let valid = |p: T| p.is_finite() && p >= T::zero();
    if !valid(candidate_density) || !valid(current_density) {
        return T::zero();
    }
    if current_density == T::zero() {
        return if candidate_density > T::zero() {
            T::one()
        } else {
            T::zero()
        };
    }
    (candidate_density / current_density).min(T::one())
}

/// One Metropolis step: returns the candidate if it was accepted.
///
/// Always consumes the proposal's draws followed by exactly one uniform draw.
fn transition<S, T, D, Q>(
    target: &D,
    proposal: &Q,
    proposal_width: T,
    current: &S,
    rng: &mut dyn RngCore,
) -> Option<S>
where
    D: Target<S, T>,
    Q: Proposal<S, T>,
    T: Float,
    Standard: Distribution<T>,
{
    let candidate = proposal.propose(current, proposal_width, rng);
    let current_density = target.density(current);
    let candidate_density = target.density(&candidate);
    let alpha = acceptance_probability(candidate_density, current_density);
    let u: T = rng.gen();

    if !(current_density.is_finite() && candidate_density.is_finite()) {
        debug!("non-finite target density encountered; proposal rejected");
    }

    if u < alpha {
        trace!("accepted (alpha = {:?})", alpha.to_f64());
        Some(candidate)
    } else {
        trace!("rejected (alpha = {:?})", alpha.to_f64());
        None
    }
}

/**
Runs a Metropolis–Hastings chain for `n_steps` transitions.

Returns the visited states, starting with `initial_state`; the result always holds
`n_steps + 1` elements. A rejected proposal repeats the previous state. All
randomness, for the proposal as well as for the accept/reject test, is drawn
from `rng`, so a seeded generator makes the run reproducible.

# Errors

Returns [`SamplerError::InvalidProposalWidth`] if `proposal_width` is not finite
and strictly positive.

# Examples

```rust
use metro_walk::distributions::{GaussianProposal, StandardGaussian};
use metro_walk::metropolis_hastings::metropolis_hastings;
use rand::rngs::SmallRng;
use rand::SeedableRng;

let mut rng = SmallRng::seed_from_u64(1);
let samples =
    metropolis_hastings(&StandardGaussian, &GaussianProposal, 1.0, 0.0_f64, 100, &mut rng).unwrap();
assert_eq!(samples.len(), 101);
```
*/
pub fn metropolis_hastings<S, T, D, Q, R>(
    target: &D,
    proposal: &Q,
    proposal_width: T,
    initial_state: S,
    n_steps: usize,
    rng: &mut R,
) -> Result<Vec<S>, SamplerError>
where
    D: Target<S, T>,
    Q: Proposal<S, T>,
    S: Clone,
    T: Float,
    R: RngCore,
    Standard: Distribution<T>,
{
    check_width(proposal_width)?;

    let mut samples = Vec::with_capacity(n_steps + 1);
    let mut current = initial_state;
    let mut n_accepted = 0usize;

    for _ in 0..n_steps {
        samples.push(current.clone());
        if let Some(next) = transition(target, proposal, proposal_width, &current, &mut *rng) {
            current = next;
            n_accepted += 1;
        }
    }
    samples.push(current);

    debug!(
        "metropolis-hastings: {} steps, {} accepted",
        n_steps, n_accepted
    );
    Ok(samples)
}

/**
A single Metropolis–Hastings chain that owns its state and random number generator.

# Type Parameters
- `S`: The state type (a scalar, `Vec`, `ndarray::Array1`, or anything the target and proposal accept).
- `T`: The floating-point type of densities and the proposal width (e.g. `f32` or `f64`).
- `D`: The target distribution type. Must implement [`Target`].
- `Q`: The proposal distribution type. Must implement [`Proposal`].

# Examples

```rust
use metro_walk::core::MarkovChain;
use metro_walk::distributions::{GaussianProposal, StandardGaussian};
use metro_walk::metropolis_hastings::MetropolisHastings;

let mut mh = MetropolisHastings::new(StandardGaussian, GaussianProposal, 0.5, vec![0.0_f64, 0.0]);
let next = mh.step();
assert_eq!(next.len(), 2);
```
*/
#[derive(Debug, Clone)]
pub struct MetropolisHastings<S, T, D, Q> {
    /// The target distribution we want to sample from.
    pub target: D,
    /// The proposal distribution used to generate candidate states.
    pub proposal: Q,
    /// Width handed to the proposal at every step.
    pub proposal_width: T,
    /// The current state of the chain.
    pub current_state: S,
    /// The chain's random seed.
    pub seed: u64,
    /// The random number generator for this chain.
    pub rng: SmallRng,
    n_accepted: usize,
    n_proposed: usize,
}

impl<S, T, D, Q> MetropolisHastings<S, T, D, Q>
where
    D: Target<S, T>,
    Q: Proposal<S, T>,
    S: Clone,
    T: Float,
    Standard: Distribution<T>,
{
    /**
    Creates a new chain starting at `initial_state`, seeded from the thread-local generator.

    Use [`set_seed`](Self::set_seed) for reproducible runs.
    */
    pub fn new(target: D, proposal: Q, proposal_width: T, initial_state: S) -> Self {
        let seed = thread_rng().gen::<u64>();
        Self {
            target,
            proposal,
            proposal_width,
            current_state: initial_state,
            seed,
            rng: SmallRng::seed_from_u64(seed),
            n_accepted: 0,
            n_proposed: 0,
        }
    }

    /// Creates a chain from a [`SamplerConfig`], applying its seed if one is set.
    pub fn from_config(target: D, proposal: Q, config: SamplerConfig<S, T>) -> Self {
        let mh = Self::new(target, proposal, config.proposal_width, config.initial_state);
        match config.seed {
            Some(seed) => mh.set_seed(seed),
            None => mh,
        }
    }

    /**
    Sets a new seed and reinitializes the chain's random number generator with it.

    # Examples

    ```rust
    use metro_walk::distributions::{GaussianProposal, StandardGaussian};
    use metro_walk::metropolis_hastings::MetropolisHastings;

    let mh = MetropolisHastings::new(StandardGaussian, GaussianProposal, 1.0, 0.0_f64).set_seed(42);
    assert_eq!(mh.seed, 42);
    ```
    */
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /**
    Runs the chain for `n_steps` transitions.

    The returned samples start with the state the chain was in before this call,
    so the result holds `n_steps + 1` states. The chain keeps its final state, and
    a following call continues from there.

    # Errors

    Returns [`SamplerError::InvalidProposalWidth`] if the proposal width is not
    finite and strictly positive.
    */
    pub fn run(&mut self, n_steps: usize) -> Result<Vec<S>, SamplerError> {
        check_width(self.proposal_width)?;
        let samples = run_chain(self, n_steps);
        self.log_summary(n_steps);
        Ok(samples)
    }

    /// Same as [`run`](Self::run), displaying an [`indicatif`] progress bar while sampling.
    pub fn run_progress(&mut self, n_steps: usize) -> Result<Vec<S>, SamplerError> {
        check_width(self.proposal_width)?;

        let pb = ProgressBar::new(n_steps as u64);
        let style = ProgressStyle::with_template(
            "{prefix} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
        pb.set_style(style);
        pb.set_prefix("Metropolis-Hastings");

        let samples = run_chain_progress(self, n_steps, &pb);
        pb.finish_with_message("Done!");

        self.log_summary(n_steps);
        Ok(samples)
    }

    /// Fraction of accepted proposals over the chain's lifetime, `None` before the first step.
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.n_proposed == 0 {
            None
        } else {
            Some(self.n_accepted as f64 / self.n_proposed as f64)
        }
    }

    fn log_summary(&self, n_steps: usize) {
        debug!(
            "metropolis-hastings: ran {} steps (seed {}), lifetime acceptance rate {:?}",
            n_steps,
            self.seed,
            self.acceptance_rate()
        );
    }
}

impl<S, T, D, Q> MarkovChain<S> for MetropolisHastings<S, T, D, Q>
where
    D: Target<S, T>,
    Q: Proposal<S, T>,
    T: Float,
    Standard: Distribution<T>,
{
    /// Proposes a candidate and moves to it with probability `min(p(candidate) / p(current), 1)`.
    fn step(&mut self) -> &S {
        self.n_proposed += 1;
        if let Some(next) = transition(
            &self.target,
            &self.proposal,
            self.proposal_width,
            &self.current_state,
            &mut self.rng,
        ) {
            self.current_state = next;
            self.n_accepted += 1;
        }
        &self.current_state
    }

    fn current_state(&self) -> &S {
        &self.current_state
    }
}
