//! Chain abstraction and the drivers that turn a chain into a sample sequence.

use indicatif::ProgressBar;

pub trait MarkovChain<S> {
    /// Does one iteration of the chain, returning the new current state.
    fn step(&mut self) -> &S;

    /// Returns the current state without stepping.
    fn current_state(&self) -> &S;
}

/// Runs `chain` for `n_steps` transitions.
///
/// The returned sequence starts with the state the chain was in before the run,
/// followed by the state after each step, so its length is `n_steps + 1`.
pub fn run_chain<S, M>(chain: &mut M, n_steps: usize) -> Vec<S>
where
    M: MarkovChain<S>,
    S: Clone,
{
    let mut out = Vec::with_capacity(n_steps + 1);
    out.push(chain.current_state().clone());

    for _ in 0..n_steps {
        out.push(chain.step().clone());
    }

    out
}

/// Same as [`run_chain`], advancing `pb` once per step.
pub fn run_chain_progress<S, M>(chain: &mut M, n_steps: usize, pb: &ProgressBar) -> Vec<S>
where
    M: MarkovChain<S>,
    S: Clone,
{
    let mut out = Vec::with_capacity(n_steps + 1);
    out.push(chain.current_state().clone());

    pb.set_length(n_steps as u64);

    for _ in 0..n_steps {
        out.push(chain.step().clone());
        pb.inc(1);
    }

    out
}
