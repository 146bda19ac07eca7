//! Samples a standard normal distribution with Metropolis-Hastings and plots the trace.

use metro_walk::config::SamplerConfig;
use metro_walk::distributions::{GaussianProposal, StandardGaussian};
use metro_walk::metropolis_hastings::MetropolisHastings;
use metro_walk::plot::save_trace_plot;

use log::info;
use std::error::Error;

const PLOT_FILE: &str = "mh_samples.html";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SamplerConfig::default();
    let n_steps = config.n_steps;

    let mut mh = MetropolisHastings::from_config(StandardGaussian, GaussianProposal, config);
    let samples = mh.run_progress(n_steps)?;

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    info!(
        "generated {} samples (seed {}), mean {:.3}, acceptance rate {:.3}",
        samples.len(),
        mh.seed,
        mean,
        mh.acceptance_rate().unwrap_or(0.0)
    );

    save_trace_plot(&samples, PLOT_FILE)?;
    Ok(())
}
