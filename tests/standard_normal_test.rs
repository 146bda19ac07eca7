//! Tests verifying that the Metropolis-Hastings sampler reproduces the moments of
//! its target distribution.

use metro_walk::distributions::{GaussianProposal, StandardGaussian, UniformProposal};
use metro_walk::metropolis_hastings::{metropolis_hastings, MetropolisHastings};
use metro_walk::SamplerConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, Array1};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, var)
    }

    /// The canonical run: standard normal target, Gaussian proposal of width 1, started at 0.
    #[test]
    fn test_standard_normal_accept() {
        const SAMPLE_SIZE: usize = 100_000;
        const SEED: u64 = 42;

        let config = SamplerConfig::default().set_seed(SEED).set_n_steps(SAMPLE_SIZE);
        let mut mh = MetropolisHastings::from_config(StandardGaussian, GaussianProposal, config);
        let samples = mh.run(SAMPLE_SIZE).expect("Expecting sampling to succeed");

        assert_eq!(samples.len(), SAMPLE_SIZE + 1);
        assert_eq!(samples[0], 0.0);

        let (mean, var) = mean_and_variance(&samples);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(var, 1.0, epsilon = 0.1);
    }

    /// Sampling a wider Gaussian must not look like the standard normal.
    #[test]
    fn test_standard_normal_reject() {
        const SAMPLE_SIZE: usize = 100_000;
        const SEED: u64 = 42;

        // N(0, 4), unnormalized.
        let wide = |x: &f64| (-x.powi(2) / 8.0).exp();
        let mut rng = SmallRng::seed_from_u64(SEED);
        let samples = metropolis_hastings(&wide, &GaussianProposal, 1.0, 0.0_f64, SAMPLE_SIZE, &mut rng)
            .expect("Expecting sampling to succeed");

        let (_, var) = mean_and_variance(&samples);
        assert!(
            var > 2.5,
            "Variance of samples from N(0, 4) is unexpectedly close to 1: {}",
            var
        );
    }

    #[test]
    fn test_uniform_proposal_far_start() {
        const SAMPLE_SIZE: usize = 100_000;
        const BURNIN: usize = 1_000;
        const SEED: u64 = 7;

        let mut mh =
            MetropolisHastings::new(StandardGaussian, UniformProposal, 2.0, 8.0_f64).set_seed(SEED);
        let samples = mh.run(SAMPLE_SIZE).expect("Expecting sampling to succeed");

        assert_eq!(samples[0], 8.0);
        let (mean, var) = mean_and_variance(&samples[BURNIN..]);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(var, 1.0, epsilon = 0.15);
    }

    #[test]
    fn test_two_d_isotropic_gaussian() {
        const SAMPLE_SIZE: usize = 50_000;
        const SEED: u64 = 3;

        let mut mh = MetropolisHastings::new(
            StandardGaussian,
            GaussianProposal,
            1.0,
            arr1(&[0.0_f64, 0.0]),
        )
        .set_seed(SEED);
        let samples: Vec<Array1<f64>> = mh.run(SAMPLE_SIZE).expect("Expecting sampling to succeed");

        for dim in 0..2 {
            let coords: Vec<f64> = samples.iter().map(|s| s[dim]).collect();
            let (mean, var) = mean_and_variance(&coords);
            assert_abs_diff_eq!(mean, 0.0, epsilon = 0.15);
            assert_abs_diff_eq!(var, 1.0, epsilon = 0.2);
        }
    }

    #[test]
    fn test_progress_matches_plain_run() {
        const SEED: u64 = 99;

        let mut plain =
            MetropolisHastings::new(StandardGaussian, GaussianProposal, 1.0, 0.0_f64).set_seed(SEED);
        let mut with_bar =
            MetropolisHastings::new(StandardGaussian, GaussianProposal, 1.0, 0.0_f64).set_seed(SEED);

        assert_eq!(
            plain.run(1_000).unwrap(),
            with_bar.run_progress(1_000).unwrap()
        );
    }
}
