/*!
Target densities and proposal generators for the Metropolis–Hastings sampler.

A [`Target`] evaluates a (possibly unnormalized) density at a state. A [`Proposal`]
draws a candidate state around the current one, using a width parameter and the
random number generator handed to it by the sampler. Both traits are implemented
for plain closures, so ad-hoc models need no wrapper types.

The bundled implementations cover scalar states (`f32`, `f64`) as well as vector
states stored in a `Vec` or an [`ndarray::Array1`]:

- [`StandardGaussian`]: the standard normal density (a product density for vectors).
- [`GaussianProposal`]: a Gaussian random walk, `x' = x + width * z` with `z ~ N(0, 1)`.
- [`UniformProposal`]: a uniform random walk, `x' = x + width * (2u - 1)` with `u ~ U[0, 1)`.

Both proposals are symmetric, which is what the sampler's acceptance rule assumes.

# Examples

```rust
use metro_walk::distributions::{GaussianProposal, Proposal, StandardGaussian, Target};
use rand::rngs::SmallRng;
use rand::SeedableRng;

let target = StandardGaussian;
let p: f64 = target.density(&0.0);
assert!((p - 0.3989422804014327).abs() < 1e-12);

let mut rng = SmallRng::seed_from_u64(42);
let candidate: Vec<f64> = GaussianProposal.propose(&vec![0.0, 1.0], 0.5, &mut rng);
assert_eq!(candidate.len(), 2);
```
*/

use ndarray::Array1;
use num_traits::{Float, FloatConst};
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

/// A target distribution, known through its density up to a constant factor.
pub trait Target<S, T: Float> {
    /// Returns the (unnormalized) density at `state`. Expected to be finite and non-negative.
    fn density(&self, state: &S) -> T;
}

/// A proposal distribution generating candidate moves.
///
/// The sampler only supports symmetric proposals, i.e. the density of proposing
/// `y` from `x` must equal the density of proposing `x` from `y`.
pub trait Proposal<S, T: Float> {
    /// Draws a candidate state around `current` with spread `width`, using `rng` as
    /// the only source of randomness.
    fn propose(&self, current: &S, width: T, rng: &mut dyn RngCore) -> S;
}

impl<S, T, F> Target<S, T> for F
where
    T: Float,
    F: Fn(&S) -> T,
{
    fn density(&self, state: &S) -> T {
        self(state)
    }
}

impl<S, T, F> Proposal<S, T> for F
where
    T: Float,
    F: Fn(&S, T, &mut dyn RngCore) -> S,
{
    fn propose(&self, current: &S, width: T, rng: &mut dyn RngCore) -> S {
        self(current, width, rng)
    }
}

/// Standard normal density, `exp(-x^2 / 2) / sqrt(2 pi)`.
fn standard_normal_density<T: Float + FloatConst>(x: T) -> T {
    let two = T::one() + T::one();
    (-(x * x) / two).exp() / (two * T::PI()).sqrt()
}

/**
The standard normal distribution `N(0, 1)`.

For vector states the density is the product of the per-coordinate densities,
i.e. an isotropic Gaussian with identity covariance.

# Examples

```rust
use metro_walk::distributions::{StandardGaussian, Target};
use ndarray::arr1;

let target = StandardGaussian;
let scalar: f64 = target.density(&1.0);
let vector: f64 = target.density(&arr1(&[1.0, 0.0]));
assert!((vector - scalar * 0.3989422804014327).abs() < 1e-12);
```
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardGaussian;

/**
A Gaussian random-walk proposal: every coordinate moves by `width * z`, `z ~ N(0, 1)`.

# Examples

```rust
use metro_walk::distributions::{GaussianProposal, Proposal};
use rand::rngs::SmallRng;
use rand::SeedableRng;

let mut rng = SmallRng::seed_from_u64(7);
let candidate: f64 = GaussianProposal.propose(&3.0, 1.0, &mut rng);
assert!(candidate.is_finite());
```
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussianProposal;

/// A uniform random-walk proposal: every coordinate moves by `width * (2u - 1)`, `u ~ U[0, 1)`.
///
/// Consumes exactly one uniform draw per coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformProposal;

macro_rules! impl_distributions {
    ($($t:ty),*) => {$(
        impl Target<$t, $t> for StandardGaussian {
            fn density(&self, x: &$t) -> $t {
                standard_normal_density(*x)
            }
        }

        impl Target<Vec<$t>, $t> for StandardGaussian {
            fn density(&self, x: &Vec<$t>) -> $t {
                x.iter().map(|&xi| standard_normal_density(xi)).product()
            }
        }

        impl Target<Array1<$t>, $t> for StandardGaussian {
            fn density(&self, x: &Array1<$t>) -> $t {
                x.iter().map(|&xi| standard_normal_density(xi)).product()
            }
        }

        impl Proposal<$t, $t> for GaussianProposal {
            fn propose(&self, current: &$t, width: $t, rng: &mut dyn RngCore) -> $t {
                current + width * rng.sample::<$t, _>(StandardNormal)
            }
        }

        impl Proposal<Vec<$t>, $t> for GaussianProposal {
            fn propose(&self, current: &Vec<$t>, width: $t, rng: &mut dyn RngCore) -> Vec<$t> {
                current
                    .iter()
                    .map(|&x| x + width * rng.sample::<$t, _>(StandardNormal))
                    .collect()
            }
        }

        impl Proposal<Array1<$t>, $t> for GaussianProposal {
            fn propose(&self, current: &Array1<$t>, width: $t, rng: &mut dyn RngCore) -> Array1<$t> {
                current.mapv(|x| x + width * rng.sample::<$t, _>(StandardNormal))
            }
        }

        impl Proposal<$t, $t> for UniformProposal {
            fn propose(&self, current: &$t, width: $t, rng: &mut dyn RngCore) -> $t {
                current + width * (2.0 * rng.gen::<$t>() - 1.0)
            }
        }

        impl Proposal<Vec<$t>, $t> for UniformProposal {
            fn propose(&self, current: &Vec<$t>, width: $t, rng: &mut dyn RngCore) -> Vec<$t> {
                current
                    .iter()
                    .map(|&x| x + width * (2.0 * rng.gen::<$t>() - 1.0))
                    .collect()
            }
        }

        impl Proposal<Array1<$t>, $t> for UniformProposal {
            fn propose(&self, current: &Array1<$t>, width: $t, rng: &mut dyn RngCore) -> Array1<$t> {
                current.mapv(|x| x + width * (2.0 * rng.gen::<$t>() - 1.0))
            }
        }
    )*};
}

impl_distributions!(f32, f64);
