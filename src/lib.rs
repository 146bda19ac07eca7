//! Random-walk Metropolis–Hastings sampling of densities known up to a constant.
//!
//! See [`metropolis_hastings`](crate::metropolis_hastings::metropolis_hastings) for the
//! sampling procedure and [`distributions`] for the target and proposal traits.

pub mod config;
pub mod core;
pub mod distributions;
pub mod error;
pub mod metropolis_hastings;
#[cfg(feature = "plot")]
pub mod plot;

pub use config::SamplerConfig;
pub use error::SamplerError;
