//! Weibull probability model: density, cumulative and survival functions,
//! quantiles, log-density derivatives, moments and sampling.

// clippy lints config:
#![allow(unknown_lints)]

pub mod dists;

mod conf;
mod err;
mod rng;

pub use conf::setup_logger;
pub use dists::{Parameter, ParameterMarshaler, Sample, Weibull, CDF};
pub use err::DistErr;
pub use rng::{with_default_rng, DefaultRng, RandomSource};

#[cfg(test)]
const FLOAT_EQ_ULPS: i64 = 2;
