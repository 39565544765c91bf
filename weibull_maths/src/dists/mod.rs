mod weibull;

use crate::err::DistErr;
use crate::rng::RandomSource;

#[cfg(feature = "persistence")]
use serde::{Deserialize, Serialize};

pub use self::weibull::Weibull;

pub use statrs::consts::EULER_MASCHERONI as EULER_GAMMA;
pub const LN_2: f64 = std::f64::consts::LN_2;

/// Draw a random variate from a (continuous) distribution.
pub trait Sample {
    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<f64, DistErr>;
}

/// Compute the cumulative density function and its inverse for a given distribution.
pub trait CDF {
    fn cdf(&self, x: f64) -> f64;
    fn inverse_cdf(&self, p: f64) -> Result<f64, DistErr>;
}

/// A named distribution parameter, as exchanged by [`ParameterMarshaler`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "persistence", derive(Serialize, Deserialize))]
pub struct Parameter {
    pub name: String,
    pub value: f64,
}

impl Parameter {
    pub fn new<N: Into<String>>(name: N, value: f64) -> Parameter {
        Parameter {
            name: name.into(),
            value,
        }
    }
}

impl Default for Parameter {
    fn default() -> Parameter {
        Parameter {
            name: String::new(),
            value: 0.0,
        }
    }
}

/// Read and write the parameters of a distribution as an ordered list of
/// named values.
///
/// Both directions require slices of exactly `num_parameters()` elements.
pub trait ParameterMarshaler {
    fn num_parameters(&self) -> usize;
    fn marshal_parameters_into(&self, p: &mut [Parameter]) -> Result<(), DistErr>;
    fn unmarshal_parameters(&mut self, p: &[Parameter]) -> Result<(), DistErr>;
}
