use std::fmt;

use statrs::function::gamma::gamma;

#[cfg(feature = "persistence")]
use serde::{Deserialize, Serialize};

use super::{Parameter, ParameterMarshaler, Sample, CDF, EULER_GAMMA, LN_2};
use crate::err::DistErr;
use crate::rng::{with_default_rng, RandomSource};

const NUM_PARAMETERS: usize = 2;
const SHAPE_NAME: &str = "K";
const SCALE_NAME: &str = "λ";

/// Weibull distribution. Valid range for x is [0,+∞).
///
/// Parameters are not validated on construction; every method assumes
/// `k > 0` and `lambda > 0`. Use [`Weibull::try_new`] for a checked
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "persistence", derive(Serialize, Deserialize))]
pub struct Weibull {
    /// Shape parameter. A value of 1 is the exponential distribution and a
    /// value of 2 the Rayleigh distribution.
    pub k: f64,
    /// Scale parameter.
    pub lambda: f64,
}

impl Weibull {
    pub fn new(shape: f64, scale: f64) -> Weibull {
        Weibull {
            k: shape,
            lambda: scale,
        }
    }

    pub fn try_new(shape: f64, scale: f64) -> Result<Weibull, DistErr> {
        if shape.is_nan() || shape <= 0.0 {
            return Err(DistErr::PositiveReal {
                name: SHAPE_NAME,
                value: shape,
            });
        }
        if scale.is_nan() || scale <= 0.0 {
            return Err(DistErr::PositiveReal {
                name: SCALE_NAME,
                value: scale,
            });
        }
        Ok(Weibull::new(shape, scale))
    }

    #[inline]
    pub fn shape(&self) -> f64 {
        self.k
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.lambda
    }

    /// `(x/λ)^k`
    #[inline]
    fn scaled_pow(&self, x: f64) -> f64 {
        (x / self.lambda).powf(self.k)
    }

    /// `Γ(1 + i/k)^pow`
    #[inline]
    fn gamma_i_pow(&self, i: f64, pow: i32) -> f64 {
        gamma(1.0 + i / self.k).powi(pow)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            -(-self.scaled_pow(x)).exp_m1()
        }
    }

    /// Complementary CDF.
    pub fn survival(&self, x: f64) -> f64 {
        if x < 0.0 {
            1.0
        } else {
            (-self.scaled_pow(x)).exp()
        }
    }

    /// Natural logarithm of the density at x. Zero is returned if x is less
    /// than zero.
    ///
    /// At x = 0 the result depends on the shape parameter:
    /// +∞ when `0 < k < 1`, 0 when `k == 1` and -∞ when `k > 1`.
    pub fn log_prob(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 && self.k == 1.0 {
            // 0·ln(0) would give NaN
            return 0.0;
        }
        (self.k / self.lambda).ln() + (self.k - 1.0) * (x / self.lambda).ln() - self.scaled_pow(x)
    }

    pub fn prob(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.log_prob(x).exp()
        }
    }

    /// Derivative of the log density with respect to x, computed as
    /// `-(k·(x/λ)^k + k - 1) / x`. NaN at x = 0.
    ///
    /// The `k - 1` term has the opposite sign of the analytic derivative of
    /// [`Weibull::log_prob`]; both agree only when `k == 1`.
    pub fn dlog_prob_dx(&self, x: f64) -> f64 {
        if x > 0.0 {
            -(self.k * self.scaled_pow(x) + self.k - 1.0) / x
        } else if x < 0.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    /// Derivative of the log density with respect to the parameters, ordered
    /// as `[∂/∂K, ∂/∂λ]`. Both components are NaN at x = 0.
    pub fn dlog_prob_dparam(&self, x: f64) -> [f64; 2] {
        if x > 0.0 {
            let z = x / self.lambda;
            let zk = z.powf(self.k);
            [
                (1.0 - self.k * (zk - 1.0) * z.ln()) / self.k,
                self.k * (zk - 1.0) / self.lambda,
            ]
        } else if x < 0.0 {
            [0.0, 0.0]
        } else {
            [f64::NAN, f64::NAN]
        }
    }

    /// Same as [`Weibull::dlog_prob_dparam`] writing into a caller buffer,
    /// which must hold exactly `num_parameters()` elements.
    pub fn dlog_prob_dparam_into(&self, x: f64, deriv: &mut [f64]) -> Result<(), DistErr> {
        check_len(deriv.len())?;
        deriv.copy_from_slice(&self.dlog_prob_dparam(x));
        Ok(())
    }

    pub fn mean(&self) -> f64 {
        self.lambda * self.gamma_i_pow(1.0, 1)
    }

    pub fn variance(&self) -> f64 {
        self.lambda.powi(2) * (self.gamma_i_pow(2.0, 1) - self.gamma_i_pow(1.0, 2))
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn skewness(&self) -> f64 {
        let mean = self.mean();
        let std_dev = self.std_dev();
        (self.gamma_i_pow(3.0, 1) * self.lambda.powi(3)
            - 3.0 * mean * std_dev.powi(2)
            - mean.powi(3))
            / std_dev.powi(3)
    }

    pub fn ex_kurtosis(&self) -> f64 {
        let g1 = self.gamma_i_pow(1.0, 1);
        let g2 = self.gamma_i_pow(2.0, 1);
        let g3 = self.gamma_i_pow(3.0, 1);
        let g4 = self.gamma_i_pow(4.0, 1);
        (-6.0 * g1.powi(4) + 12.0 * g1.powi(2) * g2 - 3.0 * g2.powi(2) - 4.0 * g1 * g3 + g4)
            / (g2 - g1.powi(2)).powi(2)
    }

    pub fn entropy(&self) -> f64 {
        EULER_GAMMA * (1.0 - 1.0 / self.k) + (self.lambda / self.k).ln() + 1.0
    }

    pub fn median(&self) -> f64 {
        self.lambda * LN_2.powf(1.0 / self.k)
    }

    /// NaN when the shape is below 1, the density is monotonically decreasing there.
    pub fn mode(&self) -> f64 {
        if self.k > 1.0 {
            self.lambda * ((self.k - 1.0) / self.k).powf(1.0 / self.k)
        } else if self.k == 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    /// Inverse of the CDF, `p` must be in the closed interval [0,1].
    pub fn quantile(&self, p: f64) -> Result<f64, DistErr> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistErr::Closed01(p));
        }
        Ok(self.lambda * (-(-p).ln_1p()).powf(1.0 / self.k))
    }

    /// Draw a sample using the process-wide default random source.
    ///
    /// Like [`Sample::sample`] this feeds a standard normal deviate to
    /// [`Weibull::quantile`], so any deviate outside [0,1] is returned as
    /// [`DistErr::Closed01`].
    pub fn rand(&self) -> Result<f64, DistErr> {
        with_default_rng(|rng| self.sample(rng))
    }

    #[inline]
    pub fn num_parameters(&self) -> usize {
        NUM_PARAMETERS
    }

    pub fn marshal_parameters(&self) -> [Parameter; 2] {
        [
            Parameter::new(SHAPE_NAME, self.k),
            Parameter::new(SCALE_NAME, self.lambda),
        ]
    }

    pub fn marshal_parameters_into(&self, p: &mut [Parameter]) -> Result<(), DistErr> {
        check_len(p.len())?;
        let [shape, scale] = self.marshal_parameters();
        p[0] = shape;
        p[1] = scale;
        Ok(())
    }

    /// Overwrite both parameters from `[K, λ]`. Nothing is modified on error.
    pub fn unmarshal_parameters(&mut self, p: &[Parameter]) -> Result<(), DistErr> {
        check_len(p.len())?;
        check_name(&p[0], SHAPE_NAME)?;
        check_name(&p[1], SCALE_NAME)?;
        log::trace!(
            "updating weibull parameters from ({}, {}) to ({}, {})",
            self.k,
            self.lambda,
            p[0].value,
            p[1].value
        );
        self.k = p[0].value;
        self.lambda = p[1].value;
        Ok(())
    }
}

#[inline]
fn check_len(found: usize) -> Result<(), DistErr> {
    if found != NUM_PARAMETERS {
        return Err(DistErr::LengthMismatch {
            expected: NUM_PARAMETERS,
            found,
        });
    }
    Ok(())
}

#[inline]
fn check_name(p: &Parameter, expected: &'static str) -> Result<(), DistErr> {
    if p.name != expected {
        return Err(DistErr::NameMismatch {
            expected,
            found: p.name.clone(),
        });
    }
    Ok(())
}

impl Sample for Weibull {
    // FIXME: quantile expects a uniform deviate (`rng.uniform()`), not a normal one
    fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<f64, DistErr> {
        let p = rng.norm_f64();
        self.quantile(p).map_err(|err| {
            log::debug!("normal deviate {} rejected by {}", p, self);
            err
        })
    }
}

impl CDF for Weibull {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        Weibull::cdf(self, x)
    }

    #[inline]
    fn inverse_cdf(&self, p: f64) -> Result<f64, DistErr> {
        self.quantile(p)
    }
}

impl ParameterMarshaler for Weibull {
    fn num_parameters(&self) -> usize {
        NUM_PARAMETERS
    }

    fn marshal_parameters_into(&self, p: &mut [Parameter]) -> Result<(), DistErr> {
        Weibull::marshal_parameters_into(self, p)
    }

    fn unmarshal_parameters(&mut self, p: &[Parameter]) -> Result<(), DistErr> {
        Weibull::unmarshal_parameters(self, p)
    }
}

impl fmt::Display for Weibull {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Weibull(K={}, λ={})", self.k, self.lambda)
    }
}
