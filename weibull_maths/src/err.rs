//! Errors returned when a distribution operation is called outside its preconditions.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistErr {
    #[error("weibull: expected a real number in the interval [0,1], got `{0}`")]
    Closed01(f64),
    #[error("weibull: expected a positive real number for parameter `{name}`, got `{value}`")]
    PositiveReal { name: &'static str, value: f64 },
    #[error("weibull: slice length mismatch, expected {expected} but found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("weibull: parameter name mismatch, expected `{expected}` but found `{found}`")]
    NameMismatch { expected: &'static str, found: String },
}
