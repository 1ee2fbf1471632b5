use thiserror::Error;

use crate::rational::{Rational, RationalError};

#[derive(Error, Debug, PartialEq, Copy, Clone)]
/// An error produced by the resamplers.
pub enum ResamplerError {
    /// The input rate is not a positive finite number.
    #[error("Input rate ({0}) must be positive and finite")]
    InvalidInputRate(f64),
    /// The output rate is not a positive finite number.
    #[error("Output rate ({0}) must be positive and finite")]
    InvalidOutputRate(f64),
    /// The window width is not a positive finite number.
    #[error("Window width ({0}) must be positive and finite")]
    InvalidWindowWidth(f64),
    /// The rate ratio could not be approximated.
    #[error(transparent)]
    Rational(#[from] RationalError),
    /// The approximated rate ratio is not positive.
    #[error("Approximated resampling ratio ({0}) must be positive")]
    InvalidRatio(Rational),
    /// The kernel needs more taps than can be allocated.
    #[error("Kernel with {0} taps is too long (max: {1})")]
    TooManyTaps(u64, u64),
    /// No tap scale keeps the fixed point accumulator within 32 bits.
    #[error("Polyphase branch of {0} taps cannot be accumulated in 32 bits")]
    TapScaleOutOfRange(usize),
    /// The output index is outside the currently computable window.
    #[error("Output index ({0}) is out of range ([{1}, {2}])")]
    OutputIndexOutOfRange(i64, i64, i64),
}
