#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Streaming arbitrary-ratio sample-rate conversion.
//!
//! Input samples arriving at rate `R_in` are pushed into a bounded history, and output
//! samples at rate `R_out` are computed on demand by index with a Blackman-windowed sinc
//! kernel. The rate ratio `R_out / R_in` is approximated by a [`Rational`] whose size
//! determines the kernel support.
//!
//! Three numeric variants share one contract, the [`Resampler`] trait:
//!
//! - [`FloatResampler`]: `Complex<f64>` samples.
//! - [`FixedPointResampler`]: `Complex<i16>` samples, quantized taps, saturating output.
//! - [`FixedPointResamplerShift`]: like [`FixedPointResampler`] but normalizes with a right
//!   shift instead of a division.
//!
//! # Example
//!
//! ```
//! use arbsrc::prelude::*;
//!
//! # fn main() -> Result<(), ResamplerError> {
//! let mut resampler = FloatResampler::new(8000.0, 12000.0)?;
//! assert_eq!(Rational::new(3, 2)?, resampler.ratio());
//!
//! let mut next = None;
//! for m in 0..1000 {
//!     let phase = 0.1 * m as f64;
//!     resampler.push(Complex::new(phase.cos(), phase.sin()));
//!     let first = *next.get_or_insert(resampler.min_output_index());
//!     for n in first.max(resampler.min_output_index())..=resampler.max_output_index() {
//!         let y = resampler.evaluate(n);
//!         assert!(y.re.is_finite() && y.im.is_finite());
//!         next = Some(n + 1);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Circular history of pushed samples.
pub mod buffer;
/// Reduced fractions and continued-fraction approximation.
pub mod rational;
/// Windowed-sinc resamplers.
pub mod resampler;
#[doc(hidden)]
pub mod utils;

pub use buffer::{BufferError, HistoryBuffer};
pub use num::Complex;
pub use rational::{Rational, RationalError};
pub use resampler::{
    FixedPointResampler, FixedPointResamplerShift, FloatResampler, Resampler, ResamplerError,
    ResamplerOption, Stream,
};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        rational::{approximate, best_approximations},
        BufferError, Complex, FixedPointResampler, FixedPointResamplerShift, FloatResampler,
        HistoryBuffer, Rational, RationalError, Resampler, ResamplerError, ResamplerOption,
        Stream,
    };
}
