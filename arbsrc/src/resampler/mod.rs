mod error;
mod fixed;
mod float;
mod kernel;
mod option;
mod state;
mod stream;

pub use error::ResamplerError;
pub use fixed::{FixedPointResampler, FixedPointResamplerShift};
pub use float::FloatResampler;
pub use option::ResamplerOption;
pub use state::ResamplerCore;
pub use stream::Stream;

use crate::rational::Rational;

/// A streaming resampler.
///
/// Input samples are pushed one at a time; output samples are computed on demand by index.
/// Output `n` corresponds to the input instant `n / gamma`, where `gamma` is the
/// approximated rate ratio. Only indices in
/// [`min_output_index`](Self::min_output_index)`..=`[`max_output_index`](Self::max_output_index)
/// can be evaluated, and this window moves forward as samples are pushed. The window is empty
/// (`max < min`) until enough samples have been pushed.
///
/// Implementations are not synchronized. Callers that split producer and consumer across
/// threads must serialize access themselves.
pub trait Resampler {
    /// The sample type of both input and output.
    type Sample: Copy;

    /// The shared state of the resampler.
    fn core(&self) -> &ResamplerCore<Self::Sample>;

    /// Pushes the next input sample.
    fn push(&mut self, sample: Self::Sample);

    /// Evaluates output sample `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is outside
    /// [`min_output_index`](Self::min_output_index)`..=`[`max_output_index`](Self::max_output_index).
    /// Use [`try_evaluate`](Self::try_evaluate) for a checked variant.
    fn evaluate(&self, n: i64) -> Self::Sample;

    /// Evaluates output sample `n`, or returns [`ResamplerError::OutputIndexOutOfRange`].
    fn try_evaluate(&self, n: i64) -> Result<Self::Sample, ResamplerError> {
        self.core().check(n)?;
        Ok(self.evaluate(n))
    }

    /// The total number of pushed input samples.
    fn pushed(&self) -> u64 {
        self.core().pushed()
    }

    /// The smallest output index that can be evaluated now.
    fn min_output_index(&self) -> i64 {
        self.core().min_output_index()
    }

    /// The largest output index that can be evaluated now.
    fn max_output_index(&self) -> i64 {
        self.core().max_output_index()
    }

    /// The approximated rate ratio `out_rate / in_rate`.
    fn ratio(&self) -> Rational {
        self.core().ratio()
    }
}
