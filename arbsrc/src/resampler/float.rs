use num::{Complex, Zero};

use super::{kernel::WindowedSinc, Resampler, ResamplerCore, ResamplerError, ResamplerOption};

/// Resampler of double precision complex samples.
#[derive(Clone, Debug)]
pub struct FloatResampler {
    core: ResamplerCore<Complex<f64>>,
    taps: Vec<f64>,
}

impl FloatResampler {
    /// Creates a new [`FloatResampler`] with the default [`ResamplerOption`].
    pub fn new(in_rate: f64, out_rate: f64) -> Result<Self, ResamplerError> {
        Self::with_option(in_rate, out_rate, ResamplerOption::default())
    }

    /// Creates a new [`FloatResampler`].
    pub fn with_option(
        in_rate: f64,
        out_rate: f64,
        option: ResamplerOption,
    ) -> Result<Self, ResamplerError> {
        let core = ResamplerCore::new(in_rate, out_rate, &option, Complex::zero())?;
        let taps = WindowedSinc::new(core.kappa(), core.xi(), core.window_width())
            .table(core.tap_min(), core.tap_max());
        Ok(Self { core, taps })
    }

    /// The kernel taps indexed from [`ResamplerCore::tap_min`].
    #[must_use]
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}

impl Resampler for FloatResampler {
    type Sample = Complex<f64>;

    fn core(&self) -> &ResamplerCore<Self::Sample> {
        &self.core
    }

    fn push(&mut self, sample: Self::Sample) {
        self.core.push(sample);
    }

    fn evaluate(&self, n: i64) -> Self::Sample {
        self.core.assert_output_index(n);
        self.core
            .support(n)
            .map(|(x, k)| x * self.taps[k])
            .sum()
    }
}
