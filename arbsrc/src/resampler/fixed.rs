use num::{Complex, Zero};

use crate::utils::int::{clip_complex_16, saturate_32};

use super::{kernel::WindowedSinc, Resampler, ResamplerCore, ResamplerError, ResamplerOption};

// 2^15 * ACC_LIMIT < 2^31
const ACC_LIMIT: usize = (1 << 16) - 1;

/// The largest tap scale such that accumulating any polyphase branch of the quantized
/// kernel against full-scale 16-bit samples fits into 32 bits.
fn tap_scale(g: &[f64], p: i64, tap_min: i64) -> Result<i32, ResamplerError> {
    let mut sums = vec![0.0; p as usize];
    let mut counts = vec![0usize; p as usize];
    g.iter().enumerate().for_each(|(i, v)| {
        let r = (tap_min + i as i64).rem_euclid(p) as usize;
        sums[r] += v.abs();
        counts[r] += 1;
    });
    let sum = sums.into_iter().fold(0.0, f64::max);
    let count = counts.into_iter().max().unwrap_or(0);
    // each tap is off by at most one half after rounding
    let alpha = ACC_LIMIT
        .checked_sub(count.div_ceil(2))
        .map(|limit| (limit as f64 / sum).floor())
        .filter(|alpha| *alpha >= 1.0)
        .ok_or(ResamplerError::TapScaleOutOfRange(count))?;
    Ok(alpha.min(i32::MAX as f64) as i32)
}

/// Resampler of 16-bit fixed point complex samples.
///
/// The kernel is quantized once into 32-bit taps at scale [`alpha`](Self::alpha). An output
/// is accumulated in 64 bits, divided by `alpha` and clipped into the 16-bit range. Inputs
/// near full scale can be clipped on output; this is expected and not an error.
#[derive(Clone, Debug)]
pub struct FixedPointResampler {
    core: ResamplerCore<Complex<i16>>,
    kernel: WindowedSinc,
    taps: Vec<i32>,
    alpha: i32,
}

impl FixedPointResampler {
    /// Creates a new [`FixedPointResampler`] with the default [`ResamplerOption`].
    pub fn new(in_rate: f64, out_rate: f64) -> Result<Self, ResamplerError> {
        Self::with_option(in_rate, out_rate, ResamplerOption::default())
    }

    /// Creates a new [`FixedPointResampler`].
    pub fn with_option(
        in_rate: f64,
        out_rate: f64,
        option: ResamplerOption,
    ) -> Result<Self, ResamplerError> {
        let core = ResamplerCore::new(in_rate, out_rate, &option, Complex::zero())?;
        let kernel = WindowedSinc::new(core.kappa(), core.xi(), core.window_width());
        let g = kernel.table(core.tap_min(), core.tap_max());
        let alpha = tap_scale(&g, core.ratio().numer(), core.tap_min())?;
        let taps = g
            .into_iter()
            .map(|v| (alpha as f64 * v).round() as i32)
            .collect();
        tracing::debug!("Fixed point taps quantized with alpha = {}", alpha);
        Ok(Self {
            core,
            kernel,
            taps,
            alpha,
        })
    }

    /// The scale of the quantized taps.
    #[must_use]
    pub const fn alpha(&self) -> i32 {
        self.alpha
    }

    /// The scale that maps [`n32`](Self::n32) to the output units, i.e. `1 / alpha`.
    #[must_use]
    pub fn beta(&self) -> f64 {
        1.0 / self.alpha as f64
    }

    /// The quantized taps indexed from [`ResamplerCore::tap_min`].
    #[must_use]
    pub fn taps(&self) -> &[i32] {
        &self.taps
    }

    /// The double precision kernel value at tap index `k`.
    #[must_use]
    pub fn tap(&self, k: i64) -> f64 {
        if !(self.core.tap_min()..=self.core.tap_max()).contains(&k) {
            return 0.0;
        }
        self.kernel.value(k)
    }

    /// Output sample `n` before normalization and clipping, i.e., scaled by `alpha`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is outside the output window, see [`Resampler::evaluate`].
    pub fn n32(&self, n: i64) -> Complex<i32> {
        self.core.assert_output_index(n);
        let acc = self.accumulate(n);
        Complex::new(saturate_32(acc.re), saturate_32(acc.im))
    }

    #[inline]
    fn accumulate(&self, n: i64) -> Complex<i64> {
        self.core
            .support(n)
            .fold(Complex::zero(), |acc: Complex<i64>, (x, k)| {
                let f = self.taps[k] as i64;
                Complex::new(acc.re + x.re as i64 * f, acc.im + x.im as i64 * f)
            })
    }
}

impl Resampler for FixedPointResampler {
    type Sample = Complex<i16>;

    fn core(&self) -> &ResamplerCore<Self::Sample> {
        &self.core
    }

    fn push(&mut self, sample: Self::Sample) {
        self.core.push(sample);
    }

    fn evaluate(&self, n: i64) -> Self::Sample {
        let acc = self.n32(n);
        clip_complex_16(Complex::new(acc.re / self.alpha, acc.im / self.alpha))
    }
}

/// [`FixedPointResampler`] normalizing with an arithmetic right shift instead of a division.
///
/// The shift is `floor(log2(alpha))`, so outputs are scaled by `alpha / 2^shift`, which lies
/// in `[1, 2)`. Unless `alpha` is a power of two, this is a gain error and inputs near full
/// scale clip more often than with [`FixedPointResampler`]. This is the price for removing
/// the division from the hot path.
#[derive(Clone, Debug)]
pub struct FixedPointResamplerShift {
    inner: FixedPointResampler,
    shift: u32,
}

impl FixedPointResamplerShift {
    /// Creates a new [`FixedPointResamplerShift`] with the default [`ResamplerOption`].
    pub fn new(in_rate: f64, out_rate: f64) -> Result<Self, ResamplerError> {
        Self::with_option(in_rate, out_rate, ResamplerOption::default())
    }

    /// Creates a new [`FixedPointResamplerShift`].
    pub fn with_option(
        in_rate: f64,
        out_rate: f64,
        option: ResamplerOption,
    ) -> Result<Self, ResamplerError> {
        let inner = FixedPointResampler::with_option(in_rate, out_rate, option)?;
        let shift = (inner.alpha() as f64).log2().floor() as u32;
        tracing::debug!(
            "Fixed point output normalized by shift {} (gain {})",
            shift,
            inner.alpha() as f64 / (1u64 << shift) as f64
        );
        Ok(Self { inner, shift })
    }

    /// The right shift applied to the accumulator, `floor(log2(alpha))`.
    #[must_use]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// See [`FixedPointResampler::alpha`].
    #[must_use]
    pub const fn alpha(&self) -> i32 {
        self.inner.alpha()
    }

    /// The scale that maps [`n32`](Self::n32) to the output units, i.e. `2^-shift`.
    #[must_use]
    pub fn beta(&self) -> f64 {
        1.0 / (1u64 << self.shift) as f64
    }

    /// See [`FixedPointResampler::taps`].
    #[must_use]
    pub fn taps(&self) -> &[i32] {
        self.inner.taps()
    }

    /// See [`FixedPointResampler::tap`].
    #[must_use]
    pub fn tap(&self, k: i64) -> f64 {
        self.inner.tap(k)
    }

    /// See [`FixedPointResampler::n32`].
    pub fn n32(&self, n: i64) -> Complex<i32> {
        self.inner.n32(n)
    }
}

impl Resampler for FixedPointResamplerShift {
    type Sample = Complex<i16>;

    fn core(&self) -> &ResamplerCore<Self::Sample> {
        self.inner.core()
    }

    fn push(&mut self, sample: Self::Sample) {
        self.inner.push(sample);
    }

    fn evaluate(&self, n: i64) -> Self::Sample {
        let acc = self.n32(n);
        clip_complex_16(Complex::new(acc.re >> self.shift, acc.im >> self.shift))
    }
}
