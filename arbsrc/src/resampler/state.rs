use getset::CopyGetters;

use crate::{
    buffer::HistoryBuffer,
    rational::{approximate, Rational},
    utils::int::{ceil_div, floor_div},
};

use super::{ResamplerError, ResamplerOption};

// 128 MiB of double precision taps
const MAX_TAPS: u64 = 1 << 24;

fn validate(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// State and index arithmetic shared by every resampler variant.
///
/// Output index `n` is mapped to the input instant `n / gamma`, where `gamma = p / q` is the
/// rational approximation of `out_rate / in_rate`. The kernel tap with integer index
/// `k = q * n - p * m` weighs the history element `m`, and only taps in
/// `tap_min..=tap_max` are non-zero.
#[derive(Clone, Debug, CopyGetters)]
pub struct ResamplerCore<T> {
    #[getset(get_copy = "pub")]
    /// The window width `W`.
    window_width: f64,
    #[getset(get_copy = "pub")]
    /// The approximated rate ratio `p / q`.
    ratio: Rational,
    #[getset(get_copy = "pub")]
    /// `p / q` as a real number.
    gamma: f64,
    #[getset(get_copy = "pub")]
    /// `min(1, gamma)`.
    kappa: f64,
    #[getset(get_copy = "pub")]
    /// `max(1, gamma)`.
    delta: f64,
    #[getset(get_copy = "pub")]
    /// `max(p, q)`.
    xi: i64,
    #[getset(get_copy = "pub")]
    /// `ceil(-xi * W)`.
    tap_min: i64,
    #[getset(get_copy = "pub")]
    /// `floor(xi * W)`.
    tap_max: i64,
    history: HistoryBuffer<T>,
}

impl<T: Copy> ResamplerCore<T> {
    pub(crate) fn new(
        in_rate: f64,
        out_rate: f64,
        option: &ResamplerOption,
        zero: T,
    ) -> Result<Self, ResamplerError> {
        if !validate(in_rate) {
            return Err(ResamplerError::InvalidInputRate(in_rate));
        }
        if !validate(out_rate) {
            return Err(ResamplerError::InvalidOutputRate(out_rate));
        }
        let window_width = option.window_width;
        if !validate(window_width) {
            return Err(ResamplerError::InvalidWindowWidth(window_width));
        }

        let target = out_rate / in_rate;
        let ratio = approximate(
            target,
            option.tolerance,
            option.max_denominator,
            option.max_convergents,
        )?;
        if ratio.numer() <= 0 {
            return Err(ResamplerError::InvalidRatio(ratio));
        }
        let gamma = ratio.to_f64();
        // GRCOV_EXCL_START
        if (gamma - target).abs() >= option.tolerance {
            tracing::warn!(
                "Resampling ratio {} is approximated by {} (error {:e})",
                target,
                ratio,
                (gamma - target).abs()
            );
        }
        // GRCOV_EXCL_STOP

        let kappa = gamma.min(1.0);
        let delta = gamma.max(1.0);
        let xi = ratio.height();
        let num_taps = (2.0 * xi as f64 * window_width).floor() as u64 + 1;
        if num_taps > MAX_TAPS {
            return Err(ResamplerError::TooManyTaps(num_taps, MAX_TAPS));
        }
        let tap_min = (-(xi as f64) * window_width).ceil() as i64;
        let tap_max = (xi as f64 * window_width).floor() as i64;
        let history = HistoryBuffer::new(((2.0 * window_width) / kappa + 1.0).ceil() as usize, zero);

        tracing::debug!(
            "Resampling {} Hz -> {} Hz with ratio {}, taps [{}, {}], history capacity {}",
            in_rate,
            out_rate,
            ratio,
            tap_min,
            tap_max,
            history.capacity()
        );

        Ok(Self {
            window_width,
            ratio,
            gamma,
            kappa,
            delta,
            xi,
            tap_min,
            tap_max,
            history,
        })
    }

    /// The history of pushed input samples.
    #[must_use]
    pub const fn history(&self) -> &HistoryBuffer<T> {
        &self.history
    }

    /// The number of kernel taps, `tap_max - tap_min + 1`.
    #[must_use]
    pub fn num_taps(&self) -> usize {
        (self.tap_max - self.tap_min + 1) as usize
    }

    #[inline]
    pub(crate) fn push(&mut self, x: T) {
        self.history.push(x);
    }

    #[inline]
    pub(crate) fn pushed(&self) -> u64 {
        self.history.pushed()
    }

    pub(crate) fn min_output_index(&self) -> i64 {
        let m = self.history.max_index() - self.history.capacity() as i64;
        (self.gamma * m as f64 + self.delta * self.window_width).ceil() as i64
    }

    pub(crate) fn max_output_index(&self) -> i64 {
        let m = self.history.max_index() - 1;
        (self.gamma * m as f64 - self.delta * self.window_width).floor() as i64
    }

    pub(crate) fn check(&self, n: i64) -> Result<(), ResamplerError> {
        let (min, max) = (self.min_output_index(), self.max_output_index());
        if !(min..=max).contains(&n) {
            return Err(ResamplerError::OutputIndexOutOfRange(n, min, max));
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub(crate) fn assert_output_index(&self, n: i64) {
        if let Err(e) = self.check(n) {
            panic!("{}", e);
        }
    }

    /// History elements in the kernel support of output `n`, paired with the offset of
    /// their tap from `tap_min`.
    ///
    /// The support is clipped to the readable history window; the caller must have checked
    /// `n` against the output window.
    #[inline]
    pub(crate) fn support(&self, n: i64) -> impl Iterator<Item = (T, usize)> + '_ {
        let (p, q) = (self.ratio.numer(), self.ratio.denom());
        let center = q * n;
        let m_min = ceil_div(center - self.tap_max, p).max(self.history.min_index());
        let m_max = floor_div(center - self.tap_min, p).min(self.history.max_index());
        (m_min..=m_max).map(move |m| {
            (
                self.history.read(m),
                (center - p * m - self.tap_min) as usize,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_core(in_rate: f64, out_rate: f64) -> ResamplerCore<f64> {
        ResamplerCore::new(in_rate, out_rate, &ResamplerOption::default(), 0.0).unwrap()
    }

    #[rstest::rstest]
    #[case(ResamplerError::InvalidInputRate(0.0), 0.0, 1.0, 30.0)]
    #[case(ResamplerError::InvalidInputRate(-1.0), -1.0, 1.0, 30.0)]
    #[case(ResamplerError::InvalidInputRate(f64::INFINITY), f64::INFINITY, 1.0, 30.0)]
    #[case(ResamplerError::InvalidOutputRate(0.0), 1.0, 0.0, 30.0)]
    #[case(ResamplerError::InvalidOutputRate(-8000.0), 1.0, -8000.0, 30.0)]
    #[case(ResamplerError::InvalidWindowWidth(0.0), 1.0, 1.0, 0.0)]
    #[case(ResamplerError::InvalidWindowWidth(-2.0), 1.0, 1.0, -2.0)]
    #[case(ResamplerError::InvalidRatio(Rational::ZERO), 1e9, 1.0, 30.0)]
    #[case(ResamplerError::TooManyTaps(6_000_000_000_001, 1 << 24), 1.0, 1e11, 30.0)]
    #[case(ResamplerError::TooManyTaps(6_000_000_001, 1 << 24), 1.0, 1e8, 30.0)]
    #[case(ResamplerError::TooManyTaps(60_000_001, 1 << 24), 1.0, 1e3, 30000.0)]
    #[test]
    fn new_err(
        #[case] expect: ResamplerError,
        #[case] in_rate: f64,
        #[case] out_rate: f64,
        #[case] window_width: f64,
    ) {
        let option = ResamplerOption {
            window_width,
            ..Default::default()
        };
        assert_eq!(
            Err(expect),
            ResamplerCore::new(in_rate, out_rate, &option, 0.0).map(|_| ())
        );
    }

    #[test]
    fn new_nan() {
        assert!(matches!(
            ResamplerCore::new(f64::NAN, 1.0, &ResamplerOption::default(), 0.0),
            Err(ResamplerError::InvalidInputRate(_))
        ));
    }

    #[rstest::rstest]
    #[case((3, 2), 1.5, 1.0, 1.5, 3, -90, 90, 64, 8000.0, 12000.0)]
    #[case((2, 3), 2. / 3., 2. / 3., 1.0, 3, -90, 90, 128, 12000.0, 8000.0)]
    #[case((1, 1), 1.0, 1.0, 1.0, 1, -30, 30, 64, 44100.0, 44100.0)]
    #[case((160, 147), 160. / 147., 1.0, 160. / 147., 160, -4800, 4800, 64, 44100.0, 48000.0)]
    #[case((147, 160), 147. / 160., 147. / 160., 1.0, 160, -4800, 4800, 128, 48000.0, 44100.0)]
    #[test]
    fn params(
        #[case] ratio: (i64, i64),
        #[case] gamma: f64,
        #[case] kappa: f64,
        #[case] delta: f64,
        #[case] xi: i64,
        #[case] tap_min: i64,
        #[case] tap_max: i64,
        #[case] capacity: usize,
        #[case] in_rate: f64,
        #[case] out_rate: f64,
    ) {
        let core = new_core(in_rate, out_rate);
        assert_eq!(Rational::try_from(ratio).unwrap(), core.ratio());
        approx::assert_abs_diff_eq!(gamma, core.gamma());
        approx::assert_abs_diff_eq!(kappa, core.kappa());
        approx::assert_abs_diff_eq!(delta, core.delta());
        assert_eq!(xi, core.xi());
        assert_eq!(tap_min, core.tap_min());
        assert_eq!(tap_max, core.tap_max());
        assert_eq!((tap_max - tap_min + 1) as usize, core.num_taps());
        assert_eq!(capacity, core.history().capacity());
        assert_eq!(30.0, core.window_width());
    }

    #[rstest::rstest]
    #[case(8000.0, 12000.0)]
    #[case(12000.0, 8000.0)]
    #[case(44100.0, 48000.0)]
    #[case(48000.0, 44100.0)]
    #[case(1.0, 1.0)]
    #[case(1.0, 7.0)]
    #[case(7.0, 1.0)]
    #[test]
    fn output_window_monotonic(#[case] in_rate: f64, #[case] out_rate: f64) {
        let mut core = new_core(in_rate, out_rate);
        let cap = core.history().capacity() as u64;
        let (mut min, mut max) = (core.min_output_index(), core.max_output_index());
        (0..4 * cap).for_each(|i| {
            core.push(i as f64);
            let (new_min, new_max) = (core.min_output_index(), core.max_output_index());
            assert!(new_max >= max);
            assert!(new_min >= min);
            (min, max) = (new_min, new_max);
        });
        assert!(min <= max);
    }

    #[rstest::rstest]
    #[case(8000.0, 12000.0)]
    #[case(12000.0, 8000.0)]
    #[case(44100.0, 48000.0)]
    #[case(48000.0, 44100.0)]
    #[case(1.0, 1.0)]
    #[case(1.0, 7.0)]
    #[case(7.0, 1.0)]
    #[test]
    fn support_within_history(#[case] in_rate: f64, #[case] out_rate: f64) {
        let mut core = new_core(in_rate, out_rate);
        let cap = core.history().capacity() as u64;
        (0..3 * cap).for_each(|i| {
            core.push(i as f64);
            (core.min_output_index()..=core.max_output_index()).for_each(|n| {
                let support = core.support(n).collect::<Vec<_>>();
                assert!(!support.is_empty());
                support.iter().for_each(|&(_, k)| assert!(k < core.num_taps()));
                // the ideal support is at most one sample wider than what was kept
                let t = n as f64 / core.gamma();
                let half = core.window_width() / core.kappa();
                let kept = support.len() as f64;
                assert!(kept >= 2.0 * half - 1.0, "{} {} {}", n, t, kept);
            });
        });
    }

    #[test]
    fn check() {
        let mut core = new_core(8000.0, 12000.0);
        (0..1000).for_each(|i| core.push(i as f64));
        assert_eq!(1448, core.min_output_index());
        assert_eq!(1452, core.max_output_index());
        assert_eq!(Ok(()), core.check(1448));
        assert_eq!(Ok(()), core.check(1452));
        assert_eq!(
            Err(ResamplerError::OutputIndexOutOfRange(1447, 1448, 1452)),
            core.check(1447)
        );
        assert_eq!(
            Err(ResamplerError::OutputIndexOutOfRange(1453, 1448, 1452)),
            core.check(1453)
        );
    }

    #[test]
    #[should_panic(expected = "Output index (0) is out of range ([1448, 1452])")]
    fn assert_output_index() {
        let mut core = new_core(8000.0, 12000.0);
        (0..1000).for_each(|i| core.push(i as f64));
        core.assert_output_index(0);
    }
}
