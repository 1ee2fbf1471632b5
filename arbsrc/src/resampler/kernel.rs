use std::f64::consts::PI;

#[inline]
pub(crate) fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (x * PI).sin() / (x * PI)
    }
}

/// Blackman window of half width `width`, centered at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Blackman {
    pub width: f64,
}

impl Blackman {
    pub fn value(&self, t: f64) -> f64 {
        if t.abs() >= self.width {
            return 0.0;
        }
        let x = t / self.width;
        0.42 + 0.5 * (PI * x).cos() + 0.08 * (2.0 * PI * x).cos()
    }
}

/// Blackman-windowed sinc sampled on the grid `k / xi`.
///
/// The tap at integer index `k` weighs the input sample lying `k / p` input periods away
/// from the output instant, where `p / q` is the rate ratio and `xi = max(p, q)`. Scaling
/// by `kappa = min(1, p / q)` makes the kernel low-pass at the lower of the two Nyquist
/// frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowedSinc {
    kappa: f64,
    xi: f64,
    window: Blackman,
}

impl WindowedSinc {
    pub fn new(kappa: f64, xi: i64, width: f64) -> Self {
        Self {
            kappa,
            xi: xi as f64,
            window: Blackman { width },
        }
    }

    pub fn value(&self, k: i64) -> f64 {
        let t = k as f64 / self.xi;
        self.kappa * sinc(t) * self.window.value(t)
    }

    pub fn table(&self, min: i64, max: i64) -> Vec<f64> {
        (min..=max).map(|k| self.value(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(1.0, 0.0)]
    #[case(0.0, 1.0)]
    #[case(0.0, -3.0)]
    #[case(2.0 / PI, 0.5)]
    #[case(2.0 / PI, -0.5)]
    #[test]
    fn test_sinc(#[case] expect: f64, #[case] x: f64) {
        approx::assert_abs_diff_eq!(expect, sinc(x), epsilon = 1e-12);
    }

    #[rstest::rstest]
    #[case(1.0, 0.0)]
    #[case(0.0, 30.0)]
    #[case(0.0, -30.0)]
    #[case(0.0, 45.0)]
    #[case(0.34, 15.0)]
    #[case(0.34, -15.0)]
    #[test]
    fn test_blackman(#[case] expect: f64, #[case] t: f64) {
        approx::assert_abs_diff_eq!(expect, Blackman { width: 30.0 }.value(t), epsilon = 1e-12);
    }

    #[test]
    fn test_blackman_symmetric() {
        let window = Blackman { width: 7.5 };
        (0..100).map(|i| i as f64 * 0.1).for_each(|t| {
            assert_eq!(window.value(t), window.value(-t));
            assert!(window.value(t) >= -1e-15);
        });
    }

    #[test]
    fn test_windowed_sinc_identity() {
        let kernel = WindowedSinc::new(1.0, 1, 30.0);
        approx::assert_abs_diff_eq!(1.0, kernel.value(0), epsilon = 1e-12);
        (1..=30).for_each(|k| {
            approx::assert_abs_diff_eq!(0.0, kernel.value(k), epsilon = 1e-12);
            approx::assert_abs_diff_eq!(0.0, kernel.value(-k), epsilon = 1e-12);
        });
    }

    #[rstest::rstest]
    #[case(2.0 / 3.0, 3)]
    #[case(1.0, 3)]
    #[case(1.0, 147)]
    #[test]
    fn test_windowed_sinc_phase_sum(#[case] kappa: f64, #[case] xi: i64) {
        // each polyphase branch sums to about one, i.e. unit gain at DC
        let width = 30.0;
        let kernel = WindowedSinc::new(kappa, xi, width);
        let p = (kappa * xi as f64).round() as i64;
        let max = (xi as f64 * width).floor() as i64;
        let table = kernel.table(-max, max);
        (0..p).for_each(|r| {
            let sum: f64 = (-max..=max)
                .filter(|k| k.rem_euclid(p) == r)
                .map(|k| table[(k + max) as usize])
                .sum();
            approx::assert_abs_diff_eq!(1.0, sum, epsilon = 1e-3);
        });
    }
}
