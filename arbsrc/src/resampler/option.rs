/// The option of the resamplers.
///
/// Larger `window_width`, smaller `tolerance` or larger `max_denominator` give a more
/// accurate output at the cost of a longer kernel and a larger history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResamplerOption {
    /// The half width `W` of the interpolation kernel in zero crossings.
    pub window_width: f64,
    /// Stop approximating the rate ratio once the error is below this value.
    pub tolerance: f64,
    /// Upper bound (exclusive) on the denominator of the approximated rate ratio.
    pub max_denominator: i64,
    /// Maximum number of convergents visited while approximating the rate ratio.
    pub max_convergents: usize,
}

impl Default for ResamplerOption {
    fn default() -> Self {
        Self {
            window_width: 30.0,
            tolerance: 1e-6,
            max_denominator: 1000,
            max_convergents: 10,
        }
    }
}
