mod approximation;
mod error;

use std::cmp::Ordering;

use getset::CopyGetters;

use crate::utils::int::gcd;

pub use approximation::{
    approximate, best_approximations, continued_fraction, convergents, Convergents,
};
pub use error::RationalError;

/// A fraction in lowest terms with a positive denominator.
///
/// Arithmetic is performed in native 64-bit integers. Overflow for pathological inputs
/// (e.g. `i64::MIN` or sums of huge fractions) is not guarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CopyGetters)]
pub struct Rational {
    #[getset(get_copy = "pub")]
    /// The numerator.
    numer: i64,
    #[getset(get_copy = "pub")]
    /// The denominator, always positive.
    denom: i64,
}

impl Rational {
    /// A [`Rational`] of zero.
    pub const ZERO: Self = Self { numer: 0, denom: 1 };
    /// A [`Rational`] of one.
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// Creates a [`Rational`] equal to `a / b` in lowest terms.
    pub fn new(a: i64, b: i64) -> Result<Self, RationalError> {
        if b == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::reduced(a, b))
    }

    // b != 0
    pub(crate) fn reduced(a: i64, b: i64) -> Self {
        let g = gcd(a.unsigned_abs(), b.unsigned_abs()) as i64;
        let (numer, denom) = (a / g, b / g);
        if denom < 0 {
            Self {
                numer: -numer,
                denom: -denom,
            }
        } else {
            Self { numer, denom }
        }
    }

    /// Creates a [`Rational`] from an integer.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// The value as `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// `max(|numerator|, denominator)`.
    #[must_use]
    pub const fn height(&self) -> i64 {
        let p = self.numer.abs();
        if p > self.denom {
            p
        } else {
            self.denom
        }
    }

    /// The reciprocal, or [`RationalError::DivisionByZero`] for zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denom, self.numer)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::fmt::Display for Rational {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((a, b): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}

impl core::ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Self::Output {
        Self::reduced(
            self.numer * rhs.denom + rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl core::ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numer as i128 * other.denom as i128).cmp(&(other.numer as i128 * self.denom as i128))
    }
}
