use num::Complex;

/// Greatest common divisor by the Euclidean algorithm. `gcd(0, 0)` is `0`.
#[must_use]
pub const fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// The smallest power of two greater than or equal to `n` (`1` for `n == 0`).
#[must_use]
pub const fn greater_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// `floor(a / b)` for `b > 0`.
#[must_use]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// `ceil(a / b)` for `b > 0`.
#[must_use]
pub const fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

/// Clips a signed 32-bit integer into `[-2^15, 2^15)`.
#[must_use]
pub const fn clip_16(x: i32) -> i16 {
    if x > i16::MAX as i32 {
        i16::MAX
    } else if x < i16::MIN as i32 {
        i16::MIN
    } else {
        x as i16
    }
}

/// Clips both parts of a 32-bit complex value into the 16-bit range.
#[must_use]
pub const fn clip_complex_16(x: Complex<i32>) -> Complex<i16> {
    Complex {
        re: clip_16(x.re),
        im: clip_16(x.im),
    }
}

/// Saturating conversion of a 64-bit accumulator into 32 bits.
#[must_use]
pub const fn saturate_32(x: i64) -> i32 {
    if x > i32::MAX as i64 {
        i32::MAX
    } else if x < i32::MIN as i64 {
        i32::MIN
    } else {
        x as i32
    }
}
