use super::{Rational, RationalError};

const EPSILON: f64 = 1e-12;
const MAX_TERMS: usize = 64;

/// Iterator over the convergents of the continued-fraction expansion of a real number.
///
/// Convergents are yielded in strictly increasing order of denominator. When the first
/// two convergents share the denominator `1` (the second partial quotient is `1`), only
/// the second, closer one is yielded.
///
/// The expansion stops when it terminates exactly, after 64 partial quotients, or when the
/// next convergent would overflow `i64`.
#[derive(Clone, Debug)]
pub struct Convergents {
    rem: f64,
    p: (i64, i64),
    q: (i64, i64),
    terms: usize,
    exact: bool,
    exhausted: bool,
    pending: Option<Rational>,
}

impl Convergents {
    fn new(x: f64) -> Self {
        Self {
            rem: x,
            p: (1, 0),
            q: (0, 1),
            terms: 0,
            exact: false,
            exhausted: !x.is_finite(),
            pending: None,
        }
    }

    // next partial quotient together with its convergent
    fn term(&mut self) -> Option<(i64, Rational)> {
        if self.exhausted || self.terms >= MAX_TERMS {
            return None;
        }
        let mut a = self.rem.floor();
        let mut frac = self.rem - a;
        // a remainder just below an integer is rounding noise of an exact expansion
        if 1.0 - frac < EPSILON {
            a += 1.0;
            frac = 0.0;
        }
        if a.abs() >= i64::MAX as f64 {
            self.exhausted = true;
            return None;
        }
        let a_int = a as i64;
        let next = |(k1, k2): (i64, i64)| a_int.checked_mul(k1)?.checked_add(k2);
        let (Some(p), Some(q)) = (next(self.p), next(self.q)) else {
            self.exhausted = true;
            return None;
        };
        self.p = (p, self.p.0);
        self.q = (q, self.q.0);
        self.terms += 1;

        if frac < EPSILON {
            self.exact = true;
            self.exhausted = true;
        } else {
            self.rem = 1.0 / frac;
        }
        Some((a_int, Rational { numer: p, denom: q }))
    }
}

impl Iterator for Convergents {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }
        if self.terms == 0 {
            let (_, first) = self.term()?;
            return match self.term() {
                Some((_, second)) if second.denom == first.denom => Some(second),
                Some((_, second)) => {
                    self.pending = Some(second);
                    Some(first)
                }
                None => Some(first),
            };
        }
        self.term().map(|(_, c)| c)
    }
}

/// Returns the convergents of `x`. See [`Convergents`].
#[must_use]
pub fn convergents(x: f64) -> Convergents {
    Convergents::new(x)
}

/// Returns the first `size` best rational approximations (convergents) of `x`, in
/// increasing order of denominator.
///
/// Fewer than `size` are returned when the expansion terminates earlier.
#[must_use]
pub fn best_approximations(x: f64, size: usize) -> Vec<Rational> {
    convergents(x).take(size).collect()
}

/// Finds a rational approximation `p/q` of `x`.
///
/// The convergents of `x` are visited in order and, for each, three conditions are checked
/// in priority order:
///
/// 1. `|x - p/q| < tol`: the convergent is returned.
/// 2. `q >= qmax`: the previous convergent is returned (the convergent itself if it is the
///    first one).
/// 3. It is the `k`-th convergent (1-based): the convergent is returned.
///
/// If the expansion ends before any condition triggers, the last convergent is returned.
///
/// `k` counts the convergents yielded by [`convergents`], not the partial quotients of the
/// expansion. When the first two convergents both have denominator `1`, only the second is
/// yielded, so e.g. for `0.9` the first convergent is `1/1` rather than `0/1`.
pub fn approximate(x: f64, tol: f64, qmax: i64, k: usize) -> Result<Rational, RationalError> {
    if !x.is_finite() {
        return Err(RationalError::NotFinite(x));
    }
    let mut prev = None;
    for (i, c) in convergents(x).enumerate() {
        if (x - c.to_f64()).abs() < tol {
            return Ok(c);
        }
        if c.denom >= qmax {
            return Ok(prev.unwrap_or(c));
        }
        if i + 1 >= k {
            return Ok(c);
        }
        prev = Some(c);
    }
    prev.ok_or(RationalError::OutOfRange(x))
}

/// Computes the first `size` partial quotients of the continued-fraction expansion of `x`.
///
/// Also returns an upper bound on `|x - p/q|` where `p/q` is the convergent built from the
/// returned quotients. The bound is `0` when the expansion terminated exactly and infinite
/// when no quotient was produced.
pub fn continued_fraction(x: f64, size: usize) -> Result<(Vec<i64>, f64), RationalError> {
    if !x.is_finite() {
        return Err(RationalError::NotFinite(x));
    }
    let mut cf = Convergents::new(x);
    let mut terms = Vec::with_capacity(size);
    while terms.len() < size {
        match cf.term() {
            Some((a, _)) => terms.push(a),
            None => break,
        }
    }
    if terms.is_empty() {
        return Ok((terms, f64::INFINITY));
    }
    if cf.exact {
        return Ok((terms, 0.0));
    }
    let (q, q_prev) = (cf.q.0 as f64, cf.q.1 as f64);
    let q_next = cf.rem.floor() * q + q_prev;
    let bound = if q_next > q { 1.0 / (q * q_next) } else { 1.0 / (q * q) };
    Ok((terms, bound))
}
