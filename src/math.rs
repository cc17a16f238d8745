//! Numeric primitives shared by every calendar.
//!
//! The reference algorithms assume a true mathematical modulus and floor
//! division. Rust's `%` and `/` truncate toward zero, so the variants
//! here are spelled out and used everywhere a negative fixed date can
//! reach.

use alloc::vec::Vec;

/// Integer modulus with a result in `[0, b)` for positive `b`,
/// regardless of the sign of `a`.
#[inline]
#[must_use]
pub const fn imod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r < 0 {
        r + b
    } else {
        r
    }
}

/// Adjusted modulus with a result in `[1, b]`: `imod` with a zero result
/// mapped to `b`. Used for 1-indexed cyclic values (weekday names,
/// tzolkin numbers, ...).
#[inline]
#[must_use]
pub const fn amod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r <= 0 {
        r + b
    } else {
        r
    }
}

/// Float modulus with a non-negative result in `[0, b)`.
#[inline]
#[must_use]
pub fn fmodpos(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r < 0.0 {
        r + b
    } else {
        r
    }
}

/// Floor division: rounds toward negative infinity for all sign
/// combinations. `floor_div(-8, 3) == -3`, `floor_div(8, -2) == -4`,
/// `floor_div(-8, -2) == 4`.
#[inline]
#[must_use]
pub const fn floor_div(num: i64, den: i64) -> i64 {
    let q = num / den;
    if num % den != 0 && (num < 0) != (den < 0) {
        q - 1
    } else {
        q
    }
}

/// Shift `x` into the half-open interval `[a, b)`.
///
/// If `a == b` the interval is degenerate and `x` is returned unchanged.
///
/// Note that `mod_interval(x, 1, n)` is *not* the 1-indexed cycle of
/// length `n`; it equals `amod(x, n - 1)`. Callers wanting `amod(x, n)`
/// behavior must pass `b = n + 1`.
#[inline]
#[must_use]
pub const fn mod_interval(x: i64, a: i64, b: i64) -> i64 {
    if a == b {
        x
    } else {
        a + imod(x - a, b - a)
    }
}

/// Float counterpart of [`mod_interval`].
#[inline]
#[must_use]
pub fn mod_interval_f(x: f64, a: f64, b: f64) -> f64 {
    if a == b {
        x
    } else {
        a + fmodpos(x - a, b - a)
    }
}

/// Decompose `num` into mixed-radix digits, most-significant first.
///
/// The last entry of `radices` is the radix of the least-significant
/// place (the convention of the reference text). The result has
/// `radices.len() + 1` digits; the leading digit carries whatever does
/// not fit in the given places, so the decomposition is total for
/// negative input as well.
#[must_use]
pub fn to_radix(num: i64, radices: &[i64]) -> Vec<i64> {
    let mut digits = Vec::with_capacity(radices.len() + 1);
    let mut rest = num;
    for &radix in radices.iter().rev() {
        digits.push(imod(rest, radix));
        rest = floor_div(rest, radix);
    }
    digits.push(rest);
    digits.reverse();
    digits
}

/// Weighted recombination `Σ (parts[i] + corr) * factors[i]`, the inverse
/// companion of [`to_radix`] (e.g. the Icelandic leap-week rule).
#[must_use]
pub fn rd_corr_sum(parts: &[i64], factors: &[i64], corr: i64) -> i64 {
    parts
        .iter()
        .zip(factors)
        .map(|(p, f)| (p + corr) * f)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn floor_div_sign_cases() {
        assert_eq!(floor_div(-8, 3), -3);
        assert_eq!(floor_div(8, -2), -4);
        assert_eq!(floor_div(-8, -2), 4);
        assert_eq!(floor_div(8, 3), 2);
        assert_eq!(floor_div(-9, 3), -3);
    }

    #[test]
    fn imod_amod_ranges() {
        assert_eq!(imod(-1, 7), 6);
        assert_eq!(imod(7, 7), 0);
        assert_eq!(amod(7, 7), 7);
        assert_eq!(amod(0, 13), 13);
        assert_eq!(amod(-5, 13), 8);
    }

    #[test]
    fn fmodpos_negative_input() {
        assert!((fmodpos(-0.25, 1.0) - 0.75).abs() < 1e-12);
        assert!((fmodpos(2.5, 1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mod_interval_cases() {
        assert_eq!(mod_interval(5, 1, 5), 1);
        assert_eq!(mod_interval(5, 0, 4), 1);
        assert_eq!(mod_interval(5, 1, 3), 1);
        assert_eq!(mod_interval(5, 0, 3), 2);
        assert_eq!(mod_interval(5, 1, 2), 1);
        assert_eq!(mod_interval(6, 1, 2), 1);
        // degenerate interval passes x through
        assert_eq!(mod_interval(42, 3, 3), 42);
    }

    // The upper bound of mod_interval is exclusive: (.., 1, n) matches
    // amod(., n - 1), not amod(., n).
    #[test]
    fn mod_interval_vs_amod() {
        assert_eq!(mod_interval(42, 1, 7), amod(42, 6));
        assert_eq!(mod_interval(43, 1, 7), amod(43, 6));
        for x in -100..100 {
            assert_eq!(mod_interval(x, 1, 14), amod(x, 13));
        }
    }

    #[test]
    fn radix_decomposition() {
        assert_eq!(to_radix(100, &[4]), vec![25, 0]);
        assert_eq!(to_radix(100, &[5, 4]), vec![5, 0, 0]);
        assert_eq!(to_radix(44, &[25, 4]), vec![0, 11, 0]);
    }

    #[test]
    fn radix_recombination() {
        let digits = to_radix(2023, &[25, 4]);
        // place values are 100, 4, 1
        assert_eq!(rd_corr_sum(&digits, &[100, 4, 1], 0), 2023);
    }
}
