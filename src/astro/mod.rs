//! Astronomical subroutines: time scales, the solar and lunar position
//! theories, and rise/set geometry. Formulas follow Reingold &
//! Dershowitz (after Meeus, *Astronomical Algorithms*); accuracy is the
//! arcminute-level fit those truncated series provide, which is what
//! the astronomical calendars are defined against.
//!
//! All moments are fixed-day moments (see [`crate::Moment`]); angles
//! are degrees unless noted.

pub mod lunar;
pub mod rise_set;
pub mod solar;

use core_maths::CoreFloat;

use crate::calendars::gregorian::{
    gregorian_date_difference, gregorian_year_from_fixed, Gregorian,
};
use crate::host::{HostContext, Location};
use crate::math::fmodpos;
use crate::moment::JD_EPOCH;
use crate::{CalendarError, CalendarResult};

/// Noon of January 1, 2000 (Gregorian) as a fixed moment.
pub const J2000: f64 = 730_120.5;

/// Mean length of the tropical year, in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242_189;

/// Mean length of the synodic month, in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;

/// Iteration cap for the bisection inverses.
const BISECTION_MAX_ITERS: u32 = 200;

/// Horner evaluation of a polynomial with ascending coefficients.
#[inline]
#[must_use]
pub fn poly(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[inline]
#[must_use]
pub fn sin_deg(theta: f64) -> f64 {
    theta.to_radians().sin()
}

#[inline]
#[must_use]
pub fn cos_deg(theta: f64) -> f64 {
    theta.to_radians().cos()
}

#[inline]
#[must_use]
pub fn tan_deg(theta: f64) -> f64 {
    theta.to_radians().tan()
}

#[inline]
#[must_use]
pub fn arcsin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

#[inline]
#[must_use]
pub fn arccos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Quadrant-correct arctangent, in degrees `[0, 360)`.
#[inline]
#[must_use]
pub fn arctan_deg(y: f64, x: f64) -> f64 {
    fmodpos(y.atan2(x).to_degrees(), 360.0)
}

/// ΔT approximation in days at a fixed moment, from the piecewise
/// polynomial fit of Espenak and Meeus.
#[must_use]
pub fn ephemeris_correction(t: f64) -> f64 {
    let year = gregorian_year_from_fixed(t.floor() as i64);
    let y = year as f64;
    let y2000 = y - 2000.0;
    let c = gregorian_date_difference(
        &Gregorian::new(1900, 1, 1),
        &Gregorian::new(year, 7, 1),
    ) as f64
        / 36525.0;
    let seconds = if (2051..=2150).contains(&year) {
        let x = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * x * x + 0.5628 * (2150.0 - y)
    } else if (2006..=2050).contains(&year) {
        poly(y2000, &[62.92, 0.32217, 0.005589])
    } else if (1987..=2005).contains(&year) {
        poly(
            y2000,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        )
    } else if (1900..=1986).contains(&year) {
        return poly(
            c,
            &[
                -0.00002, 0.000297, 0.025184, -0.181133, 0.553040, -0.861938, 0.677066,
                -0.212591,
            ],
        );
    } else if (1800..=1899).contains(&year) {
        return poly(
            c,
            &[
                -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535, 31.332267,
                38.291999, 28.316289, 11.636204, 2.043794,
            ],
        );
    } else if (1700..=1799).contains(&year) {
        poly(y - 1700.0, &[8.118780842, -0.005092142, 0.003336121, -0.0000266484])
    } else if (1600..=1699).contains(&year) {
        poly(y - 1600.0, &[120.0, -0.9808, -0.01532, 0.000140272128])
    } else if (500..=1599).contains(&year) {
        poly(
            (y - 1000.0) / 100.0,
            &[
                1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073,
            ],
        )
    } else if (-499..500).contains(&year) {
        poly(
            y / 100.0,
            &[
                10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521,
            ],
        )
    } else {
        let x = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * x * x
    };
    seconds / 86400.0
}

/// Dynamical time of a universal-time moment.
#[inline]
#[must_use]
pub fn dynamical_from_universal(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    t + host.delta_t(t - JD_EPOCH) / 86400.0
}

/// Universal time of a dynamical-time moment.
#[inline]
#[must_use]
pub fn universal_from_dynamical(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    t - host.delta_t(t - JD_EPOCH) / 86400.0
}

/// Julian centuries of dynamical time since J2000.
#[inline]
#[must_use]
pub fn julian_centuries(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    (dynamical_from_universal(t, host) - J2000) / 36525.0
}

/// Standard (zone) time of a universal moment.
#[inline]
#[must_use]
pub fn standard_from_universal(t: f64, location: &Location) -> f64 {
    t + location.zone()
}

/// Universal time of a standard (zone) moment.
#[inline]
#[must_use]
pub fn universal_from_standard(t: f64, location: &Location) -> f64 {
    t - location.zone()
}

/// Mean local time of a universal moment.
#[inline]
#[must_use]
pub fn local_from_universal(t: f64, location: &Location) -> f64 {
    t + location.longitude / 360.0
}

/// Universal time of a mean local moment.
#[inline]
#[must_use]
pub fn universal_from_local(t: f64, location: &Location) -> f64 {
    t - location.longitude / 360.0
}

/// Standard time of a mean local moment.
#[inline]
#[must_use]
pub fn standard_from_local(t: f64, location: &Location) -> f64 {
    standard_from_universal(universal_from_local(t, location), location)
}

/// Mean local time of a standard moment.
#[inline]
#[must_use]
pub fn local_from_standard(t: f64, location: &Location) -> f64 {
    local_from_universal(universal_from_standard(t, location), location)
}

/// Apparent (sundial) time of a mean local moment.
#[inline]
#[must_use]
pub fn apparent_from_local(
    t: f64,
    location: &Location,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    t + equation_of_time(universal_from_local(t, location), host)
}

/// Mean local time of an apparent moment.
#[inline]
#[must_use]
pub fn local_from_apparent(
    t: f64,
    location: &Location,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    t - equation_of_time(universal_from_local(t, location), host)
}

/// Mean obliquity of the ecliptic at a moment, in degrees.
#[must_use]
pub fn obliquity(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    23.439_291_11
        + poly(
            c,
            &[0.0, -0.013_004_167, -0.000_000_163_889, 0.000_000_503_611_1],
        )
}

/// Declination of a body at ecliptic latitude `beta` and longitude
/// `lambda`, in degrees.
#[must_use]
pub fn declination(t: f64, beta: f64, lambda: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let eps = obliquity(t, host);
    arcsin_deg(sin_deg(beta) * cos_deg(eps) + cos_deg(beta) * sin_deg(eps) * sin_deg(lambda))
}

/// Right ascension of a body at ecliptic latitude `beta` and longitude
/// `lambda`, in degrees.
#[must_use]
pub fn right_ascension(
    t: f64,
    beta: f64,
    lambda: f64,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    let eps = obliquity(t, host);
    arctan_deg(
        sin_deg(lambda) * cos_deg(eps) - tan_deg(beta) * sin_deg(eps),
        cos_deg(lambda),
    )
}

/// Mean sidereal time at Greenwich, in degrees `[0, 360)`. Computed
/// from universal time directly; ΔT does not enter.
#[must_use]
pub fn sidereal_from_moment(t: f64) -> f64 {
    let c = (t - J2000) / 36525.0;
    fmodpos(
        poly(
            c,
            &[
                280.460_618_37,
                36525.0 * 360.985_647_366_29,
                0.000_387_933,
                -1.0 / 38_710_000.0,
            ],
        ),
        360.0,
    )
}

/// Equation of time at a universal moment, as a fraction of a day,
/// clamped to half a day.
#[must_use]
pub fn equation_of_time(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let lambda = poly(c, &[280.46645, 36000.76983, 0.0003032]);
    let anomaly = poly(c, &[357.52910, 35999.05030, -0.0001559, -0.00000048]);
    let eccentricity = poly(c, &[0.016708617, -0.000042037, -0.0000001236]);
    let epsilon = obliquity(t, host);
    let y = tan_deg(epsilon / 2.0).powi(2);
    let equation = (y * sin_deg(2.0 * lambda) - 2.0 * eccentricity * sin_deg(anomaly)
        + 4.0 * eccentricity * y * sin_deg(anomaly) * cos_deg(2.0 * lambda)
        - 0.5 * y * y * sin_deg(4.0 * lambda)
        - 1.25 * eccentricity * eccentricity * sin_deg(2.0 * anomaly))
        / (2.0 * core::f64::consts::PI);
    equation.signum() * equation.abs().min(0.5)
}

/// Bisection for the moment in `[lo, hi]` where `past` flips from false
/// to true, to within `tolerance` days.
///
/// The predicate must be monotone over the bracket (false before the
/// event, true after); the bracket width is halved each step, and a
/// bracket that fails to narrow within the iteration cap reports
/// [`ErrorKind::Convergence`](crate::ErrorKind::Convergence).
pub fn bisect_moment(
    mut lo: f64,
    mut hi: f64,
    tolerance: f64,
    mut past: impl FnMut(f64) -> bool,
) -> CalendarResult<f64> {
    for _ in 0..BISECTION_MAX_ITERS {
        let mid = (lo + hi) / 2.0;
        if hi - lo < tolerance {
            return Ok(mid);
        }
        if past(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    #[cfg(feature = "log")]
    log::warn!("bisection bracket [{lo}, {hi}] not narrowed after {BISECTION_MAX_ITERS} iterations");
    Err(CalendarError::convergence().with_message("bisection failed to narrow its bracket."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_evaluation() {
        assert!((poly(2.0, &[1.0, 2.0, 3.0]) - 17.0).abs() < 1e-12);
        assert!((poly(0.0, &[5.0]) - 5.0).abs() < 1e-12);
        assert!(poly(3.0, &[]).abs() < 1e-12);
    }

    #[test]
    fn j2000_anchor() {
        // Noon of January 1, 2000.
        use crate::calendars::gregorian::{fixed_from_gregorian, Gregorian};
        assert!((J2000 - (fixed_from_gregorian(&Gregorian::new(2000, 1, 1)) as f64 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn delta_t_magnitudes() {
        // ΔT was about 64 seconds in 2000, 14 seconds in 1900, and
        // measured in hours in the far past.
        let dt2000 = ephemeris_correction(730_120.0) * 86400.0;
        assert!((dt2000 - 64.0).abs() < 5.0, "got {dt2000}");
        let dt1900 = ephemeris_correction(693_596.0) * 86400.0;
        assert!((dt1900 + 3.0).abs() < 10.0, "got {dt1900}");
        let dt_ancient = ephemeris_correction(-200_000.0) * 86400.0;
        assert!(dt_ancient > 10_000.0, "got {dt_ancient}");
    }

    #[test]
    fn obliquity_at_j2000() {
        let eps = obliquity(J2000, &());
        assert!((eps - 23.4393).abs() < 0.001, "got {eps}");
    }

    #[test]
    fn sidereal_at_j2000() {
        // GMST at J2000 is 18h 41m 50.5s ~ 280.46 degrees.
        let theta = sidereal_from_moment(J2000);
        assert!((theta - 280.4606).abs() < 0.01, "got {theta}");
    }

    #[test]
    fn equation_of_time_bounds() {
        // The equation of time stays within about 17 minutes.
        let mut t = 730_120.0;
        while t < 730_120.0 + 366.0 {
            let eot = equation_of_time(t, &()) * 24.0 * 60.0;
            assert!(eot.abs() < 18.0, "at {t}: {eot} minutes");
            t += 5.0;
        }
    }

    #[test]
    fn bisection_finds_root() {
        // Locate x = 0.25 as the flip point of x > 0.25 on [0, 1].
        let x = bisect_moment(0.0, 1.0, 1e-9, |m| m > 0.25).unwrap();
        assert!((x - 0.25).abs() < 1e-8);
    }

    #[test]
    fn bisection_convergence_cap() {
        // A tolerance of zero can never be met.
        let err = bisect_moment(0.0, 1.0, 0.0, |m| m > 0.25).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Convergence);
    }

    #[test]
    fn time_scale_chain() {
        let loc = Location::new(35.0, 75.0, 0.0, 5.0);
        let t = 730_500.25;
        assert!((universal_from_local(local_from_universal(t, &loc), &loc) - t).abs() < 1e-12);
        assert!((universal_from_standard(standard_from_universal(t, &loc), &loc) - t).abs() < 1e-12);
        assert!((local_from_standard(t, &loc) - (t + 75.0 / 360.0 - 5.0 / 24.0)).abs() < 1e-12);
    }
}
