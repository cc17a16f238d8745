//! Solar position: apparent longitude from the truncated series of
//! Meeus, and the longitude inverses the solar calendars are anchored
//! to.

use super::{
    bisect_moment, cos_deg, julian_centuries, poly, sin_deg, MEAN_TROPICAL_YEAR,
};
use crate::host::HostContext;
use crate::math::{fmodpos, mod_interval_f};
use crate::CalendarResult;

pub const SPRING: f64 = 0.0;
pub const SUMMER: f64 = 90.0;
pub const AUTUMN: f64 = 180.0;
pub const WINTER: f64 = 270.0;

/// Sine-series amplitudes (unitless x), phases (degrees y), and rates
/// (degrees per century z) of the solar longitude fit.
const SOLAR_X: [f64; 49] = [
    403406.0, 195207.0, 119433.0, 112392.0, 3891.0, 2819.0, 1721.0, 660.0, 350.0, 334.0,
    314.0, 268.0, 242.0, 234.0, 158.0, 132.0, 129.0, 114.0, 99.0, 93.0, 86.0, 78.0, 72.0,
    68.0, 64.0, 46.0, 38.0, 37.0, 32.0, 29.0, 28.0, 27.0, 27.0, 25.0, 24.0, 21.0, 21.0,
    20.0, 18.0, 17.0, 14.0, 13.0, 13.0, 13.0, 12.0, 10.0, 10.0, 10.0, 10.0,
];
const SOLAR_Y: [f64; 49] = [
    270.54861, 340.19128, 63.91854, 331.26220, 317.843, 86.631, 240.052, 310.26, 247.23,
    260.87, 297.82, 343.14, 166.79, 81.53, 3.50, 132.75, 182.95, 162.03, 29.8, 266.4,
    249.2, 157.6, 257.8, 185.1, 69.9, 8.0, 197.1, 250.4, 65.3, 162.7, 341.5, 291.6, 98.5,
    146.7, 110.0, 5.2, 342.6, 230.9, 256.1, 45.3, 242.9, 115.2, 151.8, 285.3, 53.3, 126.6,
    205.7, 85.9, 146.1,
];
const SOLAR_Z: [f64; 49] = [
    0.9287892,
    35999.1376958,
    35999.4089666,
    35998.7287385,
    71998.20261,
    71998.4403,
    36000.35726,
    71997.4812,
    32964.4678,
    -19.4410,
    445267.1117,
    45036.8840,
    3.1008,
    22518.4434,
    -19.9739,
    65928.9345,
    9038.0293,
    3034.7684,
    33718.148,
    3034.448,
    -2280.773,
    29929.992,
    31556.493,
    149.588,
    9037.750,
    107997.405,
    -4444.176,
    151.771,
    67555.316,
    31556.080,
    -4561.540,
    107996.706,
    1221.655,
    62894.167,
    31437.369,
    14578.298,
    -31931.757,
    34777.243,
    1221.999,
    62894.511,
    -4442.039,
    107997.909,
    119.066,
    16859.071,
    -4.578,
    26895.292,
    -39.127,
    12297.536,
    90073.778,
];

/// Longitudinal nutation at a moment, in degrees.
#[must_use]
pub fn nutation(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let a = poly(c, &[124.90, -1934.134, 0.002063]);
    let b = poly(c, &[201.11, 72001.5377, 0.00057]);
    -0.004778 * sin_deg(a) - 0.0003667 * sin_deg(b)
}

/// Aberration of solar light at a moment, in degrees.
#[must_use]
pub fn aberration(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    0.0000974 * cos_deg(177.63 + 35999.01848 * c) - 0.005575
}

/// Apparent longitude of the sun at a universal moment, in degrees
/// `[0, 360)`.
#[must_use]
pub fn solar_longitude(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let mut sum = 0.0;
    for i in 0..SOLAR_X.len() {
        sum += SOLAR_X[i] * sin_deg(SOLAR_Y[i] + SOLAR_Z[i] * c);
    }
    let lambda = 282.7771834 + 36000.76953744 * c + 0.000005729577951308232 * sum;
    fmodpos(lambda + aberration(t, host) + nutation(t, host), 360.0)
}

/// First moment at or after `t` when the solar longitude reaches
/// `lambda` (degrees).
pub fn solar_longitude_after(
    lambda: f64,
    t: f64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    // About a degree a day; the bracket comfortably covers the rate
    // variation over the orbit.
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = t + rate * fmodpos(lambda - solar_longitude(t, host), 360.0);
    let lo = t.max(tau - 5.0);
    let hi = tau + 5.0;
    bisect_moment(lo, hi, 1e-5, |x| {
        mod_interval_f(solar_longitude(x, host) - lambda, -180.0, 180.0) > 0.0
    })
}

/// Approximate moment, at or before `t`, when the solar longitude last
/// reached `lambda`. One mean-rate refinement step; used to seed year
/// searches, not as an inverse.
#[must_use]
pub fn estimate_prior_solar_longitude(
    lambda: f64,
    t: f64,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    let rate = MEAN_TROPICAL_YEAR / 360.0;
    let tau = t - rate * fmodpos(solar_longitude(t, host) - lambda, 360.0);
    let delta = mod_interval_f(solar_longitude(tau, host) - lambda, -180.0, 180.0);
    t.min(tau - rate * delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinox_2000() {
        // The March equinox of 2000 fell on March 20, 7:35 UT.
        let expected = 730_199.0 + 7.58 / 24.0;
        let t = solar_longitude_after(SPRING, 730_120.0, &()).unwrap();
        assert!((t - expected).abs() < 0.05, "got {t}");
        let lambda = solar_longitude(t, &());
        assert!(
            crate::math::mod_interval_f(lambda, -180.0, 180.0).abs() < 0.01,
            "got {lambda}"
        );
    }

    #[test]
    fn solstice_2000() {
        // December solstice of 2000: December 21, 13:37 UT.
        let expected = 730_475.0 + 13.62 / 24.0;
        let t = solar_longitude_after(WINTER, 730_400.0, &()).unwrap();
        assert!((t - expected).abs() < 0.05, "got {t}");
    }

    #[test]
    fn longitude_advances_daily() {
        let mut t = 730_120.0;
        while t < 730_150.0 {
            let step = fmodpos(solar_longitude(t + 1.0, &()) - solar_longitude(t, &()), 360.0);
            assert!((0.9..1.1).contains(&step), "at {t}: {step}");
            t += 1.0;
        }
    }

    #[test]
    fn prior_longitude_estimate() {
        // Seed a search for the equinox before mid-2000.
        let t = estimate_prior_solar_longitude(SPRING, 730_300.0, &());
        assert!(t <= 730_300.0);
        assert!((t - (730_199.0 + 7.58 / 24.0)).abs() < 1.0, "got {t}");
    }
}
