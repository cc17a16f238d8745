//! Lunar position and phase: the truncated ELP-derived series of
//! Meeus chapter 47, the new-moon series of chapter 49, and the phase
//! inverses built on them.

use core_maths::CoreFloat;

use super::solar::{nutation, solar_longitude};
use super::{
    arcsin_deg, bisect_moment, cos_deg, declination, julian_centuries, poly,
    right_ascension, sidereal_from_moment, sin_deg, universal_from_dynamical, J2000,
    MEAN_SYNODIC_MONTH,
};
use crate::host::{HostContext, Location};
use crate::math::{fmodpos, mod_interval_f};
use crate::CalendarResult;

pub const NEW: f64 = 0.0;
pub const FIRST_QUARTER: f64 = 90.0;
pub const FULL: f64 = 180.0;
pub const LAST_QUARTER: f64 = 270.0;

/// Mean equatorial radius of the earth, in meters.
pub(crate) const EARTH_RADIUS: f64 = 6_378_140.0;

/// Series rows are `(v, w, x, y, z)`: amplitude v (sine or cosine,
/// millionths of a degree for the angles, meters for distance) applied
/// to the argument `w*D + x*M + y*M' + z*F`, damped by `E^|x|`.
type SeriesRow = (f64, i32, i32, i32, i32);

const LUNAR_LONGITUDE_TERMS: [SeriesRow; 59] = [
    (6288774.0, 0, 0, 1, 0),
    (1274027.0, 2, 0, -1, 0),
    (658314.0, 2, 0, 0, 0),
    (213618.0, 0, 0, 2, 0),
    (-185116.0, 0, 1, 0, 0),
    (-114332.0, 0, 0, 0, 2),
    (58793.0, 2, 0, -2, 0),
    (57066.0, 2, -1, -1, 0),
    (53322.0, 2, 0, 1, 0),
    (45758.0, 2, -1, 0, 0),
    (-40923.0, 0, 1, -1, 0),
    (-34720.0, 1, 0, 0, 0),
    (-30383.0, 0, 1, 1, 0),
    (15327.0, 2, 0, 0, -2),
    (-12528.0, 0, 0, 1, 2),
    (10980.0, 0, 0, 1, -2),
    (10675.0, 4, 0, -1, 0),
    (10034.0, 0, 0, 3, 0),
    (8548.0, 4, 0, -2, 0),
    (-7888.0, 2, 1, -1, 0),
    (-6766.0, 2, 1, 0, 0),
    (-5163.0, 1, 0, -1, 0),
    (4987.0, 1, 1, 0, 0),
    (4036.0, 2, -1, 1, 0),
    (3994.0, 2, 0, 2, 0),
    (3861.0, 4, 0, 0, 0),
    (3665.0, 2, 0, -3, 0),
    (-2689.0, 0, 1, -2, 0),
    (-2602.0, 2, 0, -1, 2),
    (2390.0, 2, -1, -2, 0),
    (-2348.0, 1, 0, 1, 0),
    (2236.0, 2, -2, 0, 0),
    (-2120.0, 0, 1, 2, 0),
    (-2069.0, 0, 2, 0, 0),
    (2048.0, 2, -2, -1, 0),
    (-1773.0, 2, 0, 1, -2),
    (-1595.0, 2, 0, 0, 2),
    (1215.0, 4, -1, -1, 0),
    (-1110.0, 0, 0, 2, 2),
    (-892.0, 3, 0, -1, 0),
    (-810.0, 2, 1, 1, 0),
    (759.0, 4, -1, -2, 0),
    (-713.0, 0, 2, -1, 0),
    (-700.0, 2, 2, -1, 0),
    (691.0, 2, 1, -2, 0),
    (596.0, 2, -1, 0, -2),
    (549.0, 4, 0, 1, 0),
    (537.0, 0, 0, 4, 0),
    (520.0, 4, -1, 0, 0),
    (-487.0, 1, 0, -2, 0),
    (-399.0, 2, 1, 0, -2),
    (-381.0, 0, 0, 2, -2),
    (351.0, 1, 1, 1, 0),
    (-340.0, 3, 0, -2, 0),
    (330.0, 4, 0, -3, 0),
    (327.0, 2, -1, 2, 0),
    (-323.0, 0, 2, 1, 0),
    (299.0, 1, 1, -1, 0),
    (294.0, 2, 0, 3, 0),
];

const LUNAR_LATITUDE_TERMS: [SeriesRow; 60] = [
    (5128122.0, 0, 0, 0, 1),
    (280602.0, 0, 0, 1, 1),
    (277693.0, 0, 0, 1, -1),
    (173237.0, 2, 0, 0, -1),
    (55413.0, 2, 0, -1, 1),
    (46271.0, 2, 0, -1, -1),
    (32573.0, 2, 0, 0, 1),
    (17198.0, 0, 0, 2, 1),
    (9266.0, 2, 0, 1, -1),
    (8822.0, 0, 0, 2, -1),
    (8216.0, 2, -1, 0, -1),
    (4324.0, 2, 0, -2, -1),
    (4200.0, 2, 0, 1, 1),
    (-3359.0, 2, 1, 0, -1),
    (2463.0, 2, -1, -1, 1),
    (2211.0, 2, -1, 0, 1),
    (2065.0, 2, -1, -1, -1),
    (-1870.0, 0, 1, -1, -1),
    (1828.0, 4, 0, -1, -1),
    (-1794.0, 0, 1, 0, 1),
    (-1749.0, 0, 0, 0, 3),
    (-1565.0, 0, 1, -1, 1),
    (-1491.0, 1, 0, 0, 1),
    (-1475.0, 0, 1, 1, 1),
    (-1410.0, 0, 1, 1, -1),
    (-1344.0, 0, 1, 0, -1),
    (-1335.0, 1, 0, 0, -1),
    (1107.0, 0, 0, 3, 1),
    (1021.0, 4, 0, 0, -1),
    (833.0, 4, 0, -1, 1),
    (777.0, 0, 0, 1, -3),
    (671.0, 4, 0, -2, 1),
    (607.0, 2, 0, 0, -3),
    (596.0, 2, 0, 2, -1),
    (491.0, 2, -1, 1, -1),
    (-451.0, 2, 0, -2, 1),
    (439.0, 0, 0, 3, -1),
    (422.0, 2, 0, 2, 1),
    (421.0, 2, 0, -3, -1),
    (-366.0, 2, 1, -1, 1),
    (-351.0, 2, 1, 0, 1),
    (331.0, 4, 0, 0, 1),
    (315.0, 2, -1, 1, 1),
    (302.0, 2, -2, 0, -1),
    (-283.0, 0, 0, 1, 3),
    (-229.0, 2, 1, 1, -1),
    (223.0, 1, 1, 0, -1),
    (223.0, 1, 1, 0, 1),
    (-220.0, 0, 1, -2, -1),
    (-220.0, 2, 1, -1, -1),
    (-185.0, 1, 0, 1, 1),
    (181.0, 2, -1, -2, -1),
    (-177.0, 0, 1, 2, 1),
    (176.0, 4, 0, -2, -1),
    (166.0, 4, -1, -1, -1),
    (-164.0, 1, 0, 1, -1),
    (132.0, 4, 0, 1, -1),
    (-119.0, 1, 0, -1, -1),
    (115.0, 4, -1, 0, -1),
    (107.0, 2, -2, 0, 1),
];

const LUNAR_DISTANCE_TERMS: [SeriesRow; 46] = [
    (-20905355.0, 0, 0, 1, 0),
    (-3699111.0, 2, 0, -1, 0),
    (-2955968.0, 2, 0, 0, 0),
    (-569925.0, 0, 0, 2, 0),
    (48888.0, 0, 1, 0, 0),
    (-3149.0, 0, 0, 0, 2),
    (246158.0, 2, 0, -2, 0),
    (-152138.0, 2, -1, -1, 0),
    (-170733.0, 2, 0, 1, 0),
    (-204586.0, 2, -1, 0, 0),
    (-129620.0, 0, 1, -1, 0),
    (108743.0, 1, 0, 0, 0),
    (104755.0, 0, 1, 1, 0),
    (10321.0, 2, 0, 0, -2),
    (79661.0, 0, 0, 1, -2),
    (-34782.0, 4, 0, -1, 0),
    (-23210.0, 0, 0, 3, 0),
    (-21636.0, 4, 0, -2, 0),
    (24208.0, 2, 1, -1, 0),
    (30824.0, 2, 1, 0, 0),
    (-8379.0, 1, 0, -1, 0),
    (-16675.0, 1, 1, 0, 0),
    (-12831.0, 2, -1, 1, 0),
    (-10445.0, 2, 0, 2, 0),
    (-11650.0, 4, 0, 0, 0),
    (14403.0, 2, 0, -3, 0),
    (-7003.0, 0, 1, -2, 0),
    (10056.0, 2, -1, -2, 0),
    (6322.0, 1, 0, 1, 0),
    (-9884.0, 2, -2, 0, 0),
    (5751.0, 0, 1, 2, 0),
    (-4950.0, 2, -2, -1, 0),
    (4130.0, 2, 0, 1, -2),
    (-3958.0, 4, -1, -1, 0),
    (3258.0, 3, 0, -1, 0),
    (2616.0, 2, 1, 1, 0),
    (-1897.0, 4, -1, -2, 0),
    (-2117.0, 0, 2, -1, 0),
    (2354.0, 2, 2, -1, 0),
    (-1423.0, 4, 0, 1, 0),
    (-1117.0, 0, 0, 4, 0),
    (-1571.0, 4, -1, 0, 0),
    (-1739.0, 1, 0, -2, 0),
    (-4421.0, 0, 0, 2, -2),
    (1165.0, 0, 2, 1, 0),
    (8752.0, 2, 0, -1, -2),
];

/// Mean longitude of the moon, in degrees.
fn mean_lunar_longitude(c: f64) -> f64 {
    fmodpos(
        poly(
            c,
            &[
                218.316_447_7,
                481_267.881_234_21,
                -0.001_578_6,
                1.0 / 538_841.0,
                -1.0 / 65_194_000.0,
            ],
        ),
        360.0,
    )
}

/// Mean elongation of the moon from the sun, in degrees.
fn lunar_elongation(c: f64) -> f64 {
    fmodpos(
        poly(
            c,
            &[
                297.850_192_1,
                445_267.111_403_4,
                -0.001_881_9,
                1.0 / 545_868.0,
                -1.0 / 113_065_000.0,
            ],
        ),
        360.0,
    )
}

/// Mean anomaly of the sun, in degrees.
fn solar_anomaly(c: f64) -> f64 {
    fmodpos(
        poly(
            c,
            &[357.529_109_2, 35_999.050_290_9, -0.000_153_6, 1.0 / 24_490_000.0],
        ),
        360.0,
    )
}

/// Mean anomaly of the moon, in degrees.
fn lunar_anomaly(c: f64) -> f64 {
    fmodpos(
        poly(
            c,
            &[
                134.963_396_4,
                477_198.867_505_5,
                0.008_741_4,
                1.0 / 69_699.0,
                -1.0 / 14_712_000.0,
            ],
        ),
        360.0,
    )
}

/// Argument of latitude of the moon, in degrees.
fn moon_node(c: f64) -> f64 {
    fmodpos(
        poly(
            c,
            &[
                93.272_095_0,
                483_202.017_523_3,
                -0.003_653_9,
                -1.0 / 3_526_000.0,
                1.0 / 863_310_000.0,
            ],
        ),
        360.0,
    )
}

/// Eccentricity damping factor for terms in the solar anomaly.
fn eccentricity(c: f64) -> f64 {
    poly(c, &[1.0, -0.002_516, -0.000_007_4])
}

fn series_sum(
    terms: &[SeriesRow],
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    e: f64,
    trig: impl Fn(f64) -> f64,
) -> f64 {
    let mut sum = 0.0;
    for &(v, w, x, y, z) in terms {
        let arg = f64::from(w) * d + f64::from(x) * m + f64::from(y) * mp + f64::from(z) * f;
        sum += v * e.powi(x.abs()) * trig(arg);
    }
    sum
}

/// Apparent longitude of the moon at a universal moment, in degrees
/// `[0, 360)`.
#[must_use]
pub fn lunar_longitude(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let lp = mean_lunar_longitude(c);
    let d = lunar_elongation(c);
    let m = solar_anomaly(c);
    let mp = lunar_anomaly(c);
    let f = moon_node(c);
    let e = eccentricity(c);
    let correction = series_sum(&LUNAR_LONGITUDE_TERMS, d, m, mp, f, e, sin_deg) / 1_000_000.0;
    let venus = 3958.0 / 1_000_000.0 * sin_deg(119.75 + 131.849 * c);
    let jupiter = 318.0 / 1_000_000.0 * sin_deg(53.09 + 479_264.29 * c);
    let flat_earth = 1962.0 / 1_000_000.0 * sin_deg(lp - f);
    fmodpos(
        lp + correction + venus + jupiter + flat_earth + nutation(t, host),
        360.0,
    )
}

/// Ecliptic latitude of the moon at a universal moment, in degrees.
#[must_use]
pub fn lunar_latitude(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let lp = mean_lunar_longitude(c);
    let d = lunar_elongation(c);
    let m = solar_anomaly(c);
    let mp = lunar_anomaly(c);
    let f = moon_node(c);
    let e = eccentricity(c);
    let a1 = 119.75 + 131.849 * c;
    let a3 = 313.45 + 481_266.484 * c;
    let extras = -2235.0 * sin_deg(lp) + 382.0 * sin_deg(a3) + 175.0 * sin_deg(a1 - f)
        + 175.0 * sin_deg(a1 + f)
        + 127.0 * sin_deg(lp - mp)
        - 115.0 * sin_deg(lp + mp);
    (series_sum(&LUNAR_LATITUDE_TERMS, d, m, mp, f, e, sin_deg) + extras) / 1_000_000.0
}

/// Distance from the centers of the earth and moon at a universal
/// moment, in meters.
#[must_use]
pub fn lunar_distance(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let c = julian_centuries(t, host);
    let d = lunar_elongation(c);
    let m = solar_anomaly(c);
    let mp = lunar_anomaly(c);
    let f = moon_node(c);
    let e = eccentricity(c);
    385_000_560.0 + series_sum(&LUNAR_DISTANCE_TERMS, d, m, mp, f, e, cos_deg)
}

/// Geocentric altitude of the moon above the horizon of `location`, in
/// degrees `(-180, 180]`, ignoring parallax and refraction.
#[must_use]
pub fn lunar_altitude(
    t: f64,
    location: &Location,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    let lambda = lunar_longitude(t, host);
    let beta = lunar_latitude(t, host);
    let alpha = right_ascension(t, beta, lambda, host);
    let delta = declination(t, beta, lambda, host);
    let hour_angle = fmodpos(sidereal_from_moment(t) + location.longitude - alpha, 360.0);
    let altitude = arcsin_deg(
        sin_deg(location.latitude) * sin_deg(delta)
            + cos_deg(location.latitude) * cos_deg(delta) * cos_deg(hour_angle),
    );
    mod_interval_f(altitude, -180.0, 180.0)
}

/// Parallax of the moon as seen from `location`, in degrees.
#[must_use]
pub fn lunar_parallax(
    t: f64,
    location: &Location,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    let geocentric = lunar_altitude(t, location, host);
    let sin_pi = EARTH_RADIUS / lunar_distance(t, host);
    arcsin_deg(sin_pi * cos_deg(geocentric))
}

/// Altitude of the moon as seen from `location`, corrected for
/// parallax but not refraction.
#[must_use]
pub fn topocentric_lunar_altitude(
    t: f64,
    location: &Location,
    host: &(impl HostContext + ?Sized),
) -> f64 {
    lunar_altitude(t, location, host) - lunar_parallax(t, location, host)
}

/// Lunar phase at a universal moment: the excess of the lunar over the
/// solar longitude, in degrees `[0, 360)`. 0 is new, 180 is full.
#[must_use]
pub fn lunar_phase(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    fmodpos(lunar_longitude(t, host) - solar_longitude(t, host), 360.0)
}

/// New-moon correction rows `(v, w, x, y, z)`: amplitude v on the
/// argument `x*M + y*M' + z*F`, damped by `E^w`.
const NEW_MOON_CORRECTIONS: [(f64, i32, i32, i32, i32); 24] = [
    (-0.40720, 0, 0, 1, 0),
    (0.17241, 1, 1, 0, 0),
    (0.01608, 0, 0, 2, 0),
    (0.01039, 0, 0, 0, 2),
    (0.00739, 1, -1, 1, 0),
    (-0.00514, 1, 1, 1, 0),
    (0.00208, 2, 2, 0, 0),
    (-0.00111, 0, 0, 1, -2),
    (-0.00057, 0, 0, 1, 2),
    (0.00056, 1, 1, 2, 0),
    (-0.00042, 0, 0, 3, 0),
    (0.00042, 1, 1, 0, 2),
    (0.00038, 1, 1, 0, -2),
    (-0.00024, 1, -1, 2, 0),
    (-0.00007, 0, 2, 1, 0),
    (0.00004, 0, 0, 2, -2),
    (0.00004, 0, 3, 0, 0),
    (0.00003, 0, 1, 1, -2),
    (0.00003, 0, 0, 2, 2),
    (-0.00003, 0, 1, 1, 2),
    (0.00003, 0, -1, 1, 2),
    (-0.00002, 0, -1, 1, -2),
    (-0.00002, 0, 1, 3, 0),
    (0.00002, 0, 0, 4, 0),
];

/// Planetary-argument additions `(i, j, l)`: `l * sin(i + j*k)`.
const NEW_MOON_ADDITIONS: [(f64, f64, f64); 13] = [
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// Universal moment of the `n`-th new moon after the new moon of
/// January 11, 1 (Gregorian), which is moon number 0.
#[must_use]
pub fn nth_new_moon(n: i64, host: &(impl HostContext + ?Sized)) -> f64 {
    let k = (n - 24_724) as f64;
    let c = k / 1236.85;
    let approx = J2000
        + poly(
            c,
            &[
                5.097_66,
                MEAN_SYNODIC_MONTH * 1236.85,
                0.000_154_37,
                -0.000_000_150,
                0.000_000_000_73,
            ],
        );
    let e = eccentricity(c);
    let m = poly(
        c,
        &[2.5534, 1236.85 * 29.105_356_70, -0.000_001_4, -0.000_000_11],
    );
    let mp = poly(
        c,
        &[
            201.5643,
            385.816_935_28 * 1236.85,
            0.010_758_2,
            0.000_012_38,
            -0.000_000_058,
        ],
    );
    let f = poly(
        c,
        &[
            160.7108,
            390.670_502_84 * 1236.85,
            -0.001_611_8,
            -0.000_002_27,
            0.000_000_011,
        ],
    );
    let omega = poly(
        c,
        &[124.7746, -1.563_755_88 * 1236.85, 0.002_067_2, 0.000_002_15],
    );
    let mut correction = -0.000_17 * sin_deg(omega);
    for &(v, w, x, y, z) in &NEW_MOON_CORRECTIONS {
        correction += v
            * e.powi(w)
            * sin_deg(f64::from(x) * m + f64::from(y) * mp + f64::from(z) * f);
    }
    let mut additional = 0.0;
    for &(i, j, l) in &NEW_MOON_ADDITIONS {
        additional += l * sin_deg(i + j * k);
    }
    universal_from_dynamical(approx + correction + additional, host)
}

/// Index of the mean new moon nearest `t`, seeding the exact searches.
fn new_moon_estimate(t: f64, host: &(impl HostContext + ?Sized)) -> i64 {
    let t0 = nth_new_moon(0, host);
    let phi = lunar_phase(t, host);
    ((t - t0) / MEAN_SYNODIC_MONTH - phi / 360.0).round() as i64
}

/// Moment of the last new moon strictly before `t`.
#[must_use]
pub fn new_moon_before(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let mut n = new_moon_estimate(t, host) - 2;
    while nth_new_moon(n + 1, host) < t {
        n += 1;
    }
    nth_new_moon(n, host)
}

/// Moment of the first new moon at or after `t`.
#[must_use]
pub fn new_moon_at_or_after(t: f64, host: &(impl HostContext + ?Sized)) -> f64 {
    let mut n = new_moon_estimate(t, host) - 1;
    while nth_new_moon(n, host) < t {
        n += 1;
    }
    nth_new_moon(n, host)
}

/// Last moment at or before `t` when the lunar phase was `phi`
/// (degrees).
pub fn lunar_phase_at_or_before(
    phi: f64,
    t: f64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    let rate = MEAN_SYNODIC_MONTH / 360.0;
    let tau = t - rate * fmodpos(lunar_phase(t, host) - phi, 360.0);
    bisect_moment(tau - 2.0, t.min(tau + 2.0), 1e-5, |x| {
        mod_interval_f(lunar_phase(x, host) - phi, -180.0, 180.0) > 0.0
    })
}

/// First moment at or after `t` when the lunar phase reaches `phi`
/// (degrees).
pub fn lunar_phase_at_or_after(
    phi: f64,
    t: f64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    let rate = MEAN_SYNODIC_MONTH / 360.0;
    let tau = t + rate * fmodpos(phi - lunar_phase(t, host), 360.0);
    bisect_moment(t.max(tau - 2.0), tau + 2.0, 1e-5, |x| {
        mod_interval_f(lunar_phase(x, host) - phi, -180.0, 180.0) > 0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus worked example 47.a: 1992 April 12, 0h dynamical time.
    const MEEUS_47A: f64 = 727_300.0;

    #[test]
    fn position_1992_april_12() {
        let t = universal_from_dynamical(MEEUS_47A, &());
        let lambda = lunar_longitude(t, &());
        // Apparent longitude, nutation included.
        assert!((lambda - 133.1673).abs() < 0.01, "got {lambda}");
        let beta = lunar_latitude(t, &());
        assert!((beta - (-3.229_126)).abs() < 0.01, "got {beta}");
        let delta = lunar_distance(t, &());
        assert!((delta - 368_409_700.0).abs() < 10_000.0, "got {delta}");
    }

    #[test]
    fn latitude_stays_within_orbit_inclination() {
        let mut t = 730_120.0;
        while t < 730_120.0 + 40.0 {
            let beta = lunar_latitude(t, &());
            assert!(beta.abs() < 5.4, "at {t}: {beta}");
            t += 0.5;
        }
    }

    #[test]
    fn distance_bounds() {
        // Perigee and apogee stay within 356,000 to 407,000 km.
        let mut t = 730_120.0;
        while t < 730_120.0 + 60.0 {
            let d = lunar_distance(t, &());
            assert!((3.5e8..4.1e8).contains(&d), "at {t}: {d}");
            t += 1.0;
        }
    }

    #[test]
    fn first_new_moon_of_2000() {
        // January 6, 2000, 18:14 UT.
        let expected = 730_125.0 + 18.23 / 24.0;
        let t = new_moon_at_or_after(J2000, &());
        assert!((t - expected).abs() < 0.05, "got {t}");
        assert!(lunar_phase(t, &()).min(360.0 - lunar_phase(t, &())) < 0.5);
        // The same moon is the one "before" any later moment.
        let before = new_moon_before(t + 10.0, &());
        assert!((before - t).abs() < 1e-9);
    }

    #[test]
    fn new_moons_are_a_synodic_month_apart() {
        for n in [0, 10_000, 24_724, 30_000] {
            let gap = nth_new_moon(n + 1, &()) - nth_new_moon(n, &());
            assert!((gap - MEAN_SYNODIC_MONTH).abs() < 0.7, "moon {n}: {gap}");
        }
    }

    #[test]
    fn full_moon_of_january_2000() {
        // January 21, 2000, 4:40 UT.
        let expected = 730_140.0 + 4.67 / 24.0;
        let t = lunar_phase_at_or_after(FULL, J2000, &()).unwrap();
        assert!((t - expected).abs() < 0.05, "got {t}");
        let back = lunar_phase_at_or_before(FULL, t + 0.5, &()).unwrap();
        assert!((back - t).abs() < 1e-3);
    }

    #[test]
    fn phase_agrees_with_new_moon_series() {
        let t = nth_new_moon(25_000, &());
        let phi = lunar_phase(t, &());
        assert!(phi.min(360.0 - phi) < 0.5, "got {phi}");
    }

    #[test]
    fn parallax_magnitude() {
        // Horizontal parallax of the moon is about a degree.
        let loc = crate::host::Location::GREENWICH;
        let mut t = 730_120.0;
        while t < 730_135.0 {
            let p = lunar_parallax(t, &loc, &());
            assert!((-1.1..1.1).contains(&p), "at {t}: {p}");
            assert!(
                topocentric_lunar_altitude(t, &loc, &()) <= lunar_altitude(t, &loc, &()) + 1e-9
            );
            t += 0.7;
        }
    }
}
