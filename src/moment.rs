//! The `Moment` primitive and conversions between the Rata Die (fixed
//! day) timeline and the astronomical Julian Day count.
//!
//! Every calendar in this crate converts through a single signed day
//! count with day 1 = proleptic Gregorian January 1 of year 1. A
//! [`Moment`] is that count plus a fractional time of day.

use num_traits::ToPrimitive;

use crate::host::HostContext;
use crate::math::{fmodpos, imod};
use crate::{CalendarError, CalendarResult};

use core_maths::CoreFloat;

/// Offset between the Julian Day count and the fixed-day count:
/// `RD = floor(JD + JD_EPOCH)`.
pub const JD_EPOCH: f64 = -1_721_424.5;

/// A fixed day count plus a fractional time of day.
///
/// The fractional part is always interpreted as non-negative: the moment
/// `-0.25` is 6 p.m. on fixed day `-1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Moment(pub(crate) f64);

impl Moment {
    /// Creates a new `Moment` from a real-valued fixed day.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Creates a `Moment` at midnight of the given fixed day.
    #[inline]
    #[must_use]
    pub fn from_fixed(rd: i64) -> Self {
        Self(rd as f64)
    }

    /// Returns the inner real value.
    #[inline]
    #[must_use]
    pub const fn as_inner(&self) -> f64 {
        self.0
    }

    /// Returns the fixed day containing this moment.
    #[inline]
    #[must_use]
    pub fn fixed(&self) -> i64 {
        self.0.floor() as i64
    }

    /// Returns the fixed day, failing on values outside the integer
    /// range instead of saturating.
    #[inline]
    pub fn checked_fixed(&self) -> CalendarResult<i64> {
        self.0
            .floor()
            .to_i64()
            .ok_or(CalendarError::range().with_message("moment exceeds the fixed date range."))
    }

    /// Returns the time of day as a fraction in `[0, 1)`, non-negative
    /// for moments before the epoch as well.
    #[inline]
    #[must_use]
    pub fn time_of_day(&self) -> f64 {
        fmodpos(self.0, 1.0)
    }

    /// Replaces the fixed-day part, keeping the time of day.
    #[inline]
    #[must_use]
    pub fn with_fixed(&self, rd: i64) -> Self {
        Self(rd as f64 + self.time_of_day())
    }
}

impl From<i64> for Moment {
    fn from(rd: i64) -> Self {
        Self::from_fixed(rd)
    }
}

/// Converts a Julian Day to a moment on the fixed-day timeline (UT).
#[inline]
#[must_use]
pub fn moment_from_jd(jd: f64) -> Moment {
    Moment(jd + JD_EPOCH)
}

/// Converts a Julian Day to a moment shifted by the host's UTC offset.
///
/// The offset is a function of the Julian Day and is evaluated at the
/// *input* `jd`.
#[inline]
#[must_use]
pub fn zoned_moment_from_jd(jd: f64, host: &(impl HostContext + ?Sized)) -> Moment {
    Moment(jd + JD_EPOCH + host.utc_offset(jd) / 24.0)
}

/// Converts a moment back to a Julian Day (UT).
#[inline]
#[must_use]
pub fn jd_from_moment(moment: Moment) -> f64 {
    moment.0 - JD_EPOCH
}

/// Converts a zone-shifted moment back to a Julian Day.
///
/// The UTC offset is evaluated at the already-converted Julian Day, not
/// at a fixed point of the round trip. This is asymmetric with respect
/// to [`zoned_moment_from_jd`]; the reference implementation behaves the
/// same way and its published conversion tables were derived against
/// this behavior, so it is kept rather than iterated to a fixed point.
#[inline]
#[must_use]
pub fn jd_from_zoned_moment(moment: Moment, host: &(impl HostContext + ?Sized)) -> f64 {
    let jd = moment.0 - JD_EPOCH;
    jd - host.utc_offset(jd) / 24.0
}

/// Returns the fixed day containing the given Julian Day (UT).
#[inline]
#[must_use]
pub fn fixed_from_jd(jd: f64) -> i64 {
    moment_from_jd(jd).fixed()
}

/// Returns the Julian Day at midnight of the given fixed day.
#[inline]
#[must_use]
pub fn jd_from_fixed(rd: i64) -> f64 {
    jd_from_moment(Moment::from_fixed(rd))
}

// Weekday numbering of the fixed-day timeline. R.D. 1 was a Monday.
pub const SUNDAY: i64 = 0;
pub const MONDAY: i64 = 1;
pub const TUESDAY: i64 = 2;
pub const WEDNESDAY: i64 = 3;
pub const THURSDAY: i64 = 4;
pub const FRIDAY: i64 = 5;
pub const SATURDAY: i64 = 6;

/// Day of week of a fixed day, `SUNDAY = 0`.
#[inline]
#[must_use]
pub const fn day_of_week_from_fixed(rd: i64) -> i64 {
    imod(rd, 7)
}

/// Latest fixed day with weekday `k` on or before `rd`.
#[inline]
#[must_use]
pub const fn kday_on_or_before(k: i64, rd: i64) -> i64 {
    rd - day_of_week_from_fixed(rd - k)
}

/// Earliest fixed day with weekday `k` on or after `rd`.
#[inline]
#[must_use]
pub const fn kday_on_or_after(k: i64, rd: i64) -> i64 {
    kday_on_or_before(k, rd + 6)
}

/// Fixed day with weekday `k` nearest to `rd`.
#[inline]
#[must_use]
pub const fn kday_nearest(k: i64, rd: i64) -> i64 {
    kday_on_or_before(k, rd + 3)
}

/// Latest fixed day with weekday `k` strictly before `rd`.
#[inline]
#[must_use]
pub const fn kday_before(k: i64, rd: i64) -> i64 {
    kday_on_or_before(k, rd - 1)
}

/// Earliest fixed day with weekday `k` strictly after `rd`.
#[inline]
#[must_use]
pub const fn kday_after(k: i64, rd: i64) -> i64 {
    kday_on_or_before(k, rd + 7)
}

/// The `n`-th weekday `k` counted from `rd`: forward for positive `n`
/// (exclusive of `rd` itself), backward for negative `n`.
#[inline]
#[must_use]
pub const fn nth_kday(n: i64, k: i64, rd: i64) -> i64 {
    if n > 0 {
        7 * n + kday_before(k, rd)
    } else {
        7 * n + kday_after(k, rd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OffsetHost(f64);

    impl HostContext for OffsetHost {
        fn utc_offset(&self, _jd: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn jd_anchors() {
        // JD 584282.5 is the Julian-calendar date of the Maya long count
        // epoch: 6 September -3114 (Julian).
        assert_eq!(fixed_from_jd(584_282.5), -1_137_142);
        // R.D. 1 begins at JD 1721425.5.
        assert_eq!(fixed_from_jd(1_721_425.5), 1);
        assert!((jd_from_fixed(1) - 1_721_425.5).abs() < 1e-9);
    }

    #[test]
    fn negative_moment_time_of_day() {
        let m = Moment::new(-0.25);
        assert_eq!(m.fixed(), -1);
        assert!((m.time_of_day() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zoned_conversion_asymmetry() {
        let host = OffsetHost(6.0);
        let jd = 2_451_545.0;
        let local = zoned_moment_from_jd(jd, &host);
        assert!((local.as_inner() - (jd + JD_EPOCH + 0.25)).abs() < 1e-9);
        // With a constant offset the asymmetric inverse still round-trips.
        assert!((jd_from_zoned_moment(local, &host) - jd).abs() < 1e-9);
    }

    #[test]
    fn weekday_searches() {
        // R.D. 1 = Monday, January 1, 1 (Gregorian).
        assert_eq!(day_of_week_from_fixed(1), MONDAY);
        assert_eq!(day_of_week_from_fixed(0), SUNDAY);
        assert_eq!(day_of_week_from_fixed(-7), SUNDAY);

        let rd = 730_120; // Saturday, January 1, 2000
        assert_eq!(day_of_week_from_fixed(rd), SATURDAY);
        assert_eq!(kday_on_or_before(SATURDAY, rd), rd);
        assert_eq!(kday_before(SATURDAY, rd), rd - 7);
        assert_eq!(kday_after(SATURDAY, rd), rd + 7);
        assert_eq!(kday_on_or_after(SUNDAY, rd), rd + 1);
        assert_eq!(kday_nearest(THURSDAY, rd), rd - 2);
    }
}
