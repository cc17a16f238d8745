//! The arithmetic Persian (Solar Hijri) calendar, using Birashk's
//! 2820-year cycle of 683 leap years. The first six months have 31
//! days, the next five 30, and Esfand 29 or 30. There is no year 0.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Persian `{1, 1, 1}` (March 19, 622 CE Julian).
pub const PERSIAN_EPOCH: i64 = 226_896;

/// Days in one 2820-year cycle.
const CYCLE_DAYS: i64 = 1_029_983;

/// A Persian date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Persian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Year offset from the cycle anchor, skipping the nonexistent year 0.
#[inline]
const fn years_since_anchor(year: i64) -> i64 {
    year - if year > 0 { 474 } else { 473 }
}

/// True for leap years of the arithmetic scheme.
#[inline]
#[must_use]
pub const fn persian_leap_year(year: i64) -> bool {
    let cycle_year = imod(years_since_anchor(year), 2820) + 474;
    imod((cycle_year + 38) * 31, 128) < 31
}

/// Fixed day of a Persian date.
#[must_use]
pub const fn fixed_from_persian(date: &Persian) -> i64 {
    let y = years_since_anchor(date.year);
    let year = imod(y, 2820) + 474;
    let month_days = if date.month <= 7 {
        31 * (date.month - 1)
    } else {
        30 * (date.month - 1) + 6
    };
    PERSIAN_EPOCH - 1
        + CYCLE_DAYS * floor_div(y, 2820)
        + 365 * (year - 1)
        + floor_div(31 * year - 5, 128)
        + month_days
        + date.day
}

/// Persian year containing a fixed day.
#[must_use]
pub const fn persian_year_from_fixed(rd: i64) -> i64 {
    let d0 = rd - fixed_from_persian(&Persian::new(475, 1, 1));
    let n2820 = floor_div(d0, CYCLE_DAYS);
    let d1 = imod(d0, CYCLE_DAYS);
    // The last day of a cycle would otherwise round into year 2821.
    let y2820 = if d1 == CYCLE_DAYS - 1 {
        2820
    } else {
        floor_div(128 * d1 + 46_878, 46_751)
    };
    let year = 474 + 2820 * n2820 + y2820;
    if year > 0 {
        year
    } else {
        year - 1
    }
}

/// Persian date of a fixed day.
#[must_use]
pub const fn persian_from_fixed(rd: i64) -> Persian {
    let year = persian_year_from_fixed(rd);
    let day_of_year = rd - fixed_from_persian(&Persian::new(year, 1, 1)) + 1;
    let month = if day_of_year <= 186 {
        floor_div(day_of_year + 30, 31)
    } else {
        floor_div(day_of_year - 6 + 29, 30)
    };
    let day = rd - fixed_from_persian(&Persian::new(year, month, 1)) + 1;
    Persian::new(year, month, day)
}

impl ConvertibleDate for Persian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        persian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_persian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_persian(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.persian_month(self.month),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::julian::{fixed_from_julian, Julian};

    #[test]
    fn epoch() {
        assert_eq!(fixed_from_persian(&Persian::new(1, 1, 1)), PERSIAN_EPOCH);
        assert_eq!(fixed_from_julian(&Julian::new(622, 3, 19)), PERSIAN_EPOCH);
    }

    #[test]
    fn known_conversions() {
        for (rd, y, m, d) in [
            (-214_193, -1208, 5, 1),
            (253_427, 73, 8, 19),
            (400_085, 475, 3, 3),
            (567_118, 932, 6, 28),
            (727_274, 1370, 12, 27),
            (728_714, 1374, 12, 6),
        ] {
            let date = Persian::new(y, m, d);
            assert_eq!(fixed_from_persian(&date), rd, "fixed of {y}-{m}-{d}");
            assert_eq!(persian_from_fixed(rd), date, "date of {rd}");
        }
    }

    #[test]
    fn month_lengths() {
        let y = 1370;
        // Farvardin..Shahrivar have 31 days, Mehr..Bahman 30.
        assert_eq!(
            fixed_from_persian(&Persian::new(y, 2, 1)) - fixed_from_persian(&Persian::new(y, 1, 1)),
            31
        );
        assert_eq!(
            fixed_from_persian(&Persian::new(y, 8, 1)) - fixed_from_persian(&Persian::new(y, 7, 1)),
            30
        );
    }

    #[test]
    fn no_year_zero() {
        assert_eq!(
            persian_from_fixed(fixed_from_persian(&Persian::new(-1, 12, 29)) + 366),
            Persian::new(1, 12, 29)
        );
        let mut rd = -600_000;
        while rd <= 1_500_000 {
            assert_ne!(persian_from_fixed(rd).year, 0);
            rd += 9_973;
        }
    }

    #[test]
    fn round_trip() {
        let mut rd = -600_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_persian(&persian_from_fixed(rd)), rd);
            rd += 1_499;
        }
    }
}
