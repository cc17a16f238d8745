//! The proleptic Gregorian calendar, the anchor of the fixed-day
//! timeline: R.D. 1 is Gregorian January 1 of year 1.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

pub const JANUARY: i64 = 1;
pub const FEBRUARY: i64 = 2;
pub const MARCH: i64 = 3;
pub const APRIL: i64 = 4;
pub const MAY: i64 = 5;
pub const JUNE: i64 = 6;
pub const JULY: i64 = 7;
pub const AUGUST: i64 = 8;
pub const SEPTEMBER: i64 = 9;
pub const OCTOBER: i64 = 10;
pub const NOVEMBER: i64 = 11;
pub const DECEMBER: i64 = 12;

/// R.D. of Gregorian `{1, 1, 1}`.
pub const GREGORIAN_EPOCH: i64 = 1;

/// A Gregorian date record; parts are `[year, month, day]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gregorian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Gregorian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for leap years of the proleptic Gregorian calendar.
#[inline]
#[must_use]
pub const fn gregorian_leap_year(year: i64) -> bool {
    imod(year, 4) == 0 && {
        let century = imod(year, 400);
        century != 100 && century != 200 && century != 300
    }
}

/// Fixed day of a Gregorian date.
#[must_use]
pub const fn fixed_from_gregorian(date: &Gregorian) -> i64 {
    let y = date.year - 1;
    let correction = if date.month <= 2 {
        0
    } else if gregorian_leap_year(date.year) {
        -1
    } else {
        -2
    };
    GREGORIAN_EPOCH - 1
        + 365 * y
        + floor_div(y, 4)
        - floor_div(y, 100)
        + floor_div(y, 400)
        + floor_div(367 * date.month - 362, 12)
        + correction
        + date.day
}

/// Gregorian year containing a fixed day.
#[must_use]
pub const fn gregorian_year_from_fixed(rd: i64) -> i64 {
    let d0 = rd - GREGORIAN_EPOCH;
    let n400 = floor_div(d0, 146_097);
    let d1 = imod(d0, 146_097);
    let n100 = floor_div(d1, 36_524);
    let d2 = imod(d1, 36_524);
    let n4 = floor_div(d2, 1_461);
    let d3 = imod(d2, 1_461);
    let n1 = floor_div(d3, 365);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        year
    } else {
        year + 1
    }
}

/// Gregorian date of a fixed day.
#[must_use]
pub const fn gregorian_from_fixed(rd: i64) -> Gregorian {
    let year = gregorian_year_from_fixed(rd);
    let prior_days = rd - gregorian_new_year(year);
    let correction = if rd < fixed_from_gregorian(&Gregorian::new(year, MARCH, 1)) {
        0
    } else if gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = floor_div(12 * (prior_days + correction) + 373, 367);
    let day = rd - fixed_from_gregorian(&Gregorian::new(year, month, 1)) + 1;
    Gregorian::new(year, month, day)
}

/// Fixed day of January 1 of a Gregorian year.
#[inline]
#[must_use]
pub const fn gregorian_new_year(year: i64) -> i64 {
    fixed_from_gregorian(&Gregorian::new(year, JANUARY, 1))
}

/// Fixed day of December 31 of a Gregorian year.
#[inline]
#[must_use]
pub const fn gregorian_year_end(year: i64) -> i64 {
    fixed_from_gregorian(&Gregorian::new(year, DECEMBER, 31))
}

/// Signed day count from one Gregorian date to another.
#[inline]
#[must_use]
pub const fn gregorian_date_difference(from: &Gregorian, to: &Gregorian) -> i64 {
    fixed_from_gregorian(to) - fixed_from_gregorian(from)
}

/// 1-based ordinal of a date within its Gregorian year.
#[inline]
#[must_use]
pub const fn day_number(date: &Gregorian) -> i64 {
    gregorian_date_difference(&Gregorian::new(date.year - 1, DECEMBER, 31), date)
}

/// Days remaining in the date's Gregorian year.
#[inline]
#[must_use]
pub const fn days_remaining(date: &Gregorian) -> i64 {
    gregorian_date_difference(date, &Gregorian::new(date.year, DECEMBER, 31))
}

impl ConvertibleDate for Gregorian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        gregorian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_gregorian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_gregorian(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.gregorian_month(amod(self.month, 12)),
            self.year.to_string(),
        ]
    }
}
