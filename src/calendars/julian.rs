//! The proleptic Julian calendar. There is no year 0: year -1 (1 BCE)
//! is followed by year 1 (1 CE).

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Julian `{1, 1, 1}` (Gregorian December 30, year 0).
pub const JULIAN_EPOCH: i64 = -1;

/// A Julian date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Julian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Julian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for leap years of the proleptic Julian calendar. Because year 0
/// is skipped, the BCE leap years are those ≡ 3 (mod 4).
#[inline]
#[must_use]
pub const fn julian_leap_year(year: i64) -> bool {
    imod(year, 4) == if year > 0 { 0 } else { 3 }
}

/// Fixed day of a Julian date.
#[must_use]
pub const fn fixed_from_julian(date: &Julian) -> i64 {
    let y = if date.year < 0 { date.year + 1 } else { date.year };
    let correction = if date.month <= 2 {
        0
    } else if julian_leap_year(date.year) {
        -1
    } else {
        -2
    };
    JULIAN_EPOCH - 1
        + 365 * (y - 1)
        + floor_div(y - 1, 4)
        + floor_div(367 * date.month - 362, 12)
        + correction
        + date.day
}

/// Julian date of a fixed day.
#[must_use]
pub const fn julian_from_fixed(rd: i64) -> Julian {
    let approx = floor_div(4 * (rd - JULIAN_EPOCH) + 1464, 1461);
    let year = if approx <= 0 { approx - 1 } else { approx };
    let prior_days = rd - fixed_from_julian(&Julian::new(year, 1, 1));
    let correction = if rd < fixed_from_julian(&Julian::new(year, 3, 1)) {
        0
    } else if julian_leap_year(year) {
        1
    } else {
        2
    };
    let month = floor_div(12 * (prior_days + correction) + 373, 367);
    let day = rd - fixed_from_julian(&Julian::new(year, month, 1)) + 1;
    Julian::new(year, month, day)
}

impl ConvertibleDate for Julian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        julian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_julian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_julian(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.gregorian_month(amod(self.month, 12)),
            self.year.to_string(),
        ]
    }
}
