//! The ISO 8601 week calendar; parts are `[year, week, day]` with
//! Monday = 1 .. Sunday = 7.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::gregorian::{
    fixed_from_gregorian, gregorian_year_from_fixed, Gregorian, DECEMBER, JANUARY,
};
use crate::math::{amod, floor_div};
use crate::moment::{day_of_week_from_fixed, nth_kday, SUNDAY, THURSDAY};
use crate::names::NameTables;
use crate::CalendarResult;

/// An ISO week date record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iso {
    pub year: i64,
    pub week: i64,
    pub day: i64,
}

impl Iso {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, week: i64, day: i64) -> Self {
        Self { year, week, day }
    }
}

/// Fixed day of an ISO week date.
#[must_use]
pub const fn fixed_from_iso(date: &Iso) -> i64 {
    nth_kday(
        date.week,
        SUNDAY,
        fixed_from_gregorian(&Gregorian::new(date.year - 1, DECEMBER, 28)),
    ) + date.day
}

/// ISO week date of a fixed day.
#[must_use]
pub const fn iso_from_fixed(rd: i64) -> Iso {
    let approx = gregorian_year_from_fixed(rd - 3);
    let year = if rd >= fixed_from_iso(&Iso::new(approx + 1, 1, 1)) {
        approx + 1
    } else {
        approx
    };
    let week = floor_div(rd - fixed_from_iso(&Iso::new(year, 1, 1)), 7) + 1;
    Iso::new(year, week, amod(rd, 7))
}

/// True if the ISO year has 53 weeks.
#[must_use]
pub const fn iso_long_year(year: i64) -> bool {
    let jan1 = day_of_week_from_fixed(fixed_from_gregorian(&Gregorian::new(year, JANUARY, 1)));
    let dec31 = day_of_week_from_fixed(fixed_from_gregorian(&Gregorian::new(year, DECEMBER, 31)));
    jan1 == THURSDAY || dec31 == THURSDAY
}

impl ConvertibleDate for Iso {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        iso_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_iso(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.week, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            names.weekday(amod(self.day, 7) % 7),
            self.week.to_string(),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dates() {
        // Saturday, January 1, 2000 is ISO 1999-W52-6.
        assert_eq!(iso_from_fixed(730_120), Iso::new(1999, 52, 6));
        // Monday, January 3, 2000 opens ISO week 2000-W01.
        assert_eq!(iso_from_fixed(730_122), Iso::new(2000, 1, 1));
        assert_eq!(fixed_from_iso(&Iso::new(2000, 1, 1)), 730_122);
    }

    #[test]
    fn long_years() {
        assert!(iso_long_year(2004));
        assert!(iso_long_year(2015));
        assert!(iso_long_year(2020));
        assert!(!iso_long_year(2000));
        assert!(!iso_long_year(2023));
    }

    #[test]
    fn round_trip() {
        let mut rd = -1_000_000;
        while rd <= 1_000_000 {
            let date = iso_from_fixed(rd);
            assert_eq!(fixed_from_iso(&date), rd);
            assert!(date.day >= 1 && date.day <= 7);
            assert!(date.week >= 1 && date.week <= 53);
            rd += 6_007;
        }
    }
}
