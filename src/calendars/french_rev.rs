//! The French Revolutionary calendar in Romme's arithmetic form:
//! twelve 30-day months followed by five or six complementary days
//! (counted here as month 13), with Gregorian-style leap years every
//! fourth year, minus centuries, plus every 400th, minus every 4000th.
//!
//! The historical calendar fixed new year astronomically at the Paris
//! autumnal equinox; the arithmetic rule agrees with it for the years
//! the calendar was in force.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod};
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of French Revolutionary `{1, 1, 1}` (September 22, 1792
/// Gregorian).
pub const FRENCH_EPOCH: i64 = 654_415;

/// A French Revolutionary date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrenchRev {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl FrenchRev {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for leap years of the arithmetic (Romme) rule.
#[inline]
#[must_use]
pub const fn french_leap_year(year: i64) -> bool {
    imod(year, 4) == 0 && {
        let century = imod(year, 400);
        century != 100 && century != 200 && century != 300 && imod(year, 4000) != 0
    }
}

/// Fixed day of a French Revolutionary date.
#[must_use]
pub const fn fixed_from_french(date: &FrenchRev) -> i64 {
    let y = date.year - 1;
    FRENCH_EPOCH - 1
        + 365 * y
        + floor_div(y, 4)
        - floor_div(y, 100)
        + floor_div(y, 400)
        - floor_div(y, 4000)
        + 30 * (date.month - 1)
        + date.day
}

/// Fixed day of 1 Vendémiaire of a French Revolutionary year.
#[inline]
#[must_use]
pub const fn french_new_year(year: i64) -> i64 {
    fixed_from_french(&FrenchRev::new(year, 1, 1))
}

/// French Revolutionary date of a fixed day.
#[must_use]
pub const fn french_from_fixed(rd: i64) -> FrenchRev {
    let approx = floor_div(4000 * (rd - FRENCH_EPOCH + 2), 1_460_969) + 1;
    let year = if rd < french_new_year(approx) {
        approx - 1
    } else {
        approx
    };
    let prior_days = rd - french_new_year(year);
    let month = floor_div(prior_days, 30) + 1;
    let day = imod(prior_days, 30) + 1;
    FrenchRev::new(year, month, day)
}

impl ConvertibleDate for FrenchRev {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        french_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_french(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        // Complementary days are festivals with individual names; within
        // a month the day cycles through the ten-day décade.
        let day_name = if self.month == 13 {
            names.french_sansculottide(self.day)
        } else {
            names.french_decade_day(amod(self.day, 10))
        };
        vec![
            day_name,
            self.day.to_string(),
            names.french_month(self.month),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::gregorian::{fixed_from_gregorian, Gregorian};

    #[test]
    fn epoch() {
        assert_eq!(fixed_from_french(&FrenchRev::new(1, 1, 1)), FRENCH_EPOCH);
        assert_eq!(fixed_from_gregorian(&Gregorian::new(1792, 9, 22)), FRENCH_EPOCH);
    }

    #[test]
    fn known_conversions() {
        // Gregorian March 17, 1992: 27 Ventôse an 200. Year 200 is not
        // a leap year under the Romme rule, so 1 Vendémiaire an 200 is
        // R.D. 727098 and day 177 of the year falls on Ventôse 27.
        assert_eq!(french_new_year(200), 727_098);
        assert_eq!(french_from_fixed(727_274), FrenchRev::new(200, 6, 27));
        assert_eq!(fixed_from_french(&FrenchRev::new(200, 6, 27)), 727_274);
    }

    #[test]
    fn leap_rule() {
        assert!(french_leap_year(4));
        assert!(french_leap_year(400));
        assert!(!french_leap_year(100));
        assert!(!french_leap_year(4000));
        assert!(!french_leap_year(3));
        // A leap year gets a sixth complementary day.
        assert_eq!(french_new_year(5) - french_new_year(4), 366);
        assert_eq!(french_new_year(4) - french_new_year(3), 365);
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_french(&french_from_fixed(rd)), rd);
            rd += 1_361;
        }
    }
}
