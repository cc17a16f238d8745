//! The Coptic calendar: twelve 30-day months plus a 5- or 6-day
//! epagomenal month, with a Julian-style leap day every fourth year.
//! Years are counted from the era of Diocletian (August 29, 284 CE
//! Julian).

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Coptic `{1, 1, 1}`.
pub const COPTIC_EPOCH: i64 = 103_605;

/// A Coptic date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coptic {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Coptic {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for Coptic leap years (year ≡ 3 mod 4).
#[inline]
#[must_use]
pub const fn coptic_leap_year(year: i64) -> bool {
    imod(year, 4) == 3
}

/// Fixed day of a Coptic date.
#[must_use]
pub const fn fixed_from_coptic(date: &Coptic) -> i64 {
    COPTIC_EPOCH - 1
        + 365 * (date.year - 1)
        + floor_div(date.year, 4)
        + 30 * (date.month - 1)
        + date.day
}

/// Coptic date of a fixed day.
#[must_use]
pub const fn coptic_from_fixed(rd: i64) -> Coptic {
    let year = floor_div(4 * (rd - COPTIC_EPOCH) + 1463, 1461);
    let month = floor_div(rd - fixed_from_coptic(&Coptic::new(year, 1, 1)), 30) + 1;
    let day = rd + 1 - fixed_from_coptic(&Coptic::new(year, month, 1));
    Coptic::new(year, month, day)
}

impl ConvertibleDate for Coptic {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        coptic_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_coptic(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_coptic(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.coptic_month(self.month),
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
        assert_eq!(fixed_from_coptic(&Coptic::new(1, 1, 1)), COPTIC_EPOCH);
        assert_eq!(fixed_from_julian(&Julian::new(284, 8, 29)), COPTIC_EPOCH);
    }

    #[test]
    fn leap_epagomenal() {
        assert!(coptic_leap_year(3));
        assert!(!coptic_leap_year(4));
        // A leap year's 13th month has six days.
        let last = fixed_from_coptic(&Coptic::new(3, 13, 6));
        assert_eq!(coptic_from_fixed(last), Coptic::new(3, 13, 6));
        assert_eq!(coptic_from_fixed(last + 1), Coptic::new(4, 1, 1));
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_coptic(&coptic_from_fixed(rd)), rd);
            rd += 2_777;
        }
    }
}
