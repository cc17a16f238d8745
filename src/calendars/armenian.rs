//! The classical Armenian calendar: the 365-day wandering year of the
//! Egyptians with its own epoch (July 11, 552 CE Julian) and month
//! names.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::egyptian::{fixed_from_wandering, wandering_from_fixed};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Armenian `{1, 1, 1}`.
pub const ARMENIAN_EPOCH: i64 = 201_443;

/// An Armenian date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Armenian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Armenian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Fixed day of an Armenian date.
#[inline]
#[must_use]
pub const fn fixed_from_armenian(date: &Armenian) -> i64 {
    fixed_from_wandering(ARMENIAN_EPOCH, date.year, date.month, date.day)
}

/// Armenian date of a fixed day.
#[inline]
#[must_use]
pub const fn armenian_from_fixed(rd: i64) -> Armenian {
    let (year, month, day) = wandering_from_fixed(ARMENIAN_EPOCH, rd);
    Armenian::new(year, month, day)
}

impl ConvertibleDate for Armenian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        armenian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_armenian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_armenian(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.armenian_month(self.month),
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
        assert_eq!(fixed_from_armenian(&Armenian::new(1, 1, 1)), ARMENIAN_EPOCH);
        assert_eq!(fixed_from_julian(&Julian::new(552, 7, 11)), ARMENIAN_EPOCH);
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_armenian(&armenian_from_fixed(rd)), rd);
            rd += 3_643;
        }
    }
}
