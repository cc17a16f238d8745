//! The ancient Egyptian civil calendar: twelve 30-day months plus five
//! epagomenal days (month 13), no leap rule. Years are counted from the
//! Nabonassar era.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Egyptian `{1, 1, 1}` (JD 1448638, February 26, 747 BCE Julian).
pub const EGYPTIAN_EPOCH: i64 = -272_787;

/// An Egyptian date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Egyptian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Egyptian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Fixed day of an Egyptian date.
#[inline]
#[must_use]
pub const fn fixed_from_egyptian(date: &Egyptian) -> i64 {
    fixed_from_wandering(EGYPTIAN_EPOCH, date.year, date.month, date.day)
}

/// Egyptian date of a fixed day.
#[inline]
#[must_use]
pub const fn egyptian_from_fixed(rd: i64) -> Egyptian {
    let (year, month, day) = wandering_from_fixed(EGYPTIAN_EPOCH, rd);
    Egyptian::new(year, month, day)
}

/// Shared arithmetic of the 365-day wandering year (Egyptian, Armenian,
/// Zoroastrian): only the epoch differs.
pub(crate) const fn fixed_from_wandering(epoch: i64, year: i64, month: i64, day: i64) -> i64 {
    epoch + 365 * (year - 1) + 30 * (month - 1) + day - 1
}

pub(crate) const fn wandering_from_fixed(epoch: i64, rd: i64) -> (i64, i64, i64) {
    let days = rd - epoch;
    let year = floor_div(days, 365) + 1;
    let month = floor_div(imod(days, 365), 30) + 1;
    let day = days - 365 * (year - 1) - 30 * (month - 1) + 1;
    (year, month, day)
}

impl ConvertibleDate for Egyptian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        egyptian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_egyptian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_egyptian(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.egyptian_month(self.month),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(fixed_from_egyptian(&Egyptian::new(1, 1, 1)), EGYPTIAN_EPOCH);
        assert_eq!(crate::moment::fixed_from_jd(1_448_638.0), EGYPTIAN_EPOCH);
    }

    #[test]
    fn epagomenal_days() {
        let last = fixed_from_egyptian(&Egyptian::new(10, 13, 5));
        assert_eq!(egyptian_from_fixed(last), Egyptian::new(10, 13, 5));
        assert_eq!(egyptian_from_fixed(last + 1), Egyptian::new(11, 1, 1));
    }

    #[test]
    fn round_trip() {
        let mut rd = -1_000_000;
        while rd <= 1_000_000 {
            assert_eq!(fixed_from_egyptian(&egyptian_from_fixed(rd)), rd);
            rd += 4_999;
        }
    }
}
