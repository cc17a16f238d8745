//! The Zoroastrian (Yazdegerd era) calendar: the 365-day wandering year
//! with its epoch at the accession of Yazdegerd III (June 16, 632 CE
//! Julian). Each of the thirty month days bears a dedication name.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::egyptian::{fixed_from_wandering, wandering_from_fixed};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Zoroastrian `{1, 1, 1}`.
pub const ZOROASTRIAN_EPOCH: i64 = 230_638;

/// A Zoroastrian date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoroastrian {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Zoroastrian {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Fixed day of a Zoroastrian date.
#[inline]
#[must_use]
pub const fn fixed_from_zoroastrian(date: &Zoroastrian) -> i64 {
    fixed_from_wandering(ZOROASTRIAN_EPOCH, date.year, date.month, date.day)
}

/// Zoroastrian date of a fixed day.
#[inline]
#[must_use]
pub const fn zoroastrian_from_fixed(rd: i64) -> Zoroastrian {
    let (year, month, day) = wandering_from_fixed(ZOROASTRIAN_EPOCH, rd);
    Zoroastrian::new(year, month, day)
}

impl ConvertibleDate for Zoroastrian {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        zoroastrian_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_zoroastrian(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_zoroastrian(self);
        // Days within a month are named, not numbered; epagomenal days
        // (month 13) have their own five names.
        let day_name = if self.month == 13 {
            names.zoroastrian_epagomenal_day(self.day)
        } else {
            names.zoroastrian_day(self.day)
        };
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            day_name,
            names.zoroastrian_month(self.month),
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
        assert_eq!(
            fixed_from_zoroastrian(&Zoroastrian::new(1, 1, 1)),
            ZOROASTRIAN_EPOCH
        );
        assert_eq!(fixed_from_julian(&Julian::new(632, 6, 16)), ZOROASTRIAN_EPOCH);
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_zoroastrian(&zoroastrian_from_fixed(rd)), rd);
            rd += 3_301;
        }
    }
}
