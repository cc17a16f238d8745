//! The arithmetic (tabular) Islamic calendar: a 30-year cycle of 354-
//! and 355-day years, epoch at sunset of July 15, 622 CE (Julian).
//!
//! This is the civil arithmetic scheme; observational variants anchor
//! month starts to crescent visibility (see
//! [`astro::rise_set`](crate::astro::rise_set)) instead.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Islamic `{1, 1, 1}` (July 16, 622 CE Julian).
pub const ISLAMIC_EPOCH: i64 = 227_015;

/// An Islamic date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Islamic {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Islamic {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for the 11 leap years of the 30-year cycle.
#[inline]
#[must_use]
pub const fn islamic_leap_year(year: i64) -> bool {
    imod(14 + 11 * year, 30) < 11
}

/// Fixed day of an Islamic date.
#[must_use]
pub const fn fixed_from_islamic(date: &Islamic) -> i64 {
    ISLAMIC_EPOCH - 1
        + 354 * (date.year - 1)
        + floor_div(3 + 11 * date.year, 30)
        + 29 * (date.month - 1)
        + floor_div(date.month, 2)
        + date.day
}

/// Islamic date of a fixed day.
#[must_use]
pub const fn islamic_from_fixed(rd: i64) -> Islamic {
    let year = floor_div(30 * (rd - ISLAMIC_EPOCH) + 10_646, 10_631);
    let prior_days = rd - fixed_from_islamic(&Islamic::new(year, 1, 1));
    let month = floor_div(11 * prior_days + 330, 325);
    let day = rd - fixed_from_islamic(&Islamic::new(year, month, 1)) + 1;
    Islamic::new(year, month, day)
}

impl ConvertibleDate for Islamic {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        islamic_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_islamic(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_islamic(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.islamic_month(self.month),
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
        assert_eq!(fixed_from_islamic(&Islamic::new(1, 1, 1)), ISLAMIC_EPOCH);
        assert_eq!(fixed_from_julian(&Julian::new(622, 7, 16)), ISLAMIC_EPOCH);
    }

    #[test]
    fn leap_cycle() {
        // 11 leap years per 30-year cycle.
        let count = (1..=30).filter(|&y| islamic_leap_year(y)).count();
        assert_eq!(count, 11);
        assert!(islamic_leap_year(2));
        assert!(!islamic_leap_year(1));
    }

    // Reference conversions for the standard 33 sample days.
    const SAMPLES: [(i64, (i64, i64, i64)); 33] = [
        (-214_193, (-1245, 12, 9)),
        (-61_387, (-813, 2, 23)),
        (25_469, (-568, 4, 1)),
        (49_217, (-501, 4, 6)),
        (171_307, (-157, 10, 17)),
        (210_155, (-47, 6, 3)),
        (253_427, (75, 7, 13)),
        (369_740, (403, 10, 5)),
        (400_085, (489, 5, 22)),
        (434_355, (586, 2, 7)),
        (452_605, (637, 8, 7)),
        (470_160, (687, 2, 20)),
        (473_837, (697, 7, 7)),
        (507_850, (793, 7, 1)),
        (524_156, (839, 7, 6)),
        (544_676, (897, 6, 1)),
        (567_118, (960, 9, 30)),
        (569_477, (967, 5, 27)),
        (601_716, (1058, 5, 18)),
        (613_424, (1091, 6, 2)),
        (626_596, (1128, 8, 4)),
        (645_554, (1182, 2, 3)),
        (664_224, (1234, 10, 10)),
        (671_401, (1255, 1, 11)),
        (694_799, (1321, 1, 21)),
        (704_424, (1348, 3, 19)),
        (708_842, (1360, 9, 8)),
        (709_409, (1362, 4, 13)),
        (709_580, (1362, 10, 7)),
        (727_274, (1412, 9, 13)),
        (728_714, (1416, 10, 5)),
        (744_313, (1460, 10, 12)),
        (764_652, (1518, 3, 5)),
    ];

    #[test]
    fn reference_samples() {
        for &(rd, (y, m, d)) in &SAMPLES {
            let date = Islamic::new(y, m, d);
            assert_eq!(fixed_from_islamic(&date), rd, "fixed of {y}-{m}-{d}");
            assert_eq!(islamic_from_fixed(rd), date, "date of {rd}");
        }
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_islamic(&islamic_from_fixed(rd)), rd);
            rd += 1_973;
        }
    }
}
