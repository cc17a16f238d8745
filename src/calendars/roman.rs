//! Roman nomenclature over the Julian calendar: days are counted
//! backward (inclusively) toward the Kalends, Nones, or Ides, and the
//! leap day is the doubled sixth day before the Kalends of March.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::julian::{fixed_from_julian, julian_from_fixed, julian_leap_year, Julian};
use crate::math::amod;
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

pub const KALENDS: i64 = 1;
pub const NONES: i64 = 2;
pub const IDES: i64 = 3;

const MARCH: i64 = 3;
const FEBRUARY: i64 = 2;

/// A Roman date record; parts are `[year, month, event, count, leap]`
/// with `leap` 0 or 1 marking the doubled bis-sextum day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roman {
    pub year: i64,
    pub month: i64,
    pub event: i64,
    pub count: i64,
    pub leap: bool,
}

impl Roman {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, event: i64, count: i64, leap: bool) -> Self {
        Self {
            year,
            month,
            event,
            count,
            leap,
        }
    }
}

/// Day of the Ides: the 15th in March, May, July, and October, the 13th
/// elsewhere.
#[inline]
#[must_use]
pub const fn ides_of_month(month: i64) -> i64 {
    if month == 3 || month == 5 || month == 7 || month == 10 {
        15
    } else {
        13
    }
}

/// Day of the Nones, always eight days before the Ides.
#[inline]
#[must_use]
pub const fn nones_of_month(month: i64) -> i64 {
    ides_of_month(month) - 8
}

/// Fixed day of a Roman date.
#[must_use]
pub const fn fixed_from_roman(date: &Roman) -> i64 {
    let event_day = match date.event {
        KALENDS => 1,
        NONES => nones_of_month(date.month),
        _ => ides_of_month(date.month),
    };
    let base = fixed_from_julian(&Julian::new(date.year, date.month, event_day));
    // Counts toward the Kalends of March in a leap year skip over the
    // doubled day.
    let bissextile_gap = date.month == MARCH
        && date.event == KALENDS
        && julian_leap_year(date.year)
        && date.count >= 6
        && date.count <= 16;
    base - date.count + if bissextile_gap { 0 } else { 1 } + if date.leap { 1 } else { 0 }
}

/// Roman date of a fixed day.
#[must_use]
pub const fn roman_from_fixed(rd: i64) -> Roman {
    let j = julian_from_fixed(rd);
    let month1 = amod(j.month + 1, 12);
    let year1 = if month1 != 1 {
        j.year
    } else if j.year != -1 {
        j.year + 1
    } else {
        1
    };
    if j.day == 1 {
        Roman::new(j.year, j.month, KALENDS, 1, false)
    } else if j.day <= nones_of_month(j.month) {
        Roman::new(j.year, j.month, NONES, nones_of_month(j.month) - j.day + 1, false)
    } else if j.day <= ides_of_month(j.month) {
        Roman::new(j.year, j.month, IDES, ides_of_month(j.month) - j.day + 1, false)
    } else if j.month != FEBRUARY || !julian_leap_year(j.year) {
        let kalends1 = fixed_from_roman(&Roman::new(year1, month1, KALENDS, 1, false));
        Roman::new(year1, month1, KALENDS, kalends1 - rd + 1, false)
    } else if j.day < 25 {
        Roman::new(j.year, MARCH, KALENDS, 30 - j.day, false)
    } else {
        Roman::new(j.year, MARCH, KALENDS, 31 - j.day, j.day == 25)
    }
}

impl ConvertibleDate for Roman {
    const PART_COUNT: usize = 5;

    fn from_fixed(rd: i64) -> Self {
        roman_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_roman(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        if parts[2] < KALENDS || parts[2] > IDES {
            return Err(CalendarError::range().with_message("event must be 1 (Kalends), 2 (Nones), or 3 (Ides)."));
        }
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3], parts[4] != 0))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![
            self.year,
            self.month,
            self.event,
            self.count,
            i64::from(self.leap),
        ]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            self.count.to_string(),
            names.roman_event(self.event),
            names.roman_month(self.month),
            self.year.to_string(),
            if self.leap {
                names.roman_bis()
            } else {
                String::new()
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_days() {
        assert_eq!(ides_of_month(3), 15);
        assert_eq!(ides_of_month(4), 13);
        assert_eq!(nones_of_month(3), 7);
        assert_eq!(nones_of_month(1), 5);
    }

    #[test]
    fn kalends_nones_ides() {
        let mar1 = fixed_from_julian(&Julian::new(44, 3, 1));
        assert_eq!(roman_from_fixed(mar1), Roman::new(44, 3, KALENDS, 1, false));
        // The Ides of March.
        let ides = fixed_from_julian(&Julian::new(44, 3, 15));
        assert_eq!(roman_from_fixed(ides), Roman::new(44, 3, IDES, 1, false));
        // March 10 is VI Id. Mar.
        let mar10 = fixed_from_julian(&Julian::new(44, 3, 10));
        assert_eq!(roman_from_fixed(mar10), Roman::new(44, 3, IDES, 6, false));
    }

    #[test]
    fn bissextile_february() {
        assert!(julian_leap_year(4));
        let feb = |d| fixed_from_julian(&Julian::new(4, 2, d));
        // a.d. VI Kal. Mar. and its doubled twin.
        assert_eq!(roman_from_fixed(feb(24)), Roman::new(4, 3, KALENDS, 6, false));
        assert_eq!(roman_from_fixed(feb(25)), Roman::new(4, 3, KALENDS, 6, true));
        assert_eq!(roman_from_fixed(feb(26)), Roman::new(4, 3, KALENDS, 5, false));
        // Pridie Kal. Mar. is February 29.
        assert_eq!(roman_from_fixed(feb(29)), Roman::new(4, 3, KALENDS, 2, false));
    }

    #[test]
    fn december_counts_into_next_year() {
        let dec31 = fixed_from_julian(&Julian::new(10, 12, 31));
        assert_eq!(roman_from_fixed(dec31), Roman::new(11, 1, KALENDS, 2, false));
        // Year -1 is followed by year 1.
        let dec31_bce = fixed_from_julian(&Julian::new(-1, 12, 31));
        assert_eq!(roman_from_fixed(dec31_bce), Roman::new(1, 1, KALENDS, 2, false));
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_roman(&roman_from_fixed(rd)), rd);
            rd += 733;
        }
    }
}
