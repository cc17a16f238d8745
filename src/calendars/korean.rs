//! The Korean lunisolar calendar: the Chinese month mechanics observed
//! from Seoul, with years counted in the Dangi era (from 2333 BCE).
//! Korea changed its civil time repeatedly; the site tracks the era in
//! force at the moment under computation.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use core_maths::CoreFloat;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::chinese::{
    self, fixed_from_lunisolar, lunisolar_from_fixed, new_year_on_or_before, Chinese,
};
use crate::calendars::gregorian::{fixed_from_gregorian, Gregorian};
use crate::host::{HostContext, Location};
use crate::names::NameTables;
use crate::CalendarResult;

/// Site of the Korean calendar: Seoul, with the civil offset of the
/// era containing `t`.
#[must_use]
pub fn korean_location(t: f64) -> Location {
    let rd = t.floor() as i64;
    let zone = if rd < fixed_from_gregorian(&Gregorian::new(1908, 4, 1)) {
        // Local mean time of the Seoul meridian.
        3809.0 / 450.0
    } else if rd < fixed_from_gregorian(&Gregorian::new(1912, 1, 1)) {
        8.5
    } else if rd < fixed_from_gregorian(&Gregorian::new(1954, 3, 21)) {
        9.0
    } else if rd < fixed_from_gregorian(&Gregorian::new(1961, 8, 10)) {
        8.5
    } else {
        9.0
    };
    Location::new(37.566667, 126.966667, 0.0, zone)
}

/// A Korean date record; parts are `[cycle, year, month, leap, day]`
/// with the same cycle numbering as the Chinese calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Korean {
    pub cycle: i64,
    pub year: i64,
    pub month: i64,
    pub leap: bool,
    pub day: i64,
}

impl Korean {
    #[inline]
    #[must_use]
    pub const fn new(cycle: i64, year: i64, month: i64, leap: bool, day: i64) -> Self {
        Self {
            cycle,
            year,
            month,
            leap,
            day,
        }
    }

    #[inline]
    const fn as_lunisolar(&self) -> Chinese {
        Chinese::new(self.cycle, self.year, self.month, self.leap, self.day)
    }
}

/// Korean date of a fixed day.
#[must_use]
pub fn korean_from_fixed(rd: i64, host: &(impl HostContext + ?Sized)) -> Korean {
    let d = lunisolar_from_fixed(rd, korean_location, host);
    Korean::new(d.cycle, d.year, d.month, d.leap, d.day)
}

/// Fixed day of a Korean date.
#[must_use]
pub fn fixed_from_korean(date: &Korean, host: &(impl HostContext + ?Sized)) -> i64 {
    fixed_from_lunisolar(&date.as_lunisolar(), korean_location, host)
}

/// Fixed day of Korean New Year (Seollal) on or before `rd`.
#[must_use]
pub fn korean_new_year_on_or_before(rd: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    new_year_on_or_before(rd, korean_location, host)
}

/// Year count of the Dangi era, which begins in 2333 BCE.
#[inline]
#[must_use]
pub const fn dangi_year(cycle: i64, year: i64) -> i64 {
    60 * cycle + year - 364
}

impl ConvertibleDate for Korean {
    const PART_COUNT: usize = 5;

    fn from_fixed(rd: i64) -> Self {
        korean_from_fixed(rd, &())
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_korean(self, &()))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3] != 0, parts[4]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.cycle, self.year, self.month, i64::from(self.leap), self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            self.day.to_string(),
            if self.leap {
                names.chinese_leap()
            } else {
                String::new()
            },
            self.month.to_string(),
            chinese::year_name(self.year, names),
            dangi_year(self.cycle, self.year).to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seoul_time_eras() {
        // Local mean time until 1908, then 8:30, 9, 8:30, and 9 again.
        let day = |y, m, d| fixed_from_gregorian(&Gregorian::new(y, m, d)) as f64;
        assert!((korean_location(day(1900, 1, 1)).zone_hours - 3809.0 / 450.0).abs() < 1e-12);
        assert!((korean_location(day(1910, 1, 1)).zone_hours - 8.5).abs() < 1e-12);
        assert!((korean_location(day(1930, 1, 1)).zone_hours - 9.0).abs() < 1e-12);
        assert!((korean_location(day(1960, 1, 1)).zone_hours - 8.5).abs() < 1e-12);
        assert!((korean_location(day(2000, 1, 1)).zone_hours - 9.0).abs() < 1e-12);
    }

    #[test]
    fn seollal_2000() {
        // Seollal 2000 fell on February 5, Dangi year 4333.
        let rd = fixed_from_gregorian(&Gregorian::new(2000, 7, 1));
        let new_year = korean_new_year_on_or_before(rd, &());
        assert_eq!(new_year, fixed_from_gregorian(&Gregorian::new(2000, 2, 5)));
        let date = korean_from_fixed(new_year, &());
        assert_eq!(date, Korean::new(78, 17, 1, false, 1));
        assert_eq!(dangi_year(date.cycle, date.year), 4333);
    }

    #[test]
    fn round_trip() {
        for rd in [710_347, 730_120, 738_700] {
            let date = korean_from_fixed(rd, &());
            assert_eq!(fixed_from_korean(&date, &()), rd);
        }
    }
}
