//! The Vietnamese lunisolar calendar: the Chinese month mechanics
//! observed from Hanoi. Vietnam kept Beijing time until 1968 and then
//! moved to UTC+7, which occasionally shifts a month boundary across
//! midnight and makes the calendar diverge from the Chinese one.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use core_maths::CoreFloat;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::chinese::{
    self, fixed_from_lunisolar, lunisolar_from_fixed, new_year_on_or_before, Chinese,
};
use crate::calendars::gregorian::gregorian_year_from_fixed;
use crate::host::{HostContext, Location};
use crate::names::NameTables;
use crate::CalendarResult;

/// Site of the Vietnamese calendar: Hanoi, on UTC+8 before 1968 and
/// UTC+7 from then on.
#[must_use]
pub fn vietnamese_location(t: f64) -> Location {
    let year = gregorian_year_from_fixed(t.floor() as i64);
    let zone = if year < 1968 { 8.0 } else { 7.0 };
    Location::new(21.033333, 105.85, 12.0, zone)
}

/// A Vietnamese date record; parts are `[cycle, year, month, leap,
/// day]` with the same cycle numbering as the Chinese calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vietnamese {
    pub cycle: i64,
    pub year: i64,
    pub month: i64,
    pub leap: bool,
    pub day: i64,
}

impl Vietnamese {
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

/// Vietnamese date of a fixed day.
#[must_use]
pub fn vietnamese_from_fixed(rd: i64, host: &(impl HostContext + ?Sized)) -> Vietnamese {
    let d = lunisolar_from_fixed(rd, vietnamese_location, host);
    Vietnamese::new(d.cycle, d.year, d.month, d.leap, d.day)
}

/// Fixed day of a Vietnamese date.
#[must_use]
pub fn fixed_from_vietnamese(date: &Vietnamese, host: &(impl HostContext + ?Sized)) -> i64 {
    fixed_from_lunisolar(&date.as_lunisolar(), vietnamese_location, host)
}

/// Fixed day of Vietnamese New Year (Tet) on or before `rd`.
#[must_use]
pub fn vietnamese_new_year_on_or_before(rd: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    new_year_on_or_before(rd, vietnamese_location, host)
}

impl ConvertibleDate for Vietnamese {
    const PART_COUNT: usize = 5;

    fn from_fixed(rd: i64) -> Self {
        vietnamese_from_fixed(rd, &())
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_vietnamese(self, &()))
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
            names.vietnamese_month(self.month),
            chinese::year_name(self.year, names),
        ]
    }
}
