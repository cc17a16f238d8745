//! The Hebrew calendar: a lunisolar scheme driven by the mean
//! conjunction (molad) with the four classical postponements of Rosh
//! ha-Shanah. Months are numbered from Nisan = 1; the year changes at
//! Tishri (month 7). In leap years month 12 is Adar I and month 13
//! Adar II.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Hebrew `{1, 7, 1}` (October 7, 3761 BCE Julian).
pub const HEBREW_EPOCH: i64 = -1_373_427;

pub const NISAN: i64 = 1;
pub const TISHRI: i64 = 7;
pub const MARHESHVAN: i64 = 8;
pub const KISLEV: i64 = 9;
pub const TEVET: i64 = 10;
pub const ADAR: i64 = 12;
pub const ADAR_II: i64 = 13;

/// A Hebrew date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hebrew {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Hebrew {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// True for the 7 leap years of the 19-year Metonic cycle.
#[inline]
#[must_use]
pub const fn hebrew_leap_year(year: i64) -> bool {
    imod(7 * year + 1, 19) < 7
}

/// Last month of a Hebrew year: 13 in leap years, else 12.
#[inline]
#[must_use]
pub const fn last_month_of_hebrew_year(year: i64) -> i64 {
    if hebrew_leap_year(year) {
        ADAR_II
    } else {
        ADAR
    }
}

/// Days from the epoch molad to the molad of Tishri of `year`, with the
/// molad-zaken and midweek postponements folded in.
#[must_use]
pub const fn hebrew_calendar_elapsed_days(year: i64) -> i64 {
    let months_elapsed = floor_div(235 * year - 234, 19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + floor_div(parts_elapsed, 25_920);
    if imod(3 * (days + 1), 7) < 3 {
        days + 1
    } else {
        days
    }
}

/// The remaining two postponements, which look at neighboring years'
/// lengths: 2 days when the coming year would be 356 days long, 1 day
/// when the previous would be 382.
#[must_use]
pub const fn hebrew_year_length_correction(year: i64) -> i64 {
    let ny0 = hebrew_calendar_elapsed_days(year - 1);
    let ny1 = hebrew_calendar_elapsed_days(year);
    let ny2 = hebrew_calendar_elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day of Rosh ha-Shanah (Tishri 1) of a Hebrew year.
#[inline]
#[must_use]
pub const fn hebrew_new_year(year: i64) -> i64 {
    HEBREW_EPOCH + hebrew_calendar_elapsed_days(year) + hebrew_year_length_correction(year)
}

/// Number of days in a Hebrew year (353, 354, 355, 383, 384, or 385).
#[inline]
#[must_use]
pub const fn days_in_hebrew_year(year: i64) -> i64 {
    hebrew_new_year(year + 1) - hebrew_new_year(year)
}

/// True when Marheshvan gets its 30th day.
#[inline]
#[must_use]
pub const fn long_marheshvan(year: i64) -> bool {
    let days = days_in_hebrew_year(year);
    days == 355 || days == 385
}

/// True when Kislev loses its 30th day.
#[inline]
#[must_use]
pub const fn short_kislev(year: i64) -> bool {
    let days = days_in_hebrew_year(year);
    days == 353 || days == 383
}

/// Number of days in a month of a given Hebrew year.
#[must_use]
pub const fn last_day_of_hebrew_month(year: i64, month: i64) -> i64 {
    if month == 2
        || month == 4
        || month == 6
        || month == TEVET
        || month == ADAR_II
        || (month == ADAR && !hebrew_leap_year(year))
        || (month == MARHESHVAN && !long_marheshvan(year))
        || (month == KISLEV && short_kislev(year))
    {
        29
    } else {
        30
    }
}

/// Fixed day of a Hebrew date.
#[must_use]
pub fn fixed_from_hebrew(date: &Hebrew) -> i64 {
    let mut rd = hebrew_new_year(date.year) + date.day - 1;
    if date.month < TISHRI {
        // Months before Tishri come after the months following it.
        let mut m = TISHRI;
        while m <= last_month_of_hebrew_year(date.year) {
            rd += last_day_of_hebrew_month(date.year, m);
            m += 1;
        }
        let mut m = NISAN;
        while m < date.month {
            rd += last_day_of_hebrew_month(date.year, m);
            m += 1;
        }
    } else {
        let mut m = TISHRI;
        while m < date.month {
            rd += last_day_of_hebrew_month(date.year, m);
            m += 1;
        }
    }
    rd
}

/// Hebrew date of a fixed day.
#[must_use]
pub fn hebrew_from_fixed(rd: i64) -> Hebrew {
    // The rate 35975351/98496 days per year makes the estimate within
    // one of the true year.
    let approx = floor_div(98_496 * (rd - HEBREW_EPOCH), 35_975_351) + 1;
    let mut year = approx - 1;
    while hebrew_new_year(year + 1) <= rd {
        year += 1;
    }
    let mut month = if rd < fixed_from_hebrew(&Hebrew::new(year, NISAN, 1)) {
        TISHRI
    } else {
        NISAN
    };
    while rd
        > fixed_from_hebrew(&Hebrew::new(
            year,
            month,
            last_day_of_hebrew_month(year, month),
        ))
    {
        month += 1;
    }
    let day = rd - fixed_from_hebrew(&Hebrew::new(year, month, 1)) + 1;
    Hebrew::new(year, month, day)
}

impl ConvertibleDate for Hebrew {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        hebrew_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_hebrew(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_hebrew(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.hebrew_month(self.month, hebrew_leap_year(self.year)),
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
        assert_eq!(fixed_from_julian(&Julian::new(-3761, 10, 7)), HEBREW_EPOCH);
        assert_eq!(fixed_from_hebrew(&Hebrew::new(1, 7, 1)), HEBREW_EPOCH);
    }

    #[test]
    fn metonic_cycle() {
        let leaps = (1..=19).filter(|&y| hebrew_leap_year(y)).count();
        assert_eq!(leaps, 7);
        assert!(hebrew_leap_year(5784));
        assert!(!hebrew_leap_year(5783));
    }

    #[test]
    fn year_lengths() {
        for year in 5700..5800 {
            let days = days_in_hebrew_year(year);
            assert!(
                matches!(days, 353 | 354 | 355 | 383 | 384 | 385),
                "year {year} has {days} days"
            );
        }
    }

    #[test]
    fn no_thursday_or_sunday_new_year() {
        // The midweek postponement keeps Rosh ha-Shanah off Sunday,
        // Wednesday, and Friday.
        use crate::moment::{day_of_week_from_fixed, FRIDAY, SUNDAY, WEDNESDAY};
        for year in 5600..5900 {
            let dow = day_of_week_from_fixed(hebrew_new_year(year));
            assert!(dow != SUNDAY && dow != WEDNESDAY && dow != FRIDAY);
        }
    }

    // Reference conversions for the standard 33 sample days.
    const SAMPLES: [(i64, (i64, i64, i64)); 33] = [
        (-214_193, (3174, 5, 10)),
        (-61_387, (3593, 9, 25)),
        (25_469, (3831, 7, 3)),
        (49_217, (3896, 7, 9)),
        (171_307, (4230, 10, 18)),
        (210_155, (4336, 3, 4)),
        (253_427, (4455, 8, 13)),
        (369_740, (4773, 2, 6)),
        (400_085, (4856, 2, 23)),
        (434_355, (4950, 1, 7)),
        (452_605, (5000, 13, 8)),
        (470_160, (5048, 1, 21)),
        (473_837, (5058, 2, 7)),
        (507_850, (5151, 4, 1)),
        (524_156, (5196, 11, 7)),
        (544_676, (5252, 1, 3)),
        (567_118, (5314, 7, 1)),
        (569_477, (5320, 12, 27)),
        (601_716, (5408, 3, 20)),
        (613_424, (5440, 4, 3)),
        (626_596, (5476, 5, 5)),
        (645_554, (5528, 4, 4)),
        (664_224, (5579, 5, 11)),
        (671_401, (5599, 1, 12)),
        (694_799, (5663, 1, 22)),
        (704_424, (5689, 5, 19)),
        (708_842, (5702, 7, 8)),
        (709_409, (5703, 1, 14)),
        (709_580, (5704, 7, 8)),
        (727_274, (5752, 13, 12)),
        (728_714, (5756, 12, 5)),
        (744_313, (5799, 8, 12)),
        (764_652, (5854, 5, 5)),
    ];

    #[test]
    fn reference_samples() {
        for &(rd, (y, m, d)) in &SAMPLES {
            let date = Hebrew::new(y, m, d);
            assert_eq!(fixed_from_hebrew(&date), rd, "fixed of {y}-{m}-{d}");
            assert_eq!(hebrew_from_fixed(rd), date, "date of {rd}");
        }
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_hebrew(&hebrew_from_fixed(rd)), rd);
            rd += 1_637;
        }
    }
}
