//! The old Icelandic week calendar: the year splits into a summer
//! misseri beginning on the first Thursday after April 18 (Gregorian)
//! and a winter misseri beginning 180 days before the next summer, on
//! a Saturday. Dates are `[year, season, week, weekday]`.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{floor_div, imod, rd_corr_sum, to_radix};
use crate::moment::{day_of_week_from_fixed, kday_on_or_after, SATURDAY, THURSDAY};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

/// R.D. of the first day of summer of year 1 (Gregorian April 19,
/// year 1, a Thursday).
pub const ICELANDIC_EPOCH: i64 = 109;

pub const SUMMER: i64 = 1;
pub const WINTER: i64 = 2;

/// An Icelandic date record; parts are `[year, season, week, weekday]`
/// with `weekday` 0 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icelandic {
    pub year: i64,
    pub season: i64,
    pub week: i64,
    pub weekday: i64,
}

impl Icelandic {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, season: i64, week: i64, weekday: i64) -> Self {
        Self {
            year,
            season,
            week,
            weekday,
        }
    }
}

/// Fixed day of the first day of summer of an Icelandic year.
#[must_use]
pub fn icelandic_summer(year: i64) -> i64 {
    // Gregorian leap days accumulated by radix: 97 per 400 years, 24
    // per century, 1 per olympiad.
    let shift = rd_corr_sum(&to_radix(year, &[4, 25, 4]), &[97, 24, 1, 0], 0);
    let apr19 = ICELANDIC_EPOCH + 365 * (year - 1) + shift;
    kday_on_or_after(THURSDAY, apr19)
}

/// Fixed day of the first day of winter of an Icelandic year.
#[inline]
#[must_use]
pub fn icelandic_winter(year: i64) -> i64 {
    icelandic_summer(year + 1) - 180
}

/// Fixed day of an Icelandic date.
#[must_use]
pub fn fixed_from_icelandic(date: &Icelandic) -> i64 {
    let (start, shift) = if date.season == SUMMER {
        (icelandic_summer(date.year), THURSDAY)
    } else {
        (icelandic_winter(date.year), SATURDAY)
    };
    start + 7 * (date.week - 1) + imod(date.weekday - shift, 7)
}

/// Icelandic date of a fixed day.
#[must_use]
pub fn icelandic_from_fixed(rd: i64) -> Icelandic {
    let mut year = floor_div(400 * (rd - ICELANDIC_EPOCH + 369), 146_097);
    while icelandic_summer(year) > rd {
        year -= 1;
    }
    while icelandic_summer(year + 1) <= rd {
        year += 1;
    }
    let winter = icelandic_winter(year);
    let (season, start) = if rd < winter {
        (SUMMER, icelandic_summer(year))
    } else {
        (WINTER, winter)
    };
    Icelandic::new(
        year,
        season,
        floor_div(rd - start, 7) + 1,
        day_of_week_from_fixed(rd),
    )
}

impl ConvertibleDate for Icelandic {
    const PART_COUNT: usize = 4;

    fn from_fixed(rd: i64) -> Self {
        icelandic_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_icelandic(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        if parts[1] != SUMMER && parts[1] != WINTER {
            return Err(
                CalendarError::range().with_message("season must be 1 (summer) or 2 (winter).")
            );
        }
        Ok(Self::new(parts[0], parts[1], parts[2], imod(parts[3], 7)))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.season, self.week, self.weekday]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            names.weekday(self.weekday),
            self.week.to_string(),
            names.icelandic_season(self.season),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::gregorian::{fixed_from_gregorian, Gregorian};

    #[test]
    fn epoch_is_thursday() {
        assert_eq!(fixed_from_gregorian(&Gregorian::new(1, 4, 19)), ICELANDIC_EPOCH);
        assert_eq!(day_of_week_from_fixed(ICELANDIC_EPOCH), THURSDAY);
        assert_eq!(icelandic_summer(1), ICELANDIC_EPOCH);
    }

    #[test]
    fn season_starts() {
        // First day of summer 2023 was Thursday, April 20.
        assert_eq!(
            icelandic_summer(2023),
            fixed_from_gregorian(&Gregorian::new(2023, 4, 20))
        );
        // 2024's fell on April 25.
        assert_eq!(
            icelandic_summer(2024),
            fixed_from_gregorian(&Gregorian::new(2024, 4, 25))
        );
        // First day of winter 2023 was Saturday, October 28.
        let w = icelandic_winter(2023);
        assert_eq!(w, fixed_from_gregorian(&Gregorian::new(2023, 10, 28)));
        assert_eq!(day_of_week_from_fixed(w), SATURDAY);
    }

    #[test]
    fn season_boundaries() {
        let rd = fixed_from_gregorian(&Gregorian::new(2023, 10, 28));
        assert_eq!(icelandic_from_fixed(rd - 1).season, SUMMER);
        let date = icelandic_from_fixed(rd);
        assert_eq!(date, Icelandic::new(2023, WINTER, 1, SATURDAY));
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_icelandic(&icelandic_from_fixed(rd)), rd);
            rd += 577;
        }
    }
}
