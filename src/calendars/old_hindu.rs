//! The Old Hindu calendars of the Arya-Siddhanta: a mean solar calendar
//! and a mean lunisolar calendar, both counted in Kali Yuga years from
//! February 18, 3102 BCE (Julian). A civil day runs from mean sunrise,
//! a quarter day after midnight.
//!
//! The underlying constants are exact ratios (the solar year is
//! 1577917500/4320000 days), so everything here is integer arithmetic;
//! intermediate products need 128 bits.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

/// R.D. of the Kali Yuga epoch (February 18, 3102 BCE Julian).
pub const OLD_HINDU_EPOCH: i64 = -1_132_959;

// Period constants scaled to integers. Days are measured in units of
// 1/17280000 day so that the quarter-day sunrise offset and the solar
// year 1577917500/4320000 are both exact.
const DAY_U: i128 = 17_280_000;
const SOLAR_YEAR_U: i128 = 6_311_670_000;
const SOLAR_MONTH_U: i128 = 525_972_500;

// The lunar month is 1577917500/53433336 days; ratios between lunar and
// solar periods reduce to these two factors.
const LUNAR_NUM: i128 = 51_840_000;
const LUNAR_DEN: i128 = 53_433_336;

const fn floor_div_128(num: i128, den: i128) -> i128 {
    let q = num / den;
    if num % den != 0 && (num < 0) != (den < 0) {
        q - 1
    } else {
        q
    }
}

const fn imod_128(a: i128, b: i128) -> i128 {
    let r = a % b;
    if r < 0 {
        r + b
    } else {
        r
    }
}

const fn ceil_div_128(num: i128, den: i128) -> i128 {
    -floor_div_128(-num, den)
}

/// Elapsed days at mean sunrise, in `1/DAY_U` units.
#[inline]
const fn sun_units(rd: i64) -> i128 {
    (4 * (rd - OLD_HINDU_EPOCH) as i128 + 1) * 4_320_000
}

/// An Old Hindu mean solar date; parts are `[year, month, day]` with
/// the year in the Kali Yuga era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OldHinduSolar {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl OldHinduSolar {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Old Hindu solar date of a fixed day.
#[must_use]
pub const fn old_hindu_solar_from_fixed(rd: i64) -> OldHinduSolar {
    let sun = sun_units(rd);
    let year = floor_div_128(sun, SOLAR_YEAR_U);
    let month = 1 + imod_128(floor_div_128(sun, SOLAR_MONTH_U), 12);
    let day = 1 + floor_div_128(imod_128(sun, SOLAR_MONTH_U), DAY_U);
    OldHinduSolar::new(year as i64, month as i64, day as i64)
}

/// Fixed day of an Old Hindu solar date (the first civil day whose
/// sunrise falls within the given solar day).
#[must_use]
pub const fn fixed_from_old_hindu_solar(date: &OldHinduSolar) -> i64 {
    let target = date.year as i128 * SOLAR_YEAR_U
        + (date.month as i128 - 1) * SOLAR_MONTH_U
        + (4 * date.day as i128 - 5) * 4_320_000;
    OLD_HINDU_EPOCH + ceil_div_128(target, DAY_U) as i64
}

/// An Old Hindu lunisolar date; parts are `[year, month, leap, day]`
/// where `day` is the tithi current at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OldHinduLunar {
    pub year: i64,
    pub month: i64,
    pub leap: bool,
    pub day: i64,
}

impl OldHinduLunar {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, leap: bool, day: i64) -> Self {
        Self {
            year,
            month,
            leap,
            day,
        }
    }
}

/// Month name and leap flag of the lunar month beginning at new moon
/// index `n` (counted in mean lunar months from the epoch).
const fn lunar_month_name(n: i128) -> (i64, bool) {
    // Position of the new moon within the mean solar months.
    let scaled = n * LUNAR_NUM;
    let q = floor_div_128(scaled, LUNAR_DEN);
    let exact = scaled % LUNAR_DEN == 0;
    let ceil = if exact { q } else { q + 1 };
    // A month is leap when the next new moon still falls in the same
    // solar month; the leap month takes the following month's name.
    let leap = !exact && (n + 1) * LUNAR_NUM <= (q + 1) * LUNAR_DEN;
    let month = 1 + imod_128(ceil, 12);
    (month as i64, leap)
}

/// Kali Yuga year containing the lunar month at new moon index `n`.
const fn lunar_year_of(n: i128) -> i64 {
    (ceil_div_128(LUNAR_NUM * n + LUNAR_DEN, 12 * LUNAR_DEN) - 1) as i64
}

/// Old Hindu lunisolar date of a fixed day.
#[must_use]
pub const fn old_hindu_lunar_from_fixed(rd: i64) -> OldHinduLunar {
    let dc4 = 4 * (rd - OLD_HINDU_EPOCH) as i128 + 1;
    // Index of the last mean new moon at or before sunrise.
    let n = floor_div_128(dc4 * LUNAR_DEN, 4 * 1_577_917_500);
    let (month, leap) = lunar_month_name(n);
    let year = lunar_year_of(n);
    // Tithi: thirtieths of the lunar month, counted globally.
    let tithi = floor_div_128(dc4 * 1_603_000_080, 6_311_670_000);
    let day = 1 + imod_128(tithi, 30) as i64;
    OldHinduLunar::new(year, month, leap, day)
}

/// Fixed day of an Old Hindu lunisolar date: the first civil day whose
/// sunrise falls within the given tithi.
///
/// A month/leap combination that does not occur in the given year (a
/// leap month that year does not have) is rejected.
pub fn fixed_from_old_hindu_lunar(date: &OldHinduLunar) -> CalendarResult<i64> {
    // First new moon of the lunisolar year: the first after the solar
    // month of Mina begins.
    let mina = (12 * date.year as i128 - 1) * LUNAR_DEN;
    let n0 = 1 + floor_div_128(mina, LUNAR_NUM);
    let mut n = n0;
    // A year holds at most 13 moons.
    while n <= n0 + 13 {
        let (month, leap) = lunar_month_name(n);
        if month == date.month && leap == date.leap && lunar_year_of(n) == date.year {
            let target =
                n * 47_337_525_000 + (date.day as i128 - 1) * 1_577_917_500 - 400_750_020;
            let dc = ceil_div_128(target, 1_603_000_080);
            return Ok(OLD_HINDU_EPOCH + dc as i64);
        }
        n += 1;
    }
    Err(CalendarError::unrepresentable()
        .with_message("no such lunar month in the given year."))
}

/// Year of the 60-name Jupiter cycle current on a fixed day.
#[must_use]
pub const fn old_hindu_jovian_year(rd: i64) -> i64 {
    let dc = (rd - OLD_HINDU_EPOCH) as i128;
    let cycles = floor_div_128(dc * 4_370_688, 1_577_917_500);
    crate::math::amod(27 + cycles as i64, 60)
}

impl ConvertibleDate for OldHinduSolar {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        old_hindu_solar_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_old_hindu_solar(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            self.day.to_string(),
            names.hindu_solar_month(self.month),
            self.year.to_string(),
        ]
    }
}

impl ConvertibleDate for OldHinduLunar {
    const PART_COUNT: usize = 4;

    fn from_fixed(rd: i64) -> Self {
        old_hindu_lunar_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        fixed_from_old_hindu_lunar(self)
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2] != 0, parts[3]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, i64::from(self.leap), self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let month = if self.leap {
            format!("{} {}", names.hindu_adhika(), names.hindu_lunar_month(self.month))
        } else {
            names.hindu_lunar_month(self.month)
        };
        vec![self.day.to_string(), month, self.year.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::julian::{fixed_from_julian, Julian};

    #[test]
    fn epoch() {
        assert_eq!(fixed_from_julian(&Julian::new(-3102, 2, 18)), OLD_HINDU_EPOCH);
        assert_eq!(
            old_hindu_solar_from_fixed(OLD_HINDU_EPOCH),
            OldHinduSolar::new(0, 1, 1)
        );
    }

    #[test]
    fn solar_reference_samples() {
        for (rd, y, m, d) in [
            (-214_193, 2515, 5, 19),
            (253_427, 3795, 8, 17),
            (744_313, 5139, 7, 26),
        ] {
            let date = OldHinduSolar::new(y, m, d);
            assert_eq!(old_hindu_solar_from_fixed(rd), date, "date of {rd}");
            assert_eq!(fixed_from_old_hindu_solar(&date), rd, "fixed of {y}-{m}-{d}");
        }
    }

    #[test]
    fn solar_round_trip() {
        let mut rd = -1_100_000;
        while rd <= 1_500_000 {
            let date = old_hindu_solar_from_fixed(rd);
            assert_eq!(fixed_from_old_hindu_solar(&date), rd);
            assert!(date.month >= 1 && date.month <= 12);
            assert!(date.day >= 1 && date.day <= 32);
            rd += 1_259;
        }
    }

    #[test]
    fn lunar_reference_samples() {
        for (rd, y, m, leap, d) in [
            (-214_193, 2515, 6, false, 11),
            (171_307, 3570, 11, true, 19),
            (671_401, 4940, 1, true, 13),
            (744_313, 5139, 8, false, 14),
        ] {
            let date = OldHinduLunar::new(y, m, leap, d);
            assert_eq!(old_hindu_lunar_from_fixed(rd), date, "date of {rd}");
            // The first day bearing a tithi may precede the sample day
            // when the tithi spans two sunrises.
            let fixed = fixed_from_old_hindu_lunar(&date).unwrap();
            assert!(fixed == rd || fixed == rd - 1, "fixed of {y}-{m}-{d}");
            assert_eq!(old_hindu_lunar_from_fixed(fixed), date);
        }
    }

    #[test]
    fn lunar_round_trip() {
        let mut rd = -1_100_000;
        while rd <= 1_500_000 {
            let date = old_hindu_lunar_from_fixed(rd);
            let fixed = fixed_from_old_hindu_lunar(&date).unwrap();
            assert!(fixed <= rd && rd - fixed <= 1, "rd {rd}");
            assert_eq!(old_hindu_lunar_from_fixed(fixed), date);
            rd += 1_117;
        }
    }

    #[test]
    fn missing_leap_month() {
        // Year 3570's leap month is month 11; a leap month 5 that year
        // does not exist.
        let err = fixed_from_old_hindu_lunar(&OldHinduLunar::new(3570, 5, true, 1)).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unrepresentable);
    }

    #[test]
    fn jovian_cycle() {
        for rd in [-214_193, 0, 744_313] {
            let j = old_hindu_jovian_year(rd);
            assert!((1..=60).contains(&j));
        }
        // The Jupiter year is about 361.03 days.
        let j0 = old_hindu_jovian_year(0);
        let j1 = old_hindu_jovian_year(362);
        assert_eq!(crate::math::amod(j0 + 1, 60), j1);
    }
}
