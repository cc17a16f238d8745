//! The Maya calendars: the Long Count day tally and the two repeating
//! cycles, the 365-day Haab and the 260-day Tzolkin. The correlation is
//! Goodman-Martinez-Thompson: Long Count 0.0.0.0.0 fell on September 6,
//! -3114 (Julian), a day named 4 Ahau 8 Cumku.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod, rd_corr_sum, to_radix};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

/// R.D. of Long Count 0.0.0.0.0 (JD 584283).
pub const MAYA_EPOCH: i64 = -1_137_142;

/// Haab ordinal of the epoch day, 8 Cumku.
const HAAB_EPOCH_ORDINAL: i64 = 348;

/// Tzolkin count at the epoch day, 4 Ahau.
const TZOLKIN_EPOCH_COUNT: i64 = 160;

/// A Long Count tally; parts are `[baktun, katun, tun, uinal, kin]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MayaLongCount {
    pub baktun: i64,
    pub katun: i64,
    pub tun: i64,
    pub uinal: i64,
    pub kin: i64,
}

impl MayaLongCount {
    #[inline]
    #[must_use]
    pub const fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }
}

/// Fixed day of a Long Count tally.
#[inline]
#[must_use]
pub fn fixed_from_long_count(lc: &MayaLongCount) -> i64 {
    MAYA_EPOCH
        + rd_corr_sum(
            &[lc.baktun, lc.katun, lc.tun, lc.uinal, lc.kin],
            &[144_000, 7_200, 360, 20, 1],
            0,
        )
}

/// Long Count tally of a fixed day. Days before the epoch get a
/// negative baktun with the remaining places still in range.
#[must_use]
pub fn long_count_from_fixed(rd: i64) -> MayaLongCount {
    let digits = to_radix(rd - MAYA_EPOCH, &[20, 20, 18, 20]);
    MayaLongCount::new(digits[0], digits[1], digits[2], digits[3], digits[4])
}

/// A Haab day; parts are `[month, day]` with month 1..19 (19 is the
/// five-day Uayeb) and day 0..19.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MayaHaab {
    pub month: i64,
    pub day: i64,
}

impl MayaHaab {
    #[inline]
    #[must_use]
    pub const fn new(month: i64, day: i64) -> Self {
        Self { month, day }
    }

    /// Position of this day within the 365-day cycle.
    #[inline]
    #[must_use]
    pub const fn ordinal(&self) -> i64 {
        (self.month - 1) * 20 + self.day
    }
}

/// Haab day of a fixed day.
#[must_use]
pub const fn haab_from_fixed(rd: i64) -> MayaHaab {
    let count = imod(rd - MAYA_EPOCH + HAAB_EPOCH_ORDINAL, 365);
    MayaHaab::new(floor_div(count, 20) + 1, imod(count, 20))
}

/// Latest fixed day on or before `rd` with the given Haab day.
#[inline]
#[must_use]
pub const fn haab_on_or_before(haab: MayaHaab, rd: i64) -> i64 {
    rd - imod(rd - MAYA_EPOCH - haab.ordinal() + HAAB_EPOCH_ORDINAL, 365)
}

/// A Tzolkin day; parts are `[number, name]` with number 1..13 and
/// name 1..20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MayaTzolkin {
    pub number: i64,
    pub name: i64,
}

impl MayaTzolkin {
    #[inline]
    #[must_use]
    pub const fn new(number: i64, name: i64) -> Self {
        Self { number, name }
    }

    /// Position of this day within the 260-day cycle.
    #[inline]
    #[must_use]
    pub const fn ordinal(&self) -> i64 {
        imod(self.number - 1 + 39 * (self.number - self.name), 260)
    }
}

/// Tzolkin day of a fixed day.
#[must_use]
pub const fn tzolkin_from_fixed(rd: i64) -> MayaTzolkin {
    let count = rd - MAYA_EPOCH + TZOLKIN_EPOCH_COUNT;
    MayaTzolkin::new(amod(count, 13), amod(count, 20))
}

/// Latest fixed day on or before `rd` with the given Tzolkin day.
#[inline]
#[must_use]
pub const fn tzolkin_on_or_before(tzolkin: MayaTzolkin, rd: i64) -> i64 {
    rd - imod(
        rd - MAYA_EPOCH - tzolkin.ordinal() + TZOLKIN_EPOCH_COUNT - 1,
        260,
    )
}

/// Latest fixed day on or before `rd` carrying both the given Haab and
/// Tzolkin days.
///
/// The two cycles share a factor of 5, so only combinations whose
/// ordinals agree modulo 5 ever occur; others are rejected. Matching
/// combinations recur every 18980 days (the 52-year calendar round).
pub fn maya_calendar_round_on_or_before(
    haab: MayaHaab,
    tzolkin: MayaTzolkin,
    rd: i64,
) -> CalendarResult<i64> {
    // Residues of the target day relative to the epoch, per cycle.
    let a = haab.ordinal() - HAAB_EPOCH_ORDINAL;
    let b = tzolkin.ordinal() - TZOLKIN_EPOCH_COUNT + 1;
    let diff = b - a;
    if imod(diff, 5) != 0 {
        #[cfg(feature = "log")]
        log::warn!("haab and tzolkin ordinals disagree mod 5; no such day exists");
        return Err(CalendarError::unrepresentable()
            .with_message("haab and tzolkin days never fall together."));
    }
    // Chinese-remainder step: 365k == diff (mod 260) has k == diff (mod 52).
    let x = MAYA_EPOCH + a + 365 * imod(diff, 52);
    Ok(rd - imod(rd - x, 18_980))
}

impl ConvertibleDate for MayaLongCount {
    const PART_COUNT: usize = 5;

    fn from_fixed(rd: i64) -> Self {
        long_count_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_long_count(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3], parts[4]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.baktun, self.katun, self.tun, self.uinal, self.kin]
    }

    fn date_strings(&self, _names: &NameTables) -> Vec<String> {
        vec![
            self.baktun.to_string(),
            self.katun.to_string(),
            self.tun.to_string(),
            self.uinal.to_string(),
            self.kin.to_string(),
        ]
    }
}

impl ConvertibleDate for MayaHaab {
    const PART_COUNT: usize = 2;

    fn from_fixed(rd: i64) -> Self {
        haab_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64> {
        Ok(haab_on_or_before(*self, rd))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![self.day.to_string(), names.haab_month(self.month)]
    }
}

impl ConvertibleDate for MayaTzolkin {
    const PART_COUNT: usize = 2;

    fn from_fixed(rd: i64) -> Self {
        tzolkin_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64> {
        Ok(tzolkin_on_or_before(*self, rd))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.number, self.name]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![self.number.to_string(), names.tzolkin_name(self.name)]
    }
}
