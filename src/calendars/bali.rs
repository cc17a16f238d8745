//! The Balinese Pawukon: a 210-day week-of-weeks whose ten concurrent
//! subcycles (1- through 10-day "weeks") all derive from the position
//! in the cycle. Parts are `[luang, dwiwara, triwara, caturwara,
//! pancawara, sadwara, saptawara, asatawara, sangawara, dasawara]`.
//!
//! Only the pancawara, sadwara, and saptawara are independent; together
//! they pin the position (5 x 6 x 7 covers the 210 days exactly), so
//! every parts vector built from a real date has a fixed-day match.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod};
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of the start of a Pawukon cycle (JD 146).
pub const BALI_EPOCH: i64 = -1_721_279;

/// Pancawara offsets into the dasawara sum.
const PANCAWARA_I: [i64; 5] = [5, 9, 7, 4, 8];
/// Saptawara offsets into the dasawara sum.
const SAPTAWARA_J: [i64; 7] = [5, 4, 3, 7, 8, 6, 9];

/// A day of the Pawukon cycle, stored as its position `0..210`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaliPawukon {
    day: i64,
}

impl BaliPawukon {
    /// Wraps a raw cycle position.
    #[inline]
    #[must_use]
    pub const fn from_day(day: i64) -> Self {
        Self { day: imod(day, 210) }
    }

    /// Position of this day within the 210-day cycle.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> i64 {
        self.day
    }

    /// The 30 seven-day weeks (wuku) of the cycle, 1-based.
    #[inline]
    #[must_use]
    pub const fn wuku(&self) -> i64 {
        floor_div(self.day, 7) + 1
    }

    #[inline]
    #[must_use]
    pub const fn triwara(&self) -> i64 {
        imod(self.day, 3) + 1
    }

    #[inline]
    #[must_use]
    pub const fn sadwara(&self) -> i64 {
        imod(self.day, 6) + 1
    }

    #[inline]
    #[must_use]
    pub const fn saptawara(&self) -> i64 {
        imod(self.day, 7) + 1
    }

    #[inline]
    #[must_use]
    pub const fn pancawara(&self) -> i64 {
        amod(self.day + 2, 5)
    }

    /// The ten-day cycle, computed from ritual weights of the pancawara
    /// and saptawara days rather than from the position directly.
    #[must_use]
    pub fn dasawara(&self) -> i64 {
        let i = PANCAWARA_I[(self.pancawara() - 1) as usize];
        let j = SAPTAWARA_J[(self.saptawara() - 1) as usize];
        imod(1 + i + j, 10)
    }

    #[inline]
    #[must_use]
    pub fn dwiwara(&self) -> i64 {
        amod(self.dasawara(), 2)
    }

    /// True on days whose dasawara is even; such days have no dwiwara
    /// name of their own.
    #[inline]
    #[must_use]
    pub fn luang(&self) -> bool {
        imod(self.dasawara(), 2) == 0
    }

    /// The nine-day cycle; the first four days of the grand cycle all
    /// count as its first day.
    #[inline]
    #[must_use]
    pub const fn sangawara(&self) -> i64 {
        let d = self.day - 3;
        imod(if d > 0 { d } else { 0 }, 9) + 1
    }

    /// The eight-day cycle, with a similar flattened stretch keyed 70
    /// days into the cycle.
    #[inline]
    #[must_use]
    pub const fn asatawara(&self) -> i64 {
        let d = 4 + imod(self.day - 70, 210);
        imod(if d > 6 { d } else { 6 }, 8) + 1
    }

    #[inline]
    #[must_use]
    pub const fn caturwara(&self) -> i64 {
        amod(self.asatawara(), 4)
    }
}

/// Pawukon day of a fixed day.
#[inline]
#[must_use]
pub const fn bali_from_fixed(rd: i64) -> BaliPawukon {
    BaliPawukon::from_day(rd - BALI_EPOCH)
}

/// Latest fixed day on or before `rd` with the given Pawukon day.
#[inline]
#[must_use]
pub const fn bali_on_or_before(date: BaliPawukon, rd: i64) -> i64 {
    rd - imod(rd - BALI_EPOCH - date.day(), 210)
}

impl ConvertibleDate for BaliPawukon {
    const PART_COUNT: usize = 10;

    fn from_fixed(rd: i64) -> Self {
        bali_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64> {
        Ok(bali_on_or_before(*self, rd))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        // Recover the position from the three independent subcycles by
        // remaindering: first mod 35 from the 5- and 7-cycles, then mod
        // 210 with the 6-cycle.
        let a5 = parts[4] - 1;
        let a6 = parts[5] - 1;
        let b7 = parts[6] - 1;
        let b35 = imod(a5 + 14 + 15 * (b7 - a5), 35);
        Ok(Self::from_day(a6 + 36 * (b35 - a6)))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![
            i64::from(self.luang()),
            self.dwiwara(),
            self.triwara(),
            self.caturwara(),
            self.pancawara(),
            self.sadwara(),
            self.saptawara(),
            self.asatawara(),
            self.sangawara(),
            self.dasawara(),
        ]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            names.bali_saptawara(self.saptawara()),
            names.bali_pancawara(self.pancawara()),
            names.bali_wuku(self.wuku()),
            self.day.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn epoch() {
        assert_eq!(crate::moment::fixed_from_jd(146.0), BALI_EPOCH);
        assert_eq!(bali_from_fixed(BALI_EPOCH).day(), 0);
    }

    #[test]
    fn cycle_start_parts() {
        let d = bali_from_fixed(BALI_EPOCH);
        assert_eq!(d.to_parts(), vec![0, 1, 1, 1, 2, 1, 1, 1, 1, 5]);
        assert_eq!(d.wuku(), 1);
    }

    #[test]
    fn known_day() {
        // R.D. 744313 sits 192 days into its cycle.
        let d = bali_from_fixed(744_313);
        assert_eq!(d.day(), 192);
        assert_eq!(d.to_parts(), vec![1, 2, 1, 3, 4, 1, 4, 7, 1, 2]);
    }

    #[test]
    fn flattened_subcycles() {
        // Days 0..3 share sangawara 1; the nine-cycle starts counting
        // at day 3.
        for day in 0..4 {
            assert_eq!(BaliPawukon::from_day(day).sangawara(), 1);
        }
        assert_eq!(BaliPawukon::from_day(4).sangawara(), 2);
        // Days 70..72 share asatawara 7 through the max clamp.
        assert_eq!(BaliPawukon::from_day(70).asatawara(), 7);
        assert_eq!(BaliPawukon::from_day(71).asatawara(), 7);
        assert_eq!(BaliPawukon::from_day(72).asatawara(), 7);
        assert_eq!(BaliPawukon::from_day(73).asatawara(), 8);
    }

    #[test]
    fn parts_round_trip() {
        for day in 0..210 {
            let d = BaliPawukon::from_day(day);
            let rebuilt = BaliPawukon::from_parts(&d.to_parts()).unwrap();
            assert_eq!(rebuilt, d, "day {day}");
        }
    }

    #[test]
    fn on_or_before() {
        for rd in [-50_000, 0, 744_313] {
            let d = bali_from_fixed(rd);
            assert_eq!(bali_on_or_before(d, rd), rd);
            assert_eq!(bali_on_or_before(d, rd + 209), rd);
            assert_eq!(bali_on_or_before(d, rd + 210), rd + 210);
        }
    }
}
