//! The Aztec cycles: the 365-day Xihuitl and the 260-day Tonalpohualli.
//! The correlation anchors both to the fall of Tenochtitlan, August 13,
//! 1521 (Julian), recorded as 2 Xocotlhuetzi 1 Coatl.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::math::{amod, floor_div, imod};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

/// R.D. of the fall of Tenochtitlan (August 13, 1521 Julian).
pub const AZTEC_CORRELATION: i64 = 555_403;

/// Fixed day opening the Xihuitl cycle containing the correlation day.
pub const AZTEC_XIHUITL_CORRELATION: i64 =
    AZTEC_CORRELATION - (20 * (11 - 1) + 2 - 1); // 2 Xocotlhuetzi

/// Fixed day opening the Tonalpohualli cycle containing the correlation
/// day.
pub const AZTEC_TONALPOHUALLI_CORRELATION: i64 = AZTEC_CORRELATION - 104; // 1 Coatl

/// A Xihuitl day; parts are `[month, day]` with month 1..19 (19 is the
/// five-day Nemontemi) and day 1..20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AztecXihuitl {
    pub month: i64,
    pub day: i64,
}

impl AztecXihuitl {
    #[inline]
    #[must_use]
    pub const fn new(month: i64, day: i64) -> Self {
        Self { month, day }
    }

    /// Position of this day within the 365-day cycle.
    #[inline]
    #[must_use]
    pub const fn ordinal(&self) -> i64 {
        (self.month - 1) * 20 + self.day - 1
    }
}

/// Xihuitl day of a fixed day.
#[must_use]
pub const fn xihuitl_from_fixed(rd: i64) -> AztecXihuitl {
    let count = imod(rd - AZTEC_XIHUITL_CORRELATION, 365);
    AztecXihuitl::new(floor_div(count, 20) + 1, imod(count, 20) + 1)
}

/// Latest fixed day on or before `rd` with the given Xihuitl day.
#[inline]
#[must_use]
pub const fn xihuitl_on_or_before(xihuitl: AztecXihuitl, rd: i64) -> i64 {
    rd - imod(rd - AZTEC_XIHUITL_CORRELATION - xihuitl.ordinal(), 365)
}

/// A Tonalpohualli day; parts are `[number, name]` with number 1..13
/// and name 1..20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AztecTonalpohualli {
    pub number: i64,
    pub name: i64,
}

impl AztecTonalpohualli {
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

/// Tonalpohualli day of a fixed day.
#[must_use]
pub const fn tonalpohualli_from_fixed(rd: i64) -> AztecTonalpohualli {
    let count = rd - AZTEC_TONALPOHUALLI_CORRELATION + 1;
    AztecTonalpohualli::new(amod(count, 13), amod(count, 20))
}

/// Latest fixed day on or before `rd` with the given Tonalpohualli day.
#[inline]
#[must_use]
pub const fn tonalpohualli_on_or_before(tonalpohualli: AztecTonalpohualli, rd: i64) -> i64 {
    rd - imod(
        rd - AZTEC_TONALPOHUALLI_CORRELATION - tonalpohualli.ordinal(),
        260,
    )
}

/// Latest fixed day on or before `rd` carrying both cycle days, or an
/// error for the four fifths of combinations that never occur.
pub fn aztec_calendar_round_on_or_before(
    xihuitl: AztecXihuitl,
    tonalpohualli: AztecTonalpohualli,
    rd: i64,
) -> CalendarResult<i64> {
    let a = AZTEC_XIHUITL_CORRELATION + xihuitl.ordinal();
    let b = AZTEC_TONALPOHUALLI_CORRELATION + tonalpohualli.ordinal();
    let diff = b - a;
    if imod(diff, 5) != 0 {
        #[cfg(feature = "log")]
        log::warn!("xihuitl and tonalpohualli ordinals disagree mod 5; no such day exists");
        return Err(CalendarError::unrepresentable()
            .with_message("xihuitl and tonalpohualli days never fall together."));
    }
    let x = a + 365 * imod(diff, 52);
    Ok(rd - imod(rd - x, 18_980))
}

impl ConvertibleDate for AztecXihuitl {
    const PART_COUNT: usize = 2;

    fn from_fixed(rd: i64) -> Self {
        xihuitl_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64> {
        Ok(xihuitl_on_or_before(*self, rd))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![self.day.to_string(), names.xihuitl_month(self.month)]
    }
}

impl ConvertibleDate for AztecTonalpohualli {
    const PART_COUNT: usize = 2;

    fn from_fixed(rd: i64) -> Self {
        tonalpohualli_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64> {
        Ok(tonalpohualli_on_or_before(*self, rd))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.number, self.name]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![self.number.to_string(), names.tonalpohualli_name(self.name)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::julian::{fixed_from_julian, Julian};

    #[test]
    fn correlation() {
        assert_eq!(fixed_from_julian(&Julian::new(1521, 8, 13)), AZTEC_CORRELATION);
        assert_eq!(AZTEC_XIHUITL_CORRELATION, 555_202);
        assert_eq!(AZTEC_TONALPOHUALLI_CORRELATION, 555_299);
    }

    #[test]
    fn correlation_day_names() {
        // The city fell on 2 Xocotlhuetzi, 1 Coatl.
        assert_eq!(xihuitl_from_fixed(AZTEC_CORRELATION), AztecXihuitl::new(11, 2));
        assert_eq!(
            tonalpohualli_from_fixed(AZTEC_CORRELATION),
            AztecTonalpohualli::new(1, 5)
        );
    }

    #[test]
    fn cyclical_searches() {
        let x = AztecXihuitl::new(11, 2);
        let t = AztecTonalpohualli::new(1, 5);
        for rd in [-10_000, 0, AZTEC_CORRELATION, 800_000] {
            let xd = xihuitl_on_or_before(x, rd);
            assert!(xd <= rd && xd > rd - 365);
            assert_eq!(xihuitl_from_fixed(xd), x);
            let td = tonalpohualli_on_or_before(t, rd);
            assert!(td <= rd && td > rd - 260);
            assert_eq!(tonalpohualli_from_fixed(td), t);
        }
    }

    #[test]
    fn calendar_round() {
        let x = AztecXihuitl::new(11, 2);
        let t = AztecTonalpohualli::new(1, 5);
        let rd = aztec_calendar_round_on_or_before(x, t, AZTEC_CORRELATION).unwrap();
        assert_eq!(rd, AZTEC_CORRELATION);
        let earlier = aztec_calendar_round_on_or_before(x, t, AZTEC_CORRELATION - 1).unwrap();
        assert_eq!(earlier, AZTEC_CORRELATION - 18_980);
    }

    #[test]
    fn impossible_calendar_round() {
        let err = aztec_calendar_round_on_or_before(
            AztecXihuitl::new(11, 2),
            AztecTonalpohualli::new(1, 6),
            0,
        )
        .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unrepresentable);
    }
}
