//! The Ethiopic calendar: structurally identical to the Coptic
//! calendar, shifted to the era of the Incarnation (August 29, 8 CE
//! Julian).

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::coptic::{coptic_from_fixed, fixed_from_coptic, Coptic, COPTIC_EPOCH};
use crate::moment::day_of_week_from_fixed;
use crate::names::NameTables;
use crate::CalendarResult;

/// R.D. of Ethiopic `{1, 1, 1}`.
pub const ETHIOPIC_EPOCH: i64 = 2_796;

/// An Ethiopic date record; parts are `[year, month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ethiopic {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl Ethiopic {
    #[inline]
    #[must_use]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

/// Fixed day of an Ethiopic date.
#[inline]
#[must_use]
pub const fn fixed_from_ethiopic(date: &Ethiopic) -> i64 {
    ETHIOPIC_EPOCH + fixed_from_coptic(&Coptic::new(date.year, date.month, date.day)) - COPTIC_EPOCH
}

/// Ethiopic date of a fixed day.
#[inline]
#[must_use]
pub const fn ethiopic_from_fixed(rd: i64) -> Ethiopic {
    let date = coptic_from_fixed(rd + COPTIC_EPOCH - ETHIOPIC_EPOCH);
    Ethiopic::new(date.year, date.month, date.day)
}

impl ConvertibleDate for Ethiopic {
    const PART_COUNT: usize = 3;

    fn from_fixed(rd: i64) -> Self {
        ethiopic_from_fixed(rd)
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_ethiopic(self))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.year, self.month, self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        let rd = fixed_from_ethiopic(self);
        vec![
            names.weekday(day_of_week_from_fixed(rd)),
            self.day.to_string(),
            names.ethiopic_month(self.month),
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
        assert_eq!(fixed_from_ethiopic(&Ethiopic::new(1, 1, 1)), ETHIOPIC_EPOCH);
        assert_eq!(fixed_from_julian(&Julian::new(8, 8, 29)), ETHIOPIC_EPOCH);
    }

    #[test]
    fn offset_from_coptic() {
        // An Ethiopic date and the same Coptic parts are a fixed 100840
        // days apart (276 Julian years).
        let e = fixed_from_ethiopic(&Ethiopic::new(1731, 2, 5));
        let c = fixed_from_coptic(&Coptic::new(1731, 2, 5));
        assert_eq!(c - e, COPTIC_EPOCH - ETHIOPIC_EPOCH);
    }

    #[test]
    fn round_trip() {
        let mut rd = -500_000;
        while rd <= 1_500_000 {
            assert_eq!(fixed_from_ethiopic(&ethiopic_from_fixed(rd)), rd);
            rd += 2_251;
        }
    }
}
