//! The calendar capability trait and the moment-carrying instance type.
//!
//! Every calendar module exposes pure conversion functions; this module
//! ties them to a common surface. [`ConvertibleDate`] is the capability
//! a calendar implements (fixed-day conversion in both directions plus
//! parts-vector I/O), and [`CalendarDate`] is the stateful instance a
//! host keeps per displayed calendar: it owns the canonical [`Moment`]
//! and the date record derived from it, never letting the two diverge.

use alloc::string::String;
use alloc::vec::Vec;

use crate::host::HostContext;
use crate::moment::{jd_from_moment, jd_from_zoned_moment, moment_from_jd, zoned_moment_from_jd};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult, Moment};

/// Conversion capability between a calendar's date record and the fixed
/// day count.
pub trait ConvertibleDate: Sized {
    /// The arity of this calendar's parts vector.
    const PART_COUNT: usize;

    /// Computes the date record containing fixed day `rd`. Total and
    /// deterministic for every `rd`, proleptic dates included.
    fn from_fixed(rd: i64) -> Self;

    /// The largest fixed day `<= rd` matching this record.
    ///
    /// Bijective calendars ignore `rd` and return their unique fixed
    /// day. Cyclical calendars search backward from `rd`; combinations
    /// with no solution fail with
    /// [`ErrorKind::Unrepresentable`](crate::ErrorKind::Unrepresentable).
    fn to_fixed_on_or_before(&self, rd: i64) -> CalendarResult<i64>;

    /// Builds a record from a raw parts vector, rejecting a vector of
    /// the wrong arity.
    fn from_parts(parts: &[i64]) -> CalendarResult<Self>;

    /// The record as a parts vector of length [`Self::PART_COUNT`].
    fn to_parts(&self) -> Vec<i64>;

    /// The record's elements as localizable display strings.
    fn date_strings(&self, names: &NameTables) -> Vec<String>;
}

/// Guard for the parts-vector arity precondition.
#[inline]
pub(crate) fn expect_parts(parts: &[i64], count: usize) -> CalendarResult<()> {
    if parts.len() == count {
        Ok(())
    } else {
        Err(CalendarError::range().with_message("parts vector has the wrong number of elements."))
    }
}

/// A calendar instance: a moment on the fixed-day timeline together
/// with its date record in one calendar, kept consistent.
///
/// Constructed already valid; `set_moment` always succeeds, and
/// `set_parts` re-anchors the moment at the matching day while keeping
/// the current time-of-day fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDate<C: ConvertibleDate> {
    moment: Moment,
    date: C,
}

impl<C: ConvertibleDate> CalendarDate<C> {
    /// Creates an instance at the given moment.
    #[must_use]
    pub fn new(moment: Moment) -> Self {
        Self {
            date: C::from_fixed(moment.fixed()),
            moment,
        }
    }

    /// Creates an instance from a Julian Day (UT).
    #[must_use]
    pub fn from_jd(jd: f64) -> Self {
        Self::new(moment_from_jd(jd))
    }

    /// Creates an instance from a Julian Day shifted by the host's UTC
    /// offset.
    #[must_use]
    pub fn from_zoned_jd(jd: f64, host: &(impl HostContext + ?Sized)) -> Self {
        Self::new(zoned_moment_from_jd(jd, host))
    }

    /// Replaces the moment and recomputes the date record.
    pub fn set_moment(&mut self, moment: Moment) {
        self.moment = moment;
        self.date = C::from_fixed(moment.fixed());
    }

    /// Replaces the date from a parts vector.
    ///
    /// For cyclical calendars this finds the latest matching day on or
    /// before the instance's current day; in all cases the current
    /// time-of-day fraction is preserved.
    pub fn set_parts(&mut self, parts: &[i64]) -> CalendarResult<()> {
        let date = C::from_parts(parts)?;
        let rd = date.to_fixed_on_or_before(self.moment.fixed())?;
        self.moment = self.moment.with_fixed(rd);
        // Re-derive rather than store the request: out-of-range part
        // values normalize to the canonical record for that day.
        self.date = C::from_fixed(rd);
        Ok(())
    }

    /// The current moment.
    #[inline]
    #[must_use]
    pub fn moment(&self) -> Moment {
        self.moment
    }

    /// The current moment as a Julian Day (UT).
    #[inline]
    #[must_use]
    pub fn jd(&self) -> f64 {
        jd_from_moment(self.moment)
    }

    /// The current moment as a Julian Day, undoing the host's UTC
    /// offset.
    #[inline]
    #[must_use]
    pub fn zoned_jd(&self, host: &(impl HostContext + ?Sized)) -> f64 {
        jd_from_zoned_moment(self.moment, host)
    }

    /// The current date record.
    #[inline]
    #[must_use]
    pub fn date(&self) -> &C {
        &self.date
    }

    /// The current date as a parts vector.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> Vec<i64> {
        self.date.to_parts()
    }

    /// The current date's elements as display strings.
    #[must_use]
    pub fn date_strings(&self, names: &NameTables) -> Vec<String> {
        self.date.date_strings(names)
    }

    /// The current date as a single formatted string.
    #[must_use]
    pub fn formatted(&self, names: &NameTables) -> String {
        crate::names::join_date_strings(&self.date.date_strings(names))
    }
}
