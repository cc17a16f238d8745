//! The error type for calendar and ephemeris operations.

use alloc::borrow::Cow;
use core::fmt;

/// The error kind for a [`CalendarError`].
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric or parts value was outside its valid domain.
    #[default]
    Range,
    /// A cyclical date combination has no solution on the fixed-day
    /// timeline (e.g. a calendar round whose counts disagree mod 5).
    Unrepresentable,
    /// A bisection inverse failed to narrow within its iteration cap.
    Convergence,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => "RangeError",
            Self::Unrepresentable => "UnrepresentableError",
            Self::Convergence => "ConvergenceError",
            Self::Assert => "AssertionError",
        }
        .fmt(f)
    }
}

/// The error returned by fallible calendar conversions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an unrepresentable-combination error.
    #[inline]
    #[must_use]
    pub const fn unrepresentable() -> Self {
        Self::new(ErrorKind::Unrepresentable)
    }

    /// Create a convergence error.
    #[inline]
    #[must_use]
    pub const fn convergence() -> Self {
        Self::new(ErrorKind::Convergence)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attach a message to this error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = Cow::Borrowed(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for CalendarError {}
