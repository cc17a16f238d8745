//! `kalends` converts dates between a shared fixed-day timeline (Rata
//! Die / Julian Day) and some twenty historical and cultural calendars,
//! and provides the astronomical subroutines (solar longitude, lunar
//! phase, rise/set, crescent visibility) that the astronomically
//! anchored calendars are built on.
//!
//! ```rust
//! use kalends::calendars::gregorian::{fixed_from_gregorian, Gregorian};
//! use kalends::calendars::maya::{long_count_from_fixed, MayaLongCount};
//!
//! let rd = fixed_from_gregorian(&Gregorian::new(2012, 12, 21));
//! assert_eq!(
//!     long_count_from_fixed(rd),
//!     MayaLongCount::new(13, 0, 0, 0, 0),
//! );
//! ```
//!
//! All conversions follow the algorithms of Reingold & Dershowitz,
//! *Calendrical Calculations: The Ultimate Edition*, and reproduce its
//! arithmetic conventions (floor division, non-negative modulus,
//! half-open interval modulus) bit for bit in integer results.
//!
//! The crate is a pure library: it performs no I/O and holds no global
//! state. Everything environment-dependent — UTC offsets, the observer
//! location, ΔT — enters through the [`host::HostContext`] trait, and
//! localized name tables are host-owned values (see [`names`]).
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    // The reference arithmetic freely mixes i64 days and f64 moments.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod astro;
pub mod calendar;
pub mod calendars;
pub mod error;
pub mod host;
pub mod math;
pub mod moment;
pub mod names;

#[doc(inline)]
pub use error::{CalendarError, ErrorKind};

/// The result type of fallible calendar conversions.
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use calendar::{CalendarDate, ConvertibleDate};
pub use host::{HostContext, Location};
pub use moment::{Moment, JD_EPOCH};
pub use names::{NameTables, Translator};

/// A library-internal assertion that returns an error at runtime instead
/// of panicking.
#[doc(hidden)]
#[macro_export]
macro_rules! kalends_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}
