//! The calendar systems.
//!
//! Each submodule exposes a date record type, a pair of pure conversion
//! functions between that record and the fixed day count, and a
//! [`ConvertibleDate`](crate::calendar::ConvertibleDate) impl tying it
//! to the common surface. Calendars that repeat (Maya Haab/Tzolkin,
//! Aztec Xihuitl/Tonalpohualli, Balinese Pawukon) replace the inverse
//! with an on-or-before search.

pub mod armenian;
pub mod aztec;
pub mod bali;
pub mod chinese;
pub mod coptic;
pub mod egyptian;
pub mod ethiopic;
pub mod french_rev;
pub mod gregorian;
pub mod hebrew;
pub mod icelandic;
pub mod islamic;
pub mod iso;
pub mod julian;
pub mod korean;
pub mod maya;
pub mod old_hindu;
pub mod persian;
pub mod roman;
pub mod vietnamese;
pub mod zoroastrian;
