//! Trait definitions for values supplied by the host environment.
//!
//! The conversion core never reaches into ambient application state;
//! everything location- or clock-dependent is passed in through
//! [`HostContext`]. The `()` implementation observes from Greenwich with
//! a zero UTC offset and the reference ΔT polynomial.

use crate::astro;

/// An observer location used by rise/set and visibility calculations.
///
/// Longitudes are degrees east of Greenwich, latitudes degrees north,
/// elevation in meters. `zone_hours` is the fixed standard-time offset
/// of the location; hosts that track a named IANA zone resolve it to
/// hours before constructing the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub zone_hours: f64,
}

impl Location {
    /// The Royal Observatory, Greenwich.
    pub const GREENWICH: Self = Self {
        latitude: 51.4777815,
        longitude: 0.0,
        elevation: 46.9,
        zone_hours: 0.0,
    };

    /// Mecca; the traditional observer for crescent-visibility tables.
    pub const MECCA: Self = Self {
        latitude: 21.420833,
        longitude: 39.823333,
        elevation: 298.0,
        zone_hours: 3.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64, zone_hours: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            zone_hours,
        }
    }

    /// The zone offset as a fraction of a day.
    #[inline]
    #[must_use]
    pub fn zone(&self) -> f64 {
        self.zone_hours / 24.0
    }
}

/// Host-supplied environment queries.
///
/// All three queries must behave as read-only functions of their
/// arguments; the core may evaluate them at any moment in the
/// representable date range.
pub trait HostContext {
    /// UTC offset in hours at the given Julian Day.
    fn utc_offset(&self, jd: f64) -> f64 {
        let _ = jd;
        0.0
    }

    /// The current observer location.
    fn location(&self) -> Location {
        Location::GREENWICH
    }

    /// ΔT (dynamical minus universal time) in seconds at the given
    /// Julian Day.
    fn delta_t(&self, jd: f64) -> f64 {
        astro::ephemeris_correction(jd + crate::moment::JD_EPOCH) * 86400.0
    }
}

impl HostContext for () {}
