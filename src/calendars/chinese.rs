//! The Chinese lunisolar calendar: months begin at the new moon
//! observed from Beijing, years are anchored by the winter solstice,
//! and a sui of thirteen lunations repeats the first month lacking a
//! major solar term. Years and days carry sexagesimal stem-branch
//! names; the epoch opens year 1 of cycle 1 in 2637 BCE.
//!
//! The Korean and Vietnamese calendars share these month mechanics from
//! their own observation sites; the generic machinery here is
//! parameterized by a [`Site`] so those modules stay thin.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use core_maths::CoreFloat;

use crate::astro::lunar;
use crate::astro::solar::{
    estimate_prior_solar_longitude, solar_longitude, solar_longitude_after, WINTER,
};
use crate::astro::{
    standard_from_universal, universal_from_standard, MEAN_SYNODIC_MONTH, MEAN_TROPICAL_YEAR,
};
use crate::calendar::{expect_parts, ConvertibleDate};
use crate::calendars::gregorian::{fixed_from_gregorian, gregorian_year_from_fixed, Gregorian};
use crate::host::{HostContext, Location};
use crate::math::{amod, floor_div, imod};
use crate::names::NameTables;
use crate::{CalendarError, CalendarResult};

/// R.D. of the first day of year 1 of cycle 1 (February 15, -2636
/// Gregorian).
pub const CHINESE_EPOCH: i64 = -963_099;

/// Elapsed months at the epoch of the sexagesimal month names.
const MONTH_NAME_EPOCH: i64 = 57;

/// Fixed day anchoring the sexagesimal day names.
const DAY_NAME_EPOCH: i64 = 45;

/// Observation site of a lunisolar tradition at fixed moment `t`.
///
/// A function of the moment because the traditions re-zoned their
/// reference sites (China in 1929, Korea repeatedly, Vietnam in 1968).
pub type Site = fn(f64) -> Location;

/// Site of the Chinese calendar: Beijing, on local mean time before
/// the 1929 adoption of the 120-degree standard meridian.
#[must_use]
pub fn chinese_location(t: f64) -> Location {
    let year = gregorian_year_from_fixed(t.floor() as i64);
    let zone = if year < 1929 { 1397.0 / 180.0 } else { 8.0 };
    Location::new(39.916667, 116.416667, 43.5, zone)
}

/// Universal time of civil midnight opening fixed day `rd` at `site`.
fn midnight(rd: i64, site: Site) -> f64 {
    universal_from_standard(rd as f64, &site(rd as f64))
}

/// Fixed day, on or before `rd`, containing the site's winter solstice.
fn winter_solstice_on_or_before(
    rd: i64,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> i64 {
    let approx = estimate_prior_solar_longitude(WINTER, midnight(rd + 1, site), host);
    let mut day = approx.floor() as i64 - 2;
    loop {
        day += 1;
        if solar_longitude(midnight(day + 1, site), host) > WINTER {
            return day;
        }
    }
}

/// Fixed day, at or after `rd`, on which a new moon falls in the
/// site's civil reckoning.
fn new_moon_on_or_after(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> i64 {
    let t = lunar::new_moon_at_or_after(midnight(rd, site), host);
    standard_from_universal(t, &site(t)).floor() as i64
}

/// Fixed day, before `rd`, of the site's previous new moon.
fn new_moon_before(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> i64 {
    let t = lunar::new_moon_before(midnight(rd, site), host);
    standard_from_universal(t, &site(t)).floor() as i64
}

fn current_major_term(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> i64 {
    let s = solar_longitude(universal_from_standard(rd as f64, &site(rd as f64)), host);
    amod(2 + (s / 30.0).floor() as i64, 12)
}

fn current_minor_term(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> i64 {
    let s = solar_longitude(universal_from_standard(rd as f64, &site(rd as f64)), host);
    amod(3 + ((s - 15.0) / 30.0).floor() as i64, 12)
}

/// Standard-time moment, at or after day `rd`, when the solar longitude
/// reaches `lambda`.
fn solar_longitude_on_or_after(
    lambda: f64,
    rd: i64,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    let sun = solar_longitude_after(
        lambda,
        universal_from_standard(rd as f64, &site(rd as f64)),
        host,
    )?;
    Ok(standard_from_universal(sun, &site(sun)))
}

/// Index (1..12) of the last major solar term (zhongqi) on or before
/// `rd`; term 1 begins at solar longitude 330 degrees.
#[must_use]
pub fn current_major_solar_term(rd: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    current_major_term(rd, chinese_location, host)
}

/// Index (1..12) of the last minor solar term (jieqi) on or before
/// `rd`; term 1 begins at solar longitude 315 degrees.
#[must_use]
pub fn current_minor_solar_term(rd: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    current_minor_term(rd, chinese_location, host)
}

/// Standard-time moment of the first major solar term at or after `rd`.
pub fn major_solar_term_on_or_after(
    rd: i64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    let s = solar_longitude(midnight(rd, chinese_location), host);
    let l = imod(30 * (s / 30.0).ceil() as i64, 360) as f64;
    solar_longitude_on_or_after(l, rd, chinese_location, host)
}

/// Standard-time moment of the first minor solar term at or after `rd`.
pub fn minor_solar_term_on_or_after(
    rd: i64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<f64> {
    let s = solar_longitude(midnight(rd, chinese_location), host);
    let l = imod(30 * ((s - 15.0) / 30.0).ceil() as i64 + 15, 360) as f64;
    solar_longitude_on_or_after(l, rd, chinese_location, host)
}

/// True when the month beginning on `rd` contains no major solar term;
/// such a month repeats its predecessor as a leap month.
fn no_major_term(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> bool {
    current_major_term(rd, site, host)
        == current_major_term(new_moon_on_or_after(rd + 1, site, host), site, host)
}

/// True when a leap month starts in `m_prime..=m` (both new-moon days).
fn prior_leap_month(
    m_prime: i64,
    mut m: i64,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> bool {
    while m >= m_prime {
        if no_major_term(m, site, host) {
            return true;
        }
        m = new_moon_before(m, site, host);
    }
    false
}

/// New Year of the sui (solstice-to-solstice year) containing `rd`.
fn new_year_in_sui(rd: i64, site: Site, host: &(impl HostContext + ?Sized)) -> i64 {
    let s1 = winter_solstice_on_or_before(rd, site, host);
    let s2 = winter_solstice_on_or_before(s1 + 370, site, host);
    let m12 = new_moon_on_or_after(s1 + 1, site, host);
    let m13 = new_moon_on_or_after(m12 + 1, site, host);
    let next_m11 = new_moon_before(s2 + 1, site, host);
    let thirteen_months = ((next_m11 - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64 == 12;
    if thirteen_months && (no_major_term(m12, site, host) || no_major_term(m13, site, host)) {
        new_moon_on_or_after(m13 + 1, site, host)
    } else {
        m13
    }
}

pub(crate) fn new_year_on_or_before(
    rd: i64,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> i64 {
    let new_year = new_year_in_sui(rd, site, host);
    if rd >= new_year {
        new_year
    } else {
        // rd lies between its sui's solstice and the following New
        // Year; back into the prior sui.
        new_year_in_sui(rd - 180, site, host)
    }
}

/// Fixed day of the Chinese winter solstice on or before `rd`.
#[must_use]
pub fn chinese_winter_solstice_on_or_before(
    rd: i64,
    host: &(impl HostContext + ?Sized),
) -> i64 {
    winter_solstice_on_or_before(rd, chinese_location, host)
}

/// Fixed day of Chinese New Year on or before `rd`.
#[must_use]
pub fn chinese_new_year_on_or_before(rd: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    new_year_on_or_before(rd, chinese_location, host)
}

/// A Chinese date record; parts are `[cycle, year, month, leap, day]`
/// with year 1..60 inside its sexagesimal cycle and `leap` marking the
/// repeated month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chinese {
    pub cycle: i64,
    pub year: i64,
    pub month: i64,
    pub leap: bool,
    pub day: i64,
}

impl Chinese {
    #[inline]
    #[must_use]
    pub const fn new(cycle: i64, year: i64, month: i64, leap: bool, day: i64) -> Self {
        Self {
            cycle,
            year,
            month,
            leap,
            day,
        }
    }
}

/// The lunisolar date of a fixed day for an arbitrary site; shared by
/// the Chinese, Korean, and Vietnamese calendars.
pub(crate) fn lunisolar_from_fixed(
    rd: i64,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> Chinese {
    let s1 = winter_solstice_on_or_before(rd, site, host);
    let s2 = winter_solstice_on_or_before(s1 + 370, site, host);
    let m12 = new_moon_on_or_after(s1 + 1, site, host);
    let next_m11 = new_moon_before(s2 + 1, site, host);
    let m = new_moon_before(rd + 1, site, host);
    let leap_year = ((next_m11 - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64 == 12;
    let mut month = ((m - m12) as f64 / MEAN_SYNODIC_MONTH).round() as i64;
    if leap_year && prior_leap_month(m12, m, site, host) {
        month -= 1;
    }
    let month = amod(month, 12);
    let leap_month = leap_year
        && no_major_term(m, site, host)
        && !prior_leap_month(m12, new_moon_before(m, site, host), site, host);
    let elapsed_years = (1.5 - month as f64 / 12.0
        + (rd - CHINESE_EPOCH) as f64 / MEAN_TROPICAL_YEAR)
        .floor() as i64;
    Chinese::new(
        floor_div(elapsed_years - 1, 60) + 1,
        amod(elapsed_years, 60),
        month,
        leap_month,
        rd - m + 1,
    )
}

pub(crate) fn fixed_from_lunisolar(
    date: &Chinese,
    site: Site,
    host: &(impl HostContext + ?Sized),
) -> i64 {
    let elapsed = ((date.cycle - 1) * 60 + date.year - 1) as f64 + 0.5;
    let mid_year = (CHINESE_EPOCH as f64 + elapsed * MEAN_TROPICAL_YEAR).floor() as i64;
    let new_year = new_year_on_or_before(mid_year, site, host);
    let p = new_moon_on_or_after(new_year + (date.month - 1) * 29, site, host);
    let d = lunisolar_from_fixed(p, site, host);
    let prior_new_moon = if date.month == d.month && date.leap == d.leap {
        p
    } else {
        new_moon_on_or_after(p + 1, site, host)
    };
    prior_new_moon + date.day - 1
}

/// Chinese date of a fixed day.
#[must_use]
pub fn chinese_from_fixed(rd: i64, host: &(impl HostContext + ?Sized)) -> Chinese {
    lunisolar_from_fixed(rd, chinese_location, host)
}

/// Fixed day of a Chinese date.
#[must_use]
pub fn fixed_from_chinese(date: &Chinese, host: &(impl HostContext + ?Sized)) -> i64 {
    fixed_from_lunisolar(date, chinese_location, host)
}

/// Stem (1..10) and branch (1..12) indices of sexagesimal position `n`.
#[inline]
#[must_use]
pub const fn sexagesimal_numbers(n: i64) -> (i64, i64) {
    (amod(n, 10), amod(n, 12))
}

/// Combined stem-branch name of sexagesimal position `n`.
#[must_use]
pub fn sexagesimal_name(n: i64, names: &NameTables) -> String {
    let (stem, branch) = sexagesimal_numbers(n);
    let mut name = names.chinese_stem(stem);
    name.push_str(&names.chinese_branch(branch));
    name
}

/// Stem-branch name of a year (1..60) within its cycle.
#[must_use]
pub fn year_name(year: i64, names: &NameTables) -> String {
    sexagesimal_name(year, names)
}

/// Stem-branch name of month `month` of year `year`; month names repeat
/// every five years.
#[must_use]
pub fn month_name(month: i64, year: i64, names: &NameTables) -> String {
    let elapsed_months = 12 * (year - 1) + month - 1;
    sexagesimal_name(elapsed_months - MONTH_NAME_EPOCH, names)
}

/// Sexagesimal number (1..60) of the day name of fixed day `rd`.
#[inline]
#[must_use]
pub const fn day_number(rd: i64) -> i64 {
    amod(rd - DAY_NAME_EPOCH, 60)
}

/// Stem-branch name of fixed day `rd`; day names repeat every sixty
/// days.
#[must_use]
pub fn day_name(rd: i64, names: &NameTables) -> String {
    sexagesimal_name(rd - DAY_NAME_EPOCH, names)
}

/// Latest fixed day on or before `rd` whose day name has sexagesimal
/// number `n`.
#[inline]
#[must_use]
pub const fn day_number_on_or_before(n: i64, rd: i64) -> i64 {
    rd - imod(rd - DAY_NAME_EPOCH - n, 60)
}

/// Elapsed-years count of the Chinese year beginning in Gregorian year
/// `g_year`.
#[inline]
#[must_use]
pub const fn chinese_year_in_gregorian(g_year: i64) -> i64 {
    g_year + 2637
}

/// Fixed day of the Dragon Festival (fifth day of the fifth month) of
/// the Chinese year beginning in Gregorian year `g_year`.
#[must_use]
pub fn dragon_festival(g_year: i64, host: &(impl HostContext + ?Sized)) -> i64 {
    let elapsed = chinese_year_in_gregorian(g_year);
    let cycle = floor_div(elapsed - 1, 60) + 1;
    let year = amod(elapsed, 60);
    fixed_from_chinese(&Chinese::new(cycle, year, 5, false, 5), host)
}

/// Fixed day of the Qingming festival (the minor term Pure Brightness)
/// in Gregorian year `g_year`.
pub fn qing_ming(g_year: i64, host: &(impl HostContext + ?Sized)) -> CalendarResult<i64> {
    let t = minor_solar_term_on_or_after(
        fixed_from_gregorian(&Gregorian::new(g_year, 3, 30)),
        host,
    )?;
    Ok(t.floor() as i64)
}

/// Age on day `rd` of a person born on `birthdate`, reckoned the
/// Chinese way: one at birth, incremented at each New Year. Days before
/// the birth have no age.
pub fn chinese_age(
    birthdate: &Chinese,
    rd: i64,
    host: &(impl HostContext + ?Sized),
) -> CalendarResult<i64> {
    if rd < fixed_from_chinese(birthdate, host) {
        return Err(
            CalendarError::unrepresentable().with_message("the day precedes the birthdate.")
        );
    }
    let today = chinese_from_fixed(rd, host);
    Ok(60 * (today.cycle - birthdate.cycle) + today.year - birthdate.year + 1)
}

impl ConvertibleDate for Chinese {
    const PART_COUNT: usize = 5;

    fn from_fixed(rd: i64) -> Self {
        chinese_from_fixed(rd, &())
    }

    fn to_fixed_on_or_before(&self, _rd: i64) -> CalendarResult<i64> {
        Ok(fixed_from_chinese(self, &()))
    }

    fn from_parts(parts: &[i64]) -> CalendarResult<Self> {
        expect_parts(parts, Self::PART_COUNT)?;
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3] != 0, parts[4]))
    }

    fn to_parts(&self) -> Vec<i64> {
        vec![self.cycle, self.year, self.month, i64::from(self.leap), self.day]
    }

    fn date_strings(&self, names: &NameTables) -> Vec<String> {
        vec![
            self.day.to_string(),
            if self.leap {
                names.chinese_leap()
            } else {
                String::new()
            },
            self.month.to_string(),
            year_name(self.year, names),
            self.year.to_string(),
            self.cycle.to_string(),
        ]
    }
}
