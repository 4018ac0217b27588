//! Julian Day Number and Julian Date conversions.
//!
//! All calendar arithmetic is proleptic Gregorian.
//!
//! Sources:
//! - Integer JDN: Fliegel & Van Flandern, CACM 11 (1968). Public domain.
//! - Fractional JD ↔ calendar: Meeus, "Astronomical Algorithms", ch. 7.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one (civil) day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number of a proleptic Gregorian date.
///
/// Integer-only; the JDN labels the day that starts at the preceding noon,
/// so `julian_day_number(2000, 1, 1) == 2_451_545`.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Julian Date from a Gregorian calendar date with fractional day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Gregorian calendar date from a Julian Date.
///
/// Returns `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian Date (UT) of a UTC instant.
pub fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    let secs = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date (UT), rounded to the millisecond.
///
/// Returns `None` for non-finite input or dates outside chrono's range.
pub fn jd_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    DateTime::from_timestamp_millis(millis as i64)
}
