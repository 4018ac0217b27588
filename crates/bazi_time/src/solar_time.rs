//! Equation of time and true solar time.
//!
//! Equation of time from the NOAA fractional-year Fourier series
//! (Spencer 1971). Accuracy about ±30 s, ample for clock-hour work.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::chart_time::lmt_offset;
use crate::error::TimeError;

/// Equation of time in minutes (apparent minus mean solar time).
///
/// `day_of_year` is 1-based. Range roughly −14.2 (mid-Feb) to +16.4 (early Nov).
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let gamma = TAU * (f64::from(day_of_year) - 1.0) / 365.0;
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// True solar time of day in hours [0, 24) at a longitude (east positive).
///
/// Fails with [`TimeError::InvalidLongitude`] outside [-180, 180].
pub fn true_solar_hours(utc: &DateTime<Utc>, longitude_deg: f64) -> Result<f64, TimeError> {
    let lmt = utc.with_timezone(&lmt_offset(longitude_deg)?);
    let lmt_hours = f64::from(lmt.hour())
        + f64::from(lmt.minute()) / 60.0
        + f64::from(lmt.second()) / 3600.0;
    let eot_hours = equation_of_time_minutes(lmt.ordinal()) / 60.0;
    Ok((lmt_hours + eot_hours).rem_euclid(24.0))
}
