//! Chart-time derivation and day-boundary rules.
//!
//! The "chart-local" instant is the birth instant viewed at the offset whose
//! wall clock drives day and hour pillars: the zone's civil offset, the
//! local-mean-time offset `longitude / 15` hours, or local mean time plus
//! the equation of time.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::solar_time::equation_of_time_minutes;

/// Time of day 1° of longitude is worth, in seconds (24 h / 360°).
const SECONDS_PER_DEGREE: f64 = 240.0;

/// Clock convention used for the chart-local wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeStandard {
    /// The zone's civil clock, including daylight saving.
    #[default]
    Civil,
    /// Local mean time at the birth longitude.
    LocalMeanTime,
    /// Apparent (true) solar time: local mean time plus the equation of time.
    TrueSolarTime,
}

impl TimeStandard {
    /// Short code used by front ends (`CIVIL`, `LMT`, `TST`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Civil => "CIVIL",
            Self::LocalMeanTime => "LMT",
            Self::TrueSolarTime => "TST",
        }
    }
}

impl Display for TimeStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeStandard {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CIVIL" => Ok(Self::Civil),
            "LMT" => Ok(Self::LocalMeanTime),
            "TST" => Ok(Self::TrueSolarTime),
            _ => Err("time standard must be CIVIL, LMT or TST"),
        }
    }
}

/// Where one pillar day ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayBoundary {
    /// Day changes at 00:00.
    #[default]
    Midnight,
    /// Day changes at 23:00, the start of the zi (rat) double-hour.
    ZiHour,
}

impl DayBoundary {
    /// Short code used by front ends (`midnight`, `zi`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::ZiHour => "zi",
        }
    }
}

impl Display for DayBoundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DayBoundary {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midnight" => Ok(Self::Midnight),
            "zi" => Ok(Self::ZiHour),
            _ => Err("day boundary must be midnight or zi"),
        }
    }
}

/// A birth instant in UTC and in chart-local wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTime {
    /// The instant in UTC.
    pub utc: DateTime<Utc>,
    /// The same instant at the chart offset.
    pub chart_local: DateTime<FixedOffset>,
}

/// Local-mean-time offset for a longitude, rounded to whole seconds.
pub fn lmt_offset(longitude_deg: f64) -> Result<FixedOffset, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidLongitude);
    }
    let secs = (longitude_deg * SECONDS_PER_DEGREE).round() as i32;
    FixedOffset::east_opt(secs).ok_or(TimeError::InvalidLongitude)
}

/// Derive the UTC and chart-local views of a resolved local instant.
pub fn chart_time(
    local: &DateTime<Tz>,
    standard: TimeStandard,
    longitude_deg: f64,
) -> Result<ChartTime, TimeError> {
    let utc = local.with_timezone(&Utc);
    let chart_local = match standard {
        TimeStandard::Civil => local.with_timezone(&local.offset().fix()),
        TimeStandard::LocalMeanTime => utc.with_timezone(&lmt_offset(longitude_deg)?),
        TimeStandard::TrueSolarTime => {
            let lmt = lmt_offset(longitude_deg)?;
            let day_of_year = utc.with_timezone(&lmt).ordinal();
            let eot_secs = (equation_of_time_minutes(day_of_year) * 60.0).round() as i32;
            let offset = FixedOffset::east_opt(lmt.local_minus_utc() + eot_secs)
                .ok_or(TimeError::OutOfRange)?;
            utc.with_timezone(&offset)
        }
    };
    Ok(ChartTime { utc, chart_local })
}

/// Calendar date used for the day pillar.
///
/// Under [`DayBoundary::ZiHour`] any wall time in hour 23 counts as the
/// following day; hour 0 is already on the following calendar date.
/// Rolling past `NaiveDate::MAX` is [`TimeError::OutOfRange`].
pub fn pillar_date(
    chart_local: &NaiveDateTime,
    boundary: DayBoundary,
) -> Result<NaiveDate, TimeError> {
    let date = chart_local.date();
    match boundary {
        DayBoundary::ZiHour if chart_local.hour() == 23 => {
            date.succ_opt().ok_or(TimeError::OutOfRange)
        }
        _ => Ok(date),
    }
}
