//! Calendar arithmetic and time normalization for Four Pillars charts.
//!
//! This crate provides:
//! - Julian Day Number and Julian Date ↔ calendar conversions
//! - Local civil time parsing and IANA zone resolution (gap/overlap aware)
//! - Chart-time derivation (civil zone, local mean time, true solar time)
//! - Day-boundary application (midnight or zi hour)
//! - Equation of time

pub mod chart_time;
pub mod error;
pub mod julian;
pub mod local;
pub mod solar_time;

pub use chart_time::{ChartTime, DayBoundary, TimeStandard, chart_time, lmt_offset, pillar_date};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_utc,
    julian_day_number, utc_to_jd,
};
pub use local::{Fold, parse_local, parse_zone, resolve_local};
pub use solar_time::{equation_of_time_minutes, true_solar_hours};

// Re-export the zone type so callers don't need chrono-tz directly.
pub use chrono_tz::Tz;
