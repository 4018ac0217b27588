//! Chart result types.

use bazi_pillars::{ElementVector, FourPillars};
use bazi_search::{MonthBoundaries, SolarTerm};
use bazi_time::Tz;
use chrono::{DateTime, FixedOffset, Utc};

/// One solved solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    /// Which of the 24 terms.
    pub term: SolarTerm,
    /// Defining apparent solar longitude.
    pub longitude_deg: f64,
    /// Crossing instant, JD UT.
    pub jd_ut: f64,
    /// Crossing instant in UTC.
    pub utc: DateTime<Utc>,
    /// The same instant at the chart offset.
    pub chart_local: DateTime<FixedOffset>,
}

/// A computed chart with provenance for every intermediate value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    /// Year, month, day and hour pillars.
    pub pillars: FourPillars,
    /// Birth time resolved in its civil zone.
    pub birth_local: DateTime<Tz>,
    /// Birth instant in UTC.
    pub birth_utc: DateTime<Utc>,
    /// Birth time at the chart offset (civil, local mean or true solar).
    pub chart_local: DateTime<FixedOffset>,
    /// Birth instant, JD UT.
    pub jd_ut: f64,
    /// Birth instant, JD TT.
    pub jd_tt: f64,
    /// TT minus UT at birth, in seconds.
    pub delta_t_seconds: f64,
    /// Solar year of the year pillar.
    pub solar_year: i32,
    /// Start of spring opening `solar_year`, at the chart offset.
    pub year_start: DateTime<FixedOffset>,
    /// The 13 month boundaries as JD UT.
    pub month_boundaries: MonthBoundaries,
    /// The same boundaries at the chart offset.
    pub month_boundary_times: Vec<DateTime<FixedOffset>>,
    /// Month of the birth, 0 = the month opened by start of spring.
    pub month_index: usize,
    /// All 24 terms of the solar year, when enabled.
    pub solar_terms: Option<Vec<SolarTermEvent>>,
}

impl ChartResult {
    /// Five-element distribution of the pillars.
    pub fn elements(&self) -> ElementVector {
        ElementVector::from_pillars(&self.pillars)
    }
}
