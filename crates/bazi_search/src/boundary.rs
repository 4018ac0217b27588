//! Year and month boundaries from solar-longitude crossings.
//!
//! The solar year opens when the Sun reaches 315° (start of spring). The
//! twelve months open every further 30°, so a solar year spans 13 boundary
//! instants: 315°, 345°, 15°, …, 285°, and the next year's 315°.

use std::cmp::Ordering;

use bazi_ephem::SolarEphemeris;
use bazi_time::{julian_day_number, utc_to_jd};
use chrono::{DateTime, Datelike, FixedOffset, Utc};

use crate::crossing::find_crossing;
use crate::crossing_types::CrossingConfig;
use crate::error::SearchError;

/// Solar longitude that opens the solar year.
pub const YEAR_START_LONGITUDE_DEG: f64 = 315.0;
/// Longitude spacing of month-opening terms.
pub const MONTH_SPACING_DEG: f64 = 30.0;
/// Boundary instants in one solar year, both ends included.
pub const MONTH_BOUNDARY_COUNT: usize = 13;

/// A solar year and the instant it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarYear {
    /// Civil year in which this solar year opens.
    pub year: i32,
    /// Start-of-spring crossing, JD UT.
    pub start_jd: f64,
}

/// Start-of-spring crossing for `civil_year`, searched from 0h UT on 1 January.
pub fn year_start(
    eph: &dyn SolarEphemeris,
    civil_year: i32,
    config: &CrossingConfig,
) -> Result<f64, SearchError> {
    let jd_jan1 = julian_day_number(civil_year, 1, 1) as f64 - 0.5;
    find_crossing(eph, YEAR_START_LONGITUDE_DEG, jd_jan1, config)
}

/// Solar year containing `chart_local`.
///
/// The civil year is taken from the chart-local wall clock. Instants before
/// that year's start of spring belong to the previous solar year.
pub fn solar_year_for(
    eph: &dyn SolarEphemeris,
    chart_local: &DateTime<FixedOffset>,
    config: &CrossingConfig,
) -> Result<SolarYear, SearchError> {
    let civil_year = chart_local.year();
    let jd = utc_to_jd(&chart_local.with_timezone(&Utc));

    let start_jd = year_start(eph, civil_year, config)?;
    if jd >= start_jd {
        return Ok(SolarYear {
            year: civil_year,
            start_jd,
        });
    }

    let year = civil_year - 1;
    let start_jd = year_start(eph, year, config)?;
    Ok(SolarYear { year, start_jd })
}

/// The 13 month-opening instants of one solar year (JD UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBoundaries([f64; MONTH_BOUNDARY_COUNT]);

impl MonthBoundaries {
    /// Wrap boundary instants, rejecting any that fail to increase.
    pub fn from_instants(jd: [f64; MONTH_BOUNDARY_COUNT]) -> Result<Self, SearchError> {
        if let Some(i) = jd
            .windows(2)
            .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less))
        {
            return Err(SearchError::NonMonotonicBoundaries { index: i + 1 });
        }
        Ok(Self(jd))
    }

    /// All boundaries in order.
    pub fn instants(&self) -> &[f64; MONTH_BOUNDARY_COUNT] {
        &self.0
    }

    /// Start of spring of this solar year.
    pub fn start(&self) -> f64 {
        self.0[0]
    }

    /// Start of spring of the following solar year.
    pub fn end(&self) -> f64 {
        self.0[MONTH_BOUNDARY_COUNT - 1]
    }

    /// Index k in 0..12 with b\[k\] <= jd < b\[k+1\], or `None` outside the year.
    pub fn month_index(&self, jd_ut: f64) -> Option<usize> {
        self.0
            .windows(2)
            .position(|w| w[0] <= jd_ut && jd_ut < w[1])
    }

    /// Half-open span `[start, end)` of month `index`.
    pub fn month_span(&self, index: usize) -> Option<(f64, f64)> {
        if index + 1 < MONTH_BOUNDARY_COUNT {
            Some((self.0[index], self.0[index + 1]))
        } else {
            None
        }
    }
}

/// Compute the month boundaries of the solar year opening at `year_start_jd`.
///
/// Each crossing is searched from the previous boundary.
pub fn month_boundaries(
    eph: &dyn SolarEphemeris,
    year_start_jd: f64,
    config: &CrossingConfig,
) -> Result<MonthBoundaries, SearchError> {
    let mut jd = [year_start_jd; MONTH_BOUNDARY_COUNT];
    for k in 1..MONTH_BOUNDARY_COUNT {
        let target = YEAR_START_LONGITUDE_DEG + MONTH_SPACING_DEG * k as f64;
        jd[k] = find_crossing(eph, target, jd[k - 1], config)?;
    }
    MonthBoundaries::from_instants(jd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_ephem::EphemerisError;
    use chrono::TimeZone;

    /// Uniform Sun: 0° at JD 2451545.0 + `phase`, one revolution per 360 days.
    struct UniformSun {
        phase: f64,
    }

    impl SolarEphemeris for UniformSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok((jd_ut - 2_451_545.0 - self.phase).rem_euclid(360.0))
        }
    }

    /// Direct crossings that run backwards in time.
    struct BackwardsSun;

    impl SolarEphemeris for BackwardsSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn solar_crossing(
            &self,
            _target_deg: f64,
            jd_start_ut: f64,
        ) -> Result<Option<f64>, EphemerisError> {
            Ok(Some(jd_start_ut - 1.0))
        }
    }

    fn sample_boundaries() -> MonthBoundaries {
        let mut jd = [0.0; MONTH_BOUNDARY_COUNT];
        for (k, b) in jd.iter_mut().enumerate() {
            *b = 100.0 + 30.0 * k as f64;
        }
        MonthBoundaries::from_instants(jd).unwrap()
    }

    #[test]
    fn month_index_half_open() {
        let b = sample_boundaries();
        assert_eq!(b.month_index(100.0), Some(0));
        assert_eq!(b.month_index(129.999), Some(0));
        assert_eq!(b.month_index(130.0), Some(1));
        assert_eq!(b.month_index(459.9), Some(11));
        assert_eq!(b.month_index(460.0), None);
        assert_eq!(b.month_index(99.9), None);
    }

    #[test]
    fn month_span_bounds() {
        let b = sample_boundaries();
        assert_eq!(b.month_span(0), Some((100.0, 130.0)));
        assert_eq!(b.month_span(11), Some((430.0, 460.0)));
        assert_eq!(b.month_span(12), None);
        assert_eq!(b.start(), 100.0);
        assert_eq!(b.end(), 460.0);
    }

    #[test]
    fn from_instants_rejects_repeat() {
        let mut jd = *sample_boundaries().instants();
        jd[5] = jd[4];
        assert_eq!(
            MonthBoundaries::from_instants(jd),
            Err(SearchError::NonMonotonicBoundaries { index: 5 })
        );
    }

    #[test]
    fn from_instants_rejects_nan() {
        let mut jd = *sample_boundaries().instants();
        jd[3] = f64::NAN;
        assert_eq!(
            MonthBoundaries::from_instants(jd),
            Err(SearchError::NonMonotonicBoundaries { index: 3 })
        );
    }

    #[test]
    fn uniform_sun_boundaries_thirty_days_apart() {
        let sun = UniformSun { phase: 0.0 };
        let cfg = CrossingConfig::default();
        let start = year_start(&sun, 2000, &cfg).unwrap();
        // 315° is reached 315 days after the zero epoch, i.e. JD 2451860.0.
        assert!((start - 2_451_860.0).abs() < 1e-6, "start = {start}");
        let b = month_boundaries(&sun, start, &cfg).unwrap();
        for w in b.instants().windows(2) {
            assert!((w[1] - w[0] - 30.0).abs() < 1e-6);
        }
    }

    #[test]
    fn solar_year_before_and_after_start() {
        let sun = UniformSun { phase: 0.0 };
        let cfg = CrossingConfig::default();
        let utc = FixedOffset::east_opt(0).unwrap();

        // JD 2451860.0 is 2000-11-11 12:00 UTC.
        let before = utc.with_ymd_and_hms(2000, 11, 11, 11, 0, 0).unwrap();
        let after = utc.with_ymd_and_hms(2000, 11, 11, 13, 0, 0).unwrap();

        let y_before = solar_year_for(&sun, &before, &cfg).unwrap();
        let y_after = solar_year_for(&sun, &after, &cfg).unwrap();
        assert_eq!(y_before.year, 1999);
        assert_eq!(y_after.year, 2000);
        assert!(y_before.start_jd < y_after.start_jd);
    }

    #[test]
    fn non_monotonic_direct_crossings_rejected() {
        let cfg = CrossingConfig::default();
        let err = month_boundaries(&BackwardsSun, 2_460_345.0, &cfg).unwrap_err();
        assert_eq!(err, SearchError::NonMonotonicBoundaries { index: 1 });
    }
}
