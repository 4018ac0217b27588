//! The chart pipeline.

use bazi_ephem::{AnalyticSun, SolarEphemeris};
use bazi_pillars::{FourPillars, day_pillar, hour_pillar, month_pillar, year_pillar};
use bazi_search::{month_boundaries, solar_terms, solar_year_for};
use bazi_time::{
    SECONDS_PER_DAY, TimeError, Tz, chart_time, jd_to_utc, julian_day_number, parse_local,
    parse_zone, pillar_date, resolve_local, utc_to_jd,
};
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::ChartInput;
use crate::result::{ChartResult, SolarTermEvent};

/// Computes Four Pillars charts against a solar ephemeris.
///
/// Holds no mutable state; a calculator over a `Sync` ephemeris can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct ChartCalculator<E: SolarEphemeris> {
    ephemeris: E,
    config: ChartConfig,
}

impl<E: SolarEphemeris> ChartCalculator<E> {
    /// Calculator with default configuration.
    pub fn new(ephemeris: E) -> Self {
        Self {
            ephemeris,
            config: ChartConfig::default(),
        }
    }

    /// Calculator with a validated custom configuration.
    pub fn with_config(ephemeris: E, config: ChartConfig) -> Result<Self, ChartError> {
        config.validate().map_err(ChartError::InvalidConfig)?;
        Ok(Self { ephemeris, config })
    }

    /// Active configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Underlying solar ephemeris.
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Compute the chart for a local birth time.
    pub fn compute(&self, input: &ChartInput) -> Result<ChartResult, ChartError> {
        input
            .validate_location()
            .map_err(ChartError::InvalidLocation)?;
        let naive = parse_local(&input.birth_local)?;
        let tz = parse_zone(&input.timezone)?;
        let local = resolve_local(naive, tz, input.strict, input.fold)?;
        trace!(%naive, %local, "local time resolved");
        self.compute_resolved(local, input)
    }

    /// Compute the chart for a known UTC instant.
    ///
    /// `input.birth_local`, `input.strict` and `input.fold` are ignored; the
    /// zone, location and conventions are taken from `input`.
    pub fn compute_at(
        &self,
        instant: DateTime<Utc>,
        input: &ChartInput,
    ) -> Result<ChartResult, ChartError> {
        input
            .validate_location()
            .map_err(ChartError::InvalidLocation)?;
        let tz = parse_zone(&input.timezone)?;
        self.compute_resolved(instant.with_timezone(&tz), input)
    }

    fn compute_resolved(
        &self,
        local: DateTime<Tz>,
        input: &ChartInput,
    ) -> Result<ChartResult, ChartError> {
        let eph: &dyn SolarEphemeris = &self.ephemeris;
        let crossing = &self.config.crossing;
        let calibration = &self.config.calibration;

        let ct = chart_time(&local, input.time_standard, input.longitude_deg)?;
        let offset = *ct.chart_local.offset();

        let jd_ut = utc_to_jd(&ct.utc);
        let delta_t_seconds = eph.delta_t_seconds(jd_ut)?;
        let jd_tt = jd_ut + delta_t_seconds / SECONDS_PER_DAY;

        let solar_year = solar_year_for(eph, &ct.chart_local, crossing)?;
        let boundaries = month_boundaries(eph, solar_year.start_jd, crossing)?;
        let month_index = boundaries
            .month_index(jd_ut)
            .ok_or(ChartError::OutsideBoundaryWindow { jd_ut })?;

        let year = year_pillar(solar_year.year, calibration);
        let month = month_pillar(year.stem(), month_index);

        let date = pillar_date(&ct.chart_local.naive_local(), input.day_boundary)?;
        let jdn = julian_day_number(date.year(), date.month(), date.day());
        let day = day_pillar(jdn, calibration);
        let hour = hour_pillar(ct.chart_local.hour(), day.stem());

        let pillars = FourPillars {
            year,
            month,
            day,
            hour,
        };

        let month_boundary_times = boundaries
            .instants()
            .iter()
            .map(|&jd| at_offset(jd, &offset))
            .collect::<Result<Vec<_>, _>>()?;

        let solar_terms = if self.config.include_solar_terms {
            let events = solar_terms(eph, &boundaries, crossing)?
                .into_iter()
                .map(|c| {
                    let chart_local = at_offset(c.jd_ut, &offset)?;
                    Ok(SolarTermEvent {
                        term: c.term,
                        longitude_deg: c.term.longitude_deg(),
                        jd_ut: c.jd_ut,
                        utc: chart_local.with_timezone(&Utc),
                        chart_local,
                    })
                })
                .collect::<Result<Vec<_>, ChartError>>()?;
            Some(events)
        } else {
            None
        };

        debug!(
            solar_year = solar_year.year,
            month_index,
            jdn,
            %pillars,
            "chart computed"
        );

        Ok(ChartResult {
            pillars,
            birth_local: local,
            birth_utc: ct.utc,
            chart_local: ct.chart_local,
            jd_ut,
            jd_tt,
            delta_t_seconds,
            solar_year: solar_year.year,
            year_start: at_offset(solar_year.start_jd, &offset)?,
            month_boundaries: boundaries,
            month_boundary_times,
            month_index,
            solar_terms,
        })
    }
}

impl Default for ChartCalculator<AnalyticSun> {
    fn default() -> Self {
        Self::new(AnalyticSun)
    }
}

/// A Julian Date viewed at `offset`.
fn at_offset(jd_ut: f64, offset: &FixedOffset) -> Result<DateTime<FixedOffset>, ChartError> {
    let utc = jd_to_utc(jd_ut).ok_or(TimeError::OutOfRange)?;
    Ok(utc.with_timezone(offset))
}
