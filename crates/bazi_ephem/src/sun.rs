//! Analytic apparent solar longitude.
//!
//! Geometric longitude from the Meeus solar theory ("Astronomical
//! Algorithms", ch. 25), corrected to apparent place with:
//! - nutation in longitude, the four leading IAU 1980 terms (Meeus ch. 22)
//! - annual aberration, −20.4898″ / R
//!
//! Accuracy is about 0.01°, i.e. a crossing-time error of ~15 minutes at
//! worst. Chart pillars depending on a crossing closer than that should use
//! a high-precision backend behind the same [`SolarEphemeris`] trait.

use bazi_time::J2000_JD;

use crate::SolarEphemeris;
use crate::delta_t::{decimal_year, delta_t_seconds};
use crate::error::EphemerisError;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Constant of aberration in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Nutation in longitude Δψ in arcseconds (leading terms, ~0.5″ accuracy).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Apparent geocentric solar longitude in degrees [0, 360) at a TT Julian Date.
pub fn apparent_longitude_tt(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;

    let mean_lon = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let mean_anom = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();
    let ecc = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let center = (1.914602 - 0.004817 * t - 0.000014 * t2) * mean_anom.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anom).sin()
        + 0.000289 * (3.0 * mean_anom).sin();

    let true_lon = mean_lon + center;
    let true_anom = mean_anom + center.to_radians();
    let radius_au = 1.000_001_018 * (1.0 - ecc * ecc) / (1.0 + ecc * true_anom.cos());

    let nutation = nutation_longitude_arcsec(t);
    let aberration = -ABERRATION_ARCSEC / radius_au;

    (true_lon + (nutation + aberration) / 3600.0).rem_euclid(360.0)
}

/// Bundled analytic ephemeris: Meeus solar theory plus Espenak–Meeus ΔT.
///
/// Has no direct crossing query, so searches go through the numerical
/// solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticSun;

impl AnalyticSun {
    /// Create the analytic model.
    pub fn new() -> Self {
        Self
    }
}

fn check_epoch(jd_ut: f64) -> Result<(), EphemerisError> {
    if jd_ut.is_finite() {
        Ok(())
    } else {
        Err(EphemerisError::InvalidEpoch("julian date must be finite"))
    }
}

impl SolarEphemeris for AnalyticSun {
    fn delta_t_seconds(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        check_epoch(jd_ut)?;
        Ok(delta_t_seconds(decimal_year(jd_ut)))
    }

    fn apparent_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        let jd_tt = self.jd_tt(jd_ut)?;
        Ok(apparent_longitude_tt(jd_tt))
    }
}
