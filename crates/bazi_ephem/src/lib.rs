//! Solar ephemeris port consumed by the chart core.
//!
//! The core needs three things from an ephemeris: the ΔT time-scale
//! correction, the Sun's apparent ecliptic longitude, and (optionally) a
//! direct "next crossing of longitude λ" query. [`SolarEphemeris`] is that
//! contract; [`AnalyticSun`] is the bundled low-precision implementation.

pub mod delta_t;
pub mod error;
pub mod sun;

pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::EphemerisError;
pub use sun::{AnalyticSun, apparent_longitude_tt, nutation_longitude_arcsec};

use bazi_time::SECONDS_PER_DAY;

/// Capability the chart core consumes to locate solar events.
///
/// All times are Julian Dates on the UT axis. Implementations must be safe
/// for concurrent read-only queries; the `Send + Sync` bound enforces it.
pub trait SolarEphemeris: Send + Sync {
    /// ΔT = TT − UT in seconds at the given UT instant.
    fn delta_t_seconds(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Apparent geocentric ecliptic longitude of the Sun (true equinox of
    /// date) in degrees [0, 360).
    fn apparent_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// First instant at or after `jd_start_ut` when the apparent longitude
    /// equals `target_deg`.
    ///
    /// `Ok(None)` means the backend has no direct query; callers fall back to
    /// a numerical search over [`apparent_longitude_deg`](Self::apparent_longitude_deg).
    fn solar_crossing(
        &self,
        target_deg: f64,
        jd_start_ut: f64,
    ) -> Result<Option<f64>, EphemerisError> {
        let _ = (target_deg, jd_start_ut);
        Ok(None)
    }

    /// Convert a UT Julian Date to TT using this backend's ΔT.
    fn jd_tt(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(jd_ut + self.delta_t_seconds(jd_ut)? / SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSun;

    impl SolarEphemeris for FixedSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(86_400.0)
        }

        fn apparent_longitude_deg(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(42.0)
        }
    }

    #[test]
    fn direct_crossing_unsupported_by_default() {
        assert_eq!(FixedSun.solar_crossing(315.0, 2_460_000.5), Ok(None));
    }

    #[test]
    fn jd_tt_adds_delta_t() {
        assert_eq!(FixedSun.jd_tt(2_460_000.5), Ok(2_460_001.5));
    }

    #[test]
    fn usable_as_trait_object() {
        let eph: &dyn SolarEphemeris = &FixedSun;
        assert_eq!(eph.apparent_longitude_deg(0.0), Ok(42.0));
    }
}
