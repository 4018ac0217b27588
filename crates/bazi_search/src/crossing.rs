//! Solar-longitude crossing solver.
//!
//! Finds the first instant at or after a start epoch where the Sun's apparent
//! longitude reaches a target value.
//!
//! Algorithm: f(t) = normalize(lon(t) - target) wrapped to [-180, +180).
//! A coarse forward scan brackets the first genuine sign change, then
//! bisection narrows the bracket below the configured tolerance.
//! Scan samples after the first sit on whole multiples of the step, so
//! searches for the same event from different starts share one bracket and
//! return the same instant. Standard numerical root-finding.

use bazi_ephem::SolarEphemeris;
use bazi_time::SECONDS_PER_DAY;
use tracing::{debug, trace};

use crate::crossing_types::CrossingConfig;
use crate::error::SearchError;

/// Normalize an angle to [-180, +180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Signed distance of the Sun from the target longitude at `jd_ut`.
fn offset_from_target(
    eph: &dyn SolarEphemeris,
    target_deg: f64,
    jd_ut: f64,
) -> Result<f64, SearchError> {
    let lon = eph.apparent_longitude_deg(jd_ut)?;
    Ok(normalize_to_pm180(lon - target_deg))
}

/// Check if a sign change is a genuine zero crossing vs a wrap-around discontinuity.
///
/// When the normalized function jumps from ~+180 to ~-180 the product is
/// negative but the Sun is on the far side of the ecliptic from the target.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b <= 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first crossing of `target_deg` at or after `jd_start` (JD UT).
///
/// Uses the ephemeris' direct crossing search when it offers one and falls
/// back to scan + bisection otherwise. Returns the crossing as JD UT.
pub fn find_crossing(
    eph: &dyn SolarEphemeris,
    target_deg: f64,
    jd_start: f64,
    config: &CrossingConfig,
) -> Result<f64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !target_deg.is_finite() {
        return Err(SearchError::InvalidConfig("target longitude must be finite"));
    }
    if !jd_start.is_finite() {
        return Err(SearchError::InvalidConfig("start epoch must be finite"));
    }
    let target = target_deg.rem_euclid(360.0);

    if let Some(jd) = eph.solar_crossing(target, jd_start)? {
        debug!(target_deg = target, jd_start, jd, "crossing from ephemeris");
        return Ok(jd);
    }

    let (t_a, f_a, t_b) = scan_for_bracket(eph, target, jd_start, config)?;
    let jd = bisect(eph, target, t_a, f_a, t_b, config)?;
    debug!(target_deg = target, jd_start, jd, "crossing solved");
    Ok(jd)
}

/// Step forward until two consecutive samples bracket the crossing.
///
/// Returns `(t_a, f(t_a), t_b)`.
fn scan_for_bracket(
    eph: &dyn SolarEphemeris,
    target: f64,
    jd_start: f64,
    config: &CrossingConfig,
) -> Result<(f64, f64, f64), SearchError> {
    let step = config.step_days;
    let jd_limit = jd_start + config.max_scan_days;

    let mut t_prev = jd_start;
    let mut f_prev = offset_from_target(eph, target, t_prev)?;
    if f_prev == 0.0 {
        return Ok((t_prev, f_prev, t_prev));
    }

    // Grid index of the first sample strictly after the start.
    let mut n = (jd_start / step).floor() + 1.0;
    while t_prev < jd_limit {
        let t_curr = n * step;
        let f_curr = offset_from_target(eph, target, t_curr)?;
        if is_genuine_crossing(f_prev, f_curr) {
            trace!(target_deg = target, t_prev, t_curr, f_prev, f_curr, "crossing bracketed");
            return Ok((t_prev, f_prev, t_curr));
        }
        t_prev = t_curr;
        f_prev = f_curr;
        n += 1.0;
    }

    Err(SearchError::CrossingNotFound {
        target_deg: target,
        jd_start,
    })
}

/// Bisect to refine the zero crossing between `t_a` and `t_b`.
fn bisect(
    eph: &dyn SolarEphemeris,
    target: f64,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &CrossingConfig,
) -> Result<f64, SearchError> {
    let tolerance_days = config.tolerance_seconds / SECONDS_PER_DAY;

    for _ in 0..config.max_iterations {
        if t_b - t_a < tolerance_days {
            break;
        }
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = offset_from_target(eph, target, t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    Ok(0.5 * (t_a + t_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_ephem::EphemerisError;

    /// Sun moving at a constant rate from `lon0` at `epoch`.
    struct LinearSun {
        epoch: f64,
        lon0: f64,
        rate: f64,
    }

    impl LinearSun {
        fn exact_crossing(&self, target: f64, jd_start: f64) -> f64 {
            let lon_start = self.lon0 + self.rate * (jd_start - self.epoch);
            jd_start + (target - lon_start).rem_euclid(360.0) / self.rate
        }
    }

    impl SolarEphemeris for LinearSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok((self.lon0 + self.rate * (jd_ut - self.epoch)).rem_euclid(360.0))
        }
    }

    struct StuckSun;

    impl SolarEphemeris for StuckSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(100.0)
        }
    }

    struct DirectSun(f64);

    impl SolarEphemeris for DirectSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::Backend("scan should not run".into()))
        }

        fn solar_crossing(
            &self,
            _target_deg: f64,
            _jd_start_ut: f64,
        ) -> Result<Option<f64>, EphemerisError> {
            Ok(Some(self.0))
        }
    }

    struct FailingSun;

    impl SolarEphemeris for FailingSun {
        fn delta_t_seconds(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }

        fn apparent_longitude_deg(&self, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::Backend("offline".into()))
        }
    }

    fn linear() -> LinearSun {
        LinearSun {
            epoch: 2_451_545.0,
            lon0: 280.0,
            rate: 0.9856,
        }
    }

    #[test]
    fn normalize_range() {
        assert!((normalize_to_pm180(190.0) - (-170.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(180.0) - (-180.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(-180.0) - (-180.0)).abs() < 1e-12);
        assert!((normalize_to_pm180(720.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn genuine_vs_wrap() {
        assert!(is_genuine_crossing(-0.5, 0.5));
        assert!(is_genuine_crossing(0.0, 0.7));
        assert!(!is_genuine_crossing(179.5, -179.8));
        assert!(!is_genuine_crossing(1.0, 2.0));
    }

    #[test]
    fn linear_crossing_within_tolerance() {
        let sun = linear();
        let cfg = CrossingConfig::default();
        let start = 2_451_545.3;
        for target in [315.0, 345.0, 15.0, 285.0] {
            let jd = find_crossing(&sun, target, start, &cfg).unwrap();
            let expected = sun.exact_crossing(target, start);
            assert!(
                (jd - expected).abs() * SECONDS_PER_DAY < 0.01,
                "target {target}: got {jd}, expected {expected}"
            );
        }
    }

    #[test]
    fn target_wraps_into_range() {
        let sun = linear();
        let cfg = CrossingConfig::default();
        let a = find_crossing(&sun, -45.0, 2_451_545.0, &cfg).unwrap();
        let b = find_crossing(&sun, 315.0, 2_451_545.0, &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_event_from_different_starts_is_identical() {
        let sun = linear();
        let cfg = CrossingConfig::default();
        let a = find_crossing(&sun, 315.0, 2_451_545.0, &cfg).unwrap();
        let b = find_crossing(&sun, 315.0, 2_451_561.37, &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn crossing_is_not_before_start() {
        let sun = linear();
        let cfg = CrossingConfig::default();
        let first = find_crossing(&sun, 315.0, 2_451_545.0, &cfg).unwrap();
        let next = find_crossing(&sun, 315.0, first + 1.0, &cfg).unwrap();
        assert!(next - first > 360.0);
    }

    #[test]
    fn coarse_step_still_converges() {
        let sun = linear();
        let cfg = CrossingConfig::new(10.0, 1.0);
        let jd = find_crossing(&sun, 90.0, 2_451_545.0, &cfg).unwrap();
        let expected = sun.exact_crossing(90.0, 2_451_545.0);
        assert!((jd - expected).abs() * SECONDS_PER_DAY < 1.0);
    }

    #[test]
    fn stuck_sun_not_found() {
        let cfg = CrossingConfig::default();
        let err = find_crossing(&StuckSun, 315.0, 2_451_545.0, &cfg).unwrap_err();
        assert!(matches!(err, SearchError::CrossingNotFound { .. }));
    }

    #[test]
    fn direct_query_preferred() {
        let cfg = CrossingConfig::default();
        let jd = find_crossing(&DirectSun(2_460_345.1), 315.0, 2_460_310.5, &cfg).unwrap();
        assert_eq!(jd, 2_460_345.1);
    }

    #[test]
    fn ephemeris_error_propagates() {
        let cfg = CrossingConfig::default();
        let err = find_crossing(&FailingSun, 315.0, 2_451_545.0, &cfg).unwrap_err();
        assert!(matches!(err, SearchError::Ephemeris(_)));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = CrossingConfig::new(-1.0, 1.0);
        let err = find_crossing(&linear(), 315.0, 2_451_545.0, &cfg).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn nan_target_rejected() {
        let cfg = CrossingConfig::default();
        let err = find_crossing(&linear(), f64::NAN, 2_451_545.0, &cfg).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }
}
