//! Configuration for the solar-longitude crossing solver.

/// Solver settings for scan + bisection crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Coarse scan step in days (default 1.0; the Sun moves ~1°/day).
    pub step_days: f64,
    /// Bisection stops once the bracket is narrower than this (default 1 ms).
    pub tolerance_seconds: f64,
    /// Give up if no crossing is bracketed within this span (default 400 days).
    pub max_scan_days: f64,
    /// Upper bound on bisection iterations (default 64).
    pub max_iterations: u32,
}

impl CrossingConfig {
    /// Largest scan step that still tells a crossing from a ±180° wrap.
    pub const MAX_STEP_DAYS: f64 = 60.0;

    /// Config with a custom step and tolerance, other fields at defaults.
    pub fn new(step_days: f64, tolerance_seconds: f64) -> Self {
        Self {
            step_days,
            tolerance_seconds,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite()
            || self.step_days <= 0.0
            || self.step_days > Self::MAX_STEP_DAYS
        {
            return Err("step_days must be in (0, 60]");
        }
        if !self.tolerance_seconds.is_finite() || self.tolerance_seconds <= 0.0 {
            return Err("tolerance_seconds must be positive");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days < self.step_days {
            return Err("max_scan_days must be at least one step");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            tolerance_seconds: 1e-3,
            max_scan_days: 400.0,
            max_iterations: 64,
        }
    }
}
