//! Chart calculator configuration.

use bazi_pillars::Calibration;
use bazi_search::CrossingConfig;

/// Settings for [`ChartCalculator`](crate::ChartCalculator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Crossing solver settings for every boundary search.
    pub crossing: CrossingConfig,
    /// Year and day cycle anchors.
    pub calibration: Calibration,
    /// Also solve the 24 solar terms of the birth's solar year.
    pub include_solar_terms: bool,
}

impl ChartConfig {
    /// Configuration with explicit solver and calibration settings; solar terms on.
    pub fn new(crossing: CrossingConfig, calibration: Calibration) -> Self {
        Self {
            crossing,
            calibration,
            include_solar_terms: true,
        }
    }

    /// Include or omit the 24 solar terms in results.
    pub fn with_solar_terms(mut self, include: bool) -> Self {
        self.include_solar_terms = include;
        self
    }

    /// Check every nested setting.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.crossing.validate()?;
        self.calibration.validate()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(CrossingConfig::default(), Calibration::default())
    }
}
