//! Chart input.

use bazi_time::{DayBoundary, Fold, TimeStandard};

/// Birth data and chart conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    /// Local wall-clock birth time, e.g. `2024-02-10T14:30:00`.
    pub birth_local: String,
    /// IANA zone identifier, e.g. `Europe/Berlin`.
    pub timezone: String,
    /// Degrees east, in [-180, 180].
    pub longitude_deg: f64,
    /// Degrees north, in [-90, 90].
    pub latitude_deg: f64,
    /// Clock convention for the day and hour pillars.
    pub time_standard: TimeStandard,
    /// Where the day pillar changes.
    pub day_boundary: DayBoundary,
    /// Reject ambiguous and nonexistent local times instead of resolving them.
    pub strict: bool,
    /// Which side of a zone transition to use when not strict.
    pub fold: Fold,
}

impl ChartInput {
    /// Input with civil time, midnight day boundary, strict resolution.
    pub fn new(
        birth_local: impl Into<String>,
        timezone: impl Into<String>,
        longitude_deg: f64,
        latitude_deg: f64,
    ) -> Self {
        Self {
            birth_local: birth_local.into(),
            timezone: timezone.into(),
            longitude_deg,
            latitude_deg,
            time_standard: TimeStandard::Civil,
            day_boundary: DayBoundary::Midnight,
            strict: true,
            fold: Fold::Earlier,
        }
    }

    /// Set the clock convention.
    pub fn with_time_standard(mut self, standard: TimeStandard) -> Self {
        self.time_standard = standard;
        self
    }

    /// Set the day boundary.
    pub fn with_day_boundary(mut self, boundary: DayBoundary) -> Self {
        self.day_boundary = boundary;
        self
    }

    /// Set strict local-time resolution.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the zone-transition side used when not strict.
    pub fn with_fold(mut self, fold: Fold) -> Self {
        self.fold = fold;
        self
    }

    /// Check that the coordinates are finite and in range.
    pub fn validate_location(&self) -> Result<(), &'static str> {
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude must be within [-180, 180]");
        }
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude must be within [-90, 90]");
        }
        Ok(())
    }
}
