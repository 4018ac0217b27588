//! Error type for chart calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_ephem::EphemerisError;
use bazi_search::SearchError;
use bazi_time::TimeError;

/// Errors from chart calculation. Every error aborts the computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Chart configuration is invalid.
    InvalidConfig(&'static str),
    /// Longitude or latitude is out of range.
    InvalidLocation(&'static str),
    /// Timestamp, zone or local-time resolution failed.
    Time(TimeError),
    /// Ephemeris backend failed.
    Ephemeris(EphemerisError),
    /// Crossing search or boundary construction failed.
    Search(SearchError),
    /// The birth instant is not covered by its solar year's boundaries.
    OutsideBoundaryWindow { jd_ut: f64 },
}

impl ChartError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidLocation(_) => "INVALID_LOCATION",
            Self::Time(e) => match e {
                TimeError::Parse(_) => "INVALID_TIMESTAMP",
                TimeError::UnknownZone(_) => "UNKNOWN_TIMEZONE",
                TimeError::NonexistentLocalTime { .. } => "NONEXISTENT_LOCAL_TIME",
                TimeError::AmbiguousLocalTime { .. } => "AMBIGUOUS_LOCAL_TIME",
                TimeError::InvalidLongitude => "INVALID_LOCATION",
                _ => "TIME_OUT_OF_RANGE",
            },
            Self::Ephemeris(_) => "EPHEMERIS_ERROR",
            Self::Search(e) => match e {
                SearchError::InvalidConfig(_) => "INVALID_CONFIG",
                SearchError::Ephemeris(_) => "EPHEMERIS_ERROR",
                SearchError::CrossingNotFound { .. } => "CROSSING_NOT_FOUND",
                SearchError::NonMonotonicBoundaries { .. } => "NON_MONOTONIC_BOUNDARIES",
                _ => "SEARCH_ERROR",
            },
            Self::OutsideBoundaryWindow { .. } => "OUTSIDE_BOUNDARY_WINDOW",
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid chart config: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::OutsideBoundaryWindow { jd_ut } => {
                write!(f, "JD {jd_ut} lies outside its solar year's month boundaries")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<SearchError> for ChartError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
