//! Error types for crossing and boundary search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_ephem::EphemerisError;

/// Errors from the crossing solver or boundary calculator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Solver configuration or search argument is invalid.
    InvalidConfig(&'static str),
    /// The ephemeris backend failed.
    Ephemeris(EphemerisError),
    /// No crossing was bracketed within the maximum scan span.
    CrossingNotFound { target_deg: f64, jd_start: f64 },
    /// Month boundaries are not strictly increasing; `index` is the first
    /// boundary that fails to exceed its predecessor.
    NonMonotonicBoundaries { index: usize },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::CrossingNotFound {
                target_deg,
                jd_start,
            } => write!(
                f,
                "no crossing of solar longitude {target_deg}° found after JD {jd_start}"
            ),
            Self::NonMonotonicBoundaries { index } => {
                write!(f, "month boundary {index} does not follow its predecessor")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
