//! Error types for time parsing and zone resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

/// Errors from local-time parsing, zone lookup, or chart-time derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Local timestamp string could not be parsed.
    Parse(String),
    /// Zone identifier is not in the IANA database.
    UnknownZone(String),
    /// Local time falls in a zone-transition gap.
    NonexistentLocalTime { local: NaiveDateTime, zone: String },
    /// Local time falls in a zone-transition overlap (strict mode only).
    AmbiguousLocalTime { local: NaiveDateTime, zone: String },
    /// Longitude is not finite or outside [-180, 180].
    InvalidLongitude,
    /// Instant cannot be represented as a calendar timestamp.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(input) => write!(f, "unparsable local timestamp: {input:?}"),
            Self::UnknownZone(name) => write!(f, "unknown time zone: {name:?}"),
            Self::NonexistentLocalTime { local, zone } => {
                write!(f, "local time {local} does not exist in {zone}")
            }
            Self::AmbiguousLocalTime { local, zone } => {
                write!(f, "local time {local} is ambiguous in {zone}")
            }
            Self::InvalidLongitude => write!(f, "longitude must be within [-180, 180]"),
            Self::OutOfRange => write!(f, "instant outside representable range"),
        }
    }
}

impl Error for TimeError {}
