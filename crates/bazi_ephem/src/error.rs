//! Error types for ephemeris backends.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors reported by a [`SolarEphemeris`](crate::SolarEphemeris) backend.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch is not finite or outside the backend's coverage.
    InvalidEpoch(&'static str),
    /// Backend-specific failure (kernel lookup, I/O, ...).
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch(msg) => write!(f, "invalid epoch: {msg}"),
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
