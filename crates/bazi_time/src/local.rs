//! Local civil time parsing and IANA zone resolution.
//!
//! A local wall-clock reading maps to zero, one, or two UTC instants in a
//! zone. Gaps (spring-forward) and overlaps (fall-back) are surfaced
//! explicitly; in non-strict mode a [`Fold`] selector picks the side.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Accepted local timestamp layouts, tried in order.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Hourly steps taken outward from a skipped time before giving up.
/// Date-line moves (Pacific/Apia 2011, Pacific/Kwajalein 1993) skip a whole day.
const GAP_SEARCH_HOURS: i64 = 48;

/// Which side of a zone transition a repeated or skipped local time refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fold {
    /// Offset in force before the transition (fold = 0).
    #[default]
    Earlier,
    /// Offset in force after the transition (fold = 1).
    Later,
}

impl Fold {
    /// Numeric fold code (0 = earlier, 1 = later).
    pub const fn code(self) -> u8 {
        match self {
            Self::Earlier => 0,
            Self::Later => 1,
        }
    }

    /// Convert a numeric fold code into a [`Fold`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Earlier),
            1 => Some(Self::Later),
            _ => None,
        }
    }
}

impl Display for Fold {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Fold {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "earlier" => Ok(Self::Earlier),
            "1" | "later" => Ok(Self::Later),
            _ => Err("fold must be 0/earlier or 1/later"),
        }
    }
}

/// Parse a local ISO-8601-like timestamp without offset.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]`, with `T` or a space as separator.
pub fn parse_local(input: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = input.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::Parse(input.to_string()))
}

/// Look up an IANA zone by name (e.g. `Europe/Berlin`).
pub fn parse_zone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(name.to_string()))
}

/// Resolve a local wall-clock time in `tz` to a zoned instant.
///
/// - Unique times resolve directly.
/// - Overlaps fail in strict mode; otherwise `fold` picks the earlier or later
///   UTC instant.
/// - Gaps fail in strict mode; otherwise `fold` picks which side's offset is
///   applied: `Earlier` uses the pre-transition offset (the result lands after
///   the gap), `Later` uses the post-transition offset (lands before it).
pub fn resolve_local(
    naive: NaiveDateTime,
    tz: Tz,
    strict: bool,
    fold: Fold,
) -> Result<DateTime<Tz>, TimeError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earlier, later) => {
            if strict {
                return Err(TimeError::AmbiguousLocalTime {
                    local: naive,
                    zone: tz.name().to_string(),
                });
            }
            Ok(match fold {
                Fold::Earlier => earlier,
                Fold::Later => later,
            })
        }
        LocalResult::None => {
            if strict {
                return Err(TimeError::NonexistentLocalTime {
                    local: naive,
                    zone: tz.name().to_string(),
                });
            }
            resolve_gap(naive, tz, fold)
        }
    }
}

/// Apply the offset from one side of a gap to a skipped wall-clock time.
///
/// Walks outward hour by hour until the wall clock is valid again and reads
/// the offset in force there.
fn resolve_gap(naive: NaiveDateTime, tz: Tz, fold: Fold) -> Result<DateTime<Tz>, TimeError> {
    let nonexistent = || TimeError::NonexistentLocalTime {
        local: naive,
        zone: tz.name().to_string(),
    };
    let offset = (1..=GAP_SEARCH_HOURS)
        .find_map(|hours| {
            let side = match fold {
                Fold::Earlier => naive.checked_sub_signed(TimeDelta::hours(hours))?,
                Fold::Later => naive.checked_add_signed(TimeDelta::hours(hours))?,
            };
            let resolved = tz.from_local_datetime(&side);
            match fold {
                Fold::Earlier => resolved.latest(),
                Fold::Later => resolved.earliest(),
            }
        })
        .map(|dt| dt.offset().fix())
        .ok_or_else(nonexistent)?;
    let utc = naive
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(nonexistent)?;
    Ok(tz.from_utc_datetime(&utc))
}
