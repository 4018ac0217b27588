//! Solar event search: longitude crossings and Four Pillars boundaries.
//!
//! This crate provides:
//! - A scan + bisection crossing solver over any [`SolarEphemeris`]
//! - The start-of-spring year boundary and solar-year selection
//! - The 13 month (jie) boundaries of a solar year and month lookup
//! - The 24 solar terms inside a boundary window

pub mod boundary;
pub mod crossing;
pub mod crossing_types;
pub mod error;
pub mod solar_term;

pub use bazi_ephem::SolarEphemeris;
pub use boundary::{
    MONTH_BOUNDARY_COUNT, MONTH_SPACING_DEG, MonthBoundaries, SolarYear,
    YEAR_START_LONGITUDE_DEG, month_boundaries, solar_year_for, year_start,
};
pub use crossing::{find_crossing, normalize_to_pm180};
pub use crossing_types::CrossingConfig;
pub use error::SearchError;
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, SolarTermCrossing, solar_terms};
