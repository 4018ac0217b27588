//! Four Pillars chart calculation.
//!
//! This crate provides:
//! - `ChartInput`: birth time, zone, location and chart conventions
//! - `ChartConfig`: solver settings, calibration and optional outputs
//! - `ChartCalculator`: the full pipeline from local birth time to
//!   `ChartResult` (pillars plus every intermediate instant)
//!
//! The calculator is generic over [`SolarEphemeris`]; [`AnalyticSun`] is
//! the built-in implementation.
//!
//! ```no_run
//! use bazi_chart::{ChartCalculator, ChartInput};
//!
//! let calc = ChartCalculator::default();
//! let input = ChartInput::new("2024-02-10T14:30:00", "Europe/Berlin", 13.405, 52.52);
//! let chart = calc.compute(&input)?;
//! println!("{}", chart.pillars);
//! # Ok::<(), bazi_chart::ChartError>(())
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use calculator::ChartCalculator;
pub use config::ChartConfig;
pub use error::ChartError;
pub use input::ChartInput;
pub use result::{ChartResult, SolarTermEvent};

pub use bazi_ephem::{AnalyticSun, SolarEphemeris};
pub use bazi_pillars::{Calibration, ElementVector, FourPillars, Pillar};
pub use bazi_search::{CrossingConfig, SolarTerm};
pub use bazi_time::{DayBoundary, Fold, TimeStandard};
