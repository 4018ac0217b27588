//! Four Pillars vocabulary and arithmetic.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with their hanzi,
//!   five-element and yin/yang attributes (plus zodiac animals and hidden
//!   stems for branches)
//! - The sexagenary (60) cycle as `Pillar`
//! - Year, month, day and hour pillar derivation with injected calibration
//! - Five-element distribution of a chart
//!
//! All functions are pure and total over their inputs.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, ElementVector, HIDDEN_STEM_WEIGHTS, Polarity};
pub use pillar::{
    Calibration, FourPillars, Pillar, day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use stem::{ALL_STEMS, Stem};
