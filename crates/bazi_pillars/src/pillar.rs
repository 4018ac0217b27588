//! Pillars of the sexagenary cycle and the four derivation formulas.
//!
//! A pillar is a stem paired with a branch of equal parity; the 60 valid
//! pairs form the cycle JiaZi (0) .. GuiHai (59).

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::stem::Stem;

/// One stem/branch pair of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair `stem` with `branch`. `None` when their parities differ, since
    /// such pairs never occur in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        (stem.index() % 2 == branch.index() % 2).then_some(Self { stem, branch })
    }

    /// Pillar at position `index` of the cycle, wrapping modulo 60.
    pub fn from_cycle(index: u32) -> Self {
        Self {
            stem: Stem::from_index(index % 10),
            branch: Branch::from_index(index % 12),
        }
    }

    /// Heavenly stem.
    pub fn stem(self) -> Stem {
        self.stem
    }

    /// Earthly branch.
    pub fn branch(self) -> Branch {
        self.branch
    }

    /// Stem index in 0..10.
    pub fn stem_index(self) -> u8 {
        self.stem.index()
    }

    /// Branch index in 0..12.
    pub fn branch_index(self) -> u8 {
        self.branch.index()
    }

    /// Position in 0..60, the unique n with n ≡ stem (mod 10) and n ≡ branch (mod 12).
    pub fn cycle_index(self) -> u8 {
        let s = i32::from(self.stem.index());
        let b = i32::from(self.branch.index());
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Next pillar in the cycle.
    pub fn succ(self) -> Self {
        Self::from_cycle(u32::from(self.cycle_index()) + 1)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Year, month, day and hour pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    /// Pillar of the solar year.
    pub year: Pillar,
    /// Pillar of the solar month.
    pub month: Pillar,
    /// Pillar of the calendar day.
    pub day: Pillar,
    /// Pillar of the double-hour.
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = Pillar> {
        [self.year, self.month, self.day, self.hour].into_iter()
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Reference constants anchoring the year and day cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// A solar year whose year pillar is JiaZi (default 1984).
    pub year_reference: i32,
    /// Added to the Julian Day Number before reducing mod 60 (default 49,
    /// so JDN 2433191 = 1949-10-01 is JiaZi).
    pub day_offset: i64,
}

impl Calibration {
    /// Year whose pillar is JiaZi under the default calibration.
    pub const DEFAULT_YEAR_REFERENCE: i32 = 1984;
    /// Day offset under which JDN 2433191 (1949-10-01) is JiaZi.
    pub const DEFAULT_DAY_OFFSET: i64 = 49;

    /// Calibration with explicit references.
    pub fn new(year_reference: i32, day_offset: i64) -> Self {
        Self {
            year_reference,
            day_offset,
        }
    }

    /// Check that `day_offset` is a residue mod 60.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0..60).contains(&self.day_offset) {
            return Err("day_offset must be in [0, 60)");
        }
        Ok(())
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::new(Self::DEFAULT_YEAR_REFERENCE, Self::DEFAULT_DAY_OFFSET)
    }
}

fn cycle_mod(n: i64) -> u32 {
    n.rem_euclid(60) as u32
}

/// Year pillar of `solar_year`.
pub fn year_pillar(solar_year: i32, calibration: &Calibration) -> Pillar {
    let n = i64::from(solar_year) - i64::from(calibration.year_reference);
    Pillar::from_cycle(cycle_mod(n))
}

/// Month pillar for month `month_index` (0 = the month opened by start of spring).
///
/// Branch starts at Yin; the first month's stem follows from the year stem.
pub fn month_pillar(year_stem: Stem, month_index: usize) -> Pillar {
    let m = (month_index % 12) as u32;
    let branch = Branch::from_index(2 + m);
    let stem = Stem::from_index(2 * u32::from(year_stem.index()) + 2 + m);
    Pillar { stem, branch }
}

/// Day pillar for Julian Day Number `jdn`.
pub fn day_pillar(jdn: i64, calibration: &Calibration) -> Pillar {
    Pillar::from_cycle(cycle_mod(jdn + calibration.day_offset))
}

/// Hour pillar for a wall-clock `hour` (0..24) on a day with stem `day_stem`.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = Branch::from_hour(hour);
    let stem = Stem::from_index(2 * u32::from(day_stem.index()) + u32::from(branch.index()));
    Pillar { stem, branch }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cal() -> Calibration {
        Calibration::default()
    }

    #[test]
    fn cycle_index_round_trip() {
        for n in 0..60 {
            let p = Pillar::from_cycle(n);
            assert_eq!(u32::from(p.cycle_index()), n);
            assert!(p.stem_index() < 10 && p.branch_index() < 12);
        }
        assert_eq!(Pillar::from_cycle(60), Pillar::from_cycle(0));
    }

    #[test]
    fn new_rejects_mixed_parity() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
        assert_eq!(
            Pillar::new(Stem::Jia, Branch::Chen),
            Some(Pillar::from_cycle(40))
        );
    }

    #[test]
    fn display_pinyin() {
        assert_eq!(Pillar::from_cycle(0).to_string(), "JiaZi");
        assert_eq!(Pillar::from_cycle(59).to_string(), "GuiHai");
        assert_eq!(Pillar::from_cycle(59).succ(), Pillar::from_cycle(0));
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984, &cal()).to_string(), "JiaZi");
        assert_eq!(year_pillar(2024, &cal()).to_string(), "JiaChen");
        assert_eq!(year_pillar(2023, &cal()).to_string(), "GuiMao");
        assert_eq!(year_pillar(1983, &cal()).to_string(), "GuiHai");
        assert_eq!(year_pillar(-2, &cal()).cycle_index(), 54);
    }

    #[test]
    fn month_pillars_of_jia_year() {
        assert_eq!(month_pillar(Stem::Jia, 0).to_string(), "BingYin");
        assert_eq!(month_pillar(Stem::Jia, 1).to_string(), "DingMao");
        assert_eq!(month_pillar(Stem::Jia, 11).to_string(), "DingChou");
        // Geng year opens with WuYin.
        assert_eq!(month_pillar(Stem::Geng, 0).to_string(), "WuYin");
        // Gui year opens with JiaYin.
        assert_eq!(month_pillar(Stem::Gui, 0).to_string(), "JiaYin");
    }

    #[test]
    fn day_reference_dates() {
        // 1949-10-01 and 2000-01-07 are JiaZi days.
        assert_eq!(day_pillar(2_433_191, &cal()).cycle_index(), 0);
        assert_eq!(day_pillar(2_451_551, &cal()).cycle_index(), 0);
        // 2024-02-10
        assert_eq!(day_pillar(2_460_351, &cal()).to_string(), "JiaChen");
    }

    #[test]
    fn hour_pillars() {
        assert_eq!(hour_pillar(14, Stem::Jia).to_string(), "XinWei");
        assert_eq!(hour_pillar(0, Stem::Jia).to_string(), "JiaZi");
        assert_eq!(hour_pillar(23, Stem::Jia).to_string(), "JiaZi");
        assert_eq!(hour_pillar(1, Stem::Jia).to_string(), "YiChou");
        // Yi day starts with BingZi.
        assert_eq!(hour_pillar(0, Stem::Yi).to_string(), "BingZi");
    }

    #[test]
    fn derived_pillars_have_matching_parity() {
        for y in 1900..2100 {
            let yp = year_pillar(y, &cal());
            for m in 0..12 {
                let p = month_pillar(yp.stem(), m);
                assert_eq!(p.stem_index() % 2, p.branch_index() % 2);
            }
        }
        for s in crate::stem::ALL_STEMS {
            for h in 0..24 {
                let p = hour_pillar(h, s);
                assert_eq!(p.stem_index() % 2, p.branch_index() % 2);
            }
        }
    }

    #[test]
    fn calibration_validation() {
        assert!(Calibration::default().validate().is_ok());
        assert!(Calibration::new(1984, 60).validate().is_err());
        assert!(Calibration::new(1984, -1).validate().is_err());
    }

    #[test]
    fn four_pillars_display() {
        let fp = FourPillars {
            year: Pillar::from_cycle(40),
            month: Pillar::from_cycle(2),
            day: Pillar::from_cycle(40),
            hour: Pillar::from_cycle(7),
        };
        assert_eq!(fp.to_string(), "JiaChen BingYin JiaChen XinWei");
        assert_eq!(fp.iter().count(), 4);
    }
}
