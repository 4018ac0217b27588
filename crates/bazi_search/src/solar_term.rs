//! The 24 solar terms (jieqi).
//!
//! Terms sit every 15° of apparent solar longitude, starting from Lichun at
//! 315°. Even-indexed terms (jie) open the twelve months; odd-indexed terms
//! (qi) fall mid-month.
//!
//! Standard Chinese calendar term names, public domain.

use bazi_ephem::SolarEphemeris;

use crate::boundary::{MONTH_BOUNDARY_COUNT, MonthBoundaries, YEAR_START_LONGITUDE_DEG};
use crate::crossing::find_crossing;
use crate::crossing_types::CrossingConfig;
use crate::error::SearchError;

/// Longitude spacing between consecutive terms.
pub const TERM_SPACING_DEG: f64 = 15.0;

/// The 24 solar terms of a solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 terms in solar-year order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_NAMES: [&str; 24] = [
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
    "Xiaohan",
    "Dahan",
];

const TERM_HANZI: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

impl SolarTerm {
    /// 0-based index (Lichun=0 .. Dahan=23).
    pub fn index(self) -> u8 {
        // Declaration order matches ALL_SOLAR_TERMS.
        self as u8
    }

    /// Term at `index`, wrapping modulo 24.
    pub fn from_index(index: u32) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Chinese name.
    pub fn hanzi(self) -> &'static str {
        TERM_HANZI[self.index() as usize]
    }

    /// Defining apparent solar longitude in [0, 360).
    pub fn longitude_deg(self) -> f64 {
        (YEAR_START_LONGITUDE_DEG + TERM_SPACING_DEG * f64::from(self.index())).rem_euclid(360.0)
    }

    /// True for the twelve month-opening (jie) terms.
    pub fn is_month_start(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month (0..12 from the year start) this term falls in.
    pub fn month_index(self) -> usize {
        usize::from(self.index() / 2)
    }
}

/// A solved solar-term instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermCrossing {
    /// Which of the 24 terms.
    pub term: SolarTerm,
    /// Crossing instant, JD UT.
    pub jd_ut: f64,
}

/// All 24 terms inside `[b[0], b[12])`, in order.
///
/// Month-opening terms are the boundaries themselves; mid-month terms are
/// searched from the boundary opening their month.
pub fn solar_terms(
    eph: &dyn SolarEphemeris,
    boundaries: &MonthBoundaries,
    config: &CrossingConfig,
) -> Result<Vec<SolarTermCrossing>, SearchError> {
    let b = boundaries.instants();
    let mut out = Vec::with_capacity(2 * (MONTH_BOUNDARY_COUNT - 1));

    for term in ALL_SOLAR_TERMS {
        let month_start = b[term.month_index()];
        let jd_ut = if term.is_month_start() {
            month_start
        } else {
            find_crossing(eph, term.longitude_deg(), month_start, config)?
        };
        out.push(SolarTermCrossing { term, jd_ut });
    }

    Ok(out)
}
