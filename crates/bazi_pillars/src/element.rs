//! Five elements (wu xing), yin/yang polarity and chart element vectors.

use std::fmt::{Display, Formatter};

use crate::pillar::FourPillars;

/// The five elements in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        ["Wood", "Fire", "Earth", "Metal", "Water"][self.index() as usize]
    }

    /// Chinese character.
    pub fn hanzi(self) -> &'static str {
        ["木", "火", "土", "金", "水"][self.index() as usize]
    }

    /// Element this one generates (Wood → Fire → Earth → Metal → Water → Wood).
    pub fn generates(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// Element this one controls (Wood → Earth → Water → Fire → Metal → Wood).
    pub fn controls(self) -> Self {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even cycle positions are yang.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// Weights of main, middle and residual hidden stems.
pub const HIDDEN_STEM_WEIGHTS: [f64; 3] = [1.0, 0.5, 0.3];

/// Element strengths indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementVector([f64; 5]);

impl ElementVector {
    /// Vector from raw strengths in [`ALL_ELEMENTS`] order.
    pub fn new(values: [f64; 5]) -> Self {
        Self(values)
    }

    /// Element distribution of a chart.
    ///
    /// Each stem adds 1.0 to its element; each branch adds its hidden stems'
    /// elements with weights 1.0 / 0.5 / 0.3.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut v = Self::default();
        for p in pillars.iter() {
            v.add(p.stem().element(), 1.0);
            for (stem, weight) in p.branch().hidden_stems().iter().zip(HIDDEN_STEM_WEIGHTS) {
                v.add(stem.element(), weight);
            }
        }
        v
    }

    fn add(&mut self, element: Element, weight: f64) {
        self.0[element.index() as usize] += weight;
    }

    /// Strength of one element.
    pub fn get(&self, element: Element) -> f64 {
        self.0[element.index() as usize]
    }

    /// All five strengths in index order.
    pub fn values(&self) -> [f64; 5] {
        self.0
    }

    /// L2 norm.
    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Unit vector; the zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return *self;
        }
        Self(self.0.map(|x| x / mag))
    }

    /// Strongest element, first in cycle order on ties. `None` for the zero vector.
    pub fn dominant(&self) -> Option<Element> {
        let mut best: Option<(Element, f64)> = None;
        for e in ALL_ELEMENTS {
            let x = self.get(e);
            if x > best.map_or(0.0, |(_, b)| b) {
                best = Some((e, x));
            }
        }
        best.map(|(e, _)| e)
    }

    /// Cosine similarity in [-1, 1]; 0.0 if either vector is zero.
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let (ma, mb) = (self.magnitude(), other.magnitude());
        if ma == 0.0 || mb == 0.0 {
            return 0.0;
        }
        let dot: f64 = self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum();
        dot / (ma * mb)
    }
}
