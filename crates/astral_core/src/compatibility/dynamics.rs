//! Element and modality pair classification.
//!
//! # Invariants
//! - Classification is symmetric: `classify(a, b) == classify(b, a)`.
//! - Every unordered pair maps to exactly one dynamic.

use crate::zodiac::{Element, Modality};
use serde::{Deserialize, Serialize};

/// Relationship between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementalDynamic {
    /// Both signs share an element.
    Same,
    /// Fire with Air, or Earth with Water.
    Complementary,
    /// Fire with Earth, or Air with Water.
    Grounding,
    /// Fire with Water, or Earth with Air.
    Challenging,
}

impl ElementalDynamic {
    pub fn classify(a: Element, b: Element) -> Self {
        use Element::{Air, Earth, Fire, Water};

        if a == b {
            return Self::Same;
        }
        match (a, b) {
            (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => Self::Complementary,
            (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => Self::Grounding,
            _ => Self::Challenging,
        }
    }

    /// Score contribution of this dynamic.
    pub fn bonus(self) -> i32 {
        match self {
            Self::Same => 20,
            Self::Complementary => 15,
            Self::Grounding => 5,
            Self::Challenging => 0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Same => "Elemental Kinship",
            Self::Complementary => "Elemental Harmony",
            Self::Grounding => "Elemental Grounding",
            Self::Challenging => "Elemental Alchemy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Same => {
                "You share an element, so you recognize each other's rhythms without translation."
            }
            Self::Complementary => {
                "Your elements feed each other: one supplies what the other needs to thrive."
            }
            Self::Grounding => {
                "One of you steadies the other, turning restless energy into something lasting."
            }
            Self::Challenging => {
                "Your elements pull in different directions, and the friction is where you grow."
            }
        }
    }
}

/// Relationship between two modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalityDynamic {
    Same,
    /// Cardinal with Fixed, or Fixed with Mutable.
    Complementary,
    /// Cardinal with Mutable.
    Mixed,
}

impl ModalityDynamic {
    pub fn classify(a: Modality, b: Modality) -> Self {
        use Modality::{Cardinal, Fixed, Mutable};

        match (a.min(b), a.max(b)) {
            (x, y) if x == y => Self::Same,
            (Cardinal, Fixed) | (Fixed, Mutable) => Self::Complementary,
            _ => Self::Mixed,
        }
    }

    pub fn bonus(self) -> i32 {
        match self {
            Self::Same => 5,
            Self::Complementary => 10,
            Self::Mixed => 7,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Same => "Shared Tempo",
            Self::Complementary => "Balanced Momentum",
            Self::Mixed => "Shifting Currents",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Same => "You move at the same pace, though you may compete for the same role.",
            Self::Complementary => {
                "One of you starts or holds, the other sustains or adapts, so plans keep moving."
            }
            Self::Mixed => "You launch and adjust in turns; patience keeps the rhythm kind.",
        }
    }
}
