//! Harmony scoring over sign pairs and sign profiles.
//!
//! # Responsibility
//! - Score one sign pair on a 0..=100 scale.
//! - Blend sun, moon and rising scores into a composite chart score.
//! - Map scores onto the five harmony tiers.
//!
//! # Invariants
//! - `score(a, b) == score(b, a)` for every pair.
//! - `score(a, a) == 100` for every sign.
//! - Moon data re-weights the sun score; rising data re-weights the result of
//!   the moon blend. Neither replaces the sun score.

use super::dynamics::{ElementalDynamic, ModalityDynamic};
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

const BASE_SCORE: i32 = 50;
const SAME_SIGN_BONUS: i32 = 25;
const TRADITIONAL_MATCH_BONUS: i32 = 15;
const OPPOSITE_SIGN_BONUS: i32 = 10;
const MIN_SCORE: i32 = 0;
const MAX_SCORE: i32 = 100;

/// Unordered sign pairs with a classic reputation for matching well.
const TRADITIONAL_MATCHES: [(ZodiacSign, ZodiacSign); 12] = [
    (ZodiacSign::Aries, ZodiacSign::Leo),
    (ZodiacSign::Aries, ZodiacSign::Sagittarius),
    (ZodiacSign::Leo, ZodiacSign::Sagittarius),
    (ZodiacSign::Taurus, ZodiacSign::Virgo),
    (ZodiacSign::Taurus, ZodiacSign::Capricorn),
    (ZodiacSign::Virgo, ZodiacSign::Capricorn),
    (ZodiacSign::Gemini, ZodiacSign::Libra),
    (ZodiacSign::Gemini, ZodiacSign::Aquarius),
    (ZodiacSign::Libra, ZodiacSign::Aquarius),
    (ZodiacSign::Cancer, ZodiacSign::Scorpio),
    (ZodiacSign::Cancer, ZodiacSign::Pisces),
    (ZodiacSign::Scorpio, ZodiacSign::Pisces),
];

pub fn is_traditional_match(a: ZodiacSign, b: ZodiacSign) -> bool {
    TRADITIONAL_MATCHES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn is_opposite_pair(a: ZodiacSign, b: ZodiacSign) -> bool {
    a.opposite() == b
}

/// Harmony score for one sign pair, clamped to `0..=100`.
pub fn score(a: ZodiacSign, b: ZodiacSign) -> u8 {
    let mut total = BASE_SCORE;
    if a == b {
        total += SAME_SIGN_BONUS;
    }
    total += ElementalDynamic::classify(a.element(), b.element()).bonus();
    total += ModalityDynamic::classify(a.modality(), b.modality()).bonus();
    if is_traditional_match(a, b) {
        total += TRADITIONAL_MATCH_BONUS;
    }
    if is_opposite_pair(a, b) {
        total += OPPOSITE_SIGN_BONUS;
    }
    clamp_score(total)
}

fn clamp_score(value: i32) -> u8 {
    value.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Weighted composite: `(2*sun + moon) / 3`, then `(3*current + rising) / 4`.
///
/// `rising` only applies when `moon` is present as well.
pub fn blend(sun: u8, moon: Option<u8>, rising: Option<u8>) -> u8 {
    let mut current = i32::from(sun);
    if let Some(moon) = moon {
        current = (current * 2 + i32::from(moon)) / 3;
        if let Some(rising) = rising {
            current = (current * 3 + i32::from(rising)) / 4;
        }
    }
    clamp_score(current)
}

/// Sun sign plus optional refinements for one side of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignProfile {
    pub sun: ZodiacSign,
    pub moon: Option<ZodiacSign>,
    pub rising: Option<ZodiacSign>,
}

impl SignProfile {
    pub fn sun_only(sun: ZodiacSign) -> Self {
        Self {
            sun,
            moon: None,
            rising: None,
        }
    }
}

/// Five ordered harmony tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyLevel {
    /// Below 40. Framed as a teaching bond rather than a poor match.
    DynamicTeachers,
    /// 40..55
    GrowingTogether,
    /// 55..70
    Harmonious,
    /// 70..85
    KindredSpirits,
    /// 85..=100
    Soulmates,
}

impl HarmonyLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Self::Soulmates,
            70..=84 => Self::KindredSpirits,
            55..=69 => Self::Harmonious,
            40..=54 => Self::GrowingTogether,
            _ => Self::DynamicTeachers,
        }
    }

    /// Tier number, 1 (lowest) through 5 (highest).
    pub fn tier(self) -> u8 {
        self as u8 + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Soulmates => "Cosmic Soulmates",
            Self::KindredSpirits => "Kindred Spirits",
            Self::Harmonious => "Harmonious Match",
            Self::GrowingTogether => "Growing Together",
            Self::DynamicTeachers => "Dynamic Teachers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Soulmates => "A rare alignment. Your energies move as one.",
            Self::KindredSpirits => "Deep natural understanding with room to surprise each other.",
            Self::Harmonious => "An easy, warm connection that deepens with attention.",
            Self::GrowingTogether => "Different rhythms that blend beautifully with patience.",
            Self::DynamicTeachers => "You are here to teach each other. The lessons run deep.",
        }
    }
}

/// Derived compatibility between two sign profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstralCompatibility {
    pub first: SignProfile,
    pub second: SignProfile,
    pub sun_score: u8,
    /// Present when both profiles carry a moon sign.
    pub moon_score: Option<u8>,
    /// Present when both profiles carry moon and rising signs.
    pub rising_score: Option<u8>,
    pub harmony_score: u8,
    pub harmony_level: HarmonyLevel,
    pub elemental_dynamic: ElementalDynamic,
    pub modality_dynamic: ModalityDynamic,
}

impl AstralCompatibility {
    pub fn new(first: SignProfile, second: SignProfile) -> Self {
        let sun_score = score(first.sun, second.sun);
        let moon_score = first.moon.zip(second.moon).map(|(a, b)| score(a, b));
        let rising_score = moon_score
            .and(first.rising.zip(second.rising))
            .map(|(a, b)| score(a, b));
        let harmony_score = blend(sun_score, moon_score, rising_score);

        Self {
            first,
            second,
            sun_score,
            moon_score,
            rising_score,
            harmony_score,
            harmony_level: HarmonyLevel::from_score(harmony_score),
            elemental_dynamic: ElementalDynamic::classify(
                first.sun.element(),
                second.sun.element(),
            ),
            modality_dynamic: ModalityDynamic::classify(
                first.sun.modality(),
                second.sun.modality(),
            ),
        }
    }

    /// Sun-sign-only comparison.
    pub fn for_signs(first: ZodiacSign, second: ZodiacSign) -> Self {
        Self::new(SignProfile::sun_only(first), SignProfile::sun_only(second))
    }

    pub fn includes_moon(&self) -> bool {
        self.moon_score.is_some()
    }

    pub fn includes_rising(&self) -> bool {
        self.rising_score.is_some()
    }
}
