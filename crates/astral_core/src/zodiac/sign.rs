//! Zodiac sign catalog.
//!
//! # Responsibility
//! - Enumerate the 12 tropical signs in wheel order.
//! - Attach element, modality, symbol and date-range facts to each sign.
//!
//! # Invariants
//! - Wheel index is stable: `Aries == 0` through `Pisces == 11`.
//! - Every calendar day (including Feb 29) maps to exactly one sign.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Classical element grouping (3 signs each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Self::Fire, Self::Earth, Self::Air, Self::Water];

    /// Display name used in generated content.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fire => "Passion, courage and the spark that starts things.",
            Self::Earth => "Patience, craft and the will to build what lasts.",
            Self::Air => "Ideas, conversation and the freedom to move between them.",
            Self::Water => "Feeling, intuition and the tides beneath the surface.",
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality grouping (4 signs each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Self::Cardinal, Self::Fixed, Self::Mutable];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Cardinal => "Initiators who open each season.",
            Self::Fixed => "Stabilizers who hold the season steady.",
            Self::Mutable => "Adapters who carry one season into the next.",
        }
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the 12 tropical zodiac signs, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Inclusive `(month, day)` start of each sign's tropical range, wheel order.
const RANGE_STARTS: [(u32, u32); 12] = [
    (3, 21),
    (4, 20),
    (5, 21),
    (6, 21),
    (7, 23),
    (8, 23),
    (9, 23),
    (10, 23),
    (11, 22),
    (12, 22),
    (1, 20),
    (2, 19),
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl ZodiacSign {
    /// All signs in wheel order.
    pub const ALL: [ZodiacSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Wheel position, `0..12`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sign at wheel position `index`, wrapping in both directions.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Sign `steps` positions further along the wheel (negative walks back).
    pub fn offset(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Sign directly across the wheel.
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Inclusive `(start, end)` as `(month, day)` pairs.
    pub fn date_range(self) -> ((u32, u32), (u32, u32)) {
        let start = RANGE_STARTS[self.index()];
        let (next_month, next_day) = RANGE_STARTS[(self.index() + 1) % 12];
        // Every range start falls after day 1, so the end is always in the same month.
        (start, (next_month, next_day - 1))
    }

    /// Display label such as `Mar 21 - Apr 19`.
    pub fn date_range_label(self) -> String {
        let ((start_month, start_day), (end_month, end_day)) = self.date_range();
        format!(
            "{} {} - {} {}",
            MONTH_ABBREVIATIONS[(start_month - 1) as usize],
            start_day,
            MONTH_ABBREVIATIONS[(end_month - 1) as usize],
            end_day
        )
    }

    /// Tropical sun sign for a calendar month/day.
    ///
    /// Out-of-range input is not rejected: the lookup walks the range table and
    /// falls back to Capricorn, which owns the year boundary.
    pub fn for_month_day(month: u32, day: u32) -> Self {
        let key = (month, day);
        Self::ALL
            .iter()
            .copied()
            .filter(|sign| *sign != Self::Capricorn)
            .find(|sign| {
                let (start, end) = sign.date_range();
                key >= start && key <= end
            })
            .unwrap_or(Self::Capricorn)
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign name parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZodiacParseError {
    Empty,
    UnknownSign(String),
}

impl Display for ZodiacParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "zodiac sign name cannot be empty"),
            Self::UnknownSign(value) => write!(f, "unknown zodiac sign: {value}"),
        }
    }
}

impl Error for ZodiacParseError {}

impl FromStr for ZodiacSign {
    type Err = ZodiacParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ZodiacParseError::Empty);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ZodiacParseError::UnknownSign(normalized.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Modality, ZodiacParseError, ZodiacSign};

    #[test]
    fn boundaries_map_to_expected_signs() {
        assert_eq!(ZodiacSign::for_month_day(3, 20), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::for_month_day(3, 21), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::for_month_day(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::for_month_day(12, 22), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_month_day(1, 1), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_month_day(1, 19), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::for_month_day(1, 20), ZodiacSign::Aquarius);
        assert_eq!(ZodiacSign::for_month_day(2, 29), ZodiacSign::Pisces);
    }

    #[test]
    fn elements_and_modalities_partition_the_wheel() {
        for element in Element::ALL {
            let count = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.element() == element)
                .count();
            assert_eq!(count, 3, "{element}");
        }
        for modality in Modality::ALL {
            let count = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.modality() == modality)
                .count();
            assert_eq!(count, 4, "{modality}");
        }
        assert_eq!(ZodiacSign::Leo.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Pisces.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Capricorn.modality(), Modality::Cardinal);
    }

    #[test]
    fn range_labels_render_short_months() {
        assert_eq!(ZodiacSign::Aries.date_range_label(), "Mar 21 - Apr 19");
        assert_eq!(ZodiacSign::Capricorn.date_range_label(), "Dec 22 - Jan 19");
        assert_eq!(ZodiacSign::Pisces.date_range_label(), "Feb 19 - Mar 20");
    }

    #[test]
    fn wheel_helpers_wrap() {
        assert_eq!(ZodiacSign::from_index(-1), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_index(12), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::Aries.opposite(), ZodiacSign::Libra);
        assert_eq!(ZodiacSign::Virgo.opposite(), ZodiacSign::Pisces);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" scorpio ".parse::<ZodiacSign>(), Ok(ZodiacSign::Scorpio));
        assert_eq!(
            "Ophiuchus".parse::<ZodiacSign>(),
            Err(ZodiacParseError::UnknownSign("Ophiuchus".to_string()))
        );
        assert_eq!("  ".parse::<ZodiacSign>(), Err(ZodiacParseError::Empty));
    }
}
