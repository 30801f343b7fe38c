//! Per-sign descriptive phrases.
//!
//! One short phrase per sign for each chart placement. Phrases are written to
//! slot into a sentence after "the", "a" or a possessive.

use super::sign::ZodiacSign;

/// Chart placement a trait phrase describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitCategory {
    Sun,
    Moon,
    Rising,
}

pub fn sun_trait(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "bold pioneering spirit",
        ZodiacSign::Taurus => "steady sensual devotion",
        ZodiacSign::Gemini => "quicksilver curiosity",
        ZodiacSign::Cancer => "protective tender heart",
        ZodiacSign::Leo => "radiant generous warmth",
        ZodiacSign::Virgo => "thoughtful devoted care",
        ZodiacSign::Libra => "graceful sense of balance",
        ZodiacSign::Scorpio => "magnetic emotional depth",
        ZodiacSign::Sagittarius => "restless seeker's optimism",
        ZodiacSign::Capricorn => "patient ambitious resolve",
        ZodiacSign::Aquarius => "visionary independent mind",
        ZodiacSign::Pisces => "dreamy compassionate soul",
    }
}

pub fn moon_trait(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "need for honest, immediate feeling",
        ZodiacSign::Taurus => "need for comfort and calm routine",
        ZodiacSign::Gemini => "need to talk feelings through",
        ZodiacSign::Cancer => "need for a safe nest",
        ZodiacSign::Leo => "need to feel adored",
        ZodiacSign::Virgo => "need to help and be useful",
        ZodiacSign::Libra => "need for peace and fairness",
        ZodiacSign::Scorpio => "need for total emotional trust",
        ZodiacSign::Sagittarius => "need for room to roam",
        ZodiacSign::Capricorn => "need for quiet reliability",
        ZodiacSign::Aquarius => "need for emotional breathing space",
        ZodiacSign::Pisces => "need for soulful connection",
    }
}

pub fn rising_trait(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "direct, energetic first impression",
        ZodiacSign::Taurus => "calm, grounded presence",
        ZodiacSign::Gemini => "bright, chatty charm",
        ZodiacSign::Cancer => "gentle, welcoming manner",
        ZodiacSign::Leo => "confident, sunny entrance",
        ZodiacSign::Virgo => "composed, attentive demeanor",
        ZodiacSign::Libra => "polished, diplomatic charm",
        ZodiacSign::Scorpio => "intense, watchful aura",
        ZodiacSign::Sagittarius => "open, adventurous air",
        ZodiacSign::Capricorn => "reserved, capable poise",
        ZodiacSign::Aquarius => "quirky, friendly detachment",
        ZodiacSign::Pisces => "soft, dreamy glow",
    }
}

/// Trait phrase for `sign` in `category`.
pub fn trait_for(category: TraitCategory, sign: ZodiacSign) -> &'static str {
    match category {
        TraitCategory::Sun => sun_trait(sign),
        TraitCategory::Moon => moon_trait(sign),
        TraitCategory::Rising => rising_trait(sign),
    }
}
