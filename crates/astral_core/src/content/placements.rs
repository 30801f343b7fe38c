//! Moon-pair and rising-pair readings.
//!
//! Uses the same elemental classification as sun content, with its own
//! templates built from per-sign trait phrases.

use crate::compatibility::ElementalDynamic;
use crate::content::library::sorted_pair;
use crate::zodiac::traits::{moon_trait, rising_trait};
use crate::zodiac::ZodiacSign;

/// Emotional reading for two moon signs.
pub fn moon_reading(a: ZodiacSign, b: ZodiacSign) -> String {
    let (a, b) = sorted_pair(a, b);
    let (ta, tb) = (moon_trait(a), moon_trait(b));
    match ElementalDynamic::classify(a.element(), b.element()) {
        ElementalDynamic::Same => format!(
            "Moon in {a} and Moon in {b}: your hearts speak the same dialect. The {ta} and the {tb} echo each other, so comfort comes easily."
        ),
        ElementalDynamic::Complementary => format!(
            "Moon in {a} meets Moon in {b}. The {ta} is answered by the {tb}, and each of you feels soothed in ways that are hard to explain."
        ),
        ElementalDynamic::Grounding => format!(
            "Moon in {a} and Moon in {b} steady each other. Honor the {ta} alongside the {tb}, and your emotional home stays calm."
        ),
        ElementalDynamic::Challenging => format!(
            "Moon in {a} and Moon in {b} feel things differently. The {ta} can puzzle the {tb}; patience turns that puzzle into intimacy."
        ),
    }
}

/// First-impression reading for two rising signs.
pub fn rising_reading(a: ZodiacSign, b: ZodiacSign) -> String {
    let (a, b) = sorted_pair(a, b);
    let (ta, tb) = (rising_trait(a), rising_trait(b));
    match ElementalDynamic::classify(a.element(), b.element()) {
        ElementalDynamic::Same => format!(
            "{a} Rising and {b} Rising greet the world alike. A {ta} beside a {tb} makes you look like a team from the first hello."
        ),
        ElementalDynamic::Complementary => format!(
            "{a} Rising and {b} Rising make a striking pair. The {ta} and the {tb} draw people in from opposite doors."
        ),
        ElementalDynamic::Grounding => format!(
            "{a} Rising and {b} Rising balance each other in public. The {ta} is softened or sharpened by the {tb} exactly when needed."
        ),
        ElementalDynamic::Challenging => format!(
            "{a} Rising and {b} Rising meet the world in contrasting styles. The {ta} and the {tb} surprise people, and often each other."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{moon_reading, rising_reading};
    use crate::zodiac::ZodiacSign;

    #[test]
    fn readings_embed_trait_phrases() {
        let text = moon_reading(ZodiacSign::Cancer, ZodiacSign::Aries);
        assert!(text.contains("need for a safe nest"), "{text}");
        assert!(text.contains("need for honest, immediate feeling"), "{text}");

        let text = rising_reading(ZodiacSign::Leo, ZodiacSign::Libra);
        assert!(text.contains("confident, sunny entrance"), "{text}");
    }

    #[test]
    fn readings_ignore_argument_order() {
        assert_eq!(
            moon_reading(ZodiacSign::Pisces, ZodiacSign::Gemini),
            moon_reading(ZodiacSign::Gemini, ZodiacSign::Pisces)
        );
        assert_eq!(
            rising_reading(ZodiacSign::Taurus, ZodiacSign::Virgo),
            rising_reading(ZodiacSign::Virgo, ZodiacSign::Taurus)
        );
    }
}
