//! Deterministic fallback text for pairs without curated content.
//!
//! One template per content type for each elemental dynamic. Inputs are
//! passed in sorted pair order so output never depends on argument order.

use crate::compatibility::ElementalDynamic;
use crate::zodiac::ZodiacSign;

pub(crate) fn reading(a: ZodiacSign, b: ZodiacSign) -> String {
    let (ea, eb) = (a.element(), b.element());
    match dynamic(a, b) {
        ElementalDynamic::Same => format!(
            "{a} and {b} share the language of {ea}. You understand each other's instincts without explanation, and your bond grows stronger each time you choose the same direction. Just remember that kindred spirits also need fresh air."
        ),
        ElementalDynamic::Complementary => format!(
            "{a}'s {ea} and {b}'s {eb} feed each other naturally. Where one of you falters, the other supplies exactly what is missing, and together you create more than either could alone."
        ),
        ElementalDynamic::Grounding => format!(
            "{a} brings {ea} and {b} brings {eb}: one of you steadies while the other stirs. This pairing turns big feelings and bright ideas into something you can build a life on."
        ),
        ElementalDynamic::Challenging => format!(
            "{ea} and {eb} rarely mix on their own, which is why {a} and {b} learn so much from each other. The friction between you is not a flaw; it is the heat that forges something rare."
        ),
    }
}

pub(crate) fn strengths(a: ZodiacSign, b: ZodiacSign) -> Vec<String> {
    let (ea, eb) = (a.element(), b.element());
    match dynamic(a, b) {
        ElementalDynamic::Same => vec![
            format!("Instinctive {ea} understanding"),
            "Shared values and rhythms".to_string(),
            format!("{a} and {b} rarely need to explain themselves"),
        ],
        ElementalDynamic::Complementary => vec![
            format!("{ea} and {eb} energize each other"),
            "Natural give and take".to_string(),
            format!("{a} and {b} bring out each other's best"),
        ],
        ElementalDynamic::Grounding => vec![
            format!("{eb} and {ea} balance each other"),
            "Dreams become concrete plans".to_string(),
            format!("{a} and {b} make each other feel safe"),
        ],
        ElementalDynamic::Challenging => vec![
            "Endless room to learn from each other".to_string(),
            format!("{ea} and {eb} cover each other's blind spots"),
            format!("{a} and {b} never let each other grow stale"),
        ],
    }
}

pub(crate) fn growth_opportunities(a: ZodiacSign, b: ZodiacSign) -> Vec<String> {
    let (ea, eb) = (a.element(), b.element());
    match dynamic(a, b) {
        ElementalDynamic::Same => vec![
            "Seek perspectives outside your shared comfort zone".to_string(),
            format!("Watch for doubled {ea} excesses"),
            "Give each other room to change".to_string(),
        ],
        ElementalDynamic::Complementary => vec![
            "Don't take the easy flow for granted".to_string(),
            format!("Let {a} lead sometimes and {b} lead other times"),
            "Keep talking when things feel effortless".to_string(),
        ],
        ElementalDynamic::Grounding => vec![
            format!("{ea} can practice patience with {eb}'s pace"),
            format!("{eb} can welcome {ea}'s surprises"),
            "Meet in the middle on spontaneity".to_string(),
        ],
        ElementalDynamic::Challenging => vec![
            "Learn each other's emotional language".to_string(),
            format!("Honor {a}'s need for {ea} and {b}'s need for {eb}"),
            "Choose curiosity over judgment".to_string(),
        ],
    }
}

pub(crate) fn poetic_summary(a: ZodiacSign, b: ZodiacSign) -> String {
    let (ea, eb) = (a.element(), b.element());
    match dynamic(a, b) {
        ElementalDynamic::Same => {
            format!("Two notes of {ea}, {a} and {b}, ringing in one clear chord.")
        }
        ElementalDynamic::Complementary => {
            format!("{ea} and {eb} in a dance, where {a} leads and {b} answers.")
        }
        ElementalDynamic::Grounding => {
            format!("{a}'s {ea} finds its shape in {b}'s {eb}.")
        }
        ElementalDynamic::Challenging => {
            format!("Where {ea} meets {eb}, {a} and {b} make steam and stars.")
        }
    }
}

pub(crate) fn nurturing_advice(a: ZodiacSign, b: ZodiacSign) -> String {
    let (ea, eb) = (a.element(), b.element());
    match dynamic(a, b) {
        ElementalDynamic::Same => format!(
            "Plan one experience that neither {a} nor {b} has tried, so your shared {ea} has something new to feed on."
        ),
        ElementalDynamic::Complementary => format!(
            "Celebrate the ways {ea} and {eb} lift each other, and say thank you out loud when it happens."
        ),
        ElementalDynamic::Grounding => format!(
            "Build a simple shared routine that gives {ea} structure and still leaves {eb} room to breathe."
        ),
        ElementalDynamic::Challenging => format!(
            "When {ea} and {eb} clash, pause and ask what the other needs before deciding who is right."
        ),
    }
}

fn dynamic(a: ZodiacSign, b: ZodiacSign) -> ElementalDynamic {
    ElementalDynamic::classify(a.element(), b.element())
}
