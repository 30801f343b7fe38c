use astral_core::compatibility::{blend, score};
use astral_core::{
    AstralCompatibility, Element, ElementalDynamic, HarmonyLevel, ModalityDynamic, SignProfile,
    ZodiacSign,
};

#[test]
fn score_is_symmetric_and_bounded_for_every_pair() {
    for a in ZodiacSign::ALL {
        for b in ZodiacSign::ALL {
            let forward = score(a, b);
            assert_eq!(forward, score(b, a), "{a} / {b}");
            assert!(forward <= 100, "{a} / {b}: {forward}");
        }
    }
}

#[test]
fn same_sign_always_scores_full_harmony() {
    for sign in ZodiacSign::ALL {
        assert_eq!(score(sign, sign), 100, "{sign}");
    }
}

#[test]
fn reference_pairs_score_as_expected() {
    assert_eq!(score(ZodiacSign::Aries, ZodiacSign::Leo), 95);
    assert_eq!(score(ZodiacSign::Aries, ZodiacSign::Libra), 80);
    assert_eq!(score(ZodiacSign::Aries, ZodiacSign::Cancer), 55);
}

#[test]
fn element_classification_is_symmetric_and_exhaustive() {
    for a in Element::ALL {
        for b in Element::ALL {
            let dynamic = ElementalDynamic::classify(a, b);
            assert_eq!(dynamic, ElementalDynamic::classify(b, a));
            assert!(!dynamic.title().is_empty());
        }
    }
    assert_eq!(
        ElementalDynamic::classify(Element::Fire, Element::Water),
        ElementalDynamic::Challenging
    );
    assert_eq!(
        ElementalDynamic::classify(Element::Earth, Element::Air),
        ElementalDynamic::Challenging
    );
}

#[test]
fn modality_dynamic_follows_sign_pairs() {
    assert_eq!(
        ModalityDynamic::classify(ZodiacSign::Aries.modality(), ZodiacSign::Cancer.modality()),
        ModalityDynamic::Same
    );
    assert_eq!(
        ModalityDynamic::classify(ZodiacSign::Taurus.modality(), ZodiacSign::Aries.modality()),
        ModalityDynamic::Complementary
    );
    assert_eq!(
        ModalityDynamic::classify(ZodiacSign::Gemini.modality(), ZodiacSign::Aries.modality()),
        ModalityDynamic::Mixed
    );
}

#[test]
fn blend_weights_sun_then_moon_then_rising() {
    assert_eq!(blend(70, Some(100), Some(50)), 72);
    assert_eq!(blend(70, Some(100), None), 80);
    assert_eq!(blend(70, None, Some(50)), 70);
    assert_eq!(blend(70, None, None), 70);
}

#[test]
fn harmony_levels_cover_the_whole_range() {
    let mut previous_tier = 0;
    for value in 0..=100u8 {
        let tier = HarmonyLevel::from_score(value).tier();
        assert!((1..=5).contains(&tier));
        assert!(tier >= previous_tier, "tier dropped at {value}");
        previous_tier = tier;
    }
    assert_eq!(HarmonyLevel::from_score(100).tier(), 5);
}

#[test]
fn full_profiles_blend_every_layer() {
    let first = SignProfile {
        sun: ZodiacSign::Aries,
        moon: Some(ZodiacSign::Cancer),
        rising: Some(ZodiacSign::Leo),
    };
    let second = SignProfile {
        sun: ZodiacSign::Libra,
        moon: Some(ZodiacSign::Scorpio),
        rising: Some(ZodiacSign::Sagittarius),
    };

    let compatibility = AstralCompatibility::new(first, second);

    assert!(compatibility.includes_moon());
    assert!(compatibility.includes_rising());
    assert_eq!(compatibility.sun_score, score(ZodiacSign::Aries, ZodiacSign::Libra));
    assert_eq!(
        compatibility.harmony_score,
        blend(
            compatibility.sun_score,
            compatibility.moon_score,
            compatibility.rising_score
        )
    );
    assert_eq!(
        compatibility.harmony_level,
        HarmonyLevel::from_score(compatibility.harmony_score)
    );
}

#[test]
fn one_sided_refinements_are_ignored() {
    let first = SignProfile {
        sun: ZodiacSign::Virgo,
        moon: Some(ZodiacSign::Pisces),
        rising: Some(ZodiacSign::Aries),
    };
    let second = SignProfile::sun_only(ZodiacSign::Taurus);

    let compatibility = AstralCompatibility::new(first, second);

    assert!(!compatibility.includes_moon());
    assert!(!compatibility.includes_rising());
    assert_eq!(compatibility.harmony_score, compatibility.sun_score);
}
