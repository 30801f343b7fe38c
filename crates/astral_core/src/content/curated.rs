//! Hand-authored pair content.
//!
//! Keys are produced by `pair_key` and must stay in sorted `A-B` form; the
//! table test in `content::library` rejects malformed keys.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Curated text for one unordered sign pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedPair {
    pub reading: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_opportunities: &'static [&'static str],
    pub poetic_summary: &'static str,
    pub nurturing_advice: &'static str,
}

static CURATED_PAIRS: &[(&str, CuratedPair)] = &[
    (
        "Aries-Leo",
        CuratedPair {
            reading: "Two fires meet and the room gets brighter. Aries lights the match and Leo keeps the blaze proud and warm. You cheer each other on without needing to be asked, and life together feels like a celebration in progress.",
            strengths: &[
                "Shared zest for adventure and play",
                "Generous, loud encouragement of each other's dreams",
                "Honest conflicts that burn out quickly",
            ],
            growth_opportunities: &[
                "Take turns in the spotlight",
                "Slow down long enough to listen fully",
                "Let pride soften after an argument",
            ],
            poetic_summary: "A spark and a sun, burning brighter for the other's flame.",
            nurturing_advice: "Plan one bold new experience together each month, and let whoever did not choose the last one choose the next.",
        },
    ),
    (
        "Aries-Libra",
        CuratedPair {
            reading: "Opposites on the wheel, you mirror what the other lacks. Aries brings nerve and momentum; Libra brings grace and a sense of the whole picture. When you stop tugging the rope and hold it together, you are remarkably balanced.",
            strengths: &[
                "Magnetic attraction between opposites",
                "Decisiveness meets diplomacy",
                "Each widens the other's view of the world",
            ],
            growth_opportunities: &[
                "Aries can practice patience with deliberation",
                "Libra can voice needs before resentment builds",
                "Agree on how decisions get made",
            ],
            poetic_summary: "The ram and the scales, each weighing the courage of the other.",
            nurturing_advice: "Before big choices, let Libra lay out the options and let Aries pick the first step.",
        },
    ),
    (
        "Aquarius-Leo",
        CuratedPair {
            reading: "Heart and mind across the wheel. Leo rules warmth and loyalty while Aquarius rules ideas and community. You fascinate each other, and when Leo feels seen and Aquarius feels free, this bond shines for everyone around you.",
            strengths: &[
                "Mutual fascination that does not fade",
                "Big-hearted friendship at the core",
                "Together you inspire groups and causes",
            ],
            growth_opportunities: &[
                "Leo can accept affection shown through ideas",
                "Aquarius can offer praise out loud",
                "Balance personal time with social time",
            ],
            poetic_summary: "A sun and a star, shining for one and shining for all.",
            nurturing_advice: "Share a cause you both believe in, and make a private ritual that belongs only to the two of you.",
        },
    ),
    (
        "Cancer-Scorpio",
        CuratedPair {
            reading: "Water meets water in a deep, protective current. Cancer offers a safe harbor and Scorpio offers fierce devotion. Trust comes slowly, but once it arrives it is nearly unbreakable.",
            strengths: &[
                "Profound emotional understanding",
                "Loyalty that weathers every storm",
                "Intuition that speaks without words",
            ],
            growth_opportunities: &[
                "Name feelings instead of retreating into moods",
                "Release old hurts rather than storing them",
                "Keep some lightness in the household",
            ],
            poetic_summary: "Tide and undertow, moving as one ocean.",
            nurturing_advice: "Create a weekly check-in where each of you shares one worry and one joy without interruption.",
        },
    ),
    (
        "Cancer-Capricorn",
        CuratedPair {
            reading: "Home and mountain, the classic axis of care and achievement. Cancer tends the hearth and Capricorn builds the walls. Together you can create a life that is both tender and secure.",
            strengths: &[
                "Shared devotion to family and stability",
                "Emotional care balanced with practical planning",
                "Long-term commitment comes naturally",
            ],
            growth_opportunities: &[
                "Capricorn can leave work at the door",
                "Cancer can trust that quiet does not mean cold",
                "Celebrate small wins, not only milestones",
            ],
            poetic_summary: "The moonlit shore and the steadfast peak, guarding the same valley.",
            nurturing_advice: "Schedule unstructured time together and protect it as seriously as any business meeting.",
        },
    ),
    (
        "Capricorn-Taurus",
        CuratedPair {
            reading: "Earth upon earth, you build slowly and you build to last. Taurus brings comfort and patience while Capricorn brings ambition and structure. Few pairings are as dependable.",
            strengths: &[
                "Rock-solid reliability",
                "Shared values around security and effort",
                "Quiet, sensual affection",
            ],
            growth_opportunities: &[
                "Invite spontaneity into the routine",
                "Say the loving things you assume are understood",
                "Avoid stubborn standoffs over small things",
            ],
            poetic_summary: "Two stones in the same wall, holding up a lifetime.",
            nurturing_advice: "Pick one indulgence a week that has nothing to do with goals, and enjoy it without guilt.",
        },
    ),
    (
        "Gemini-Libra",
        CuratedPair {
            reading: "Air dances with air in an endless, delightful conversation. Gemini sparks curiosity and Libra adds charm and harmony. Boredom rarely finds you, and you make every gathering better together.",
            strengths: &[
                "Effortless communication and wit",
                "Shared love of culture, people and ideas",
                "Lightness that keeps conflict gentle",
            ],
            growth_opportunities: &[
                "Follow through on plans you dream up",
                "Go deep emotionally, not only intellectually",
                "Make decisions instead of debating forever",
            ],
            poetic_summary: "Two breezes braided into one song.",
            nurturing_advice: "Pair every great idea with one concrete next step, and take it together.",
        },
    ),
    (
        "Gemini-Sagittarius",
        CuratedPair {
            reading: "Student and philosopher facing each other across the wheel. Gemini collects questions and Sagittarius chases answers. Your shared restlessness turns life into a road trip of the mind.",
            strengths: &[
                "Endless curiosity and humor",
                "Freedom given generously",
                "Adventures, both literal and intellectual",
            ],
            growth_opportunities: &[
                "Commit to a shared home base",
                "Tell the truth kindly, not bluntly",
                "Finish what you start together",
            ],
            poetic_summary: "A map and a compass, always pointing somewhere new.",
            nurturing_advice: "Keep a shared list of places and ideas to explore, and cross one off each season.",
        },
    ),
    (
        "Pisces-Virgo",
        CuratedPair {
            reading: "The healer and the dreamer sit opposite each other. Virgo brings order and care while Pisces brings faith and imagination. Each completes the other's picture of what devotion can be.",
            strengths: &[
                "Deep desire to care for each other",
                "Practical help meets spiritual comfort",
                "Gentle, forgiving temperaments",
            ],
            growth_opportunities: &[
                "Virgo can loosen the need to fix everything",
                "Pisces can keep promises in concrete ways",
                "Protect each other from over-giving",
            ],
            poetic_summary: "A careful hand and a dreaming heart, weaving the same quiet prayer.",
            nurturing_advice: "Let Virgo plan the practical details and let Pisces plan the magic; both matter.",
        },
    ),
    (
        "Scorpio-Taurus",
        CuratedPair {
            reading: "Fixed earth and fixed water, the most magnetic of opposites. Taurus seeks peace in the senses and Scorpio seeks truth in the depths. The pull between you is powerful and lasting.",
            strengths: &[
                "Intense physical and emotional bond",
                "Unshakable loyalty",
                "Shared appreciation for what is real and lasting",
            ],
            growth_opportunities: &[
                "Let go of possessiveness",
                "Bend a little in standoffs",
                "Talk about jealousy before it festers",
            ],
            poetic_summary: "The garden and the well, each giving the other life.",
            nurturing_advice: "When you disagree, agree first on what you both want to protect, then negotiate the rest.",
        },
    ),
];

static CURATED_INDEX: Lazy<HashMap<&'static str, &'static CuratedPair>> = Lazy::new(|| {
    CURATED_PAIRS
        .iter()
        .map(|(key, pair)| (*key, pair))
        .collect()
});

/// Curated entry for a sorted pair key, if authored.
pub fn lookup(key: &str) -> Option<&'static CuratedPair> {
    CURATED_INDEX.get(key).copied()
}

/// All authored keys, in table order.
pub fn curated_keys() -> impl Iterator<Item = &'static str> {
    CURATED_PAIRS.iter().map(|(key, _)| *key)
}
