//! Authored weekly horoscope entries.

use crate::zodiac::ZodiacSign;

/// One authored horoscope entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoroscopeEntry {
    pub reading: &'static str,
    pub love_advice: &'static str,
    pub career_advice: &'static str,
    pub lucky_number: u8,
    pub lucky_color: &'static str,
    pub mood: &'static str,
    pub celestial_insight: &'static str,
}

pub(crate) static DEFAULT_ENTRY: HoroscopeEntry = HoroscopeEntry {
    reading: "The stars ask for patience this week. What you plant quietly now will bloom in its own time.",
    love_advice: "Listen more than you speak; someone close needs to be heard.",
    career_advice: "Finish what is already on your desk before reaching for something new.",
    lucky_number: 7,
    lucky_color: "Silver",
    mood: "Reflective",
    celestial_insight: "Every season turns. Trust the cycle you are in.",
};

pub(crate) static HOROSCOPES: &[(ZodiacSign, &[HoroscopeEntry])] = &[
    (
        ZodiacSign::Aries,
        &[
            HoroscopeEntry {
                reading: "Mars pushes you toward a fresh start. An idea you shelved deserves a second look, and this time you have the energy to see it through.",
                love_advice: "Make the first move, but leave room for an answer.",
                career_advice: "Pitch the bold version of your plan.",
                lucky_number: 9,
                lucky_color: "Crimson",
                mood: "Fearless",
                celestial_insight: "Beginnings favor those who act before they feel ready.",
            },
            HoroscopeEntry {
                reading: "Your fire is strong, but so is your impatience. Channel restlessness into movement and let slower people catch up.",
                love_advice: "Soften one sharp word into a question.",
                career_advice: "Delegate the details so you can lead.",
                lucky_number: 1,
                lucky_color: "Orange",
                mood: "Driven",
                celestial_insight: "A flame that is tended burns longer than one that is fanned.",
            },
        ],
    ),
    (
        ZodiacSign::Taurus,
        &[
            HoroscopeEntry {
                reading: "Venus wraps your week in comfort. Small pleasures restore you, and a steady pace brings better results than any sprint.",
                love_advice: "Cook for someone; nourishment speaks for you.",
                career_advice: "Your consistency is being noticed. Keep going.",
                lucky_number: 6,
                lucky_color: "Emerald",
                mood: "Grounded",
                celestial_insight: "Roots grow in silence before anything shows above ground.",
            },
            HoroscopeEntry {
                reading: "A change you resisted turns out to be a gift. Let go of one habit that no longer fits and notice how much lighter you feel.",
                love_advice: "Say yes to an unplanned evening.",
                career_advice: "Revisit your budget with fresh eyes.",
                lucky_number: 2,
                lucky_color: "Rose",
                mood: "Open",
                celestial_insight: "Even mountains move, one grain at a time.",
            },
        ],
    ),
    (
        ZodiacSign::Gemini,
        &[
            HoroscopeEntry {
                reading: "Mercury fills your week with conversations. One of them carries an opportunity in disguise, so keep listening after the small talk ends.",
                love_advice: "Send the message you keep drafting.",
                career_advice: "Network widely; a casual contact becomes important.",
                lucky_number: 5,
                lucky_color: "Yellow",
                mood: "Curious",
                celestial_insight: "The right question opens more doors than the right answer.",
            },
            HoroscopeEntry {
                reading: "Your mind is running in three directions. Choose one thread and follow it to the end; focus is your superpower this week.",
                love_advice: "Give someone your full attention for an hour.",
                career_advice: "Close open loops before starting new ones.",
                lucky_number: 3,
                lucky_color: "Sky Blue",
                mood: "Scattered",
                celestial_insight: "Twins walk together best when they walk the same road.",
            },
        ],
    ),
    (
        ZodiacSign::Cancer,
        &[
            HoroscopeEntry {
                reading: "The Moon turns your attention homeward. Nesting, tidying and reconnecting with family restore a calm you have been missing.",
                love_advice: "Let someone take care of you for once.",
                career_advice: "Trust your gut about a colleague's intentions.",
                lucky_number: 2,
                lucky_color: "Pearl",
                mood: "Tender",
                celestial_insight: "A shell protects, but it also must open to grow.",
            },
            HoroscopeEntry {
                reading: "Old memories surface with new meaning. Write them down; they hold a lesson for a choice you are facing now.",
                love_advice: "Share a childhood story with someone you love.",
                career_advice: "Protect your energy in crowded meetings.",
                lucky_number: 7,
                lucky_color: "Sea Green",
                mood: "Nostalgic",
                celestial_insight: "The tide always returns, carrying something new.",
            },
        ],
    ),
    (
        ZodiacSign::Leo,
        &[
            HoroscopeEntry {
                reading: "The Sun spotlights your creativity. Share what you have been making; the applause you need is closer than you think.",
                love_advice: "Plan a grand gesture, even a small one.",
                career_advice: "Present your work in person.",
                lucky_number: 1,
                lucky_color: "Gold",
                mood: "Radiant",
                celestial_insight: "Light shared is never light lost.",
            },
            HoroscopeEntry {
                reading: "Generosity is your theme. Lifting someone else up this week returns to you in unexpected ways.",
                love_advice: "Compliment the quiet qualities, not just the obvious ones.",
                career_advice: "Mentor someone newer than you.",
                lucky_number: 19,
                lucky_color: "Amber",
                mood: "Warm",
                celestial_insight: "The sun does not ask the flowers to thank it.",
            },
        ],
    ),
    (
        ZodiacSign::Virgo,
        &[HoroscopeEntry {
            reading: "Order brings you peace this week. Organizing one corner of your life clears space for an idea that has been waiting for room.",
            love_advice: "Show love through a thoughtful, practical favor.",
            career_advice: "Your eye for detail catches something important.",
            lucky_number: 5,
            lucky_color: "Sage",
            mood: "Focused",
            celestial_insight: "Perfection is a direction, not a destination.",
        }],
    ),
    (
        ZodiacSign::Libra,
        &[
            HoroscopeEntry {
                reading: "Venus restores your balance after a busy stretch. Beauty, art and good company refill your cup.",
                love_advice: "Say what you want instead of what keeps the peace.",
                career_advice: "A partnership proposal is worth considering.",
                lucky_number: 6,
                lucky_color: "Lavender",
                mood: "Harmonious",
                celestial_insight: "Balance is not stillness; it is constant gentle correction.",
            },
            HoroscopeEntry {
                reading: "A decision you have been weighing is ready to be made. Trust that a good choice made now beats a perfect choice made never.",
                love_advice: "Be honest about a small disappointment.",
                career_advice: "Set a deadline and honor it.",
                lucky_number: 8,
                lucky_color: "Blush",
                mood: "Decisive",
                celestial_insight: "The scales tip so that they can settle again.",
            },
        ],
    ),
    (
        ZodiacSign::Scorpio,
        &[
            HoroscopeEntry {
                reading: "Pluto stirs the depths. A truth you sensed comes into the light, and facing it sets you free.",
                love_advice: "Trust someone with a secret.",
                career_advice: "Research before you commit.",
                lucky_number: 8,
                lucky_color: "Burgundy",
                mood: "Intense",
                celestial_insight: "What is buried is not gone; it is waiting to transform.",
            },
            HoroscopeEntry {
                reading: "Your intuition is sharp this week. Follow the quiet hunch over the loud opinion.",
                love_advice: "Let vulnerability be your strength.",
                career_advice: "Negotiate from calm, not from control.",
                lucky_number: 4,
                lucky_color: "Black",
                mood: "Perceptive",
                celestial_insight: "The phoenix rises only after it lets the fire do its work.",
            },
        ],
    ),
    (
        ZodiacSign::Sagittarius,
        &[HoroscopeEntry {
            reading: "Jupiter widens your horizon. Book the trip, sign up for the course, or simply take a new route home; discovery is the point.",
            love_advice: "Laugh together about something absurd.",
            career_advice: "Teach what you know; it opens doors.",
            lucky_number: 3,
            lucky_color: "Purple",
            mood: "Adventurous",
            celestial_insight: "The arrow flies farthest when the bow is drawn with joy.",
        }],
    ),
    (
        ZodiacSign::Capricorn,
        &[
            HoroscopeEntry {
                reading: "Saturn rewards your discipline. A long project reaches a milestone, and it is worth pausing to mark it.",
                love_advice: "Put down the to-do list during dinner.",
                career_advice: "Ask for the recognition you have earned.",
                lucky_number: 10,
                lucky_color: "Charcoal",
                mood: "Determined",
                celestial_insight: "The summit is reached one patient step at a time.",
            },
            HoroscopeEntry {
                reading: "Rest is productive this week. Step back from the climb and notice how far you have come.",
                love_advice: "Let someone see the softer side you keep guarded.",
                career_advice: "Plan the next quarter, but don't start it yet.",
                lucky_number: 4,
                lucky_color: "Brown",
                mood: "Steady",
                celestial_insight: "Even the mountain goat stops to look at the view.",
            },
        ],
    ),
    (
        ZodiacSign::Aquarius,
        &[HoroscopeEntry {
            reading: "Uranus sparks a breakthrough idea. Share it with your community; collaboration turns it into something real.",
            love_advice: "Make space for closeness alongside your independence.",
            career_advice: "An unconventional solution is the right one.",
            lucky_number: 11,
            lucky_color: "Electric Blue",
            mood: "Inventive",
            celestial_insight: "The future arrives first in the minds of those who imagine it.",
        }],
    ),
    (
        ZodiacSign::Pisces,
        &[
            HoroscopeEntry {
                reading: "Neptune deepens your dreams. Creative work flows, and a symbol that keeps reappearing is worth your attention.",
                love_advice: "Express feelings through art, music or a letter.",
                career_advice: "Set one firm boundary to protect your time.",
                lucky_number: 12,
                lucky_color: "Seafoam",
                mood: "Dreamy",
                celestial_insight: "Two fish swim in opposite directions, yet share one ocean.",
            },
            HoroscopeEntry {
                reading: "Compassion is your compass. Helping someone else helps you find clarity about your own path.",
                love_advice: "Receive kindness without deflecting it.",
                career_advice: "Trust your instincts about timing.",
                lucky_number: 7,
                lucky_color: "Violet",
                mood: "Empathic",
                celestial_insight: "The deepest waters are also the calmest.",
            },
        ],
    ),
];
