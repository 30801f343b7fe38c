//! Weekly horoscope rotation.
//!
//! # Responsibility
//! - Select one authored horoscope per sign for a given week.
//!
//! # Invariants
//! - Selection is `week mod entry_count`, so a sign with `N` entries repeats
//!   every `N` weeks.
//! - A sign absent from the table receives the default entry.

mod table;

use crate::zodiac::ZodiacSign;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use table::{HoroscopeEntry, DEFAULT_ENTRY, HOROSCOPES};

/// Horoscope content for one sign and week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horoscope {
    pub sign: ZodiacSign,
    pub week_of_year: u32,
    pub reading: String,
    pub love_advice: String,
    pub career_advice: String,
    pub lucky_number: u8,
    pub lucky_color: String,
    pub mood: String,
    pub celestial_insight: String,
}

impl Horoscope {
    fn from_entry(sign: ZodiacSign, week_of_year: u32, entry: &HoroscopeEntry) -> Self {
        Self {
            sign,
            week_of_year,
            reading: entry.reading.to_string(),
            love_advice: entry.love_advice.to_string(),
            career_advice: entry.career_advice.to_string(),
            lucky_number: entry.lucky_number,
            lucky_color: entry.lucky_color.to_string(),
            mood: entry.mood.to_string(),
            celestial_insight: entry.celestial_insight.to_string(),
        }
    }
}

/// Number of authored entries for `sign` (the rotation period in weeks).
pub fn rotation_len(sign: ZodiacSign) -> usize {
    entries_for(HOROSCOPES, sign).map_or(1, <[HoroscopeEntry]>::len)
}

/// Horoscope for `sign` in ISO week `week_of_year`.
pub fn weekly_horoscope(sign: ZodiacSign, week_of_year: u32) -> Horoscope {
    select(HOROSCOPES, sign, week_of_year)
}

/// Horoscope for `sign` in the ISO week containing `date`.
pub fn weekly_horoscope_on(sign: ZodiacSign, date: NaiveDate) -> Horoscope {
    weekly_horoscope(sign, date.iso_week().week())
}

pub fn weekly_horoscope_today(sign: ZodiacSign) -> Horoscope {
    weekly_horoscope_on(sign, Local::now().date_naive())
}

fn entries_for(
    table: &'static [(ZodiacSign, &'static [HoroscopeEntry])],
    sign: ZodiacSign,
) -> Option<&'static [HoroscopeEntry]> {
    table
        .iter()
        .find(|(candidate, entries)| *candidate == sign && !entries.is_empty())
        .map(|(_, entries)| *entries)
}

fn select(
    table: &'static [(ZodiacSign, &'static [HoroscopeEntry])],
    sign: ZodiacSign,
    week_of_year: u32,
) -> Horoscope {
    let entry = match entries_for(table, sign) {
        Some(entries) => &entries[week_of_year as usize % entries.len()],
        None => &DEFAULT_ENTRY,
    };
    Horoscope::from_entry(sign, week_of_year, entry)
}
