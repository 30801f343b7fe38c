//! Natal chart approximation.
//!
//! # Responsibility
//! - Derive sun, moon and rising signs from raw birth fields.
//! - Classify how much of the chart the available data supports.
//!
//! # Invariants
//! - `sun_sign` depends only on the birth month/day.
//! - `moon_sign` needs only the birth date; a birth time refines it.
//! - `rising_sign` is `Some` if and only if a birth time is present.
//! - An unknown birth place never fails; it contributes a zero offset.

use crate::chart::place::utc_offset_hours;
use crate::compatibility::SignProfile;
use crate::zodiac::ZodiacSign;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Average sidereal lunar month used by the natal approximation.
const NATAL_LUNAR_CYCLE_DAYS: f64 = 27.32;
/// Local hour assumed for sunrise everywhere.
const SUNRISE_HOUR: i32 = 6;
/// Hours the ascendant spends in each sign.
const HOURS_PER_RISING_SIGN: i32 = 2;
/// Birth hour from which the afternoon half-sign refinement applies.
const AFTERNOON_HOUR: u32 = 12;

/// Sign the Moon occupied on the natal reference date.
const NATAL_REFERENCE_MOON_SIGN: ZodiacSign = ZodiacSign::Scorpio;

fn natal_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("natal reference date is a valid calendar date")
}

/// How much of a natal chart the birth data supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartCompleteness {
    /// Birth date only (a place without a time still lands here).
    SunOnly,
    /// Birth date and time.
    Partial,
    /// Birth date, time and place.
    Full,
}

impl ChartCompleteness {
    pub fn label(self) -> &'static str {
        match self {
            Self::SunOnly => "Sun sign only",
            Self::Partial => "Partial chart",
            Self::Full => "Full chart",
        }
    }
}

/// Raw birth fields a chart is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Free-text place; blank strings are normalized to `None`.
    pub place: Option<String>,
}

/// Parse errors for string-encoded birth fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDataError {
    InvalidDate(String),
    InvalidTime(String),
}

impl Display for BirthDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "birth date must be YYYY-MM-DD, got `{value}`")
            }
            Self::InvalidTime(value) => write!(f, "birth time must be HH:MM, got `{value}`"),
        }
    }
}

impl Error for BirthDataError {}

impl BirthData {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, place: Option<String>) -> Self {
        Self {
            date,
            time,
            place: normalize_place(place),
        }
    }

    /// Parses `YYYY-MM-DD`, optional `HH:MM[:SS]` and optional place text.
    ///
    /// Blank optional strings are treated as absent.
    pub fn parse(
        date: &str,
        time: Option<&str>,
        place: Option<&str>,
    ) -> Result<Self, BirthDataError> {
        let date_text = date.trim();
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| BirthDataError::InvalidDate(date_text.to_string()))?;

        let time = match time.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Some(
                NaiveTime::parse_from_str(value, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
                    .map_err(|_| BirthDataError::InvalidTime(value.to_string()))?,
            ),
            None => None,
        };

        Ok(Self::new(date, time, place.map(str::to_string)))
    }
}

fn normalize_place(place: Option<String>) -> Option<String> {
    place
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Derived natal placements for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalChart {
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: Option<ZodiacSign>,
    pub completeness: ChartCompleteness,
}

impl NatalChart {
    /// Computes the chart from birth data. Total over every input.
    pub fn calculate(birth: &BirthData) -> Self {
        let sun_sign = sun_sign(birth.date);
        let moon_sign = natal_moon_sign(birth.date, birth.time);
        let rising_sign = birth
            .time
            .map(|time| rising_sign(sun_sign, time, birth.place.as_deref()));

        Self {
            sun_sign,
            moon_sign,
            rising_sign,
            completeness: completeness(birth.time.is_some(), birth.place.is_some()),
        }
    }

    /// Profile used by the compatibility scorer.
    ///
    /// Moon always participates since it is derivable from the date alone.
    pub fn profile(&self) -> SignProfile {
        SignProfile {
            sun: self.sun_sign,
            moon: Some(self.moon_sign),
            rising: self.rising_sign,
        }
    }
}

/// Tropical sun sign for a birth date.
pub fn sun_sign(date: NaiveDate) -> ZodiacSign {
    ZodiacSign::for_month_day(date.month(), date.day())
}

/// Natal moon sign by linear interpolation from the natal reference date.
pub fn natal_moon_sign(date: NaiveDate, time: Option<NaiveTime>) -> ZodiacSign {
    let days = (date - natal_reference_date()).num_days() as f64;
    let days_per_sign = NATAL_LUNAR_CYCLE_DAYS / 12.0;
    let mut position = days / days_per_sign;
    if time.is_some_and(|time| time.hour() >= AFTERNOON_HOUR) {
        position += 0.5;
    }
    NATAL_REFERENCE_MOON_SIGN.offset(position.floor() as i64)
}

/// Rising sign: one sign per two hours from a fixed 06:00 sunrise.
pub fn rising_sign(sun_sign: ZodiacSign, time: NaiveTime, place: Option<&str>) -> ZodiacSign {
    let nudge = place.map(utc_offset_hours).unwrap_or(0);
    let local_hour = (time.hour() as i32 + nudge).rem_euclid(24);
    let hours_from_sunrise = local_hour - SUNRISE_HOUR;
    let steps = hours_from_sunrise.div_euclid(HOURS_PER_RISING_SIGN);
    sun_sign.offset(i64::from(steps))
}

pub fn completeness(has_time: bool, has_place: bool) -> ChartCompleteness {
    match (has_time, has_place) {
        (true, true) => ChartCompleteness::Full,
        (true, false) => ChartCompleteness::Partial,
        (false, _) => ChartCompleteness::SunOnly,
    }
}
