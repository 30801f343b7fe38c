//! Transit Moon phase and sign for the "current sky" display.
//!
//! Both calculators are pure functions of a calendar date. The `*_today`
//! wrappers are the only place the local clock is read.
//!
//! These use their own reference epochs and are intentionally independent of
//! the natal moon approximation in `chart::natal`.

use crate::zodiac::ZodiacSign;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mean synodic month.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;
/// Transit sidereal month.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.3;

const PHASE_BUCKETS: usize = 8;
const TRANSIT_REFERENCE_MOON_SIGN: ZodiacSign = ZodiacSign::Libra;

fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 6).expect("reference new moon is a valid calendar date")
}

fn transit_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("transit reference is a valid calendar date")
}

/// One of the 8 named lunar phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

/// Days into the current synodic cycle, in `[0, SYNODIC_MONTH_DAYS)`.
pub fn lunar_age_days(date: NaiveDate) -> f64 {
    let days = (date - reference_new_moon()).num_days() as f64;
    days.rem_euclid(SYNODIC_MONTH_DAYS)
}

pub fn moon_phase_on(date: NaiveDate) -> MoonPhase {
    let bucket_len = SYNODIC_MONTH_DAYS / PHASE_BUCKETS as f64;
    let bucket = (lunar_age_days(date) / bucket_len).floor() as usize;
    MoonPhase::ALL[bucket.min(PHASE_BUCKETS - 1)]
}

pub fn moon_sign_on(date: NaiveDate) -> ZodiacSign {
    let days = (date - transit_reference_date()).num_days() as f64;
    let days_per_sign = SIDEREAL_MONTH_DAYS / 12.0;
    TRANSIT_REFERENCE_MOON_SIGN.offset((days / days_per_sign).floor() as i64)
}

pub fn moon_phase_today() -> MoonPhase {
    moon_phase_on(Local::now().date_naive())
}

pub fn moon_sign_today() -> ZodiacSign {
    moon_sign_on(Local::now().date_naive())
}

/// Moon phase and sign for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkySnapshot {
    pub date: NaiveDate,
    pub phase: MoonPhase,
    pub moon_sign: ZodiacSign,
}

impl SkySnapshot {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            phase: moon_phase_on(date),
            moon_sign: moon_sign_on(date),
        }
    }
}
