//! Astrology use-case service.
//!
//! # Responsibility
//! - Provide stable entry points from contacts to charts, reports and
//!   horoscopes for core callers.
//! - Own the only access to "today" through an injectable clock.
//!
//! # Invariants
//! - Contacts without a birth date take the lower-fidelity path (`None`),
//!   never an error.
//! - Log events carry metadata only; names and birth data are never logged.

use crate::chart::{NatalChart, SkySnapshot};
use crate::compatibility::SignProfile;
use crate::content::CompatibilityReport;
use crate::horoscope::{weekly_horoscope_on, Horoscope};
use crate::model::contact::Contact;
use crate::zodiac::ZodiacSign;
use chrono::{Local, NaiveDate};
use log::debug;

/// Source of the current calendar date.
pub trait AstroClock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the device's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl AstroClock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, for tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl AstroClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Use-case service wrapper for astrology derivations.
pub struct AstroService<C: AstroClock> {
    clock: C,
}

impl Default for AstroService<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: AstroClock> AstroService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Natal chart for a contact, or `None` when no birth date is known.
    pub fn natal_chart(&self, contact: &Contact) -> Option<NatalChart> {
        let chart = contact
            .birth_data()
            .map(|birth| NatalChart::calculate(&birth));
        match &chart {
            Some(chart) => debug!(
                "event=natal_chart module=service status=ok completeness={:?}",
                chart.completeness
            ),
            None => debug!("event=natal_chart module=service status=skipped reason=no_birth_date"),
        }
        chart
    }

    /// Sign profile used for compatibility scoring.
    pub fn profile(&self, contact: &Contact) -> Option<SignProfile> {
        self.natal_chart(contact).map(|chart| chart.profile())
    }

    /// Full compatibility report for two contacts.
    ///
    /// # Contract
    /// - Returns `None` if either contact lacks a birth date.
    /// - Moon and rising layers are included only when both sides have them.
    pub fn compatibility(&self, first: &Contact, second: &Contact) -> Option<CompatibilityReport> {
        let first = self.profile(first)?;
        let second = self.profile(second)?;
        let report = CompatibilityReport::build(first, second);
        debug!(
            "event=compatibility module=service status=ok score={} level={:?} moon={} rising={}",
            report.compatibility.harmony_score,
            report.compatibility.harmony_level,
            report.compatibility.includes_moon(),
            report.compatibility.includes_rising()
        );
        Some(report)
    }

    /// Compatibility report for two bare signs (sun only).
    pub fn sign_compatibility(&self, first: ZodiacSign, second: ZodiacSign) -> CompatibilityReport {
        CompatibilityReport::build(SignProfile::sun_only(first), SignProfile::sun_only(second))
    }

    /// This week's horoscope for the contact's sun sign.
    pub fn weekly_horoscope(&self, contact: &Contact) -> Option<Horoscope> {
        let chart = self.natal_chart(contact)?;
        Some(self.weekly_horoscope_for_sign(chart.sun_sign))
    }

    pub fn weekly_horoscope_for_sign(&self, sign: ZodiacSign) -> Horoscope {
        weekly_horoscope_on(sign, self.clock.today())
    }

    /// Current Moon phase and sign.
    pub fn sky(&self) -> SkySnapshot {
        let sky = SkySnapshot::on(self.clock.today());
        debug!(
            "event=sky module=service status=ok phase={:?} moon_sign={:?}",
            sky.phase, sky.moon_sign
        );
        sky
    }
}
