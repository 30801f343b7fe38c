//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Parse string-encoded birth fields at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Input errors come back as `ok=false` envelopes with a message.
//! - Signs, phases and levels cross the boundary as display strings.

use astral_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AstroService, BirthData, ChartCompleteness, CompatibilityReport, Horoscope, NatalChart,
    SignProfile, SystemClock, ZodiacSign,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Birth fields as entered in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthInput {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`; blank counts as absent.
    pub time: Option<String>,
    /// Free-text city or region; blank counts as absent.
    pub place: Option<String>,
}

/// Natal chart response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatalChartResponse {
    pub ok: bool,
    pub sun_sign: Option<String>,
    pub moon_sign: Option<String>,
    pub rising_sign: Option<String>,
    /// `sun_only|partial|full`.
    pub completeness: Option<String>,
    pub message: String,
}

impl NatalChartResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            sun_sign: None,
            moon_sign: None,
            rising_sign: None,
            completeness: None,
            message: message.into(),
        }
    }
}

/// Compatibility response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResponse {
    pub ok: bool,
    pub harmony_score: u8,
    /// Tier 1 (lowest) through 5 (highest); 0 on failure.
    pub harmony_tier: u8,
    pub harmony_title: String,
    pub harmony_description: String,
    pub elemental_title: String,
    pub elemental_description: String,
    pub modality_title: String,
    pub modality_description: String,
    pub oracle_reading: String,
    pub strengths: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub poetic_summary: String,
    pub nurturing_advice: String,
    pub moon_reading: Option<String>,
    pub rising_reading: Option<String>,
    pub message: String,
}

impl CompatibilityResponse {
    fn success(report: CompatibilityReport) -> Self {
        let compatibility = report.compatibility;
        Self {
            ok: true,
            harmony_score: compatibility.harmony_score,
            harmony_tier: compatibility.harmony_level.tier(),
            harmony_title: compatibility.harmony_level.title().to_string(),
            harmony_description: compatibility.harmony_level.description().to_string(),
            elemental_title: compatibility.elemental_dynamic.title().to_string(),
            elemental_description: compatibility.elemental_dynamic.description().to_string(),
            modality_title: compatibility.modality_dynamic.title().to_string(),
            modality_description: compatibility.modality_dynamic.description().to_string(),
            oracle_reading: report.oracle_reading,
            strengths: report.strengths,
            growth_opportunities: report.growth_opportunities,
            poetic_summary: report.poetic_summary,
            nurturing_advice: report.nurturing_advice,
            moon_reading: report.moon_reading,
            rising_reading: report.rising_reading,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            harmony_score: 0,
            harmony_tier: 0,
            harmony_title: String::new(),
            harmony_description: String::new(),
            elemental_title: String::new(),
            elemental_description: String::new(),
            modality_title: String::new(),
            modality_description: String::new(),
            oracle_reading: String::new(),
            strengths: Vec::new(),
            growth_opportunities: Vec::new(),
            poetic_summary: String::new(),
            nurturing_advice: String::new(),
            moon_reading: None,
            rising_reading: None,
            message: message.into(),
        }
    }
}

/// Weekly horoscope response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoroscopeResponse {
    pub ok: bool,
    pub sign: String,
    pub week_of_year: u32,
    pub reading: String,
    pub love_advice: String,
    pub career_advice: String,
    pub lucky_number: u8,
    pub lucky_color: String,
    pub mood: String,
    pub celestial_insight: String,
    pub message: String,
}

impl HoroscopeResponse {
    fn success(horoscope: Horoscope) -> Self {
        Self {
            ok: true,
            sign: horoscope.sign.name().to_string(),
            week_of_year: horoscope.week_of_year,
            reading: horoscope.reading,
            love_advice: horoscope.love_advice,
            career_advice: horoscope.career_advice,
            lucky_number: horoscope.lucky_number,
            lucky_color: horoscope.lucky_color,
            mood: horoscope.mood,
            celestial_insight: horoscope.celestial_insight,
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            sign: String::new(),
            week_of_year: 0,
            reading: String::new(),
            love_advice: String::new(),
            career_advice: String::new(),
            lucky_number: 0,
            lucky_color: String::new(),
            mood: String::new(),
            celestial_insight: String::new(),
            message: message.into(),
        }
    }
}

/// Current sky snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyResponse {
    /// ISO `YYYY-MM-DD` date the snapshot was computed for.
    pub date: String,
    pub phase: String,
    pub phase_symbol: String,
    pub moon_sign: String,
}

/// Derives a natal chart from entered birth fields.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics.
/// - Invalid date/time strings yield `ok=false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn natal_chart(input: BirthInput) -> NatalChartResponse {
    match parse_birth(&input) {
        Ok(birth) => {
            let chart = NatalChart::calculate(&birth);
            NatalChartResponse {
                ok: true,
                sun_sign: Some(chart.sun_sign.name().to_string()),
                moon_sign: Some(chart.moon_sign.name().to_string()),
                rising_sign: chart.rising_sign.map(|sign| sign.name().to_string()),
                completeness: Some(completeness_label(&chart).to_string()),
                message: String::new(),
            }
        }
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error fn=natal_chart error_code=invalid_input");
            NatalChartResponse::failure(format!("natal_chart failed: {err}"))
        }
    }
}

/// Full compatibility report for two people.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics.
/// - Either side failing to parse yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn compatibility(first: BirthInput, second: BirthInput) -> CompatibilityResponse {
    let profiles = parse_birth(&first).and_then(|first| {
        parse_birth(&second).map(|second| (profile_of(&first), profile_of(&second)))
    });
    match profiles {
        Ok((first, second)) => {
            CompatibilityResponse::success(CompatibilityReport::build(first, second))
        }
        Err(err) => {
            warn!("event=ffi_call module=ffi status=error fn=compatibility error_code=invalid_input");
            CompatibilityResponse::failure(format!("compatibility failed: {err}"))
        }
    }
}

/// Sun-sign-only compatibility report for two sign names.
#[flutter_rust_bridge::frb(sync)]
pub fn sign_compatibility(first: String, second: String) -> CompatibilityResponse {
    match (parse_sign(&first), parse_sign(&second)) {
        (Ok(first), Ok(second)) => CompatibilityResponse::success(
            AstroService::new(SystemClock).sign_compatibility(first, second),
        ),
        (Err(err), _) | (_, Err(err)) => {
            CompatibilityResponse::failure(format!("sign_compatibility failed: {err}"))
        }
    }
}

/// This week's horoscope for a sign name.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_horoscope(sign: String) -> HoroscopeResponse {
    match parse_sign(&sign) {
        Ok(sign) => HoroscopeResponse::success(
            AstroService::new(SystemClock).weekly_horoscope_for_sign(sign),
        ),
        Err(err) => HoroscopeResponse::failure(format!("weekly_horoscope failed: {err}")),
    }
}

/// Today's Moon phase and sign.
#[flutter_rust_bridge::frb(sync)]
pub fn current_sky() -> SkyResponse {
    let sky = AstroService::new(SystemClock).sky();
    SkyResponse {
        date: sky.date.format("%Y-%m-%d").to_string(),
        phase: sky.phase.name().to_string(),
        phase_symbol: sky.phase.symbol().to_string(),
        moon_sign: sky.moon_sign.name().to_string(),
    }
}

fn parse_birth(input: &BirthInput) -> Result<BirthData, String> {
    BirthData::parse(
        input.date.as_str(),
        input.time.as_deref(),
        input.place.as_deref(),
    )
    .map_err(|err| err.to_string())
}

fn parse_sign(value: &str) -> Result<ZodiacSign, String> {
    value.parse::<ZodiacSign>().map_err(|err| err.to_string())
}

fn profile_of(birth: &BirthData) -> SignProfile {
    NatalChart::calculate(birth).profile()
}

fn completeness_label(chart: &NatalChart) -> &'static str {
    match chart.completeness {
        ChartCompleteness::SunOnly => "sun_only",
        ChartCompleteness::Partial => "partial",
        ChartCompleteness::Full => "full",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compatibility, core_version, current_sky, init_logging, natal_chart, ping,
        sign_compatibility, weekly_horoscope, BirthInput,
    };

    fn birth(date: &str, time: Option<&str>, place: Option<&str>) -> BirthInput {
        BirthInput {
            date: date.to_string(),
            time: time.map(str::to_string),
            place: place.map(str::to_string),
        }
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn natal_chart_reports_completeness() {
        let response = natal_chart(birth("1990-04-01", Some("06:00"), Some("London")));
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.sun_sign.as_deref(), Some("Aries"));
        assert_eq!(response.rising_sign.as_deref(), Some("Aries"));
        assert_eq!(response.completeness.as_deref(), Some("full"));

        let response = natal_chart(birth("1990-04-01", None, Some("London")));
        assert_eq!(response.rising_sign, None);
        assert_eq!(response.completeness.as_deref(), Some("sun_only"));
    }

    #[test]
    fn natal_chart_rejects_bad_date() {
        let response = natal_chart(birth("04/01/1990", None, None));
        assert!(!response.ok);
        assert!(response.message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn compatibility_fills_every_text_field() {
        let response = compatibility(
            birth("1990-04-01", Some("09:30"), Some("Paris")),
            birth("1992-10-05", Some("18:15"), None),
        );
        assert!(response.ok, "{}", response.message);
        assert!(response.harmony_score <= 100);
        assert!((1..=5).contains(&response.harmony_tier));
        assert!(!response.oracle_reading.is_empty());
        assert!(!response.strengths.is_empty());
        assert!(response.moon_reading.is_some());
        assert!(response.rising_reading.is_some());
    }

    #[test]
    fn compatibility_reports_second_side_errors() {
        let response = compatibility(birth("1990-04-01", None, None), birth("", None, None));
        assert!(!response.ok);
        assert!(response.message.starts_with("compatibility failed"));
    }

    #[test]
    fn sign_compatibility_parses_names() {
        let response = sign_compatibility("aries".to_string(), "LEO".to_string());
        assert!(response.ok);
        assert_eq!(response.harmony_score, 95);
        assert_eq!(response.harmony_tier, 5);

        let response = sign_compatibility("aries".to_string(), "dragon".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("dragon"));
    }

    #[test]
    fn weekly_horoscope_accepts_sign_names() {
        let response = weekly_horoscope("Pisces".to_string());
        assert!(response.ok);
        assert_eq!(response.sign, "Pisces");
        assert!(!weekly_horoscope(String::new()).ok);
    }

    #[test]
    fn current_sky_is_populated() {
        let sky = current_sky();
        assert_eq!(sky.date.len(), 10);
        assert!(!sky.phase.is_empty());
        assert!(!sky.moon_sign.is_empty());
    }
}
