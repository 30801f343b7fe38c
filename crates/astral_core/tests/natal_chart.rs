use astral_core::chart::natal::{natal_moon_sign, rising_sign, sun_sign};
use astral_core::{BirthData, BirthDataError, ChartCompleteness, NatalChart, ZodiacSign};
use chrono::{NaiveDate, NaiveTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

#[test]
fn completeness_tracks_time_and_place() {
    let cases = [
        (None, None, ChartCompleteness::SunOnly),
        (None, Some("Paris"), ChartCompleteness::SunOnly),
        (Some("09:30"), None, ChartCompleteness::Partial),
        (Some("09:30"), Some("Paris"), ChartCompleteness::Full),
    ];
    for (birth_time, place, expected) in cases {
        let birth = BirthData::parse("1990-04-01", birth_time, place).expect("valid birth data");
        let chart = NatalChart::calculate(&birth);
        assert_eq!(chart.completeness, expected, "{birth_time:?} / {place:?}");
        assert_eq!(chart.rising_sign.is_some(), birth_time.is_some());
    }
}

#[test]
fn sun_sign_boundaries_follow_tropical_dates() {
    assert_eq!(sun_sign(date(2000, 3, 20)), ZodiacSign::Pisces);
    assert_eq!(sun_sign(date(2000, 3, 21)), ZodiacSign::Aries);
    assert_eq!(sun_sign(date(1999, 12, 22)), ZodiacSign::Capricorn);
    assert_eq!(sun_sign(date(2001, 1, 19)), ZodiacSign::Capricorn);
    assert_eq!(sun_sign(date(2001, 1, 20)), ZodiacSign::Aquarius);
}

#[test]
fn natal_moon_starts_in_scorpio_and_afternoon_can_advance_it() {
    assert_eq!(natal_moon_sign(date(2000, 1, 1), None), ZodiacSign::Scorpio);
    assert_eq!(natal_moon_sign(date(2000, 1, 1), Some(time(11, 59))), ZodiacSign::Scorpio);
    // 2 days is 0.88 of a sign; the half-sign afternoon shift crosses the boundary.
    assert_eq!(natal_moon_sign(date(2000, 1, 3), None), ZodiacSign::Scorpio);
    assert_eq!(
        natal_moon_sign(date(2000, 1, 3), Some(time(12, 0))),
        ZodiacSign::Sagittarius
    );
}

#[test]
fn natal_moon_handles_dates_before_reference() {
    assert_eq!(natal_moon_sign(date(1999, 12, 31), None), ZodiacSign::Libra);
}

#[test]
fn rising_sign_steps_every_two_hours_from_sunrise() {
    assert_eq!(rising_sign(ZodiacSign::Aries, time(6, 0), None), ZodiacSign::Aries);
    assert_eq!(rising_sign(ZodiacSign::Aries, time(7, 59), None), ZodiacSign::Aries);
    assert_eq!(rising_sign(ZodiacSign::Aries, time(8, 0), None), ZodiacSign::Taurus);
    assert_eq!(rising_sign(ZodiacSign::Aries, time(4, 0), None), ZodiacSign::Pisces);
}

#[test]
fn known_places_nudge_the_rising_sign() {
    let at_sunrise = time(6, 0);
    assert_eq!(
        rising_sign(ZodiacSign::Leo, at_sunrise, Some("London")),
        ZodiacSign::Leo
    );
    assert_eq!(
        rising_sign(ZodiacSign::Leo, at_sunrise, Some("Tokyo, Japan")),
        rising_sign(ZodiacSign::Leo, time(15, 0), None)
    );
    assert_eq!(
        rising_sign(ZodiacSign::Leo, at_sunrise, Some("Somewhere unmapped")),
        ZodiacSign::Leo
    );
}

#[test]
fn parse_rejects_malformed_fields() {
    assert!(matches!(
        BirthData::parse("1990/04/01", None, None),
        Err(BirthDataError::InvalidDate(_))
    ));
    assert!(matches!(
        BirthData::parse("1990-04-01", Some("25:00"), None),
        Err(BirthDataError::InvalidTime(_))
    ));

    let birth = BirthData::parse(" 1990-04-01 ", Some("  "), Some(" ")).expect("blank optionals");
    assert_eq!(birth.time, None);
    assert_eq!(birth.place, None);
}

#[test]
fn profile_carries_moon_even_without_time() {
    let birth = BirthData::parse("1985-07-28", None, None).expect("valid date");
    let profile = NatalChart::calculate(&birth).profile();
    assert_eq!(profile.sun, ZodiacSign::Leo);
    assert!(profile.moon.is_some());
    assert_eq!(profile.rising, None);
}
