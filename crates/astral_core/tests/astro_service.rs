use astral_core::{
    weekly_horoscope, AstroService, ChartCompleteness, Contact, FixedClock, MoonPhase,
    ZodiacSign,
};
use chrono::{NaiveDate, NaiveTime};

fn service_on(year: i32, month: u32, day: u32) -> AstroService<FixedClock> {
    AstroService::new(FixedClock(
        NaiveDate::from_ymd_opt(year, month, day).expect("valid clock date"),
    ))
}

fn contact(name: &str, date: (i32, u32, u32)) -> Contact {
    let birth_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid birth date");
    Contact::new(name).born_on(birth_date)
}

#[test]
fn contacts_without_birth_date_take_the_none_path() {
    let service = service_on(2024, 1, 1);
    let unknown = Contact::new("Unknown");
    let known = contact("Known", (1990, 4, 1));

    assert!(service.natal_chart(&unknown).is_none());
    assert!(service.weekly_horoscope(&unknown).is_none());
    assert!(service.compatibility(&known, &unknown).is_none());
    assert!(service.compatibility(&unknown, &known).is_none());
}

#[test]
fn natal_chart_reflects_available_fields() {
    let service = service_on(2024, 1, 1);
    let full = contact("Full", (1990, 4, 1))
        .born_at(NaiveTime::from_hms_opt(9, 30, 0).expect("valid time"))
        .born_in("Berlin");

    let chart = service.natal_chart(&full).expect("birth date is set");

    assert_eq!(chart.sun_sign, ZodiacSign::Aries);
    assert_eq!(chart.completeness, ChartCompleteness::Full);
    assert!(chart.rising_sign.is_some());
}

#[test]
fn compatibility_includes_moon_for_date_only_contacts() {
    let service = service_on(2024, 1, 1);
    let report = service
        .compatibility(&contact("A", (1990, 4, 1)), &contact("B", (1992, 8, 10)))
        .expect("both birth dates set");

    assert!(report.compatibility.includes_moon());
    assert!(!report.compatibility.includes_rising());
    assert!(report.moon_reading.is_some());
    assert_eq!(report.rising_reading, None);
}

#[test]
fn sign_compatibility_is_sun_only() {
    let report = service_on(2024, 1, 1).sign_compatibility(ZodiacSign::Aries, ZodiacSign::Leo);
    assert_eq!(report.compatibility.harmony_score, 95);
    assert_eq!(report.moon_reading, None);
}

#[test]
fn horoscope_and_sky_follow_the_clock() {
    let service = service_on(2024, 1, 1);
    let horoscope = service
        .weekly_horoscope(&contact("Leo", (1985, 7, 28)))
        .expect("birth date is set");
    assert_eq!(horoscope, weekly_horoscope(ZodiacSign::Leo, 1));

    let sky = service.sky();
    assert_eq!(sky.moon_sign, ZodiacSign::Libra);
    assert!(MoonPhase::ALL.contains(&sky.phase));
}
